use yew::prelude::*;

use crate::components::cta::CtaButton;
use crate::components::reveal::use_reveal_on_scroll;
use crate::components::stat_counter::{HeroStats, Stat};
use crate::components::voice_card::VoiceGrid;

const HERO_STATS: &[Stat] = &[
    Stat { target: "50000", label: "Audiobooks Created" },
    Stat { target: "98.5", label: "Voice Accuracy" },
    Stat { target: "1200", label: "Happy Authors" },
];

const FEATURES: &[(&str, &str, &str)] = &[
    ("🎙️", "Six Natural Voices", "Pick from American, Canadian, and British narrators, male or female."),
    ("✨", "Tone Rewriting", "Let the AI retell your text as neutral, suspenseful, or inspiring before it is read aloud."),
    ("📄", "Bring Your Own Text", "Paste a chapter or upload a .txt file and get narration in seconds."),
    ("🎧", "Instant Downloads", "Listen in the browser or download the MP3 for later."),
];

const STEPS: &[(&str, &str)] = &[
    ("Add your text", "Paste it in or upload a plain text file."),
    ("Choose voice and tone", "Preview voices below and pick the mood that fits."),
    ("Listen and download", "Your audiobook is ready to play and share."),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("I turned my short story collection into an audiobook over a weekend.", "Maya R., indie author"),
    ("The suspenseful tone rewrite gave my thriller chapters real atmosphere.", "Jonas K., novelist"),
    ("Our team uses EchoVerse to narrate onboarding docs. Everyone actually listens now.", "Priya S., L&D lead"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    use_reveal_on_scroll();

    html! {
        <main class="landing-page">
            <header class="hero">
                <div class="container hero__content">
                    <h1 class="hero__title">{"Turn any text into a finished audiobook"}</h1>
                    <p class="hero__subtitle">
                        {"EchoVerse Pro rewrites your writing in the tone you want and narrates it with lifelike voices."}
                    </p>
                    <div class="hero__actions">
                        <CtaButton action="try-now">{"Try Now"}</CtaButton>
                        <CtaButton action="learn-more" class={classes!("btn", "btn--outline")}>{"Learn More"}</CtaButton>
                    </div>
                    <HeroStats stats={HERO_STATS} />
                </div>
            </header>

            <section id="features" class="section features">
                <div class="container">
                    <h2 class="section__title">{"Everything you need to publish in audio"}</h2>
                    <div class="features__grid">
                        { for FEATURES.iter().map(|(icon, title, body)| html! {
                            <div class="feature-card">
                                <div class="feature-card__icon">{ *icon }</div>
                                <h3>{ *title }</h3>
                                <p>{ *body }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="section how-it-works">
                <div class="container">
                    <h2 class="section__title">{"How it works"}</h2>
                    <div class="steps">
                        { for STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                            <div class="step">
                                <div class="step__number">{ (i + 1).to_string() }</div>
                                <h3>{ *title }</h3>
                                <p>{ *body }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="voices" class="section voices">
                <div class="container">
                    <h2 class="section__title">{"Meet the voices"}</h2>
                    <VoiceGrid />
                </div>
            </section>

            <section id="pricing" class="section pricing">
                <div class="container">
                    <h2 class="section__title">{"Simple pricing"}</h2>
                    <div class="pricing__grid">
                        <div class="pricing-card">
                            <h3>{"Starter"}</h3>
                            <p class="pricing-card__price">{"Free"}</p>
                            <ul>
                                <li>{"3 voices"}</li>
                                <li>{"5,000 characters per month"}</li>
                                <li>{"MP3 download"}</li>
                            </ul>
                            <CtaButton action="get-started" class={classes!("btn", "btn--outline")}>{"Get Started"}</CtaButton>
                        </div>
                        <div class="pricing-card pricing-card--featured">
                            <h3>{"Pro"}</h3>
                            <p class="pricing-card__price">{"$19/mo"}</p>
                            <ul>
                                <li>{"All 6 voices"}</li>
                                <li>{"Tone rewriting"}</li>
                                <li>{"Unlimited characters"}</li>
                            </ul>
                            <CtaButton action="start-pro-trial">{"Start Pro Trial"}</CtaButton>
                        </div>
                        <div class="pricing-card">
                            <h3>{"Team"}</h3>
                            <p class="pricing-card__price">{"Custom"}</p>
                            <ul>
                                <li>{"Shared workspaces"}</li>
                                <li>{"Priority support"}</li>
                                <li>{"Volume pricing"}</li>
                            </ul>
                            <CtaButton action="contact-sales" class={classes!("btn", "btn--outline")}>{"Contact Sales"}</CtaButton>
                        </div>
                    </div>
                </div>
            </section>

            <section id="testimonials" class="section testimonials">
                <div class="container">
                    <h2 class="section__title">{"What creators say"}</h2>
                    <div class="testimonials__grid">
                        { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                            <blockquote class="testimonial-card">
                                <p>{ *quote }</p>
                                <cite>{ *author }</cite>
                            </blockquote>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section cta">
                <div class="container cta__content">
                    <h2>{"Ready to hear your words?"}</h2>
                    <CtaButton action="try-echoverse">{"Try EchoVerse"}</CtaButton>
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>{"© EchoVerse Pro"}</p>
                </div>
            </footer>
        </main>
    }
}
