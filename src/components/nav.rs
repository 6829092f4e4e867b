use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::cta::CtaButton;
use crate::dom;
use crate::nav::{anchor_target, nav_background, NavMenu};

const SECTIONS: &[(&str, &str)] = &[
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#voices", "Voices"),
    ("#pricing", "Pricing"),
    ("#testimonials", "Reviews"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(NavMenu::default);
    let background = use_state(|| nav_background(dom::scroll_y()));
    let toggle_ref = use_node_ref();
    let links_ref = use_node_ref();

    {
        let background = background.clone();
        use_event_with_window("scroll", move |_: Event| {
            background.set(nav_background(dom::scroll_y()));
        });
    }

    {
        let menu = menu.clone();
        use_event_with_window("resize", move |_: Event| {
            if let Some(width) = dom::viewport_width() {
                menu.set(menu.resized(width));
            }
        });
    }

    // Any click that lands outside both the toggle and the panel closes the menu.
    {
        let menu = menu.clone();
        let toggle_ref = toggle_ref.clone();
        let links_ref = links_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if !menu.is_open() {
                return;
            }
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |node_ref: &NodeRef| {
                node_ref
                    .get()
                    .map(|n| n.contains(target.as_ref()))
                    .unwrap_or(false)
            };
            if !inside(&toggle_ref) && !inside(&links_ref) {
                menu.set(menu.closed());
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            menu.set(menu.toggled());
        })
    };

    let on_anchor = |href: &'static str| {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(id) = anchor_target(href) else {
                return;
            };
            e.prevent_default();
            e.stop_propagation();
            dom::scroll_to_section(id);
            menu.set(menu.closed());
        })
    };

    html! {
        <nav class="nav" style={format!("background: {};", *background)}>
            <div class="container nav__container">
                <a href="#" class="nav__logo">{"EchoVerse Pro"}</a>
                <button id="navToggle" class={menu.toggle_class()} ref={toggle_ref} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu.links_class()} ref={links_ref}>
                    { for SECTIONS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav__link" onclick={on_anchor(*href)}>{ *label }</a>
                    }) }
                    <CtaButton action="try-echoverse" class={classes!("btn", "btn--primary", "btn--sm")}>
                        {"Try EchoVerse"}
                    </CtaButton>
                </div>
            </div>
        </nav>
    }
}
