use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::notification::use_notifier;
use crate::voices::{self, PreviewState, Voice, PREVIEW_RESET_MS, VOICES};

pub enum PreviewAction {
    Play(&'static str),
    Reset(u64),
}

impl Reducible for PreviewState {
    type Action = PreviewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PreviewAction::Play(name) => Rc::new(self.play(name).0),
            PreviewAction::Reset(generation) => match self.reset(generation) {
                Some(next) => Rc::new(next),
                None => self,
            },
        }
    }
}

#[function_component(VoiceGrid)]
pub fn voice_grid() -> Html {
    let preview = use_reducer(PreviewState::default);
    let notifier = use_notifier();

    // Each preview gets its own reset; a newer preview makes older resets stale.
    {
        let dispatcher = preview.dispatcher();
        use_effect_with_deps(
            move |generation| {
                let generation = *generation;
                if generation > 0 {
                    Timeout::new(PREVIEW_RESET_MS, move || {
                        dispatcher.dispatch(PreviewAction::Reset(generation))
                    })
                    .forget();
                }
                || ()
            },
            preview.generation(),
        );
    }

    let on_preview = {
        let dispatcher = preview.dispatcher();
        Callback::from(move |name: &'static str| {
            dispatcher.dispatch(PreviewAction::Play(name));
            notifier.info(voices::preview_message(name));
        })
    };

    html! {
        <div class="voices__grid">
            { for VOICES.iter().map(|voice| html! {
                <VoiceCard
                    key={voice.name}
                    voice={*voice}
                    playing={preview.is_playing(voice.name)}
                    label={preview.label(voice.name)}
                    on_preview={on_preview.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VoiceCardProps {
    pub voice: Voice,
    pub playing: bool,
    pub label: &'static str,
    pub on_preview: Callback<&'static str>,
}

#[function_component(VoiceCard)]
pub fn voice_card(props: &VoiceCardProps) -> Html {
    let onclick = {
        let on_preview = props.on_preview.clone();
        let name = props.voice.name;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_preview.emit(name);
        })
    };

    html! {
        <div class="voice-card">
            <div class="voice-card__avatar">{ props.voice.name.chars().take(1).collect::<String>() }</div>
            <h3 class="voice-card__name">{ props.voice.name }</h3>
            <p class="voice-card__description">{ props.voice.description }</p>
            <button
                class={classes!("btn", "btn--outline", "voice-preview", props.playing.then_some("playing"))}
                data-voice={props.voice.name}
                onclick={onclick}
            >
                { props.label }
            </button>
        </div>
    }
}
