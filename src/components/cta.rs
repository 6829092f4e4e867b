use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

use crate::actions::{ActionRegistry, CtaAction};
use crate::components::notification::use_notifier;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    /// Key into the [`ActionRegistry`] provided by the app.
    pub action: &'static str,
    #[prop_or(classes!("btn", "btn--primary"))]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let registry = use_context::<Rc<ActionRegistry>>();
    let notifier = use_notifier();

    let onclick = {
        let action_id = props.action;
        Callback::from(move |e: MouseEvent| {
            let Some(action) = registry.as_ref().and_then(|r| r.resolve(action_id)) else {
                debug!("No action registered for {}", action_id);
                return;
            };
            e.prevent_default();
            match action {
                CtaAction::OpenApp { url } => {
                    info!("Opening app from {}", action_id);
                    dom::open_in_new_tab(url);
                }
                CtaAction::ScrollTo(section) => {
                    dom::scroll_to_section(section);
                }
                CtaAction::Notify { message, kind } => notifier.present(*message, *kind),
            }
        })
    };

    html! {
        <button class={props.class.clone()} data-action={props.action} onclick={onclick}>
            { for props.children.iter() }
        </button>
    }
}
