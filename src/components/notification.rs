use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::notification::{Notification, NotificationAction, NotificationKind, NotificationState};

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Handle for showing toasts, handed out through context by
/// [`NotificationProvider`].
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatch: Callback<NotificationAction>,
}

impl Notifier {
    pub fn present(&self, message: impl Into<String>, kind: impl Into<NotificationKind>) {
        self.dispatch.emit(NotificationAction::Present {
            message: message.into(),
            kind: kind.into(),
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.present(message, NotificationKind::Info);
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| {
        debug!("use_notifier called outside NotificationProvider; toasts will be dropped");
        Notifier {
            dispatch: Callback::noop(),
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let state = use_reducer(NotificationState::new);

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: NotificationAction| dispatcher.dispatch(action))
    };

    // Start the timers belonging to whatever phase the live toast just entered.
    {
        let dispatch = dispatch.clone();
        let follow_ups = state.follow_ups();
        let key = state.live().map(|n| (n.id, n.phase));
        use_effect_with_deps(
            move |_| {
                for (delay, action) in follow_ups {
                    let dispatch = dispatch.clone();
                    // Timers are never cancelled; actions aimed at a toast
                    // that moved on are ignored by the reducer.
                    Timeout::new(delay, move || dispatch.emit(action)).forget();
                }
                || ()
            },
            key,
        );
    }

    let toast = match state.live() {
        Some(notification) => {
            let on_close = {
                let dispatch = dispatch.clone();
                let id = notification.id;
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    dispatch.emit(NotificationAction::Dismiss(id));
                })
            };
            html! {
                <Toast key={notification.id.to_string()} notification={notification.clone()} on_close={on_close} />
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<Notifier> context={Notifier { dispatch }}>
            { for props.children.iter() }
            { toast }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notification: Notification,
    on_close: Callback<MouseEvent>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let ToastProps { notification, on_close } = props;
    let kind = notification.kind;
    let offset = if notification.phase.is_on_screen() {
        "translateX(0)"
    } else {
        "translateX(100%)"
    };

    let container_style = format!(
        "position: fixed; top: 80px; right: 20px; background: white; border: 1px solid {}; \
         border-radius: 8px; padding: 16px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); \
         z-index: 1000; max-width: 400px; transform: {}; transition: transform 0.3s ease;",
        kind.border_color(),
        offset,
    );
    let message_style = format!("color: {}; font-size: 14px; line-height: 1.5;", kind.text_color());

    html! {
        <div class={classes!("notification", format!("notification--{}", kind.name()))} style={container_style}>
            <div class="notification__content" style="display: flex; align-items: center; justify-content: space-between; gap: 12px;">
                <span class="notification__message" style={message_style}>
                    { notification.message.clone() }
                </span>
                <button
                    class="notification__close"
                    style="background: none; border: none; font-size: 18px; cursor: pointer; color: #6b7280; padding: 0; line-height: 1;"
                    onclick={on_close.clone()}
                >
                    {"×"}
                </button>
            </div>
        </div>
    }
}
