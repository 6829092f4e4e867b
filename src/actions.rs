//! What each call-to-action button does, keyed by the id the button carries.

use std::collections::HashMap;

use crate::notification::NotificationKind;

#[derive(Clone, Debug, PartialEq)]
pub enum CtaAction {
    /// Open the app in a new tab.
    OpenApp { url: String },
    /// Smooth-scroll to the element with this id.
    ScrollTo(&'static str),
    Notify {
        message: &'static str,
        kind: NotificationKind,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, CtaAction>,
}

impl ActionRegistry {
    pub fn empty() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// The buttons the landing page renders.
    pub fn standard(app_url: &str) -> Self {
        let open_app = CtaAction::OpenApp {
            url: app_url.to_string(),
        };
        let mut registry = Self::empty();
        for id in ["try-echoverse", "try-now", "get-started", "start-pro-trial"] {
            registry.register(id, open_app.clone());
        }
        registry.register("learn-more", CtaAction::ScrollTo("features"));
        registry.register(
            "contact-sales",
            CtaAction::Notify {
                message: "Contact feature coming soon!",
                kind: NotificationKind::Info,
            },
        );
        registry
    }

    pub fn register(&mut self, id: &'static str, action: CtaAction) {
        self.actions.insert(id, action);
    }

    pub fn resolve(&self, id: &str) -> Option<&CtaAction> {
        self.actions.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_buttons_open_the_app() {
        let registry = ActionRegistry::standard("http://localhost:8501");
        for id in ["try-echoverse", "try-now", "get-started", "start-pro-trial"] {
            assert_eq!(
                registry.resolve(id),
                Some(&CtaAction::OpenApp {
                    url: "http://localhost:8501".to_string()
                })
            );
        }
    }

    #[test]
    fn learn_more_scrolls_to_features() {
        let registry = ActionRegistry::standard("x");
        assert_eq!(registry.resolve("learn-more"), Some(&CtaAction::ScrollTo("features")));
    }

    #[test]
    fn contact_sales_notifies() {
        let registry = ActionRegistry::standard("x");
        match registry.resolve("contact-sales") {
            Some(CtaAction::Notify { message, kind }) => {
                assert_eq!(*message, "Contact feature coming soon!");
                assert_eq!(*kind, NotificationKind::Info);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn unknown_ids_resolve_to_nothing() {
        assert!(ActionRegistry::standard("x").resolve("Try Now").is_none());
        assert!(ActionRegistry::empty().resolve("try-now").is_none());
    }

    #[test]
    fn register_overrides() {
        let mut registry = ActionRegistry::standard("x");
        registry.register("learn-more", CtaAction::ScrollTo("pricing"));
        assert_eq!(registry.resolve("learn-more"), Some(&CtaAction::ScrollTo("pricing")));
    }
}
