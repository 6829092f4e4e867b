use log::debug;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::Observer;

pub const REVEAL_SELECTOR: &str = ".feature-card, .step, .voice-card, .pricing-card, .testimonial-card";
pub const REVEALED_CLASS: &str = "animate-in";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Marks every card on the page with `animate-in` the first time it scrolls
/// into view. The class is never taken away again.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let observer = Observer::new(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |target, observer| {
                let _ = target.class_list().add_1(REVEALED_CLASS);
                observer.unobserve(target);
            });

            if let Some(observer) = observer.as_ref() {
                let cards = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.query_selector_all(REVEAL_SELECTOR).ok());
                if let Some(cards) = cards {
                    debug!("Watching {} cards for reveal", cards.length());
                    for i in 0..cards.length() {
                        if let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                            observer.observe(&card);
                        }
                    }
                }
            }

            move || drop(observer)
        },
        (),
    );
}
