//! Thin wrappers over the browser APIs the page leans on. Everything here
//! degrades to doing nothing when the window, an element, or an API is
//! missing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::nav;

pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Smooth-scrolls so the element with `id` sits just below the nav bar.
/// Returns `false` when there is no such element.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        debug!("No section #{} to scroll to", id);
        return false;
    };

    let nav_height = document
        .query_selector(".nav")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64);
    let top = nav::scroll_offset(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        nav_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            warn!("Could not open {}", url);
        }
    }
}

/// An intersection observer that stays alive as long as this handle does.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// `on_entry` gets every entry that reports as intersecting together with
    /// the observer, so it can unobserve or disconnect.
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut on_entry: F) -> Option<Self>
    where
        F: FnMut(&Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_entry(&entry.target(), &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => Some(Self {
                observer,
                _callback: callback,
            }),
            Err(_) => {
                warn!("IntersectionObserver unavailable");
                None
            }
        }
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_frame` once per animation frame with the current timestamp
/// until it returns `false` or the handle is dropped.
pub struct FrameLoop {
    stopped: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    slot: FrameSlot,
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let stopped = Rc::new(Cell::new(false));
        let handle = Rc::new(Cell::new(None));
        let slot: FrameSlot = Rc::new(RefCell::new(None));

        {
            let stopped = stopped.clone();
            let handle = handle.clone();
            let slot_inner = slot.clone();
            *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                if stopped.get() || !on_frame(now) {
                    handle.set(None);
                    // Break the self-reference so the closure can be freed.
                    slot_inner.borrow_mut().take();
                    return;
                }
                handle.set(request_frame(&slot_inner));
            }) as Box<dyn FnMut(f64)>));
        }
        handle.set(request_frame(&slot));

        Self { stopped, handle, slot }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stopped.set(true);
        if let (Some(window), Some(id)) = (web_sys::window(), self.handle.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.slot.borrow_mut().take();
    }
}

fn request_frame(slot: &FrameSlot) -> Option<i32> {
    let window = web_sys::window()?;
    let slot = slot.borrow();
    let callback = slot.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}
