//! Browser-backed implementations of the scroll source and section host.

use leptos::{create_signal, on_cleanup, ReadSignal, SignalSet};
use portfolio::{ScrollSource, ScrollThreshold, ScrollWatch, SectionHost};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, ScrollBehavior, ScrollIntoViewOptions};

const SCROLL_EVENT: &str = "scroll";

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// `window.scrollY` and the window `scroll` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    type Subscription = Closure<dyn FnMut()>;

    fn current_offset(&self) -> f64 {
        scroll_y()
    }

    fn subscribe(&self, mut listener: Box<dyn FnMut(f64)>) -> Self::Subscription {
        let closure = Closure::<dyn FnMut()>::new(move || listener(scroll_y()));

        if let Some(window) = web_sys::window() {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
                SCROLL_EVENT,
                closure.as_ref().unchecked_ref(),
                &options,
            ) {
                log::warn!("failed to attach scroll listener: {:?}", e);
            }
        }
        closure
    }

    fn unsubscribe(&self, closure: Self::Subscription) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to detach scroll listener: {:?}", e);
            }
        }
    }
}

/// Sections looked up in the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSections;

impl SectionHost for DocumentSections {
    type Element = Element;

    fn find_section(&self, selector: &str) -> Option<Element> {
        web_sys::window()?.document()?.query_selector(selector).ok()?
    }

    fn scroll_into_view(&self, element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Reactive "past threshold" flag for the current component.
///
/// The window listener is attached now and removed when the owning reactive
/// scope is disposed.
pub fn use_scroll_threshold(rule: ScrollThreshold) -> ReadSignal<bool> {
    let (active, set_active) = create_signal(false);
    let watch = ScrollWatch::attach(WindowScroll, rule, move |now| set_active.set(now));
    set_active.set(watch.is_active());
    on_cleanup(move || drop(watch));
    active
}

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
