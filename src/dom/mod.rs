//! web-sys adapters between the page and the controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window`, `document`, or `localStorage` lives
//! here, so the controllers stay plain Rust. Browser calls that fail are
//! logged and skipped; nothing in this layer panics.

pub mod gallery;
pub mod storage;
pub mod suggestions;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget};

/// The page's document, if running in a window.
#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Look up `id` and cast it to `T`. Missing or mistyped elements are `None`.
#[must_use]
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let element = document.get_element_by_id(id)?;
    match element.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => {
            log::debug!("#{id} is not the expected element type");
            None
        }
    }
}

/// Text of the first descendant matching `selector`, or empty.
#[must_use]
pub fn child_text(element: &Element, selector: &str) -> String {
    match element.query_selector(selector) {
        Ok(Some(child)) => child.text_content().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {event}: {e:?}");
    }
    closure.forget();
}

/// Log a failed browser call instead of propagating it.
pub fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(e) = result {
        log::warn!("{what} failed: {e:?}");
    }
}

// --- Clock ---

/// Current time in epoch milliseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// `ms` formatted in the user's locale, e.g. `6/1/2024, 3:04:05 PM`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_timestamp(ms: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms as f64));
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}

#[must_use]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
