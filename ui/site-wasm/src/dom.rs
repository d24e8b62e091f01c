//! DOM lookup and manipulation helpers.
//!
//! Feature modules resolve their own elements through these and silently
//! no-op when a lookup fails; the page markup is a precondition, not
//! something we validate beyond null-checks.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

pub fn document() -> Document {
    window().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = document().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let nl = parent.query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn set_style(el: &Element, prop: &str, value: &str) {
    let html: &HtmlElement = el.unchecked_ref();
    let _ = html.style().set_property(prop, value);
}

pub fn create_element(tag: &str) -> Element {
    document().create_element(tag).unwrap()
}

pub fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

/// Current vertical scroll offset in pixels.
pub fn page_y_offset() -> f64 {
    window().page_y_offset().unwrap_or(0.0)
}

/// Current viewport width in logical pixels.
pub fn inner_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Current path, for analytics payloads.
pub fn pathname() -> String {
    window().location().pathname().unwrap_or_default()
}

/// Animate the window scroll to a document-relative offset.
pub fn smooth_scroll_to(top: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Attach a leaked event handler. Handlers live for the page lifetime, so
/// the closure is forgotten rather than held.
macro_rules! on_event {
    ($target:expr, $event:expr, $ty:ty, $handler:expr) => {{
        let cb = wasm_bindgen::closure::Closure::wrap(Box::new($handler) as Box<dyn FnMut($ty)>);
        $target
            .add_event_listener_with_callback($event, wasm_bindgen::JsCast::unchecked_ref(cb.as_ref()))
            .unwrap();
        cb.forget();
    }};
}
pub(crate) use on_event;

/// Like `on_event!`, but registered with `once: true` so the browser drops
/// the listener after its first invocation.
macro_rules! on_event_once {
    ($target:expr, $event:expr, $ty:ty, $handler:expr) => {{
        let cb = wasm_bindgen::closure::Closure::wrap(Box::new($handler) as Box<dyn FnMut($ty)>);
        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_once(true);
        $target
            .add_event_listener_with_callback_and_add_event_listener_options(
                $event,
                wasm_bindgen::JsCast::unchecked_ref(cb.as_ref()),
                &opts,
            )
            .unwrap();
        cb.forget();
    }};
}
pub(crate) use on_event_once;
