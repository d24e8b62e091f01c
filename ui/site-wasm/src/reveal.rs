//! Fade-in on first viewport intersection.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

/// Card/item classes observed for the entrance animation. Fixed at load;
/// elements inserted later are not picked up.
const TARGETS: &str = ".service-card, .project-card, .feature-item, .testimonial-card";

pub fn bind() {
    let elements = dom::query_all(TARGETS);
    if elements.is_empty() {
        return;
    }

    let cb = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    dom::add_class(&entry.target(), "fade-in");
                    // One-shot per element: once revealed, never re-hidden.
                    observer.unobserve(&entry.target());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let Ok(observer) =
        IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    cb.forget();

    for el in &elements {
        observer.observe(el);
    }
}
