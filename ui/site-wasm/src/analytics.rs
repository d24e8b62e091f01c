//! Analytics event sink.
//!
//! The external sink is the optional global `gtag` function, detected once
//! at startup and held as a nullable capability. `track` never fails when
//! the sink is absent and always writes a local diagnostic record.

use std::cell::RefCell;

use gloo_console::log;
use js_sys::{Function, Reflect};
use serde_json::{Value, json};
use site_core::analytics::{EVENT_CALL_CLICK, EVENT_SMS_CLICK, phone_number_from_href};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{self, on_event};

thread_local! {
    static SINK: RefCell<Option<Function>> = const { RefCell::new(None) };
}

/// Capability-check the global analytics function. Call once at startup.
pub fn init() {
    let sink = Reflect::get(dom::window().as_ref(), &JsValue::from_str("gtag"))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok());
    SINK.with(|slot| *slot.borrow_mut() = sink);
}

/// Report a named event. Forwarded to the external sink when one exists;
/// the local diagnostic record is written either way.
pub fn track(event_name: &str, payload: Value) {
    SINK.with(|slot| {
        if let Some(sink) = slot.borrow().as_ref() {
            let attributes =
                serde_wasm_bindgen::to_value(&payload).unwrap_or(JsValue::UNDEFINED);
            let _ = sink.call3(
                &JsValue::NULL,
                &JsValue::from_str("event"),
                &JsValue::from_str(event_name),
                &attributes,
            );
        }
    });

    log!("Event tracked:", event_name.to_owned(), payload.to_string());
}

/// Wire click tracking on `tel:` and `sms:` links.
pub fn bind_contact_links() {
    bind_link_tracking("a[href^=\"tel:\"]", "tel:", EVENT_CALL_CLICK);
    bind_link_tracking("a[href^=\"sms:\"]", "sms:", EVENT_SMS_CLICK);
}

fn bind_link_tracking(selector: &str, scheme: &'static str, event_name: &'static str) {
    for link in dom::query_all(selector) {
        let href = link.get_attribute("href").unwrap_or_default();
        on_event!(link, "click", web_sys::MouseEvent, move |_| {
            track(
                event_name,
                json!({
                    "page_path": dom::pathname(),
                    "phone_number": phone_number_from_href(&href, scheme),
                }),
            );
        });
    }
}
