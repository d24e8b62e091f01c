//! Project card activation and tracking.

use serde_json::json;
use site_core::analytics::EVENT_PROJECT_CARD_CLICK;
use wasm_bindgen::JsCast;

use crate::analytics;
use crate::dom::{self, on_event};

pub fn bind() {
    for card in dom::query_all(".project-card") {
        // Keyboard focusable.
        let _ = card.set_attribute("tabindex", "0");

        let card2 = card.clone();
        on_event!(card, "click", web_sys::MouseEvent, move |_| {
            let title = card2
                .query_selector("h3")
                .ok()
                .flatten()
                .and_then(|h| h.text_content())
                .unwrap_or_default();
            analytics::track(
                EVENT_PROJECT_CARD_CLICK,
                json!({
                    "project_name": title,
                    "page_path": dom::pathname(),
                }),
            );
        });

        // Enter/Space re-enter the click path; Space must not scroll.
        let card3 = card.clone();
        on_event!(
            card,
            "keydown",
            web_sys::KeyboardEvent,
            move |e: web_sys::KeyboardEvent| {
                let key = e.key();
                if key == "Enter" || key == " " {
                    e.prevent_default();
                    card3.unchecked_ref::<web_sys::HtmlElement>().click();
                }
            }
        );
    }
}
