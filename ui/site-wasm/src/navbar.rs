//! Navbar scroll state and smooth-scroll anchor interception.

use std::cell::Cell;

use site_core::scroll;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{self, on_event};

thread_local! {
    // Recorded on every scroll event; nothing reads it back yet.
    static LAST_SCROLL: Cell<f64> = const { Cell::new(0.0) };
}

pub fn bind() {
    let navbar = dom::by_id("navbar");

    if let Some(navbar) = navbar.clone() {
        on_event!(dom::window(), "scroll", web_sys::Event, move |_| {
            let offset = dom::page_y_offset();
            dom::toggle_class(&navbar, "scrolled", scroll::navbar_scrolled(offset));
            LAST_SCROLL.with(|c| c.set(offset));
        });
    }

    bind_anchors(navbar);
}

/// Intercept in-page anchor clicks, but only when a real target exists;
/// bare `#` hrefs and dangling fragments keep the default behavior.
fn bind_anchors(navbar: Option<Element>) {
    for anchor in dom::query_all("a[href^=\"#\"]") {
        let navbar = navbar.clone();
        let anchor2 = anchor.clone();
        on_event!(
            anchor,
            "click",
            web_sys::MouseEvent,
            move |e: web_sys::MouseEvent| {
                let href = anchor2.get_attribute("href").unwrap_or_default();
                if href.is_empty() || href == "#" {
                    return;
                }
                let Some(target) = dom::query(&href) else {
                    return;
                };
                e.prevent_default();

                let navbar_height = navbar
                    .as_ref()
                    .map(|n| n.unchecked_ref::<web_sys::HtmlElement>().offset_height() as f64)
                    .unwrap_or(0.0);
                let target_top =
                    target.unchecked_ref::<web_sys::HtmlElement>().offset_top() as f64;
                dom::smooth_scroll_to(scroll::anchor_target_offset(target_top, navbar_height));
            }
        );
    }
}
