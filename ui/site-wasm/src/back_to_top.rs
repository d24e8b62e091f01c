//! Floating back-to-top button, desktop only.

use site_core::scroll;
use wasm_bindgen::JsCast;

use crate::dom::{self, on_event};

const BASE_SHADOW: &str = "0 4px 12px rgba(56, 99, 96, 0.3)";
const HOVER_SHADOW: &str = "0 6px 20px rgba(56, 99, 96, 0.4)";

/// Create and wire the button. Runs once at load and only when the
/// viewport is wider than the mobile cutoff at that moment; the decision
/// is not revisited on resize.
pub fn bind() {
    if dom::inner_width() <= scroll::MOBILE_MAX_WIDTH {
        return;
    }

    let button = dom::create_element("button");
    button.set_inner_html("&uarr;");
    button.set_class_name("back-to-top");
    let _ = button.set_attribute("aria-label", "Back to top");
    button
        .unchecked_ref::<web_sys::HtmlElement>()
        .style()
        .set_css_text(&format!(
            "position: fixed; bottom: 100px; right: 20px; width: 50px; height: 50px; \
             background: var(--primary-teal); color: white; border: none; \
             border-radius: 50%; font-size: 1.5rem; cursor: pointer; opacity: 0; \
             visibility: hidden; transition: all 0.3s ease; box-shadow: {BASE_SHADOW}; \
             z-index: 998;"
        ));

    on_event!(button, "click", web_sys::MouseEvent, move |_| {
        dom::smooth_scroll_to(0.0);
    });

    {
        let button2 = button.clone();
        on_event!(button, "mouseenter", web_sys::MouseEvent, move |_| {
            dom::set_style(&button2, "transform", "translateY(-5px)");
            dom::set_style(&button2, "box-shadow", HOVER_SHADOW);
        });
    }
    {
        let button2 = button.clone();
        on_event!(button, "mouseleave", web_sys::MouseEvent, move |_| {
            dom::set_style(&button2, "transform", "translateY(0)");
            dom::set_style(&button2, "box-shadow", BASE_SHADOW);
        });
    }

    {
        let button2 = button.clone();
        on_event!(dom::window(), "scroll", web_sys::Event, move |_| {
            let visible = scroll::back_to_top_visible(dom::page_y_offset());
            dom::set_style(&button2, "opacity", if visible { "1" } else { "0" });
            dom::set_style(
                &button2,
                "visibility",
                if visible { "visible" } else { "hidden" },
            );
        });
    }

    if let Some(body) = dom::document().body() {
        let _ = body.append_child(&button);
    }
}
