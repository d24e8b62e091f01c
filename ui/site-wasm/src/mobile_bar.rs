//! Fixed bottom bar, mobile widths only.

use site_core::scroll;

use crate::dom::{self, on_event};

pub fn bind() {
    let Some(bar) = dom::by_id("mobileBar") else {
        return;
    };

    on_event!(dom::window(), "scroll", web_sys::Event, move |_| {
        // Width is sampled live on every event, never cached.
        let width = dom::inner_width();
        if width > scroll::MOBILE_MAX_WIDTH {
            return;
        }
        let visible = scroll::mobile_bar_visible(dom::page_y_offset(), width);
        let transform = if visible { "translateY(0)" } else { "translateY(100%)" };
        dom::set_style(&bar, "transform", transform);
    });
}
