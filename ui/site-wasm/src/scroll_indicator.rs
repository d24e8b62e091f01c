//! Hero scroll indicator.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use site_core::scroll::{self, INDICATOR_HIDE_DELAY_MS};

use crate::dom::{self, on_event, on_event_once};

thread_local! {
    // Pending removal timer. Replacing the slot drops, and thereby
    // cancels, the previous timeout.
    static HIDE_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

pub fn bind() {
    let Some(indicator) = dom::query(".scroll-indicator") else {
        return;
    };

    on_event!(indicator, "click", web_sys::MouseEvent, move |_| {
        if let Some(mission) = dom::query(".mission") {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            mission.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });

    // Deliberately one-shot: the indicator is only hidden the first time
    // the page scrolls, and only if that scroll passes the threshold.
    let indicator2 = indicator.clone();
    on_event_once!(dom::window(), "scroll", web_sys::Event, move |_| {
        if !scroll::scroll_indicator_passed(dom::page_y_offset()) {
            return;
        }
        dom::set_style(&indicator2, "opacity", "0");
        let indicator3 = indicator2.clone();
        let timer = Timeout::new(INDICATOR_HIDE_DELAY_MS, move || {
            dom::set_style(&indicator3, "display", "none");
        });
        HIDE_TIMER.with(|slot| *slot.borrow_mut() = Some(timer));
    });
}
