//! Page-load timing report and console branding.

use gloo_console::log;
use serde_json::json;
use site_core::analytics::EVENT_PAGE_PERFORMANCE;

use crate::analytics;
use crate::dom::{self, on_event};

pub fn bind() {
    on_event!(dom::window(), "load", web_sys::Event, move |_| {
        report_load_time();
    });

    print_branding();
}

fn report_load_time() {
    let Some(performance) = dom::window().performance() else {
        return;
    };
    let timing = performance.timing();
    let load_time = timing.load_event_end() - timing.navigation_start();

    log!(format!("Page load time: {load_time}ms"));
    analytics::track(
        EVENT_PAGE_PERFORMANCE,
        json!({
            "load_time": load_time,
            "page_path": dom::pathname(),
        }),
    );
}

fn print_branding() {
    log!(
        "%c\u{1F30A} Rowe Environmental Services",
        "color: #386360; font-size: 20px; font-weight: bold; font-family: \"DM Sans\", sans-serif;"
    );
    log!(
        "%cFriends of the Water \u{2022} Mechanical Solutions",
        "color: #5F8054; font-size: 14px; font-family: \"Heebo\", sans-serif;"
    );
    log!("%cWebsite designed with modern web standards", "color: #707070; font-size: 12px;");
}
