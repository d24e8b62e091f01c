//! Autonomous background slideshow.

use gloo_console::log;
use gloo_timers::callback::Interval;
use site_core::scroll::SLIDE_PERIOD_MS;
use site_core::slideshow::Slideshow;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;

pub fn bind() {
    let slides = dom::query_all(".slideshow-slide");
    let Some(mut show) = Slideshow::new(slides.len()) else {
        return;
    };

    // Load-time diagnostic: note which slide images are already decoded.
    for slide in &slides {
        if let Some(img) = slide.query_selector("img").ok().flatten() {
            if let Ok(img) = img.dyn_into::<web_sys::HtmlImageElement>() {
                if img.complete() {
                    log!("Image loaded:", img.src());
                }
            }
        }
    }

    log!(format!("Slideshow initialized with {} slides", show.count()));

    show_slide(&slides, show.current());
    Interval::new(SLIDE_PERIOD_MS, move || {
        let next = show.advance();
        show_slide(&slides, next);
    })
    .forget();
}

/// Exactly one slide carries the `active` marker.
fn show_slide(slides: &[Element], index: usize) {
    for (i, slide) in slides.iter().enumerate() {
        dom::toggle_class(slide, "active", i == index);
    }
}
