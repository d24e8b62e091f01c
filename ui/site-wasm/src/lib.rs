//! Browser glue for the marketing site.
//!
//! Each feature lives in its own module and wires itself to the page at
//! startup. Features share no state; a module whose target elements are
//! missing simply does nothing, so one absent element never prevents the
//! rest of the page from coming alive.

pub mod analytics;
pub mod back_to_top;
pub mod cards;
pub mod contact_form;
pub mod diagnostics;
pub mod dom;
pub mod lazy;
pub mod menu;
pub mod mobile_bar;
pub mod navbar;
pub mod reveal;
pub mod scroll_indicator;
pub mod slideshow;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init();
    Ok(())
}

/// Wire every feature. Order only matters for the contact form, whose two
/// submit listeners must keep their registration order.
fn init() {
    analytics::init();

    menu::bind();
    slideshow::bind();
    navbar::bind();
    contact_form::bind();
    reveal::bind();
    analytics::bind_contact_links();
    lazy::bind();
    mobile_bar::bind();
    cards::bind();
    scroll_indicator::bind();
    back_to_top::bind();
    diagnostics::bind();
}
