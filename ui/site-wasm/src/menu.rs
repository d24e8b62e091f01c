//! Mobile menu controller.
//!
//! The open flag lives in a module-private cell; every transition goes
//! through `apply`, which mirrors the state onto the `active` class of
//! both the toggle and the panel.

use std::cell::RefCell;

use site_core::menu::{MenuEvent, MenuState};
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom::{self, on_event};

thread_local! {
    static STATE: RefCell<MenuState> = RefCell::new(MenuState::default());
}

fn apply(event: MenuEvent, toggle: &Element, panel: &Element) {
    let open = STATE.with(|s| s.borrow_mut().apply(event));
    dom::toggle_class(panel, "active", open);
    dom::toggle_class(toggle, "active", open);
}

pub fn bind() {
    let Some(toggle) = dom::by_id("mobileMenuToggle") else {
        return;
    };
    let Some(panel) = dom::by_id("navMenu") else {
        return;
    };

    {
        let toggle2 = toggle.clone();
        let panel2 = panel.clone();
        on_event!(toggle, "click", web_sys::MouseEvent, move |_| {
            apply(MenuEvent::Toggle, &toggle2, &panel2);
        });
    }

    // Any link inside the panel closes the menu.
    for link in dom::query_all_within(&panel, "a") {
        let toggle2 = toggle.clone();
        let panel2 = panel.clone();
        on_event!(link, "click", web_sys::MouseEvent, move |_| {
            apply(MenuEvent::LinkClick, &toggle2, &panel2);
        });
    }

    // Clicks outside both the toggle and the panel close it too.
    let toggle2 = toggle.clone();
    let panel2 = panel.clone();
    on_event!(
        dom::document(),
        "click",
        web_sys::MouseEvent,
        move |e: web_sys::MouseEvent| {
            let inside = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .map(|node| panel2.contains(Some(&node)) || toggle2.contains(Some(&node)))
                .unwrap_or(false);
            if !inside {
                apply(MenuEvent::OutsideClick, &toggle2, &panel2);
            }
        }
    );
}
