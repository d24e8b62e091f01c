//! Contact form validation, simulated send, and the live phone mask.

use gloo_timers::callback::Timeout;
use serde_json::json;
use site_core::analytics::EVENT_FORM_SUBMIT;
use site_core::contact::{CONFIRMATION_MESSAGE, ContactSubmission, SENDING_LABEL};
use site_core::phone::format_phone;
use site_core::scroll::SIMULATED_SEND_DELAY_MS;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::analytics;
use crate::dom::{self, on_event};

pub fn bind() {
    bind_phone_mask();

    let Some(form) = dom::by_id_typed::<HtmlFormElement>("contactForm") else {
        return;
    };

    {
        let form2 = form.clone();
        on_event!(form, "submit", web_sys::Event, move |e: web_sys::Event| {
            e.prevent_default();
            on_submit(&form2);
        });
    }

    // Second, independent listener: the tracking event fires on every
    // submit attempt, whatever the validation outcome. Nothing stops
    // propagation between the two listeners.
    on_event!(form, "submit", web_sys::Event, move |_| {
        analytics::track(
            EVENT_FORM_SUBMIT,
            json!({
                "page_path": dom::pathname(),
                "form_name": "contact_quote",
            }),
        );
    });
}

fn on_submit(form: &HtmlFormElement) {
    let submission = read_submission(form);
    if let Err(err) = submission.validate() {
        // Blocking alert; no reset, button untouched.
        dom::alert(&err.to_string());
        return;
    }

    let Some(button) = form.query_selector("button[type=\"submit\"]").ok().flatten() else {
        return;
    };
    let Ok(button) = button.dyn_into::<HtmlButtonElement>() else {
        return;
    };

    let original_label = button.text_content().unwrap_or_default();
    button.set_text_content(Some(SENDING_LABEL));
    button.set_disabled(true);

    // Simulated network latency. The production integration POSTs the
    // serialized submission to the contact endpoint instead.
    let form2 = form.clone();
    Timeout::new(SIMULATED_SEND_DELAY_MS, move || {
        dom::alert(CONFIRMATION_MESSAGE);
        form2.reset();
        button.set_text_content(Some(&original_label));
        button.set_disabled(false);
    })
    .forget();
}

/// Snapshot the form's current field values.
fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    ContactSubmission {
        name: field_value(form, "name"),
        phone: field_value(form, "phone"),
        message: field_value(form, "message"),
    }
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let selector = format!("[name=\"{name}\"]");
    let Some(el) = form.query_selector(&selector).ok().flatten() else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Reformat the phone field as `(DDD) DDD-DDDD` on every input event. The
/// formatted text is the only value kept; no raw copy is retained.
fn bind_phone_mask() {
    let Some(input) = dom::by_id_typed::<HtmlInputElement>("phone") else {
        return;
    };
    let input2 = input.clone();
    on_event!(input, "input", web_sys::Event, move |_| {
        input2.set_value(&format_phone(&input2.value()));
    });
}
