//! Analytics event names and href parsing.

pub const EVENT_CALL_CLICK: &str = "contact_call_click";
pub const EVENT_SMS_CLICK: &str = "contact_sms_click";
pub const EVENT_FORM_SUBMIT: &str = "form_submit_quote";
pub const EVENT_PROJECT_CARD_CLICK: &str = "project_card_click";
pub const EVENT_PAGE_PERFORMANCE: &str = "page_performance";

/// Extract the number from a `tel:` or `sms:` href.
///
/// For `sms:` links any `?body=...` query suffix is stripped before the
/// scheme prefix. Returns the href unchanged if the scheme doesn't match.
pub fn phone_number_from_href<'a>(href: &'a str, scheme: &str) -> &'a str {
    let href = href.split('?').next().unwrap_or(href);
    href.strip_prefix(scheme).unwrap_or(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_href() {
        assert_eq!(phone_number_from_href("tel:+15551234567", "tel:"), "+15551234567");
    }

    #[test]
    fn sms_href_drops_query() {
        assert_eq!(
            phone_number_from_href("sms:+15551234567?body=Quote%20request", "sms:"),
            "+15551234567"
        );
        assert_eq!(phone_number_from_href("sms:+15551234567", "sms:"), "+15551234567");
    }

    #[test]
    fn unmatched_scheme_passes_through() {
        assert_eq!(phone_number_from_href("mailto:a@b.c", "tel:"), "mailto:a@b.c");
    }
}
