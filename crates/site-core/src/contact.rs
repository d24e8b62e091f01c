//! Contact form validation.
//!
//! The submission record is `Serialize` because the production integration
//! is a JSON POST to the backend; until that endpoint exists the wasm crate
//! simulates the send with a timer.

use serde::Serialize;
use thiserror::Error;

/// Alert shown once the simulated send completes.
pub const CONFIRMATION_MESSAGE: &str =
    "Thank you for your inquiry! We'll contact you shortly via your preferred method.";

/// Submit button label while the simulated send is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Validation failures surfaced to the user as blocking alerts.
/// The `Display` strings are the exact alert texts.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingField,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

/// A snapshot of the contact form's fields, taken fresh per submit attempt.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    /// Short-circuiting validation pipeline: required fields first, then the
    /// phone character class. Whitespace-only fields count as missing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ValidationError::MissingField);
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(())
    }
}

/// One or more characters drawn from digits, whitespace, `-`, `+`, `(`, `)`.
fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, phone: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_owned(),
            phone: phone.to_owned(),
            message: message.to_owned(),
        }
    }

    #[test]
    fn empty_field_is_missing() {
        let err = submission("", "(555) 123-4567", "hi").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        let err = submission("J", "   ", "hi").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField);

        let err = submission("J", "(555) 123-4567", " \t ").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
    }

    #[test]
    fn letters_in_phone_are_invalid() {
        let err = submission("J", "555-CALL-NOW", "hi").validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone);
    }

    #[test]
    fn missing_field_wins_over_bad_phone() {
        // Pipeline order: the required-fields check fires first.
        let err = submission("", "not a phone!", "hi").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField);
    }

    #[test]
    fn formatted_phone_passes() {
        assert!(submission("J", "(555) 123-4567", "hi").validate().is_ok());
        assert!(submission("J", "+1 555 123 4567", "hi").validate().is_ok());
    }

    #[test]
    fn alert_texts_are_stable() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid phone number."
        );
    }
}
