//! Live phone input masking.

/// Reformat raw input as a `(DDD) DDD-DDDD` mask.
///
/// Non-digits are stripped, digits beyond the tenth are dropped, and the
/// mask grows with the accumulated digit count: `(DDD` for 1–3 digits,
/// `(DDD) DDD` for 4–6, `(DDD) DDD-DDDD` for 7–10. The formatted string is
/// the only retained value; feeding it back through is a fixed point.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(10).collect();

    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn full_number() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn partial_numbers() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("5"), "(5");
        assert_eq!(format_phone("55"), "(55");
        assert_eq!(format_phone("555"), "(555");
        assert_eq!(format_phone("5551"), "(555) 1");
        assert_eq!(format_phone("555123"), "(555) 123");
        assert_eq!(format_phone("5551234"), "(555) 123-4");
    }

    #[test]
    fn non_digits_are_stripped() {
        assert_eq!(format_phone("(555) 123-4567"), "(555) 123-4567");
        assert_eq!(format_phone("555.123.4567"), "(555) 123-4567");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn overflow_digits_are_dropped() {
        assert_eq!(format_phone("55512345678901"), "(555) 123-4567");
    }

    proptest! {
        #[test]
        fn reformatting_is_a_fixed_point(raw in "[0-9 ()+.-]{0,20}") {
            let once = format_phone(&raw);
            prop_assert_eq!(format_phone(&once), once.clone());
        }

        #[test]
        fn output_never_exceeds_full_mask(raw in ".{0,40}") {
            prop_assert!(format_phone(&raw).len() <= "(555) 123-4567".len());
        }
    }
}
