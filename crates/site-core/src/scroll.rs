//! Scroll-position thresholds and offset math.
//!
//! All comparisons are strict: at exactly the threshold the element is in
//! its resting state. Offsets are `f64` because that is what the browser
//! reports for `pageYOffset`.

/// Navbar gains its `scrolled` state above this offset.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Mobile bottom bar slides in above this offset.
pub const MOBILE_BAR_THRESHOLD: f64 = 300.0;

/// Back-to-top button becomes visible above this offset.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

/// Scroll indicator hides once the page has scrolled past this offset.
pub const SCROLL_INDICATOR_THRESHOLD: f64 = 200.0;

/// Widest viewport, in logical pixels, still treated as mobile.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Gap left between the navbar and a smooth-scrolled anchor target.
pub const ANCHOR_SCROLL_MARGIN: f64 = 20.0;

/// Slideshow auto-advance period.
pub const SLIDE_PERIOD_MS: u32 = 5_000;

/// Simulated network latency for the contact form send.
pub const SIMULATED_SEND_DELAY_MS: u32 = 1_500;

/// Delay between fading the scroll indicator and removing it from layout.
pub const INDICATOR_HIDE_DELAY_MS: u32 = 300;

pub fn navbar_scrolled(offset: f64) -> bool {
    offset > NAVBAR_SCROLL_THRESHOLD
}

/// Mobile bar visibility is a function of both scroll position and the
/// viewport width as it is *right now*; the width is never cached.
pub fn mobile_bar_visible(offset: f64, viewport_width: f64) -> bool {
    viewport_width <= MOBILE_MAX_WIDTH && offset > MOBILE_BAR_THRESHOLD
}

pub fn back_to_top_visible(offset: f64) -> bool {
    offset > BACK_TO_TOP_THRESHOLD
}

pub fn scroll_indicator_passed(offset: f64) -> bool {
    offset > SCROLL_INDICATOR_THRESHOLD
}

/// Document-relative offset to scroll to so an anchor target clears the
/// fixed navbar with a small margin.
pub fn anchor_target_offset(target_top: f64, navbar_height: f64) -> f64 {
    target_top - navbar_height - ANCHOR_SCROLL_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert!(!navbar_scrolled(100.0));
        assert!(navbar_scrolled(100.5));

        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(501.0));

        assert!(!scroll_indicator_passed(200.0));
        assert!(scroll_indicator_passed(200.1));
    }

    #[test]
    fn mobile_bar_needs_both_conditions() {
        assert!(mobile_bar_visible(301.0, 768.0));
        assert!(mobile_bar_visible(301.0, 320.0));
        assert!(!mobile_bar_visible(300.0, 320.0));
        assert!(!mobile_bar_visible(301.0, 769.0));
        assert!(!mobile_bar_visible(0.0, 320.0));
    }

    #[test]
    fn anchor_offset_clears_navbar() {
        assert_eq!(anchor_target_offset(800.0, 64.0), 716.0);
        // Targets near the top can yield a negative offset; the browser
        // clamps the actual scroll, so we don't.
        assert_eq!(anchor_target_offset(10.0, 64.0), -74.0);
    }
}
