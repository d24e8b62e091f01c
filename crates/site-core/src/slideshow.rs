//! Slideshow index arithmetic.

/// Auto-advancing slideshow position. Purely the index state machine; the
/// wasm crate owns the interval timer and the `active` class shuffling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slideshow {
    index: usize,
    count: usize,
}

impl Slideshow {
    /// `None` when there are no slides, in which case the rotator performs
    /// no setup at all.
    pub fn new(count: usize) -> Option<Self> {
        if count == 0 {
            None
        } else {
            Some(Self { index: 0, count })
        }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Advance to the next slide, wrapping modulo the slide count, and
    /// return the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Slideshow::new(4).unwrap().current(), 0);
    }

    #[test]
    fn zero_slides_means_no_rotator() {
        assert_eq!(Slideshow::new(0), None);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut show = Slideshow::new(1).unwrap();
        assert_eq!(show.advance(), 0);
        assert_eq!(show.advance(), 0);
    }

    #[test]
    fn wraps_around() {
        let mut show = Slideshow::new(3).unwrap();
        assert_eq!(show.advance(), 1);
        assert_eq!(show.advance(), 2);
        assert_eq!(show.advance(), 0);
        assert_eq!(show.advance(), 1);
    }

    proptest! {
        #[test]
        fn k_advances_land_on_k_mod_n(count in 1usize..32, advances in 0usize..200) {
            let mut show = Slideshow::new(count).unwrap();
            for _ in 0..advances {
                show.advance();
            }
            prop_assert_eq!(show.current(), advances % count);
            prop_assert!(show.current() < count);
        }
    }
}
