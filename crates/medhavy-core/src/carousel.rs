//! Auto-advancing slide carousel.
//!
//! The timer and the manual controls share one index. Manual moves never
//! touch the timer: the next automatic advance still fires on its original
//! schedule and moves on from wherever the user left the carousel.

use std::time::Duration;

use crate::error::{SiteError, SiteResult};

/// Auto-advance interval used by the hero carousel.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    slides: Vec<T>,
    active: usize,
    interval: Duration,
}

impl<T> Carousel<T> {
    /// Build a carousel; an empty slide list is rejected.
    pub fn new(slides: Vec<T>, interval: Duration) -> SiteResult<Self> {
        if slides.is_empty() {
            return Err(SiteError::EmptyCarousel);
        }
        Ok(Self {
            slides,
            active: 0,
            interval,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &T {
        &self.slides[self.active]
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    /// Timer-driven advance.
    pub fn advance(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.slides.len();
    }

    pub fn previous(&mut self) {
        self.active = (self.active + self.slides.len() - 1) % self.slides.len();
    }

    /// Jump to a slide (pagination dots).
    pub fn select(&mut self, index: usize) -> SiteResult<()> {
        if index >= self.slides.len() {
            return Err(SiteError::SlideOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.active = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Carousel<&'static str> {
        Carousel::new(vec!["a", "b", "c"], DEFAULT_INTERVAL).unwrap()
    }

    #[test]
    fn rejects_empty() {
        let slides: Vec<u8> = Vec::new();
        assert!(matches!(
            Carousel::new(slides, DEFAULT_INTERVAL),
            Err(SiteError::EmptyCarousel)
        ));
    }

    #[test]
    fn advance_wraps() {
        let mut carousel = three();
        carousel.advance();
        carousel.advance();
        assert_eq!(*carousel.active(), "c");
        carousel.advance();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn previous_wraps_from_first() {
        let mut carousel = three();
        carousel.previous();
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn select_checks_bounds() {
        let mut carousel = three();
        carousel.select(1).unwrap();
        assert_eq!(*carousel.active(), "b");
        assert!(matches!(
            carousel.select(3),
            Err(SiteError::SlideOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn timer_continues_from_manual_position() {
        let mut carousel = three();
        carousel.select(2).unwrap();
        carousel.advance();
        assert_eq!(carousel.active_index(), 0);
    }
}
