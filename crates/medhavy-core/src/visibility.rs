//! One-shot viewport visibility trigger.
//!
//! The browser reports intersection ratios for an observed element; the
//! trigger turns those into a single false -> true transition. Once visible,
//! later reports (including ratios of zero when the element scrolls away)
//! are ignored.

use crate::error::{SiteError, SiteResult};

/// Default threshold used by page sections.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Tracks whether an observed element has crossed its visibility threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f64,
    visible: bool,
}

impl VisibilityTrigger {
    /// Create a trigger for the given fraction of the element (0.0 to 1.0).
    pub fn new(threshold: f64) -> SiteResult<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(SiteError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            visible: false,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an intersection ratio reported by the observer.
    ///
    /// Returns `true` only for the report that flips the trigger.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible {
            return false;
        }
        // A zero threshold still needs the element to be on screen at all.
        let crossed = if self.threshold == 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        };
        if crossed {
            self.visible = true;
        }
        crossed
    }
}

impl Default for VisibilityTrigger {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            visible: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let trigger = VisibilityTrigger::new(0.5).unwrap();
        assert!(!trigger.is_visible());
    }

    #[test]
    fn flips_once_at_threshold() {
        let mut trigger = VisibilityTrigger::new(0.2).unwrap();
        assert!(!trigger.observe(0.1));
        assert!(!trigger.is_visible());
        assert!(trigger.observe(0.2));
        assert!(trigger.is_visible());
        assert!(!trigger.observe(0.9));
        assert!(trigger.is_visible());
    }

    #[test]
    fn never_reverts() {
        let mut trigger = VisibilityTrigger::new(0.3).unwrap();
        trigger.observe(1.0);
        trigger.observe(0.0);
        assert!(trigger.is_visible());
    }

    #[test]
    fn zero_threshold_requires_some_overlap() {
        let mut trigger = VisibilityTrigger::new(0.0).unwrap();
        assert!(!trigger.observe(0.0));
        assert!(trigger.observe(0.01));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        assert!(matches!(
            VisibilityTrigger::new(1.5),
            Err(SiteError::InvalidThreshold(_))
        ));
        assert!(VisibilityTrigger::new(-0.1).is_err());
        assert!(VisibilityTrigger::new(f64::NAN).is_err());
    }
}
