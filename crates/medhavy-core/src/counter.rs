//! Count-up animation for statistics.
//!
//! Values start at zero and follow an ease-out cubic curve to their targets
//! over a fixed number of evenly spaced steps. The last step always lands
//! exactly on the targets.

use std::time::Duration;

use crate::error::{SiteError, SiteResult};

/// Ease-out cubic: `1 - (1 - p)^3`, with `p` clamped to [0, 1].
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Count-up timing and targets.
///
/// The animation is one-shot per instance: [`start`](Self::start) succeeds
/// once, and repeated visibility transitions do not restart it.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    targets: Vec<i64>,
    duration: Duration,
    steps: u32,
    step: u32,
    started: bool,
}

impl CountUp {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
    pub const DEFAULT_STEPS: u32 = 60;

    pub fn new(targets: Vec<i64>, duration: Duration, steps: u32) -> SiteResult<Self> {
        if steps == 0 {
            return Err(SiteError::InvalidAnimation(
                "count-up needs at least one step".to_string(),
            ));
        }
        Ok(Self {
            targets,
            duration,
            steps,
            step: 0,
            started: false,
        })
    }

    /// Counter with the site's standard 2 s / 60 step timing.
    pub fn with_defaults(targets: Vec<i64>) -> Self {
        Self {
            targets,
            duration: Self::DEFAULT_DURATION,
            steps: Self::DEFAULT_STEPS,
            step: 0,
            started: false,
        }
    }

    pub fn targets(&self) -> &[i64] {
        &self.targets
    }

    /// Time between two steps.
    pub fn tick_interval(&self) -> Duration {
        self.duration / self.steps
    }

    /// Mark the animation as running. Returns `false` if it already ran.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Values displayed at the current step.
    pub fn values(&self) -> Vec<i64> {
        self.values_at(self.step)
    }

    /// Values displayed at an arbitrary step.
    pub fn values_at(&self, step: u32) -> Vec<i64> {
        if step >= self.steps {
            return self.targets.clone();
        }
        let eased = ease_out_cubic(f64::from(step) / f64::from(self.steps));
        self.targets
            .iter()
            .map(|&target| (target as f64 * eased).round() as i64)
            .collect()
    }

    /// Advance one step and return the new values.
    pub fn tick(&mut self) -> Vec<i64> {
        if self.step < self.steps {
            self.step += 1;
        }
        self.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn rejects_zero_steps() {
        assert!(matches!(
            CountUp::new(vec![1], Duration::from_secs(1), 0),
            Err(SiteError::InvalidAnimation(_))
        ));
    }

    #[test]
    fn tick_interval_splits_duration() {
        let counter = CountUp::with_defaults(vec![120]);
        assert_eq!(counter.tick_interval(), Duration::from_millis(2000) / 60);
    }

    #[test]
    fn final_tick_lands_on_targets() {
        let mut counter = CountUp::with_defaults(vec![120, 6, 95]);
        assert_eq!(counter.values(), vec![0, 0, 0]);
        let mut last = Vec::new();
        while !counter.is_finished() {
            last = counter.tick();
        }
        assert_eq!(last, vec![120, 6, 95]);
    }

    #[test]
    fn values_never_decrease() {
        let mut counter = CountUp::new(vec![95], Duration::from_millis(100), 10).unwrap();
        let mut previous = 0;
        while !counter.is_finished() {
            let value = counter.tick()[0];
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn start_is_one_shot() {
        let mut counter = CountUp::with_defaults(vec![1]);
        assert!(counter.start());
        assert!(!counter.start());
        assert!(counter.is_started());
    }
}
