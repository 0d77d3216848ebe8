//! # Count-Up Counters
//!
//! Stat counters that climb from zero to their target once they scroll
//! into view. Pure math: the caller supplies elapsed time.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    pub target: u32,
    pub duration: Duration,
}

impl CountUp {
    pub fn new(target: u32, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// Value to display `elapsed` after the counter started.
    ///
    /// Uses an ease-out cubic curve, so the count slows as it nears the target.
    pub fn value_at(&self, elapsed: Duration) -> u32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        ((self.target as f64) * eased).floor() as u32
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let c = CountUp::new(18, Duration::from_millis(1000));
        assert_eq!(c.value_at(Duration::ZERO), 0);
    }

    #[test]
    fn test_reaches_target() {
        let c = CountUp::new(18, Duration::from_millis(1000));
        assert_eq!(c.value_at(Duration::from_millis(1000)), 18);
        assert_eq!(c.value_at(Duration::from_secs(60)), 18);
        assert!(c.is_finished(Duration::from_millis(1000)));
        assert!(!c.is_finished(Duration::from_millis(999)));
    }

    #[test]
    fn test_monotonic() {
        let c = CountUp::new(250, Duration::from_millis(1500));
        let mut last = 0;
        for ms in (0..=1500).step_by(25) {
            let v = c.value_at(Duration::from_millis(ms));
            assert!(v >= last, "value dropped at {ms}ms");
            assert!(v <= 250);
            last = v;
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        let c = CountUp::new(100, Duration::from_millis(1000));
        // Cubic ease-out covers 87.5% of the distance by the halfway mark.
        assert_eq!(c.value_at(Duration::from_millis(500)), 87);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let c = CountUp::new(7, Duration::ZERO);
        assert_eq!(c.value_at(Duration::ZERO), 7);
    }
}
