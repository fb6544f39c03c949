//! Spawn interval ramp
//!
//! Difficulty is front-loaded: the interval drops quickly early in a run and
//! flattens out as it approaches the floor.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Eased mapping from elapsed run time to debris spawn interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCurve {
    /// Interval at t = 0 (seconds)
    pub initial: f32,
    /// Interval once the ramp completes (seconds)
    pub minimum: f32,
    /// Ramp length (seconds)
    pub ramp: f32,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

impl DifficultyCurve {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            initial: tuning.initial_spawn_interval,
            minimum: tuning.min_spawn_interval,
            ramp: tuning.difficulty_ramp_secs,
        }
    }

    /// Spawn interval for the given elapsed run time
    pub fn interval_for(&self, elapsed_secs: f32) -> f32 {
        let progress = if self.ramp > 0.0 && elapsed_secs.is_finite() {
            (elapsed_secs / self.ramp).clamp(0.0, 1.0)
        } else if elapsed_secs == f32::INFINITY || self.ramp <= 0.0 {
            1.0
        } else {
            0.0
        };
        let eased = 1.0 - (1.0 - progress).powi(2);
        self.initial - (self.initial - self.minimum) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints() {
        let curve = DifficultyCurve::default();
        assert_eq!(curve.interval_for(0.0), 2.0);
        assert!((curve.interval_for(120.0) - 0.4).abs() < 1e-6);
        assert!((curve.interval_for(200.0) - 0.4).abs() < 1e-6);
        assert_eq!(curve.interval_for(120.0), curve.interval_for(200.0));
    }

    #[test]
    fn test_halfway_is_eased() {
        // p = 0.5 -> eased 0.75 -> 2.0 - 1.6 * 0.75
        let curve = DifficultyCurve::default();
        assert!((curve.interval_for(60.0) - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_odd_inputs_clamp() {
        let curve = DifficultyCurve::default();
        assert_eq!(curve.interval_for(-10.0), 2.0);
        assert_eq!(curve.interval_for(f32::NAN), 2.0);
        assert!((curve.interval_for(f32::INFINITY) - 0.4).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_monotonic_non_increasing(a in 0.0f32..=120.0, b in 0.0f32..=120.0) {
            let curve = DifficultyCurve::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(curve.interval_for(hi) <= curve.interval_for(lo));
        }

        #[test]
        fn prop_within_bounds(t in -50.0f32..500.0) {
            let curve = DifficultyCurve::default();
            let interval = curve.interval_for(t);
            prop_assert!(interval <= 2.0 && interval >= 0.4 - 1e-6);
        }
    }
}
