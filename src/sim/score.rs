//! Survival-time scoring and currency
//!
//! Score is whole seconds survived. At run end the score is paid out 1:1 as
//! currency and compared against the best score.

use serde::{Deserialize, Serialize};

use crate::persistence::SavedProgress;

/// Tracks the current run's score plus lifetime best and currency
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreClock {
    start_time: f64,
    running: bool,
    score: u32,
    best: u32,
    currency: u64,
    earned: u64,
}

impl ScoreClock {
    /// Seed lifetime totals from persisted progress
    pub fn from_progress(progress: SavedProgress) -> Self {
        Self {
            best: progress.high_score,
            currency: progress.currency,
            ..Default::default()
        }
    }

    /// Begin a run at `at` (seconds, host clock)
    pub fn start(&mut self, at: f64) {
        self.score = 0;
        self.start_time = at;
        self.running = true;
        self.earned = 0;
    }

    /// Recompute the score from the host clock
    pub fn update(&mut self, now: f64) {
        if !self.running {
            return;
        }
        let elapsed = now - self.start_time;
        if !elapsed.is_finite() || elapsed < 0.0 {
            return;
        }
        let secs = elapsed.floor().min(u32::MAX as f64) as u32;
        self.score = self.score.max(secs);
    }

    /// Move the start time forward so a paused span is not counted
    pub fn discount(&mut self, paused_secs: f64) {
        if self.running && paused_secs.is_finite() && paused_secs > 0.0 {
            self.start_time += paused_secs;
        }
    }

    /// Finish the run. Returns whether a new high score was set.
    ///
    /// Safe to call twice: once stopped it does nothing and returns false.
    pub fn end(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.earned = self.score as u64;
        self.currency = self.currency.saturating_add(self.earned);

        if self.score > self.best {
            self.best = self.score;
            true
        } else {
            false
        }
    }

    /// Stop without paying out (run torn down before it ended)
    pub fn abandon(&mut self) {
        self.running = false;
        self.score = 0;
    }

    /// Deduct currency if the balance covers it
    pub fn spend_currency(&mut self, amount: u64) -> bool {
        match self.currency.checked_sub(amount) {
            Some(rest) => {
                self.currency = rest;
                true
            }
            None => false,
        }
    }

    pub fn reset_high_score(&mut self) {
        self.best = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn currency(&self) -> u64 {
        self.currency
    }

    /// Currency paid out by the most recent run
    pub fn earned(&self) -> u64 {
        self.earned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_truncates_seconds() {
        let mut clock = ScoreClock::default();
        clock.start(10.0);
        clock.update(15.3);
        assert_eq!(clock.score(), 5);
        clock.update(15.99);
        assert_eq!(clock.score(), 5);
        clock.update(16.0);
        assert_eq!(clock.score(), 6);
    }

    #[test]
    fn test_score_never_decreases() {
        let mut clock = ScoreClock::default();
        clock.start(0.0);
        clock.update(4.2);
        clock.update(1.0);
        assert_eq!(clock.score(), 4);
        clock.update(-100.0);
        clock.update(f64::NAN);
        assert_eq!(clock.score(), 4);
    }

    #[test]
    fn test_not_running_ignores_updates() {
        let mut clock = ScoreClock::default();
        clock.update(50.0);
        assert_eq!(clock.score(), 0);
    }

    #[test]
    fn test_end_pays_out_and_sets_best() {
        let mut clock = ScoreClock::from_progress(SavedProgress {
            high_score: 3,
            currency: 10,
        });
        clock.start(0.0);
        clock.update(5.3);
        assert!(clock.end());
        assert_eq!(clock.best(), 5);
        assert_eq!(clock.earned(), 5);
        assert_eq!(clock.currency(), 15);
    }

    #[test]
    fn test_second_end_is_noop() {
        let mut clock = ScoreClock::default();
        clock.start(0.0);
        clock.update(5.3);
        assert!(clock.end());
        let currency = clock.currency();
        assert!(!clock.end());
        assert_eq!(clock.score(), 5);
        assert_eq!(clock.currency(), currency);
    }

    #[test]
    fn test_equal_score_is_not_new_best() {
        let mut clock = ScoreClock::from_progress(SavedProgress {
            high_score: 5,
            currency: 0,
        });
        clock.start(0.0);
        clock.update(5.5);
        assert!(!clock.end());
        assert_eq!(clock.best(), 5);
        assert_eq!(clock.currency(), 5);
    }

    #[test]
    fn test_start_clears_earned() {
        let mut clock = ScoreClock::default();
        clock.start(0.0);
        clock.update(3.0);
        clock.end();
        clock.start(10.0);
        assert_eq!(clock.earned(), 0);
        assert_eq!(clock.score(), 0);
        assert_eq!(clock.currency(), 3);
    }

    #[test]
    fn test_discount_removes_pause() {
        let mut clock = ScoreClock::default();
        clock.start(0.0);
        clock.update(2.5);
        clock.discount(10.0);
        clock.update(13.0);
        assert_eq!(clock.score(), 3);
    }

    #[test]
    fn test_abandon_pays_nothing() {
        let mut clock = ScoreClock::default();
        clock.start(0.0);
        clock.update(9.0);
        clock.abandon();
        assert!(!clock.end());
        assert_eq!(clock.currency(), 0);
        assert_eq!(clock.best(), 0);
    }

    #[test]
    fn test_spend_currency() {
        let mut clock = ScoreClock::from_progress(SavedProgress {
            high_score: 0,
            currency: 20,
        });
        assert!(clock.spend_currency(15));
        assert_eq!(clock.currency(), 5);
        assert!(!clock.spend_currency(6));
        assert_eq!(clock.currency(), 5);
    }
}
