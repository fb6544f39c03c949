//! Frame clock: host timestamps in, simulation deltas out

/// Turns the host's per-frame timestamps into deltas
///
/// The first timestamp after construction or [`FrameClock::reset`] only
/// establishes a baseline and yields a zero delta. Resetting on resume is what
/// keeps paused wall-clock time out of the simulation.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
    now: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new timestamp and return the delta since the previous one
    pub fn advance(&mut self, now: f64) -> f32 {
        if !now.is_finite() {
            return 0.0;
        }
        let dt = match self.last {
            Some(last) if now > last => (now - last) as f32,
            _ => 0.0,
        };
        // Time running backwards rebases rather than stalling forever
        self.last = Some(now);
        self.now = now;
        dt
    }

    /// Forget the previous timestamp; the next `advance` returns zero
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Most recent timestamp seen (0 before the first frame)
    pub fn now(&self) -> f64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(12.0), 0.0);
        assert!((clock.advance(12.25) - 0.25).abs() < 1e-6);
        assert_eq!(clock.now(), 12.25);
    }

    #[test]
    fn test_reset_discards_gap() {
        let mut clock = FrameClock::new();
        clock.advance(1.0);
        let before = clock.advance(1.0 + 1.0 / 60.0);
        clock.reset();
        assert_eq!(clock.advance(500.0), 0.0);
        let after = clock.advance(500.0 + 1.0 / 60.0);
        assert!((before - after).abs() < 1e-4);
    }

    #[test]
    fn test_backwards_and_nan() {
        let mut clock = FrameClock::new();
        clock.advance(10.0);
        assert_eq!(clock.advance(5.0), 0.0);
        assert!((clock.advance(5.5) - 0.5).abs() < 1e-6);
        assert_eq!(clock.advance(f64::NAN), 0.0);
        assert_eq!(clock.now(), 5.5);
    }
}
