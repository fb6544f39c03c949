//! Satellite orbital kinematics
//!
//! The satellite rides a fixed-radius ring around the star at constant
//! angular speed. The only thing the player controls is the direction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{polar_to_cartesian, sanitize_dt, wrap_angle};

/// Angle the satellite starts each run at (top of the ring)
pub const START_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

/// Orbit direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Angle decreases over time
    #[default]
    Clockwise,
    /// Angle increases over time
    CounterClockwise,
}

impl Direction {
    /// Sign applied to angular speed
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Clockwise => -1.0,
            Direction::CounterClockwise => 1.0,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// The player's satellite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitBody {
    /// Ring center (play-area center)
    pub center: Vec2,
    pub radius: f32,
    /// Current angle (radians, always in [0, 2π))
    angle: f32,
    /// Radians per second (magnitude)
    pub angular_speed: f32,
    pub direction: Direction,
}

impl OrbitBody {
    pub fn new(center: Vec2, radius: f32, angular_speed: f32) -> Self {
        Self {
            center,
            radius,
            angle: START_ANGLE,
            angular_speed: angular_speed.abs(),
            direction: Direction::Clockwise,
        }
    }

    /// Back to the start-of-run pose around a (possibly new) center
    pub fn reset(&mut self, center: Vec2) {
        self.center = center;
        self.angle = START_ANGLE;
        self.direction = Direction::Clockwise;
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Flip direction instantly
    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.reversed();
    }

    /// Advance along the ring; invalid dt leaves the body untouched
    pub fn advance(&mut self, dt: f32) {
        let dt = sanitize_dt(dt);
        if dt == 0.0 {
            return;
        }
        self.angle = wrap_angle(self.angle + self.direction.sign() * self.angular_speed * dt);
    }

    /// Current Cartesian position
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.center + polar_to_cartesian(self.radius, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, TAU};

    fn body() -> OrbitBody {
        OrbitBody::new(Vec2::new(200.0, 300.0), 120.0, 2.0)
    }

    #[test]
    fn test_starts_at_top_clockwise() {
        let orbit = body();
        assert_eq!(orbit.angle(), FRAC_PI_2);
        assert_eq!(orbit.direction, Direction::Clockwise);
        let pos = orbit.position();
        assert!((pos.x - 200.0).abs() < 1e-3);
        assert!((pos.y - 420.0).abs() < 1e-3);
    }

    #[test]
    fn test_clockwise_decreases_angle() {
        let mut orbit = body();
        orbit.advance(0.1);
        assert!((orbit.angle() - (FRAC_PI_2 - 0.2)).abs() < 1e-5);

        orbit.reverse_direction();
        orbit.advance(0.1);
        assert!((orbit.angle() - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_wraps_below_zero() {
        let mut orbit = body();
        // π/2 at 2 rad/s clockwise reaches 0 after ~0.785 s
        orbit.advance(1.0);
        let expected = FRAC_PI_2 - 2.0 + TAU;
        assert!((orbit.angle() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_dt_ignored() {
        let mut orbit = body();
        for dt in [-0.5, 0.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            orbit.advance(dt);
            assert_eq!(orbit.angle(), FRAC_PI_2);
        }
    }

    #[test]
    fn test_double_reverse_restores_direction() {
        let mut orbit = body();
        let before = orbit.direction;
        orbit.reverse_direction();
        assert_ne!(orbit.direction, before);
        orbit.reverse_direction();
        assert_eq!(orbit.direction, before);
    }

    #[test]
    fn test_reset_restores_pose() {
        let mut orbit = body();
        orbit.reverse_direction();
        orbit.advance(0.7);
        orbit.reset(Vec2::new(10.0, 10.0));
        assert_eq!(orbit.angle(), START_ANGLE);
        assert_eq!(orbit.direction, Direction::Clockwise);
        assert_eq!(orbit.center, Vec2::new(10.0, 10.0));
    }

    proptest! {
        #[test]
        fn prop_angle_stays_in_range(
            steps in prop::collection::vec((0.0f32..5.0, any::<bool>()), 1..64)
        ) {
            let mut orbit = body();
            for (dt, flip) in steps {
                if flip {
                    orbit.reverse_direction();
                }
                orbit.advance(dt);
                prop_assert!(orbit.angle() >= 0.0 && orbit.angle() < TAU);
                let offset = orbit.position() - orbit.center;
                prop_assert!((offset.length() - orbit.radius).abs() < 1e-2);
            }
        }
    }
}
