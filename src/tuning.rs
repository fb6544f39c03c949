//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here. Defaults come from
//! [`crate::consts`]; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::StoreError;

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Orbit ===
    pub orbit_radius: f32,
    /// Radians per second
    pub orbit_angular_speed: f32,
    pub satellite_radius: f32,

    // === Debris ===
    pub debris_min_size: f32,
    pub debris_max_size: f32,
    pub debris_min_speed: f32,
    pub debris_max_speed: f32,
    /// Per-axis jitter applied to the aim point around the star
    pub safe_zone_radius: f32,
    pub spawn_margin: f32,
    pub cull_margin: f32,

    // === Difficulty ===
    pub initial_spawn_interval: f32,
    pub min_spawn_interval: f32,
    pub difficulty_ramp_secs: f32,

    // === Flow ===
    pub game_over_delay_secs: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            orbit_radius: ORBIT_RADIUS,
            orbit_angular_speed: ORBIT_ANGULAR_SPEED,
            satellite_radius: SATELLITE_RADIUS,

            debris_min_size: DEBRIS_MIN_SIZE,
            debris_max_size: DEBRIS_MAX_SIZE,
            debris_min_speed: DEBRIS_MIN_SPEED,
            debris_max_speed: DEBRIS_MAX_SPEED,
            safe_zone_radius: SAFE_ZONE_RADIUS,
            spawn_margin: SPAWN_MARGIN,
            cull_margin: CULL_MARGIN,

            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            difficulty_ramp_secs: DIFFICULTY_RAMP_SECS,

            game_over_delay_secs: GAME_OVER_DELAY_SECS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Repair values that would break the simulation: non-finite numbers fall
    /// back to their defaults, swapped min/max pairs are swapped back, and
    /// margins and delays are kept non-negative
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fields = [
            (&mut self.orbit_radius, defaults.orbit_radius),
            (&mut self.orbit_angular_speed, defaults.orbit_angular_speed),
            (&mut self.satellite_radius, defaults.satellite_radius),
            (&mut self.debris_min_size, defaults.debris_min_size),
            (&mut self.debris_max_size, defaults.debris_max_size),
            (&mut self.debris_min_speed, defaults.debris_min_speed),
            (&mut self.debris_max_speed, defaults.debris_max_speed),
            (&mut self.safe_zone_radius, defaults.safe_zone_radius),
            (&mut self.spawn_margin, defaults.spawn_margin),
            (&mut self.cull_margin, defaults.cull_margin),
            (&mut self.initial_spawn_interval, defaults.initial_spawn_interval),
            (&mut self.min_spawn_interval, defaults.min_spawn_interval),
            (&mut self.difficulty_ramp_secs, defaults.difficulty_ramp_secs),
        ];
        for (value, default) in fields {
            if !value.is_finite() {
                log::warn!("Non-finite tuning value, using default {}", default);
                *value = default;
            }
        }
        if !self.game_over_delay_secs.is_finite() {
            self.game_over_delay_secs = defaults.game_over_delay_secs;
        }

        if self.debris_min_size > self.debris_max_size {
            std::mem::swap(&mut self.debris_min_size, &mut self.debris_max_size);
        }
        if self.debris_min_speed > self.debris_max_speed {
            std::mem::swap(&mut self.debris_min_speed, &mut self.debris_max_speed);
        }
        if self.min_spawn_interval > self.initial_spawn_interval {
            std::mem::swap(&mut self.min_spawn_interval, &mut self.initial_spawn_interval);
        }
        self.safe_zone_radius = self.safe_zone_radius.abs();
        self.spawn_margin = self.spawn_margin.max(0.0);
        self.cull_margin = self.cull_margin.max(self.spawn_margin);
        self.game_over_delay_secs = self.game_over_delay_secs.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "orbit_radius": 90.0 }"#).unwrap();
        assert_eq!(tuning.orbit_radius, 90.0);
        assert_eq!(tuning.initial_spawn_interval, INITIAL_SPAWN_INTERVAL);
        assert_eq!(tuning.cull_margin, CULL_MARGIN);
    }

    #[test]
    fn test_swapped_ranges_repaired() {
        let tuning = Tuning::from_json(r#"{ "debris_min_speed": 200.0, "debris_max_speed": 50.0 }"#)
            .unwrap();
        assert_eq!(tuning.debris_min_speed, 50.0);
        assert_eq!(tuning.debris_max_speed, 200.0);
    }

    #[test]
    fn test_non_finite_values_fall_back_to_defaults() {
        // 1e39 overflows f32 and parses as infinity
        let tuning = Tuning::from_json(
            r#"{ "safe_zone_radius": 1e39, "debris_max_speed": -1e39, "spawn_margin": 70.0 }"#,
        )
        .unwrap();
        assert_eq!(tuning.safe_zone_radius, SAFE_ZONE_RADIUS);
        assert_eq!(tuning.debris_max_speed, DEBRIS_MAX_SPEED);
        assert_eq!(tuning.spawn_margin, 70.0);

        let tuning = Tuning {
            orbit_radius: f32::NAN,
            game_over_delay_secs: f64::INFINITY,
            ..Tuning::default()
        }
        .sanitized();
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_infinite_tuning_spawns_without_panic() {
        use crate::sim::{DebrisField, PlayArea};

        let tuning = Tuning::from_json(r#"{ "safe_zone_radius": 1e39 }"#).unwrap();
        let mut field = DebrisField::new(PlayArea::new(400.0, 800.0), &tuning, 8);
        let d = field.spawn(glam::Vec2::new(200.0, 400.0));
        assert!(d.vel.is_finite());
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(StoreError::Json(_))));
    }
}
