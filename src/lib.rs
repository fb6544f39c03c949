//! Orbit Point - a one-touch orbital survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (orbit, debris, collisions, game loop)
//! - `platform`: Collaborator seams the host plugs into the game loop
//! - `persistence`: High score / currency storage
//! - `feedback`: Audio/haptic cue vocabulary
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (never read by the simulation)

pub mod feedback;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Orbit ring radius around the star
    pub const ORBIT_RADIUS: f32 = 120.0;
    /// Satellite angular speed (radians per second)
    pub const ORBIT_ANGULAR_SPEED: f32 = 2.0;
    /// Satellite collision radius
    pub const SATELLITE_RADIUS: f32 = 8.0;
    /// Star radius (rendering hint only, the star is not a hazard)
    pub const STAR_RADIUS: f32 = 30.0;

    /// Debris size range (effective collision radius)
    pub const DEBRIS_MIN_SIZE: f32 = 6.0;
    pub const DEBRIS_MAX_SIZE: f32 = 14.0;
    /// Debris speed range (units per second)
    pub const DEBRIS_MIN_SPEED: f32 = 80.0;
    pub const DEBRIS_MAX_SPEED: f32 = 160.0;
    /// Max per-axis jitter of the debris aim point around the star
    pub const SAFE_ZONE_RADIUS: f32 = 150.0;
    /// How far outside the play area debris appears
    pub const SPAWN_MARGIN: f32 = 50.0;
    /// How far outside the play area debris survives before culling
    pub const CULL_MARGIN: f32 = 100.0;

    /// Spawn interval at the start of a run (seconds)
    pub const INITIAL_SPAWN_INTERVAL: f32 = 2.0;
    /// Spawn interval floor (seconds)
    pub const MIN_SPAWN_INTERVAL: f32 = 0.4;
    /// Time to reach the floor (seconds)
    pub const DIFFICULTY_RAMP_SECS: f32 = 120.0;

    /// Delay between collision and the game-over event (exit feedback window)
    pub const GAME_OVER_DELAY_SECS: f64 = 0.5;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Sanitize a frame delta: negative, zero and non-finite values collapse to 0
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}
