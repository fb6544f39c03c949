//! Game phases, events and the render-facing snapshot

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::orbit::Direction;

/// Current phase of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, nothing simulated
    #[default]
    Menu,
    /// Active gameplay
    Running,
    /// Frozen mid-run, resumable
    Paused,
    /// Run finished; needs a fresh start
    Ended,
}

/// Final result of a run, delivered to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverReport {
    pub score: u32,
    pub is_new_high_score: bool,
    pub earned_currency: u64,
}

/// Things the host should react to, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// A new run began (`run` counts from 1)
    RunStarted { run: u64 },
    DirectionReversed { direction: Direction },
    /// Dispatched after the exit-feedback delay, never on the collision tick
    /// itself unless the delay is zero
    GameOver(GameOverReport),
}

/// Satellite render data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SatelliteView {
    pub pos: Vec2,
    pub radius: f32,
    pub direction: Direction,
}

/// Debris render data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebrisView {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
}

/// Everything a renderer/HUD needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub star: Vec2,
    pub orbit_radius: f32,
    pub satellite: SatelliteView,
    pub debris: Vec<DebrisView>,
    pub score: u32,
    pub best_score: u32,
    pub currency: u64,
}
