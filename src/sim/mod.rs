//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only from the host's frame timestamps
//! - Seeded RNG only
//! - Stable iteration order (debris in spawn order)
//! - No rendering, audio or storage dependencies

pub mod clock;
pub mod collision;
pub mod debris;
pub mod difficulty;
pub mod game_loop;
pub mod orbit;
pub mod scheduler;
pub mod score;
pub mod state;

pub use clock::FrameClock;
pub use collision::{any_overlap, circles_overlap};
pub use debris::{Debris, DebrisField, Edge, PlayArea, SpawnParams};
pub use difficulty::DifficultyCurve;
pub use game_loop::GameLoop;
pub use orbit::{Direction, OrbitBody, START_ANGLE};
pub use scheduler::{Scheduler, TaskId};
pub use score::ScoreClock;
pub use state::{DebrisView, GameEvent, GameOverReport, GamePhase, GameSnapshot, SatelliteView};
