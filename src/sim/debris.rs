//! Debris field: spawning, drift and culling
//!
//! Debris enters from one of the four play-area edges and flies in a straight
//! line toward a jittered point near the star. The jitter (the "safe zone")
//! means debris threatens the orbit ring without always crossing the center.
//!
//! Spawning is driven by a timer whose period comes from [`DifficultyCurve`].
//! When the timer fires it resets to zero rather than carrying the remainder,
//! so one tick never spawns more than one piece no matter how long it is.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::any_overlap;
use super::difficulty::DifficultyCurve;
use crate::sanitize_dt;
use crate::tuning::Tuning;

/// Play-area dimensions; origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    /// Negative or non-finite dimensions collapse to zero
    pub fn new(width: f32, height: f32) -> Self {
        let dim = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            width: dim(width),
            height: dim(height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point lies within the area grown by `margin` on every side
    /// (boundary inclusive)
    pub fn contains_expanded(&self, point: Vec2, margin: f32) -> bool {
        point.is_finite()
            && point.x >= -margin
            && point.x <= self.width + margin
            && point.y >= -margin
            && point.y <= self.height + margin
    }
}

/// Play-area edge debris enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// A piece of debris
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debris {
    pub id: u32,
    pub pos: Vec2,
    /// Fixed for the lifetime of the entity
    pub vel: Vec2,
    /// Effective collision radius
    pub size: f32,
    pub edge: Edge,
}

impl Debris {
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Spawn/cull parameters pulled from [`Tuning`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnParams {
    pub min_size: f32,
    pub max_size: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub safe_zone_radius: f32,
    pub spawn_margin: f32,
    pub cull_margin: f32,
}

impl SpawnParams {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        let tuning = tuning.clone().sanitized();
        Self {
            min_size: tuning.debris_min_size,
            max_size: tuning.debris_max_size,
            min_speed: tuning.debris_min_speed,
            max_speed: tuning.debris_max_speed,
            safe_zone_radius: tuning.safe_zone_radius,
            spawn_margin: tuning.spawn_margin,
            cull_margin: tuning.cull_margin,
        }
    }
}

/// Owns all live debris
#[derive(Debug, Clone)]
pub struct DebrisField {
    area: PlayArea,
    params: SpawnParams,
    curve: DifficultyCurve,
    rng: Pcg32,
    /// Live debris in spawn order
    debris: Vec<Debris>,
    /// Run time seen by this field (drives difficulty)
    elapsed: f32,
    spawn_timer: f32,
    interval: f32,
    next_id: u32,
}

impl DebrisField {
    pub fn new(area: PlayArea, tuning: &Tuning, seed: u64) -> Self {
        let curve = DifficultyCurve::from_tuning(&tuning.clone().sanitized());
        Self {
            area,
            params: SpawnParams::from_tuning(tuning),
            curve,
            rng: Pcg32::seed_from_u64(seed),
            debris: Vec::new(),
            elapsed: 0.0,
            spawn_timer: 0.0,
            interval: curve.initial,
            next_id: 1,
        }
    }

    /// Clear all debris and restart the difficulty ramp
    pub fn reset(&mut self) {
        self.debris.clear();
        self.elapsed = 0.0;
        self.spawn_timer = 0.0;
        self.interval = self.curve.initial;
    }

    /// Restart the RNG stream (called once per run for reproducibility)
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Adopt new play-area dimensions; live debris keeps flying
    pub fn set_area(&mut self, area: PlayArea) {
        self.area = area;
    }

    pub fn debris(&self) -> &[Debris] {
        &self.debris
    }

    pub fn len(&self) -> usize {
        self.debris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debris.is_empty()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Spawn interval in effect after the most recent tick
    pub fn current_interval(&self) -> f32 {
        self.interval
    }

    /// Advance the field by one frame
    pub fn tick(&mut self, dt: f32, star: Vec2) {
        let dt = sanitize_dt(dt);
        if dt == 0.0 {
            return;
        }

        self.elapsed += dt;
        self.interval = self.curve.interval_for(self.elapsed);

        self.spawn_timer += dt;
        if self.spawn_timer >= self.interval {
            self.spawn(star);
            self.spawn_timer = 0.0;
        }

        for debris in &mut self.debris {
            debris.advance(dt);
        }

        self.cull();
    }

    /// Spawn one piece of debris aimed near `star`
    pub fn spawn(&mut self, star: Vec2) -> &Debris {
        let p = self.params;
        let edge = Edge::ALL[self.rng.random_range(0..Edge::ALL.len())];
        let (w, h) = (self.area.width, self.area.height);

        let pos = match edge {
            Edge::Top => Vec2::new(self.rng.random_range(0.0..=w), h + p.spawn_margin),
            Edge::Right => Vec2::new(w + p.spawn_margin, self.rng.random_range(0.0..=h)),
            Edge::Bottom => Vec2::new(self.rng.random_range(0.0..=w), -p.spawn_margin),
            Edge::Left => Vec2::new(-p.spawn_margin, self.rng.random_range(0.0..=h)),
        };

        let jitter = Vec2::new(
            self.rng.random_range(-p.safe_zone_radius..=p.safe_zone_radius),
            self.rng.random_range(-p.safe_zone_radius..=p.safe_zone_radius),
        );
        let dir = aim_direction(pos, star + jitter, star);

        let speed = self.rng.random_range(p.min_speed..=p.max_speed);
        let size = self.rng.random_range(p.min_size..=p.max_size);

        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        log::debug!(
            "spawn debris {} from {:?} at ({:.0}, {:.0}) speed {:.0} size {:.1} (interval {:.2}s)",
            id,
            edge,
            pos.x,
            pos.y,
            speed,
            size,
            self.interval
        );

        self.debris.push(Debris {
            id,
            pos,
            vel: dir * speed,
            size,
            edge,
        });
        &self.debris[self.debris.len() - 1]
    }

    /// Place a piece of debris directly (scripted hazards, replays)
    pub fn insert(&mut self, pos: Vec2, vel: Vec2, size: f32, edge: Edge) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.debris.push(Debris {
            id,
            pos,
            vel,
            size: size.max(0.0),
            edge,
        });
        id
    }

    /// True if any debris overlaps the satellite circle
    pub fn check_collisions(&self, satellite: Vec2, satellite_radius: f32) -> bool {
        any_overlap(
            satellite,
            satellite_radius,
            self.debris.iter().map(|d| (d.pos, d.size)),
        )
    }

    /// Drop debris that left the margin-expanded play area
    fn cull(&mut self) {
        let area = self.area;
        let margin = self.params.cull_margin;
        let before = self.debris.len();
        self.debris.retain(|d| area.contains_expanded(d.pos, margin));
        let removed = before - self.debris.len();
        if removed > 0 {
            log::debug!("culled {} debris, {} live", removed, self.debris.len());
        }
    }
}

/// Unit vector from `from` toward `target`, falling back to the star and then
/// to +X when the vector degenerates
fn aim_direction(from: Vec2, target: Vec2, star: Vec2) -> Vec2 {
    (target - from)
        .try_normalize()
        .or_else(|| (star - from).try_normalize())
        .unwrap_or(Vec2::X)
}
