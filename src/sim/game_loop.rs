//! Game loop controller
//!
//! Owns every piece of simulation state and drives it once per host frame.
//! The host calls [`GameLoop::tick`] with its frame timestamp, forwards taps
//! to [`GameLoop::reverse_input`], and drains [`GameEvent`]s afterwards.
//!
//! Per running tick: clock → orbit → debris → score → collision. A collision
//! ends the run immediately, but the game-over event is held back for a short
//! delay (exit feedback) on the same [`Scheduler`] the loop polls each frame.

use glam::Vec2;

use super::clock::FrameClock;
use super::debris::{Debris, DebrisField, PlayArea};
use super::orbit::{Direction, OrbitBody};
use super::scheduler::{Scheduler, TaskId};
use super::score::ScoreClock;
use super::state::{DebrisView, GameEvent, GameOverReport, GamePhase, GameSnapshot, SatelliteView};
use crate::feedback::Cue;
use crate::platform::Collaborators;
use crate::tuning::Tuning;

/// Work deferred onto the loop's scheduler
#[derive(Debug, Clone, Copy)]
enum Deferred {
    GameOver(GameOverReport),
}

/// The simulation core
pub struct GameLoop {
    tuning: Tuning,
    area: PlayArea,
    phase: GamePhase,
    orbit: OrbitBody,
    field: DebrisField,
    score: ScoreClock,
    clock: FrameClock,
    scheduler: Scheduler<Deferred>,
    pending_game_over: Option<TaskId>,
    /// Host time the simulation last froze at (start/pause); the gap up to the
    /// next running tick is kept out of the score
    frozen_at: Option<f64>,
    events: Vec<GameEvent>,
    collab: Collaborators,
    seed: u64,
    runs: u64,
}

impl GameLoop {
    /// Create the loop in the menu phase, loading saved progress
    pub fn new(area: PlayArea, tuning: Tuning, seed: u64, mut collab: Collaborators) -> Self {
        let tuning = tuning.sanitized();
        let progress = match collab.store.load() {
            Ok(progress) => {
                log::info!(
                    "Loaded progress: high score {}, currency {}",
                    progress.high_score,
                    progress.currency
                );
                progress
            }
            Err(e) => {
                log::warn!("Could not load progress, starting fresh: {}", e);
                Default::default()
            }
        };

        Self {
            orbit: OrbitBody::new(area.center(), tuning.orbit_radius, tuning.orbit_angular_speed),
            field: DebrisField::new(area, &tuning, seed),
            score: ScoreClock::from_progress(progress),
            clock: FrameClock::new(),
            scheduler: Scheduler::new(),
            pending_game_over: None,
            frozen_at: None,
            events: Vec::new(),
            phase: GamePhase::Menu,
            tuning,
            area,
            collab,
            seed,
            runs: 0,
        }
    }

    // === Host controls ===

    /// Begin a fresh run (from any phase; an unfinished run is abandoned)
    pub fn start(&mut self) {
        self.cancel_game_over();
        if self.score.is_running() {
            self.score.abandon();
        }

        self.runs += 1;
        let run_seed = self
            .seed
            .wrapping_add(self.runs.wrapping_mul(0x9E37_79B9_7F4A_7C15));

        self.orbit.reset(self.area.center());
        self.field.reset();
        self.field.reseed(run_seed);
        self.clock.reset();

        let now = self.clock.now();
        self.score.start(now);
        self.frozen_at = Some(now);

        self.set_phase(GamePhase::Running);
        self.events.push(GameEvent::RunStarted { run: self.runs });
        self.collab.feedback.cue(Cue::GameStart);
        log::info!("Run {} started (seed {})", self.runs, run_seed);
    }

    /// Freeze a running game
    pub fn pause(&mut self) {
        if self.phase != GamePhase::Running {
            log::debug!("pause() ignored in {:?}", self.phase);
            return;
        }
        // A freeze not yet discounted by a running tick stays the earliest point
        self.frozen_at.get_or_insert(self.clock.now());
        self.set_phase(GamePhase::Paused);
    }

    /// Continue a paused game without counting the paused time
    pub fn resume(&mut self) {
        if self.phase != GamePhase::Paused {
            log::debug!("resume() ignored in {:?}", self.phase);
            return;
        }
        self.clock.reset();
        self.set_phase(GamePhase::Running);
    }

    /// Leave the results (or pause) screen for the menu
    pub fn return_to_menu(&mut self) {
        match self.phase {
            GamePhase::Ended | GamePhase::Paused => self.teardown(),
            _ => log::debug!("return_to_menu() ignored in {:?}", self.phase),
        }
    }

    /// Tear down whatever is happening and go idle; nothing is scored
    pub fn stop(&mut self) {
        self.teardown();
    }

    /// Player tap: reverse the orbit (running only)
    pub fn reverse_input(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.orbit.reverse_direction();
        let direction = self.orbit.direction;
        self.events.push(GameEvent::DirectionReversed { direction });
        self.collab.feedback.cue(Cue::DirectionChange);
        true
    }

    /// Adopt new play-area dimensions; the star and orbit follow the center
    pub fn resize(&mut self, width: f32, height: f32) {
        self.area = PlayArea::new(width, height);
        self.orbit.center = self.area.center();
        self.field.set_area(self.area);
        log::debug!("Play area resized to {}x{}", self.area.width, self.area.height);
    }

    /// Advance one host frame. `now` is the host clock in seconds.
    pub fn tick(&mut self, now: f64) {
        let dt = self.clock.advance(now);

        if self.phase == GamePhase::Running {
            self.step(now, dt);
        }

        self.dispatch_due(now);
    }

    fn step(&mut self, now: f64, dt: f32) {
        if let Some(frozen_at) = self.frozen_at.take() {
            self.score.discount(now - frozen_at);
        }

        self.orbit.advance(dt);
        self.field.tick(dt, self.area.center());
        self.score.update(now);

        let satellite = self.orbit.position();
        if self.field.check_collisions(satellite, self.tuning.satellite_radius) {
            self.end_run(now);
        }
    }

    fn end_run(&mut self, now: f64) {
        self.set_phase(GamePhase::Ended);

        let is_new_high_score = self.score.end();
        let report = GameOverReport {
            score: self.score.score(),
            is_new_high_score,
            earned_currency: self.score.earned(),
        };
        log::info!(
            "Game over: score {} (best {}, +{} currency{})",
            report.score,
            self.score.best(),
            report.earned_currency,
            if is_new_high_score { ", new high score" } else { "" }
        );

        self.persist_currency();
        if is_new_high_score {
            self.persist_high_score();
        }

        self.collab.feedback.cue(Cue::Collision);
        if is_new_high_score {
            self.collab.feedback.cue(Cue::NewHighScore);
        }
        if report.score > 0 {
            self.collab.leaderboard.submit(report.score);
        }

        let due = now + self.tuning.game_over_delay_secs;
        self.pending_game_over = Some(self.scheduler.schedule(due, Deferred::GameOver(report)));
    }

    fn dispatch_due(&mut self, now: f64) {
        for task in self.scheduler.poll(now) {
            match task {
                Deferred::GameOver(report) => {
                    self.pending_game_over = None;
                    self.events.push(GameEvent::GameOver(report));
                }
            }
        }
    }

    fn cancel_game_over(&mut self) {
        if let Some(id) = self.pending_game_over.take() {
            if self.scheduler.cancel(id) {
                log::debug!("Pending game-over dispatch cancelled");
            }
        }
    }

    fn teardown(&mut self) {
        self.cancel_game_over();
        if self.score.is_running() {
            self.score.abandon();
        }
        self.field.reset();
        self.orbit.reset(self.area.center());
        self.frozen_at = None;
        self.set_phase(GamePhase::Menu);
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::debug!("Phase {:?} -> {:?}", from, to);
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    // === Progress ===

    /// Spend currency (store purchases happen outside the core)
    pub fn spend_currency(&mut self, amount: u64) -> bool {
        if !self.score.spend_currency(amount) {
            return false;
        }
        self.persist_currency();
        true
    }

    pub fn reset_high_score(&mut self) {
        self.score.reset_high_score();
        self.persist_high_score();
    }

    fn persist_currency(&mut self) {
        if let Err(e) = self.collab.store.save_currency(self.score.currency()) {
            log::warn!("Failed to save currency: {}", e);
        }
    }

    fn persist_high_score(&mut self) {
        if let Err(e) = self.collab.store.save_high_score(self.score.best()) {
            log::warn!("Failed to save high score: {}", e);
        }
    }

    // === Queries ===

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn satellite_position(&self) -> Vec2 {
        self.orbit.position()
    }

    pub fn direction(&self) -> Direction {
        self.orbit.direction
    }

    pub fn star_position(&self) -> Vec2 {
        self.area.center()
    }

    pub fn debris(&self) -> &[Debris] {
        self.field.debris()
    }

    /// Direct access for scripted hazards
    pub fn debris_field_mut(&mut self) -> &mut DebrisField {
        &mut self.field
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn best_score(&self) -> u32 {
        self.score.best()
    }

    pub fn currency(&self) -> u64 {
        self.score.currency()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Whether a game-over event is still waiting on its delay
    pub fn game_over_pending(&self) -> bool {
        self.pending_game_over
            .is_some_and(|id| self.scheduler.is_pending(id))
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Render/HUD view of the current frame
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            star: self.area.center(),
            orbit_radius: self.orbit.radius,
            satellite: SatelliteView {
                pos: self.orbit.position(),
                radius: self.tuning.satellite_radius,
                direction: self.orbit.direction,
            },
            debris: self
                .field
                .debris()
                .iter()
                .map(|d| DebrisView {
                    id: d.id,
                    pos: d.pos,
                    size: d.size,
                })
                .collect(),
            score: self.score.score(),
            best_score: self.score.best(),
            currency: self.score.currency(),
        }
    }
}
