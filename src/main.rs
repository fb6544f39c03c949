//! Orbit Point headless runner
//!
//! Drives one run of the simulation at 60 fps with a simple autopilot doing the
//! tapping, then stores the result next to the working directory.
//!
//! Usage: `orbit-point [seed] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is embedded by a web host; there is no standalone wasm entry
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use glam::Vec2;

    use orbit_point::feedback::LogFeedback;
    use orbit_point::persistence::JsonFileStore;
    use orbit_point::platform::{Collaborators, OfflineLeaderboard};
    use orbit_point::polar_to_cartesian;
    use orbit_point::sim::{GameEvent, GameLoop, GamePhase, PlayArea};
    use orbit_point::tuning::Tuning;

    const FRAME: f64 = 1.0 / 60.0;
    /// Give up after ten simulated minutes
    const MAX_RUN_SECS: f64 = 600.0;
    const PROGRESS_FILE: &str = "orbit_point_progress.json";

    pub fn run() {
        log::info!("Orbit Point (headless) starting...");

        let mut args = std::env::args().skip(1);
        let seed = args
            .next()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or_else(|| {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_millis() as u64)
                    .unwrap_or(0)
            });
        let tuning = match args.next() {
            Some(path) => match Tuning::load(&path) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {} (using defaults)", path, e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        };

        let collab = Collaborators::new(
            JsonFileStore::new(PROGRESS_FILE),
            LogFeedback,
            OfflineLeaderboard,
        );
        let mut game = GameLoop::new(PlayArea::new(390.0, 844.0), tuning, seed, collab);
        let mut pilot = Autopilot::default();

        game.start();
        let mut now = 0.0;
        let mut report = None;
        while now < MAX_RUN_SECS + 1.0 {
            game.tick(now);
            if game.phase() == GamePhase::Running && pilot.should_reverse(&game, now) {
                game.reverse_input();
            }
            for event in game.drain_events() {
                if let GameEvent::GameOver(r) = event {
                    report = Some(r);
                }
            }
            if report.is_some() {
                break;
            }
            if game.phase() == GamePhase::Running && now >= MAX_RUN_SECS {
                log::info!("Autopilot survived the time limit, stopping");
                game.stop();
                break;
            }
            now += FRAME;
        }

        match report {
            Some(r) => println!(
                "Survived {}s{} | +{} currency | best {} | total {}",
                r.score,
                if r.is_new_high_score { " (new high score!)" } else { "" },
                r.earned_currency,
                game.best_score(),
                game.currency()
            ),
            None => println!("Run stopped at {:.0}s without a collision", now),
        }
    }

    /// Taps when the current heading runs into debris and the other way is clearer
    #[derive(Default)]
    struct Autopilot {
        last_tap: f64,
    }

    impl Autopilot {
        const LOOKAHEAD_SECS: f32 = 0.35;
        const COOLDOWN_SECS: f64 = 0.2;

        fn should_reverse(&mut self, game: &GameLoop, now: f64) -> bool {
            if now - self.last_tap < Self::COOLDOWN_SECS {
                return false;
            }
            let sign = game.direction().sign();
            let ahead = self.danger(game, sign);
            let behind = self.danger(game, -sign);
            if ahead > 0.0 && behind < ahead {
                self.last_tap = now;
                return true;
            }
            false
        }

        /// Sum of overlap depths along the predicted path
        fn danger(&self, game: &GameLoop, sign: f32) -> f32 {
            let tuning = game.tuning();
            let star = game.star_position();
            let offset = game.satellite_position() - star;
            let angle = offset.y.atan2(offset.x);

            let mut danger = 0.0;
            for step in 1..=6 {
                let t = Self::LOOKAHEAD_SECS * step as f32 / 6.0;
                let theta = angle + sign * tuning.orbit_angular_speed * t;
                let sat: Vec2 = star + polar_to_cartesian(tuning.orbit_radius, theta);
                for d in game.debris() {
                    let future = d.pos + d.vel * t;
                    let clearance = future.distance(sat) - (d.size + tuning.satellite_radius);
                    if clearance < 4.0 {
                        danger += 4.0 - clearance;
                    }
                }
            }
            danger
        }
    }
}
