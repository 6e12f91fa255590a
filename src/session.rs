//! Game state machine: START → PLAYING → GAME_OVER → START.
//!
//! A single discrete action drives every transition except PLAYING →
//! GAME_OVER, which happens inside [`Session::tick`] on a crash. The high
//! score is written the moment a run ends with a new best.

use crate::config::GameConfig;
use crate::entities::{Bird, Pipe};
use crate::persistence::HighScoreStore;
use crate::physics::{self, Crash};
use crate::spawner::PipeSpawner;
use rand::Rng;

/// Current screen of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first action.
    Start,
    /// A run is in progress.
    Playing,
    /// The run ended; showing the result.
    GameOver,
}

/// Result of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Crashed(Crash),
}

/// All mutable game state, owned by the frame driver.
#[derive(Debug)]
pub struct Session {
    pub phase: Phase,
    pub bird: Bird,
    /// Active pipes in spawn order.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub high_score: u32,
    pub spawner: PipeSpawner,
    config: GameConfig,
    store: HighScoreStore,
}

impl Session {
    /// Create an idle session and read the persisted high score.
    pub fn new<R: Rng>(config: GameConfig, store: HighScoreStore, now_ms: u64, rng: &mut R) -> Self {
        let high_score = store.load();
        let spawner = PipeSpawner::new(&config, now_ms, rng);
        Self {
            phase: Phase::Start,
            bird: Bird::new(),
            pipes: Vec::new(),
            score: 0,
            high_score,
            spawner,
            config,
            store,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &HighScoreStore {
        &self.store
    }

    /// Apply the player's action for the current phase.
    pub fn action<R: Rng>(&mut self, now_ms: u64, rng: &mut R) {
        match self.phase {
            Phase::Start => {
                self.reset_run();
                self.spawner.reset(now_ms, rng);
                self.phase = Phase::Playing;
                log::info!("run started (high score {})", self.high_score);
            }
            Phase::Playing => {
                self.bird.jump(self.config.jump_velocity);
            }
            Phase::GameOver => {
                self.reset_run();
                self.phase = Phase::Start;
            }
        }
    }

    /// Advance one fixed tick. Does nothing outside of [`Phase::Playing`].
    pub fn tick<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> TickOutcome {
        if self.phase != Phase::Playing {
            return TickOutcome::Continue;
        }

        self.spawner.poll(now_ms, &mut self.pipes, rng);
        physics::advance_pipes(&mut self.pipes, self.config.pipe_velocity);

        if physics::first_collision(&self.bird, &self.pipes).is_some() {
            return self.end_run(Crash::HitPipe);
        }
        if physics::out_of_bounds(&self.bird) {
            return self.end_run(Crash::FellOut);
        }

        self.score += physics::score_passed(&self.bird, &mut self.pipes);
        self.bird.move_step(self.config.gravity);
        TickOutcome::Continue
    }

    fn end_run(&mut self, crash: Crash) -> TickOutcome {
        self.phase = Phase::GameOver;
        log::info!("run ended ({:?}) with score {}", crash, self.score);

        if self.score > self.high_score {
            self.high_score = self.score;
            match self.store.save(self.high_score) {
                Ok(()) => log::info!("new high score {}", self.high_score),
                Err(e) => log::error!(
                    "failed to save high score to {}: {}",
                    self.store.path().display(),
                    e
                ),
            }
        }

        TickOutcome::Crashed(crash)
    }

    fn reset_run(&mut self) {
        self.bird = Bird::new();
        self.pipes.clear();
        self.score = 0;
    }
}
