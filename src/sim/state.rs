//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`, owned by a single
//! game loop and touched only inside `tick::step`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Player;
use super::score::Score;
use super::target::Target;
use crate::error::ConfigError;
use crate::settings::Settings;

/// The fixed rectangular play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Observable side effects of a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The player reached the target. `score` is the new count, `at` is
    /// where the consumed target was.
    Pickup { score: u64, at: Vec2 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub arena: Arena,
    pub player: Player,
    pub target: Target,
    pub score: Score,
    /// Steps taken so far
    pub time_ticks: u64,
    /// Simulated time in milliseconds
    pub elapsed_ms: f64,
}

impl GameState {
    /// Create a new game state; rejects settings the simulation cannot run with
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;

        let arena = Arena::new(settings.arena_width, settings.arena_height);
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::new(arena.size(), settings.player_size, settings.physics);
        let target = Target::new(arena.size(), settings.target_size, &mut rng);

        log::debug!(
            "New game: seed {}, arena {}x{}, target at {}",
            seed,
            arena.width,
            arena.height,
            target.position
        );

        Ok(Self {
            seed,
            rng,
            arena,
            player,
            target,
            score: Score::new(),
            time_ticks: 0,
            elapsed_ms: 0.0,
        })
    }

    /// Move the target to a fresh random position
    pub fn relocate_target(&mut self) {
        self.target.relocate(self.arena.size(), &mut self.rng);
    }
}
