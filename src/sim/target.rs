//! The collectible target
//!
//! There is always exactly one target. Consuming it moves it somewhere new
//! instead of despawning it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// The target square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Top-left corner, integer-valued
    pub position: Vec2,
    /// Side length
    pub size: f32,
    /// Never cleared today; kept for a future despawn rule
    pub alive: bool,
    /// Bounding rectangle as of the last `update_bounds`
    pub rect: Rect,
}

impl Target {
    /// Create a target at a random spot in the arena
    pub fn new<R: Rng>(arena: Vec2, size: f32, rng: &mut R) -> Self {
        let mut target = Self {
            position: Vec2::ZERO,
            size,
            alive: true,
            rect: Rect::default(),
        };
        target.relocate(arena, rng);
        target
    }

    /// Move to a uniformly random position in `[size, arena - size]` per axis
    pub fn relocate<R: Rng>(&mut self, arena: Vec2, rng: &mut R) {
        self.position = Vec2::new(
            spawn_coord(self.size, arena.x, rng),
            spawn_coord(self.size, arena.y, rng),
        );
        self.update_bounds();
    }

    /// Recompute the bounding rectangle from position and size
    pub fn update_bounds(&mut self) {
        self.rect = Rect::square(self.position, self.size);
    }
}

/// Inclusive spawn range for one axis
pub fn spawn_range(size: f32, extent: f32) -> (f32, f32) {
    (size, extent - size)
}

/// Draw one coordinate on the integer grid inside the spawn range.
///
/// Falls back to a continuous draw when fractional sizes leave no whole
/// number in range. Callers guarantee `extent >= 2 * size`.
fn spawn_coord<R: Rng>(size: f32, extent: f32, rng: &mut R) -> f32 {
    let (lo, hi) = spawn_range(size, extent);
    let lo_int = lo.ceil() as i32;
    let hi_int = hi.floor() as i32;

    if lo_int <= hi_int {
        rng.random_range(lo_int..=hi_int) as f32
    } else {
        rng.random_range(lo..=hi)
    }
}
