//! The player's physics body
//!
//! Force comes from input; everything else is integrated here once per
//! frame with explicit Euler steps.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::confine_to_arena;
use super::rect::Rect;
use crate::settings::PhysicsConfig;

/// The player square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Input-derived force (unscaled)
    pub force: Vec2,
    pub acceleration: Vec2,
    pub velocity: Vec2,
    /// Top-left corner
    pub position: Vec2,
    /// Side length
    pub size: f32,
    pub physics: PhysicsConfig,
    /// Bounding rectangle as of the last `update`
    pub rect: Rect,
}

impl Player {
    /// Spawn at rest in the middle of the arena
    pub fn new(arena: Vec2, size: f32, physics: PhysicsConfig) -> Self {
        let position = (arena / 2.0).floor();
        Self {
            force: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            velocity: Vec2::ZERO,
            position,
            size,
            physics,
            rect: Rect::square(position, size),
        }
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.physics.mass
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Advance the body by `dt` (milliseconds) inside an arena of the given size
    pub fn update(&mut self, dt: f32, arena: Vec2) {
        let PhysicsConfig {
            mass,
            max_velocity,
            force_scale,
            velocity_scale,
        } = self.physics;

        self.acceleration = self.force * force_scale / mass;
        self.velocity += dt * self.acceleration;

        // Cap speed; a zero vector has no direction to rescale along
        let speed = self.velocity.length();
        if speed > max_velocity && speed > 0.0 {
            self.velocity = self.velocity / speed * max_velocity;
        }

        self.position += dt * self.velocity * velocity_scale;

        let wall = confine_to_arena(self.position, self.velocity, self.size, arena);
        if wall.walls_hit > 0 {
            log::trace!("Player bounced off {} wall(s) at {}", wall.walls_hit, wall.position);
        }
        self.position = wall.position;
        self.velocity = wall.velocity;

        self.rect = Rect::square(self.position, self.size);
    }
}
