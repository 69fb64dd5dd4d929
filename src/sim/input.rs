//! Directional key input to player force
//!
//! Key handling lives outside the core; the host forwards key events and a
//! snapshot of the directional keys currently held.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::InputModel;

/// Keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Any non-directional key (ignored by the simulation)
    Other,
}

impl Key {
    /// Unit force contributed while this key is active (y grows downward)
    pub fn direction(self) -> Vec2 {
        match self {
            Key::Up => Vec2::new(0.0, -1.0),
            Key::Down => Vec2::new(0.0, 1.0),
            Key::Left => Vec2::new(-1.0, 0.0),
            Key::Right => Vec2::new(1.0, 0.0),
            Key::Other => Vec2::ZERO,
        }
    }
}

/// Events delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Window close / application quit request
    Quit,
}

/// Snapshot of which directional keys are held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DirectionKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionKeys {
    /// Set the held state of a key (non-directional keys are ignored)
    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Other => {}
        }
    }

    /// `(right - left, down - up)`
    pub fn force(&self) -> Vec2 {
        let axis = |pos: bool, neg: bool| pos as i8 as f32 - neg as i8 as f32;
        Vec2::new(axis(self.right, self.left), axis(self.down, self.up))
    }
}

/// Player force derived from key input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    pub model: InputModel,
    force: Vec2,
}

impl InputState {
    pub fn new(model: InputModel) -> Self {
        Self {
            model,
            force: Vec2::ZERO,
        }
    }

    /// Current force vector
    #[inline]
    pub fn force(&self) -> Vec2 {
        self.force
    }

    /// Overwrite the force directly (scripted input, tests)
    pub fn set_force(&mut self, force: Vec2) {
        self.force = force;
    }

    /// Drop all accumulated force
    pub fn reset(&mut self) {
        self.force = Vec2::ZERO;
    }

    /// Fold one key event into the force.
    ///
    /// `held` is the directional key snapshot taken when the event was
    /// delivered; only the `Pressed` model reads it.
    pub fn process_event(&mut self, event: &InputEvent, held: &DirectionKeys) {
        match (self.model, event) {
            (InputModel::Pressed, InputEvent::KeyDown(_) | InputEvent::KeyUp(_)) => {
                self.force = held.force();
            }
            (InputModel::Accumulate, InputEvent::KeyDown(key)) => {
                self.force += key.direction();
            }
            (InputModel::Accumulate, InputEvent::KeyUp(key)) => {
                self.force -= key.direction();
            }
            (_, InputEvent::Quit) => {}
        }
    }
}
