//! Square Chase - steer a square around a walled arena and collect targets
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring)
//! - `game`: Frame loop and the collaborator traits it drives
//! - `render`: Immutable per-frame snapshot handed to the render sink
//! - `audio`: Sound effect requests and volume mixing
//! - `platform`: Native clock, input, and logging-backed sinks
//! - `settings`: Data-driven configuration and physics presets

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, SinkError};
pub use game::{Game, LoopPhase, RunSummary};
pub use settings::{InputModel, PhysicsConfig, PhysicsPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Target frame rate (iterations per second)
    pub const FPS: u32 = 60;

    /// Arena dimensions in pixels
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Side length of the player square
    pub const PLAYER_SIZE: f32 = 10.0;
    /// Side length of the target square
    pub const TARGET_SIZE: f32 = 20.0;

    /// Player mass (arbitrary units)
    pub const PLAYER_MASS: f32 = 10000.0;
    /// Max player speed in pixels / millisecond
    pub const MAX_VELOCITY: f32 = 0.5;

    /// Width of the zero-padded score readout
    pub const SCORE_DIGITS: usize = 5;
    /// Default pickup sound volume
    pub const PICKUP_VOLUME: f32 = 0.1;

    pub const TITLE: &str = "Square Chase";
    pub const INSTRUCTIONS: &str = "Move green square to collect red targets";
}
