//! Error types
//!
//! The simulation itself is total; only configuration and the external
//! sinks can fail.

use std::path::PathBuf;

/// Rejected configuration. Raised before any game state exists.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("arena {width}x{height} cannot fit an entity of size {size} (needs at least {min} per side)")]
    ArenaTooSmall {
        width: f32,
        height: f32,
        size: f32,
        min: f32,
    },
    #[error("entity size must be positive and finite, got {0}")]
    InvalidSize(f32),
    #[error("player mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    #[error("max velocity must be non-negative and finite, got {0}")]
    InvalidMaxVelocity(f32),
    #[error("force scale must be finite, got {0}")]
    InvalidForceScale(f32),
    #[error("velocity scale must be positive and finite, got {0}")]
    InvalidVelocityScale(f32),
    #[error("frame rate must be at least 1")]
    InvalidFps,
    #[error("volume must be within 0.0..=1.0, got {0}")]
    InvalidVolume(f32),
    #[error("unknown physics preset '{0}' (expected 'classic' or 'drift')")]
    UnknownPreset(String),
    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings")]
    Parse(#[from] serde_json::Error),
}

/// Failure reported by a fire-and-forget collaborator.
///
/// The frame loop logs these and keeps running.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("render failed: {0}")]
    Render(String),
    #[error("audio failed: {0}")]
    Audio(String),
}
