//! Game settings and physics presets
//!
//! Loaded from JSON on native hosts; every field the document leaves out
//! falls back to the preset it names.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::*;
use crate::error::ConfigError;

/// Named physics/input tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PhysicsPreset {
    /// Mass-based model: force / mass, velocity in px/ms, keys held = force
    #[default]
    Classic,
    /// Massless model: velocity in px/s, each key press adds thrust until released
    Drift,
}

impl PhysicsPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhysicsPreset::Classic => "classic",
            PhysicsPreset::Drift => "drift",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "mass" => Some(PhysicsPreset::Classic),
            "drift" | "legacy" => Some(PhysicsPreset::Drift),
            _ => None,
        }
    }

    /// Physics constants for this preset
    pub fn physics(&self) -> PhysicsConfig {
        match self {
            PhysicsPreset::Classic => PhysicsConfig {
                mass: PLAYER_MASS,
                max_velocity: MAX_VELOCITY,
                force_scale: 1.0,
                velocity_scale: 1.0,
            },
            PhysicsPreset::Drift => PhysicsConfig {
                mass: 1.0,
                max_velocity: 2000.0,
                force_scale: 0.1,
                velocity_scale: 0.001,
            },
        }
    }

    pub fn input_model(&self) -> InputModel {
        match self {
            PhysicsPreset::Classic => InputModel::Pressed,
            PhysicsPreset::Drift => InputModel::Accumulate,
        }
    }

    /// Whether the HUD shows the instructions line
    pub fn show_instructions(&self) -> bool {
        matches!(self, PhysicsPreset::Classic)
    }

    /// Whether pickups request a sound
    pub fn pickup_sound(&self) -> bool {
        matches!(self, PhysicsPreset::Classic)
    }
}

/// How key events turn into player force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputModel {
    /// Force is recomputed from the keys currently held
    #[default]
    Pressed,
    /// Key-down adds the key's direction, key-up removes it
    Accumulate,
}

/// Tunable physics constants for the player body.
///
/// `acceleration = force * force_scale / mass` and
/// `position += dt * velocity * velocity_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub mass: f32,
    pub max_velocity: f32,
    pub force_scale: f32,
    pub velocity_scale: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsPreset::Classic.physics()
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        if !(self.max_velocity.is_finite() && self.max_velocity >= 0.0) {
            return Err(ConfigError::InvalidMaxVelocity(self.max_velocity));
        }
        if !self.force_scale.is_finite() {
            return Err(ConfigError::InvalidForceScale(self.force_scale));
        }
        if !(self.velocity_scale.is_finite() && self.velocity_scale > 0.0) {
            return Err(ConfigError::InvalidVelocityScale(self.velocity_scale));
        }
        Ok(())
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preset the physics and input model were taken from
    pub preset: PhysicsPreset,

    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    pub player_size: f32,
    pub target_size: f32,
    /// Frame rate cap handed to the frame clock
    pub fps: u32,

    // === Physics / input ===
    pub physics: PhysicsConfig,
    pub input_model: InputModel,

    // === HUD ===
    pub show_instructions: bool,

    // === Audio ===
    pub pickup_sound: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Pickup effect volume (0.0 - 1.0)
    pub pickup_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(PhysicsPreset::Classic)
    }
}

impl Settings {
    /// Create settings from a preset (arena defaults plus preset tuning)
    pub fn from_preset(preset: PhysicsPreset) -> Self {
        Self {
            preset,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_size: PLAYER_SIZE,
            target_size: TARGET_SIZE,
            fps: FPS,
            physics: preset.physics(),
            input_model: preset.input_model(),
            show_instructions: preset.show_instructions(),
            pickup_sound: preset.pickup_sound(),
            master_volume: 1.0,
            pickup_volume: PICKUP_VOLUME,
            muted: false,
        }
    }

    /// Apply a preset (replaces preset-dependent settings, keeps arena and volumes)
    pub fn apply_preset(&mut self, preset: PhysicsPreset) {
        self.preset = preset;
        self.physics = preset.physics();
        self.input_model = preset.input_model();
        self.show_instructions = preset.show_instructions();
        self.pickup_sound = preset.pickup_sound();
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        for size in [self.player_size, self.target_size] {
            if !(size.is_finite() && size > 0.0) {
                return Err(ConfigError::InvalidSize(size));
            }
        }

        // The target spawns in [size, dim - size], the player in [0, dim - size]
        let (size, min) = if 2.0 * self.target_size >= self.player_size {
            (self.target_size, 2.0 * self.target_size)
        } else {
            (self.player_size, self.player_size)
        };
        if !(self.arena_width >= min && self.arena_height >= min) {
            return Err(ConfigError::ArenaTooSmall {
                width: self.arena_width,
                height: self.arena_height,
                size,
                min,
            });
        }

        if self.fps == 0 {
            return Err(ConfigError::InvalidFps);
        }

        for vol in [self.master_volume, self.pickup_volume] {
            if !(0.0..=1.0).contains(&vol) {
                return Err(ConfigError::InvalidVolume(vol));
            }
        }

        self.physics.validate()
    }

    /// Parse and validate settings from a JSON document.
    ///
    /// Fields the document leaves out come from the preset it names
    /// (`Classic` when it names none), so `{ "preset": "drift" }` is the
    /// full Drift preset.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let document: Value = serde_json::from_str(json)?;
        let preset = match document.get("preset") {
            Some(name) => PhysicsPreset::deserialize(name)?,
            None => PhysicsPreset::default(),
        };

        let mut merged = serde_json::to_value(Self::from_preset(preset))?;
        overlay(&mut merged, document);
        let settings: Settings = serde_json::from_value(merged)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} (preset {})",
            path.display(),
            settings.preset.as_str()
        );
        Ok(settings)
    }
}

/// Write every field of `patch` over `base`, recursing into nested objects
fn overlay(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}
