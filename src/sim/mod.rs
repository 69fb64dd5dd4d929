//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Time comes in as `dt`, never read from a clock
//! - No rendering, audio, or platform dependencies

pub mod body;
pub mod collision;
pub mod input;
pub mod rect;
pub mod score;
pub mod state;
pub mod target;
pub mod tick;

pub use body::Player;
pub use collision::{WallResponse, confine_to_arena, player_target_collision, reflect_velocity};
pub use input::{DirectionKeys, InputEvent, InputState, Key};
pub use rect::Rect;
pub use score::Score;
pub use state::{Arena, GameEvent, GameState};
pub use target::Target;
pub use tick::step;
