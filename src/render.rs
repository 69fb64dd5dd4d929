//! Render snapshot handed to the display collaborator
//!
//! Drawing happens elsewhere. After each step the game loop builds an
//! immutable `RenderSnapshot` and passes it to a `RenderSink`, so a renderer
//! never observes a half-updated frame.

use glam::Vec2;

use crate::consts::INSTRUCTIONS;
use crate::error::SinkError;
use crate::sim::{GameState, Rect};

/// Linear RGBA color
pub type Rgba = [f32; 4];

pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const GREEN: Rgba = [0.0, 1.0, 0.0, 1.0];
pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const YELLOW: Rgba = [1.0, 1.0, 0.0, 1.0];

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub rect: Rect,
    pub color: Rgba,
}

/// A line of HUD text, centered on `center`
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub center: Vec2,
    pub color: Rgba,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub clear: Rgba,
    pub player: Sprite,
    pub target: Sprite,
    pub score: HudText,
    pub instructions: Option<HudText>,
    pub frame: u64,
}

impl RenderSnapshot {
    /// Capture the current state. The instructions line pushes the score down.
    pub fn capture(state: &GameState, show_instructions: bool) -> Self {
        let mid_x = (state.arena.width / 2.0).floor();

        let (instructions, score_y) = if show_instructions {
            let line = HudText {
                text: INSTRUCTIONS.to_string(),
                center: Vec2::new(mid_x, 20.0),
                color: GREEN,
            };
            (Some(line), 60.0)
        } else {
            (None, 50.0)
        };

        Self {
            clear: BLACK,
            player: Sprite {
                rect: state.player.rect,
                color: GREEN,
            },
            target: Sprite {
                rect: state.target.rect,
                color: RED,
            },
            score: HudText {
                text: state.score.display_text(),
                center: Vec2::new(mid_x, score_y),
                color: YELLOW,
            },
            instructions,
            frame: state.time_ticks,
        }
    }
}

/// Display collaborator
pub trait RenderSink {
    /// Draw and present one frame
    fn draw(&mut self, frame: &RenderSnapshot) -> Result<(), SinkError>;

    /// Release display resources. Called once when the loop finishes.
    fn shutdown(&mut self) {}
}
