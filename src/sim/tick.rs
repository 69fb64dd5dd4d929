//! Per-frame simulation step
//!
//! Input → force → acceleration → velocity → position → collision → score.

use super::collision::player_target_collision;
use super::input::InputState;
use super::state::{GameEvent, GameState};

/// Advance the game state by one frame of `dt` milliseconds
///
/// The player is fully integrated before the target test, so collision always
/// sees this frame's position. At most one pickup happens per step.
pub fn step(state: &mut GameState, input: &InputState, dt: f32) -> Option<GameEvent> {
    state.time_ticks += 1;
    state.elapsed_ms += f64::from(dt);

    state.player.force = input.force();
    state.player.update(dt, state.arena.size());
    state.target.update_bounds();

    if !player_target_collision(&state.player.rect, &state.target.rect) {
        return None;
    }

    let at = state.target.position;
    state.score.increment();
    state.relocate_target();

    log::debug!(
        "Pickup #{} at {} (tick {}), target moved to {}",
        state.score.count(),
        at,
        state.time_ticks,
        state.target.position
    );

    Some(GameEvent::Pickup {
        score: state.score.count(),
        at,
    })
}
