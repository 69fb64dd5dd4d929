//! Scripted input for headless runs
//!
//! Plays the game by watching the frames handed to the renderer and pressing
//! arrow keys like a person would, then asks to quit after a fixed number of
//! frames.

use glam::Vec2;

use crate::game::InputSource;
use crate::render::RenderSnapshot;
use crate::sim::{DirectionKeys, InputEvent, Key};

/// Fraction of the remaining distance the autopilot wants to cover per frame
const STEER_GAIN: f32 = 0.04;
/// Per-frame velocity error (px) below which no key is held on that axis
const DEADZONE: f32 = 0.05;

/// Steers toward the target, braking as it gets close
#[derive(Debug)]
pub struct Autopilot {
    frames_left: u64,
    held: DirectionKeys,
    /// Player and target centres on the latest frame
    view: Option<(Vec2, Vec2)>,
    /// Player centre on the frame before that
    last_player: Option<Vec2>,
}

impl Autopilot {
    /// Play for `frames` frames, then send a quit event
    pub fn new(frames: u64) -> Self {
        Self {
            frames_left: frames,
            held: DirectionKeys::default(),
            view: None,
            last_player: None,
        }
    }

    /// Keys to hold this frame
    fn choose_keys(&self) -> DirectionKeys {
        let Some((player, target)) = self.view else {
            return DirectionKeys::default();
        };
        let to_target = target - player;
        // Per-frame displacement stands in for velocity; units don't matter
        let moved = self.last_player.map_or(Vec2::ZERO, |last| player - last);
        let error = to_target * STEER_GAIN - moved;

        DirectionKeys {
            up: error.y < -DEADZONE,
            down: error.y > DEADZONE,
            left: error.x < -DEADZONE,
            right: error.x > DEADZONE,
        }
    }
}

/// Events that turn `from` into `to`
fn key_transitions(from: DirectionKeys, to: DirectionKeys) -> Vec<InputEvent> {
    let pairs = [
        (Key::Up, from.up, to.up),
        (Key::Down, from.down, to.down),
        (Key::Left, from.left, to.left),
        (Key::Right, from.right, to.right),
    ];

    let mut events = Vec::new();
    // Releases first so accumulate-style input never double counts an axis
    for &(key, was, now) in &pairs {
        if was && !now {
            events.push(InputEvent::KeyUp(key));
        }
    }
    for &(key, was, now) in &pairs {
        if !was && now {
            events.push(InputEvent::KeyDown(key));
        }
    }
    events
}

impl InputSource for Autopilot {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        if self.frames_left == 0 {
            return vec![InputEvent::Quit];
        }
        self.frames_left -= 1;

        let wanted = self.choose_keys();
        let events = key_transitions(self.held, wanted);
        self.held = wanted;
        events
    }

    fn observe(&mut self, frame: &RenderSnapshot) {
        self.last_player = self.view.map(|(player, _)| player);
        self.view = Some((frame.player.rect.center(), frame.target.rect.center()));
    }

    fn pressed(&self) -> DirectionKeys {
        self.held
    }

    fn shutdown(&mut self) {
        log::debug!("Autopilot released");
        self.held = DirectionKeys::default();
    }
}
