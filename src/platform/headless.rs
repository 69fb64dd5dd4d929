//! Window-less sinks that report through the `log` facade

use crate::audio::{AudioSink, SoundEffect};
use crate::error::SinkError;
use crate::render::{RenderSink, RenderSnapshot};

/// Logs the HUD whenever it changes and a frame trace at `trace` level
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_score: Option<String>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogRenderer {
    fn draw(&mut self, frame: &RenderSnapshot) -> Result<(), SinkError> {
        self.frames += 1;

        if self.last_score.as_deref() != Some(frame.score.text.as_str()) {
            if let Some(line) = &frame.instructions {
                log::debug!("[hud] {}", line.text);
            }
            log::info!("[hud] score {}", frame.score.text);
            self.last_score = Some(frame.score.text.clone());
        }

        log::trace!(
            "[frame {}] player {} target {}",
            frame.frame,
            frame.player.rect.min,
            frame.target.rect.min
        );
        Ok(())
    }

    fn shutdown(&mut self) {
        log::debug!("Renderer closed after {} frames", self.frames);
    }
}

/// Logs each sound request instead of playing it
#[derive(Debug, Default)]
pub struct LogAudio {
    played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), SinkError> {
        self.played += 1;
        log::debug!("[audio] {:?} at volume {:.2}", effect, volume);
        Ok(())
    }

    fn shutdown(&mut self) {
        log::debug!("Audio closed after {} sounds", self.played);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::GameState;

    #[test]
    fn test_log_renderer_counts_frames() {
        let state = GameState::new(&Settings::default(), 3).unwrap();
        let frame = RenderSnapshot::capture(&state, true);
        let mut renderer = LogRenderer::new();
        for _ in 0..3 {
            renderer.draw(&frame).unwrap();
        }
        assert_eq!(renderer.frames(), 3);
        assert_eq!(renderer.last_score.as_deref(), Some("00000"));
    }

    #[test]
    fn test_log_audio_never_fails() {
        let mut audio = LogAudio::new();
        assert!(audio.play(SoundEffect::Pickup, 0.1).is_ok());
        assert_eq!(audio.played, 1);
    }
}
