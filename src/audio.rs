//! Sound effect requests
//!
//! The simulation only says *what* happened; an `AudioSink` decides how it
//! sounds. Playback is fire-and-forget.

use crate::error::SinkError;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Target collected
    Pickup,
}

/// Audio collaborator
pub trait AudioSink {
    /// Start playing `effect` at `volume` (0.0 - 1.0) and return immediately
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), SinkError>;

    /// Release audio resources. Called once when the loop finishes.
    fn shutdown(&mut self) {}
}

/// Volume and mute handling in front of an `AudioSink`
pub struct AudioMixer {
    sink: Box<dyn AudioSink>,
    master_volume: f32,
    pickup_volume: f32,
    muted: bool,
}

impl AudioMixer {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink,
            master_volume: 1.0,
            pickup_volume: 1.0,
            muted: false,
        }
    }

    /// Mixer configured from settings; pickups are muted when the preset has no sound
    pub fn from_settings(sink: Box<dyn AudioSink>, settings: &Settings) -> Self {
        let mut mixer = Self::new(sink);
        mixer.set_master_volume(settings.master_volume);
        mixer.set_pickup_volume(settings.pickup_volume);
        mixer.set_muted(settings.muted || !settings.pickup_sound);
        mixer
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set pickup volume (0.0 - 1.0)
    pub fn set_pickup_volume(&mut self, vol: f32) {
        self.pickup_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        match effect {
            SoundEffect::Pickup => self.master_volume * self.pickup_volume,
        }
    }

    /// Play a sound effect. Failures are logged, never returned.
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return;
        }

        if let Err(e) = self.sink.play(effect, vol) {
            log::warn!("Audio error: {}", e);
        }
    }

    pub fn shutdown(&mut self) {
        self.sink.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        played: Rc<RefCell<Vec<(SoundEffect, f32)>>>,
        fail: bool,
    }

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), SinkError> {
            self.played.borrow_mut().push((effect, volume));
            if self.fail {
                Err(SinkError::Audio("device unplugged".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_volume_from_settings() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let sink = Recorder {
            played: played.clone(),
            fail: false,
        };
        let settings = Settings {
            master_volume: 0.5,
            ..Settings::default()
        };
        let mut mixer = AudioMixer::from_settings(Box::new(sink), &settings);

        mixer.play(SoundEffect::Pickup);
        let played = played.borrow();
        assert_eq!(played.len(), 1);
        assert!((played[0].1 - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_muted_skips_sink() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let sink = Recorder {
            played: played.clone(),
            fail: false,
        };
        let mut mixer = AudioMixer::new(Box::new(sink));
        mixer.set_muted(true);
        mixer.play(SoundEffect::Pickup);
        assert!(played.borrow().is_empty());

        mixer.set_muted(false);
        mixer.set_master_volume(0.0);
        mixer.play(SoundEffect::Pickup);
        assert!(played.borrow().is_empty());
    }

    #[test]
    fn test_silent_preset() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let sink = Recorder {
            played: played.clone(),
            fail: false,
        };
        let settings = Settings::from_preset(crate::settings::PhysicsPreset::Drift);
        let mut mixer = AudioMixer::from_settings(Box::new(sink), &settings);
        mixer.play(SoundEffect::Pickup);
        assert!(played.borrow().is_empty());
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        let sink = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut mixer = AudioMixer::new(Box::new(sink));
        // Must not panic or propagate
        mixer.play(SoundEffect::Pickup);
    }
}
