//! Frame loop
//!
//! One logical thread: each iteration measures `dt`, polls input, steps the
//! simulation, renders, then yields back to the host. The loop owns every
//! collaborator and tears them down exactly once when it finishes.

use crate::audio::{AudioMixer, AudioSink, SoundEffect};
use crate::error::ConfigError;
use crate::render::{RenderSink, RenderSnapshot};
use crate::settings::Settings;
use crate::sim::{DirectionKeys, GameEvent, GameState, InputEvent, InputState, step};

/// Frame timing source
pub trait FrameClock {
    /// Block until the next frame is due (at most `fps` per second) and
    /// return the milliseconds elapsed since the previous call.
    fn tick(&mut self, fps: u32) -> f32;

    /// Hand control back to the host between frames
    fn yield_frame(&mut self) {}
}

/// Keyboard / window event source
pub trait InputSource {
    /// Drain pending events
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Called with every frame handed to the renderer, including the
    /// initial one. Device-backed sources have nothing to do here.
    fn observe(&mut self, _frame: &RenderSnapshot) {}

    /// Directional keys held right now
    fn pressed(&self) -> DirectionKeys;

    /// Release input resources. Called once when the loop finishes.
    fn shutdown(&mut self) {}
}

/// External services the loop drives
pub struct Collaborators {
    pub clock: Box<dyn FrameClock>,
    pub input: Box<dyn InputSource>,
    pub renderer: Box<dyn RenderSink>,
    pub audio: Box<dyn AudioSink>,
}

/// Loop state. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Running,
    Done,
}

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames stepped and rendered
    pub frames: u64,
    pub score: u64,
    /// Simulated time in milliseconds
    pub elapsed_ms: f64,
}

/// Game instance holding all state
pub struct Game {
    settings: Settings,
    state: GameState,
    input: InputState,
    phase: LoopPhase,
    clock: Box<dyn FrameClock>,
    input_source: Box<dyn InputSource>,
    renderer: Box<dyn RenderSink>,
    audio: AudioMixer,
    /// Last frame handed to the renderer
    frame: RenderSnapshot,
    frames: u64,
    shut_down: bool,
}

impl Game {
    /// Validate settings and build the initial state
    pub fn new(settings: Settings, seed: u64, collab: Collaborators) -> Result<Self, ConfigError> {
        let state = GameState::new(&settings, seed)?;
        let frame = RenderSnapshot::capture(&state, settings.show_instructions);
        let audio = AudioMixer::from_settings(collab.audio, &settings);
        let mut input_source = collab.input;
        input_source.observe(&frame);

        log::info!(
            "Game initialized with seed {} (preset {}, {}x{} @ {} fps)",
            seed,
            settings.preset.as_str(),
            settings.arena_width,
            settings.arena_height,
            settings.fps
        );

        Ok(Self {
            input: InputState::new(settings.input_model),
            settings,
            state,
            phase: LoopPhase::Running,
            clock: collab.clock,
            input_source,
            renderer: collab.renderer,
            audio,
            frame,
            frames: 0,
            shut_down: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Frames stepped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run a single iteration of the loop
    pub fn run_frame(&mut self) -> LoopPhase {
        if self.phase == LoopPhase::Done {
            return LoopPhase::Done;
        }

        let dt = self.clock.tick(self.settings.fps);

        let events = self.input_source.poll_events();
        let held = self.input_source.pressed();
        for event in &events {
            if *event == InputEvent::Quit {
                log::info!("Quit requested after {} frames", self.frames);
                self.phase = LoopPhase::Done;
                self.shutdown();
                return LoopPhase::Done;
            }
            self.input.process_event(event, &held);
        }

        if let Some(GameEvent::Pickup { score, .. }) = step(&mut self.state, &self.input, dt) {
            log::info!("Score: {}", score);
            self.audio.play(SoundEffect::Pickup);
        }

        self.frame = RenderSnapshot::capture(&self.state, self.settings.show_instructions);
        if let Err(e) = self.renderer.draw(&self.frame) {
            log::warn!("Render error: {}", e);
        }
        self.input_source.observe(&self.frame);

        self.frames += 1;
        self.clock.yield_frame();
        LoopPhase::Running
    }

    /// Drive frames until a quit signal arrives
    pub fn run(&mut self) -> RunSummary {
        while self.run_frame() == LoopPhase::Running {}
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            score: self.state.score.count(),
            elapsed_ms: self.state.elapsed_ms,
        }
    }

    /// Tear down collaborators. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.phase = LoopPhase::Done;

        self.input_source.shutdown();
        self.renderer.shutdown();
        self.audio.shutdown();
        log::info!(
            "Shut down: {} frames, score {}",
            self.frames,
            self.state.score.display_text()
        );
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;
    use crate::sim::Key;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Default)]
    struct Log {
        ticks: u32,
        yields: u32,
        draws: Vec<RenderSnapshot>,
        observed: Vec<u64>,
        sounds: u32,
        shutdowns: Vec<&'static str>,
    }

    type Shared = Rc<RefCell<Log>>;

    struct Clock(Shared);
    impl FrameClock for Clock {
        fn tick(&mut self, _fps: u32) -> f32 {
            self.0.borrow_mut().ticks += 1;
            16.0
        }
        fn yield_frame(&mut self) {
            self.0.borrow_mut().yields += 1;
        }
    }

    /// Replays one batch of events per frame
    struct Script {
        batches: VecDeque<Vec<InputEvent>>,
        keys: DirectionKeys,
        log: Shared,
    }
    impl InputSource for Script {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            let batch = self.batches.pop_front().unwrap_or_default();
            for event in &batch {
                match *event {
                    InputEvent::KeyDown(k) => self.keys.set(k, true),
                    InputEvent::KeyUp(k) => self.keys.set(k, false),
                    InputEvent::Quit => {}
                }
            }
            batch
        }
        fn observe(&mut self, frame: &RenderSnapshot) {
            self.log.borrow_mut().observed.push(frame.frame);
        }
        fn pressed(&self) -> DirectionKeys {
            self.keys
        }
        fn shutdown(&mut self) {
            self.log.borrow_mut().shutdowns.push("input");
        }
    }

    struct Screen {
        log: Shared,
        fail: bool,
    }
    impl RenderSink for Screen {
        fn draw(&mut self, frame: &RenderSnapshot) -> Result<(), SinkError> {
            self.log.borrow_mut().draws.push(frame.clone());
            if self.fail {
                Err(SinkError::Render("surface lost".into()))
            } else {
                Ok(())
            }
        }
        fn shutdown(&mut self) {
            self.log.borrow_mut().shutdowns.push("render");
        }
    }

    struct Speaker(Shared);
    impl AudioSink for Speaker {
        fn play(&mut self, _effect: SoundEffect, _volume: f32) -> Result<(), SinkError> {
            self.0.borrow_mut().sounds += 1;
            Err(SinkError::Audio("no device".into()))
        }
        fn shutdown(&mut self) {
            self.0.borrow_mut().shutdowns.push("audio");
        }
    }

    fn game(batches: Vec<Vec<InputEvent>>, fail_render: bool) -> (Game, Shared) {
        let log = Shared::default();
        let collab = Collaborators {
            clock: Box::new(Clock(log.clone())),
            input: Box::new(Script {
                batches: batches.into(),
                keys: DirectionKeys::default(),
                log: log.clone(),
            }),
            renderer: Box::new(Screen {
                log: log.clone(),
                fail: fail_render,
            }),
            audio: Box::new(Speaker(log.clone())),
        };
        let game = Game::new(Settings::default(), 2024, collab).unwrap();
        (game, log)
    }

    #[test]
    fn test_quit_stops_stepping() {
        let (mut game, log) = game(vec![vec![], vec![], vec![InputEvent::Quit]], false);

        assert_eq!(game.run_frame(), LoopPhase::Running);
        assert_eq!(game.run_frame(), LoopPhase::Running);
        assert_eq!(game.run_frame(), LoopPhase::Done);
        assert_eq!(game.state().time_ticks, 2);

        // Terminal: nothing else happens
        assert_eq!(game.run_frame(), LoopPhase::Done);
        assert_eq!(game.state().time_ticks, 2);
        assert_eq!(game.frames(), 2);

        let log = log.borrow();
        assert_eq!(log.draws.len(), 2);
        assert_eq!(log.ticks, 3);
        assert_eq!(log.yields, 2);
        assert_eq!(log.shutdowns, vec!["input", "render", "audio"]);
    }

    #[test]
    fn test_input_sees_every_drawn_frame() {
        let (mut game, log) = game(vec![vec![], vec![], vec![InputEvent::Quit]], true);
        game.run();

        // The initial frame, then one per rendered frame even when drawing fails
        let log = log.borrow();
        assert_eq!(log.observed, vec![0, 1, 2]);
        assert_eq!(log.draws.len(), 2);
    }

    #[test]
    fn test_quit_discards_rest_of_batch() {
        let batch = vec![InputEvent::Quit, InputEvent::KeyDown(Key::Right)];
        let (mut game, log) = game(vec![batch], false);

        let summary = game.run();
        assert_eq!(summary.frames, 0);
        assert_eq!(game.state().player.force, glam::Vec2::ZERO);
        assert!(log.borrow().draws.is_empty());
    }

    #[test]
    fn test_shutdown_happens_once() {
        let (mut game, log) = game(vec![vec![InputEvent::Quit]], false);
        game.run();
        game.shutdown();
        drop(game);
        assert_eq!(log.borrow().shutdowns.len(), 3);
    }

    #[test]
    fn test_keys_drive_player() {
        let batches = vec![
            vec![InputEvent::KeyDown(Key::Right)],
            vec![],
            vec![],
            vec![InputEvent::KeyUp(Key::Right)],
            vec![InputEvent::Quit],
        ];
        let (mut game, log) = game(batches, false);
        game.state.target.position = glam::Vec2::new(20.0, 20.0);

        let summary = game.run();
        assert_eq!(summary.frames, 4);
        assert!(game.state().player.position.x > 400.0);
        assert_eq!(game.state().player.force, glam::Vec2::ZERO);

        let log = log.borrow();
        let xs: Vec<f32> = log.draws.iter().map(|f| f.player.rect.min.x).collect();
        assert!(xs.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(log.draws.last().map(|f| f.frame), Some(4));
    }

    #[test]
    fn test_sink_failures_do_not_abort() {
        let mut batches = vec![vec![]; 5];
        batches.push(vec![InputEvent::Quit]);
        let (mut game, log) = game(batches, true);

        // Force a pickup on the first frame; the audio sink will fail too
        game.state.target.position = game.state.player.position;

        let summary = game.run();
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.score, 1);
        let log = log.borrow();
        assert_eq!(log.draws.len(), 5);
        assert_eq!(log.sounds, 1);
    }
}
