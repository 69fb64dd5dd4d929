//! Square Chase entry point
//!
//! Headless host: wires the game loop to a paced clock, the autopilot, and
//! log-backed render/audio sinks. A windowed front end plugs in through the
//! same collaborator traits.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::{Context, Result};
    use clap::Parser;

    use square_chase::consts::TITLE;
    use square_chase::game::{Collaborators, FrameClock};
    use square_chase::platform::{Autopilot, FixedClock, LogAudio, LogRenderer, PacedClock};
    use square_chase::{ConfigError, Game, PhysicsPreset, Settings};

    #[derive(Parser)]
    #[command(name = "square-chase", version, about = "Steer a square, collect targets (headless demo)")]
    struct Args {
        /// Physics preset: classic or drift
        #[arg(short, long)]
        preset: Option<String>,

        /// JSON settings file (preset flag is applied on top)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// RNG seed (defaults to the current time)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Frames to play before quitting
        #[arg(short, long, default_value_t = 600)]
        frames: u64,

        /// Frame rate cap
        #[arg(long)]
        fps: Option<u32>,

        /// Step with a fixed dt as fast as possible instead of real time
        #[arg(long)]
        fast: bool,
    }

    fn load_settings(args: &Args) -> Result<Settings> {
        let mut settings = match &args.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => Settings::default(),
        };

        if let Some(name) = &args.preset {
            let preset = PhysicsPreset::from_str(name)
                .ok_or_else(|| ConfigError::UnknownPreset(name.clone()))?;
            settings.apply_preset(preset);
        }
        if let Some(fps) = args.fps {
            settings.fps = fps;
        }

        settings.validate().context("invalid settings")?;
        Ok(settings)
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();
        let settings = load_settings(&args)?;

        let seed = args.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let clock: Box<dyn FrameClock> = if args.fast {
            Box::new(FixedClock::from_fps(settings.fps))
        } else {
            Box::new(PacedClock::new())
        };

        log::info!("{} starting...", TITLE);
        let collab = Collaborators {
            clock,
            input: Box::new(Autopilot::new(args.frames)),
            renderer: Box::new(LogRenderer::new()),
            audio: Box::new(LogAudio::new()),
        };
        let mut game = Game::new(settings, seed, collab).context("starting game")?;

        let summary = game.run();
        log::info!(
            "Collected {} target(s) in {} frames ({:.1} s simulated)",
            summary.score,
            summary.frames,
            summary.elapsed_ms / 1000.0
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `square_chase::Game::run_frame` from their own frame callback
}
