//! Frame clocks
//!
//! `PacedClock` caps the loop at the requested frame rate and reports real
//! elapsed time. `FixedClock` reports a constant step without waiting, for
//! reproducible headless runs.

use std::time::{Duration, Instant};

use crate::game::FrameClock;

/// Wall-clock pacing, best effort
#[derive(Debug)]
pub struct PacedClock {
    last_frame: Instant,
}

impl Default for PacedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PacedClock {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    fn frame_budget(fps: u32) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
    }
}

impl FrameClock for PacedClock {
    fn tick(&mut self, fps: u32) -> f32 {
        let budget = Self::frame_budget(fps);
        let spent = self.last_frame.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;
        dt.as_secs_f32() * 1000.0
    }

    fn yield_frame(&mut self) {
        std::thread::yield_now();
    }
}

/// Constant `dt` every frame, no waiting
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    dt_ms: f32,
}

impl FixedClock {
    pub fn new(dt_ms: f32) -> Self {
        Self {
            dt_ms: dt_ms.max(0.0),
        }
    }

    /// One nominal frame at `fps`
    pub fn from_fps(fps: u32) -> Self {
        Self::new(1000.0 / fps.max(1) as f32)
    }
}

impl FrameClock for FixedClock {
    fn tick(&mut self, _fps: u32) -> f32 {
        self.dt_ms
    }
}
