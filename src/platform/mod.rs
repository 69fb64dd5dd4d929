//! Platform abstraction layer
//!
//! Native implementations of the collaborators the frame loop drives:
//! - Time/pacing (`clock`)
//! - Scripted input for headless runs (`autopilot`)
//! - Logging-backed render and audio sinks (`headless`)

pub mod autopilot;
pub mod clock;
pub mod headless;

pub use autopilot::Autopilot;
pub use clock::{FixedClock, PacedClock};
pub use headless::{LogAudio, LogRenderer};
