//! Pickup counter

use serde::{Deserialize, Serialize};

use crate::consts::SCORE_DIGITS;

/// Number of targets collected. Only ever goes up, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    count: u64,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Zero-padded readout, e.g. `00042`. Wider counts are printed in full.
    pub fn display_text(&self) -> String {
        format!("{:0width$}", self.count, width = SCORE_DIGITS)
    }
}
