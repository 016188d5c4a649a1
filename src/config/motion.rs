//! Motion timing and travel configuration.

use serde::Deserialize;

use crate::sequencer::{DEFAULT_SETTLING_DELAY_MS, DEFAULT_TRAVEL_LIMIT};

/// Timing and travel settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MotionConfig {
    /// Pause after each half-step, in milliseconds.
    #[serde(default = "default_settling_delay_ms")]
    pub settling_delay_ms: u32,

    /// Travel limit in half-steps.
    #[serde(default = "default_travel_limit")]
    pub travel_limit: i64,

    /// Extra half-steps issued when the motor reverses direction.
    #[serde(default)]
    pub backlash_steps: u32,
}

fn default_settling_delay_ms() -> u32 {
    DEFAULT_SETTLING_DELAY_MS
}

fn default_travel_limit() -> i64 {
    DEFAULT_TRAVEL_LIMIT
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            settling_delay_ms: DEFAULT_SETTLING_DELAY_MS,
            travel_limit: DEFAULT_TRAVEL_LIMIT,
            backlash_steps: 0,
        }
    }
}
