//! Host board description.

use serde::Deserialize;

/// Host board parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardConfig {
    /// Number of addressable pins; valid pin numbers are `0..pin_count`.
    #[serde(default = "default_pin_count")]
    pub pin_count: u8,
}

/// D0-D13 plus A0-A5 on an ATmega328 board.
fn default_pin_count() -> u8 {
    20
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            pin_count: default_pin_count(),
        }
    }
}
