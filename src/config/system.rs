//! System configuration - root configuration structure.

use heapless::String;
use serde::Deserialize;

use super::board::BoardConfig;
use super::motion::MotionConfig;
use super::pins::PinConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemConfig {
    /// Human-readable name (max 32 chars).
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// Host board parameters.
    #[serde(default)]
    pub board: BoardConfig,

    /// Coil and sensor pins.
    pub pins: PinConfig,

    /// Timing and travel settings.
    #[serde(default)]
    pub motion: MotionConfig,
}

fn default_name() -> String<32> {
    String::try_from("monochromator").unwrap_or_default()
}

impl SystemConfig {
    /// Configuration with default board and motion settings.
    pub fn with_pins(coils: [u8; 4], sensors: [u8; 2]) -> Self {
        Self {
            name: default_name(),
            board: BoardConfig::default(),
            pins: PinConfig { coils, sensors },
            motion: MotionConfig::default(),
        }
    }
}
