//! Pin bindings from TOML.

use serde::Deserialize;

use crate::board::PinId;

/// Coil and sensor pin numbers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PinConfig {
    /// Coil driver pins, in pattern order.
    pub coils: [u8; 4],

    /// Limit sensor pins (first, second).
    pub sensors: [u8; 2],
}

impl PinConfig {
    /// Coil pins as identifiers.
    pub fn coil_ids(&self) -> [PinId; 4] {
        self.coils.map(PinId)
    }

    /// Sensor pins as identifiers.
    pub fn sensor_ids(&self) -> [PinId; 2] {
        self.sensors.map(PinId)
    }

    /// All six pins, coils first.
    pub fn all(&self) -> [u8; 6] {
        let [a, b, c, d] = self.coils;
        let [e, f] = self.sensors;
        [a, b, c, d, e, f]
    }
}
