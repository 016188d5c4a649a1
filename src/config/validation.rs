//! Configuration validation.

use crate::board::{binding_fault, BindingFault};
use crate::error::{ConfigError, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Board exposes at least one pin
/// - Every pin is inside the board's range and bound once
/// - Settling delay and travel limit are positive
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    let pin_count = config.board.pin_count;
    if pin_count == 0 {
        return Err(ConfigError::InvalidPinCount(pin_count).into());
    }

    match binding_fault(&config.pins.all(), pin_count) {
        Some(BindingFault::OutOfRange(pin)) => {
            return Err(ConfigError::InvalidPinBinding { pin, pin_count }.into())
        }
        Some(BindingFault::Duplicate(pin)) => return Err(ConfigError::DuplicatePin(pin).into()),
        None => {}
    }

    if config.motion.settling_delay_ms == 0 {
        return Err(ConfigError::InvalidSettlingDelay(config.motion.settling_delay_ms).into());
    }

    if config.motion.travel_limit <= 0 {
        return Err(ConfigError::InvalidTravelLimit(config.motion.travel_limit).into());
    }

    Ok(())
}
