//! Builder pattern for StepperSequencer.

use embedded_hal::delay::DelayNs;

use crate::board::{Board, PinId};
use crate::config::SystemConfig;
use crate::error::{ConfigError, Result};

use super::driver::{StepperSequencer, DEFAULT_SETTLING_DELAY_MS, DEFAULT_TRAVEL_LIMIT};

/// Builder for creating StepperSequencer instances.
pub struct SequencerBuilder<B, D>
where
    B: Board,
    D: DelayNs,
{
    board: Option<B>,
    delay: Option<D>,
    name: Option<heapless::String<32>>,
    coils: Option<[PinId; 4]>,
    sensors: Option<[PinId; 2]>,
    settling_delay_ms: u32,
    travel_limit: i64,
}

impl<B, D> Default for SequencerBuilder<B, D>
where
    B: Board,
    D: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<B, D> SequencerBuilder<B, D>
where
    B: Board,
    D: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            board: None,
            delay: None,
            name: None,
            coils: None,
            sensors: None,
            settling_delay_ms: DEFAULT_SETTLING_DELAY_MS,
            travel_limit: DEFAULT_TRAVEL_LIMIT,
        }
    }

    /// Set the host board.
    pub fn board(mut self, board: B) -> Self {
        self.board = Some(board);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the sequencer name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set the four coil pins, in pattern order.
    pub fn coil_pins(mut self, pins: [PinId; 4]) -> Self {
        self.coils = Some(pins);
        self
    }

    /// Set the two limit sensor pins.
    pub fn sensor_pins(mut self, pins: [PinId; 2]) -> Self {
        self.sensors = Some(pins);
        self
    }

    /// Set the pause after each half-step.
    pub fn settling_delay_ms(mut self, ms: u32) -> Self {
        self.settling_delay_ms = ms;
        self
    }

    /// Set the travel limit in half-steps.
    pub fn travel_limit(mut self, limit: i64) -> Self {
        self.travel_limit = limit;
        self
    }

    /// Take name, pins and timing from a SystemConfig.
    pub fn from_config(mut self, config: &SystemConfig) -> Self {
        self.name = Some(config.name.clone());
        self.coils = Some(config.pins.coil_ids());
        self.sensors = Some(config.pins.sensor_ids());
        self.settling_delay_ms = config.motion.settling_delay_ms;
        self.travel_limit = config.motion.travel_limit;
        self
    }

    /// Build the StepperSequencer.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the pins do
    /// not fit the board.
    pub fn build(self) -> Result<StepperSequencer<B, D>> {
        let board = self.board.ok_or(ConfigError::MissingField("board"))?;
        let delay = self.delay.ok_or(ConfigError::MissingField("delay"))?;
        let coils = self.coils.ok_or(ConfigError::MissingField("coil_pins"))?;
        let sensors = self.sensors.ok_or(ConfigError::MissingField("sensor_pins"))?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("sequencer").unwrap_or_default());

        StepperSequencer::with_settings(
            board,
            delay,
            coils,
            sensors,
            name,
            self.settling_delay_ms,
            self.travel_limit,
        )
    }
}
