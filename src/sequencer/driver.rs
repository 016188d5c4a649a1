//! Four-phase stepper sequencer.
//!
//! Generic over a [`Board`] for pin I/O and an embedded-hal 1.0
//! `DelayNs` for the settling pause between half-steps.

use embedded_hal::delay::DelayNs;

use crate::board::{binding_fault, BindingFault, Board, PinId, PinMode};
use crate::error::{MotorError, Result};
use crate::motion::{CoilPattern, Direction, FORWARD_SEQUENCE, REVERSE_SEQUENCE, STOP_PATTERN};

use super::limits::LimitReading;
use super::position::Position;

/// Default pause between half-steps, in milliseconds.
pub const DEFAULT_SETTLING_DELAY_MS: u32 = 5;

/// Default travel limit, in half-steps.
pub const DEFAULT_TRAVEL_LIMIT: i64 = 1000;

/// Stepper sequencer driving four coil pins and sampling two limit sensors.
///
/// Generic over:
/// - `B`: host pin I/O (must implement [`Board`])
/// - `D`: delay provider (must implement `DelayNs`)
///
/// The sequencer owns the board, so nothing else can drive the coil
/// pins while it exists. Every operation takes `&mut self` and blocks
/// until done.
pub struct StepperSequencer<B, D>
where
    B: Board,
    D: DelayNs,
{
    /// Host pin I/O.
    board: B,

    /// Delay provider for the settling pause.
    delay: D,

    /// Coil driver pins, in pattern order.
    coils: [PinId; 4],

    /// Limit sensor pins.
    sensors: [PinId; 2],

    /// Absolute half-step position.
    position: Position,

    /// Pattern currently applied to the coils.
    energized: CoilPattern,

    /// Last sensor sample.
    limits: LimitReading,

    /// Travel limit in half-steps (informational, never enforced here).
    travel_limit: i64,

    /// Pause after each half-step.
    settling_delay_ms: u32,

    /// Sequencer name for logging/debugging.
    name: heapless::String<32>,
}

impl<B, D> StepperSequencer<B, D>
where
    B: Board,
    D: DelayNs,
{
    /// Bind coil and sensor pins and configure them on the board.
    ///
    /// Sensor pins become inputs, coil pins outputs. No coil is written.
    ///
    /// # Errors
    ///
    /// - `InvalidPinBinding` if a pin is outside `0..board.pin_count()`
    /// - `DuplicatePin` if a pin is bound twice
    /// - `PinError` if the board refuses a configuration
    pub fn new(board: B, delay: D, coils: [PinId; 4], sensors: [PinId; 2]) -> Result<Self> {
        Self::with_settings(
            board,
            delay,
            coils,
            sensors,
            heapless::String::try_from("sequencer").unwrap_or_default(),
            DEFAULT_SETTLING_DELAY_MS,
            DEFAULT_TRAVEL_LIMIT,
        )
    }

    pub(crate) fn with_settings(
        mut board: B,
        delay: D,
        coils: [PinId; 4],
        sensors: [PinId; 2],
        name: heapless::String<32>,
        settling_delay_ms: u32,
        travel_limit: i64,
    ) -> Result<Self> {
        let pins = [
            coils[0].0, coils[1].0, coils[2].0, coils[3].0, sensors[0].0, sensors[1].0,
        ];
        let pin_count = board.pin_count();
        match binding_fault(&pins, pin_count) {
            Some(BindingFault::OutOfRange(pin)) => {
                return Err(MotorError::InvalidPinBinding { pin, pin_count }.into())
            }
            Some(BindingFault::Duplicate(pin)) => return Err(MotorError::DuplicatePin(pin).into()),
            None => {}
        }

        for pin in sensors {
            board
                .configure_pin(pin, PinMode::Input)
                .map_err(|_| MotorError::PinError)?;
        }
        for pin in coils {
            board
                .configure_pin(pin, PinMode::Output)
                .map_err(|_| MotorError::PinError)?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: coils {} sensors {} bound",
            name.as_str(),
            coils,
            sensors
        );

        Ok(Self {
            board,
            delay,
            coils,
            sensors,
            position: Position::new(),
            energized: STOP_PATTERN,
            limits: LimitReading::default(),
            travel_limit,
            settling_delay_ms,
            name,
        })
    }

    /// Get the sequencer name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Absolute position in half-steps since construction.
    #[inline]
    pub fn position(&self) -> i64 {
        self.position.steps()
    }

    /// Pattern last written to the coils (all LOW before the first write).
    #[inline]
    pub fn energized(&self) -> CoilPattern {
        self.energized
    }

    /// Readings stored by the last [`read_limits`](Self::read_limits).
    #[inline]
    pub fn last_limits(&self) -> LimitReading {
        self.limits
    }

    /// Configured travel limit in half-steps.
    #[inline]
    pub fn travel_limit(&self) -> i64 {
        self.travel_limit
    }

    /// Pause after each half-step, in milliseconds.
    #[inline]
    pub fn settling_delay_ms(&self) -> u32 {
        self.settling_delay_ms
    }

    /// Coil pins in pattern order.
    #[inline]
    pub fn coil_pins(&self) -> [PinId; 4] {
        self.coils
    }

    /// Limit sensor pins.
    #[inline]
    pub fn sensor_pins(&self) -> [PinId; 2] {
        self.sensors
    }

    /// Read-only access to the board.
    #[inline]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Write each level of `pattern` to its coil pin.
    pub fn apply_coil_pattern(&mut self, pattern: &CoilPattern) -> Result<()> {
        for (pin, level) in self.coils.iter().zip(pattern.levels()) {
            self.board
                .write_digital(*pin, *level)
                .map_err(|_| MotorError::PinError)?;
        }
        self.energized = *pattern;
        Ok(())
    }

    /// Issue `count` half-steps in `direction`, blocking for the settling
    /// delay after each one.
    ///
    /// `Stop` writes the all-LOW pattern once and ignores `count`. Both
    /// running directions advance the position counter; `Backward` only
    /// walks the phase table in reverse.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `count` is negative (nothing is written)
    /// - `PinError` if a coil write fails mid-sequence
    pub fn step(&mut self, count: i64, direction: Direction) -> Result<()> {
        if count < 0 {
            return Err(MotorError::InvalidArgument(count).into());
        }

        let table = match direction {
            Direction::Forward => &FORWARD_SEQUENCE,
            Direction::Backward => &REVERSE_SEQUENCE,
            Direction::Stop => return self.apply_coil_pattern(&STOP_PATTERN),
        };

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "{}: {} half-steps {} from {}",
            self.name.as_str(),
            count,
            direction,
            self.position.steps()
        );

        for _ in 0..count {
            let pattern = table.at_position(self.position.steps());
            self.apply_coil_pattern(&pattern)?;
            self.position.advance();
            self.delay.delay_ms(self.settling_delay_ms);
        }

        Ok(())
    }

    /// De-energize all coils.
    #[inline]
    pub fn release(&mut self) -> Result<()> {
        self.step(0, Direction::Stop)
    }

    /// Sample both limit sensors and return `second - first`.
    pub fn read_limits(&mut self) -> Result<i32> {
        let first = self
            .board
            .read_analog(self.sensors[0])
            .map_err(|_| MotorError::PinError)?;
        let second = self
            .board
            .read_analog(self.sensors[1])
            .map_err(|_| MotorError::PinError)?;

        self.limits = LimitReading { first, second };

        #[cfg(feature = "defmt")]
        defmt::trace!("{}: limits {}", self.name.as_str(), self.limits);

        Ok(self.limits.difference())
    }

    /// Give back the board and delay provider.
    pub fn free(self) -> (B, D) {
        (self.board, self.delay)
    }
}
