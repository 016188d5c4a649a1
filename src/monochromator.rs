//! Monochromator-level moves.
//!
//! Adds backlash take-up on direction reversal and a limit check after
//! every move on top of [`StepperSequencer`].

use embedded_hal::delay::DelayNs;

use crate::board::Board;
use crate::config::{validate_config, SystemConfig};
use crate::error::{MotorError, Result};
use crate::motion::Direction;
use crate::sequencer::{SequencerBuilder, StepperSequencer};

/// Outcome of one [`Monochromator::move_steps`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveReport {
    /// Direction of the move.
    pub direction: Direction,
    /// Half-steps asked for.
    pub requested: u32,
    /// Half-steps actually issued, backlash included.
    pub issued: u32,
    /// Sequencer position after the move.
    pub position: i64,
    /// Limit sensor difference sampled after the move.
    pub limit_difference: i32,
}

impl MoveReport {
    /// True when the limit sensors disagree after the move.
    #[inline]
    pub fn limits_tripped(&self) -> bool {
        self.limit_difference != 0
    }

    /// Backlash half-steps added to this move.
    #[inline]
    pub fn backlash(&self) -> u32 {
        self.issued - self.requested
    }
}

/// Monochromator grating drive.
pub struct Monochromator<B, D>
where
    B: Board,
    D: DelayNs,
{
    sequencer: StepperSequencer<B, D>,
    backlash_steps: u32,
    last_direction: Option<Direction>,
}

impl<B, D> Monochromator<B, D>
where
    B: Board,
    D: DelayNs,
{
    /// Wrap a sequencer. `backlash_steps` are added to any move that
    /// reverses the previous running direction.
    pub fn new(sequencer: StepperSequencer<B, D>, backlash_steps: u32) -> Self {
        Self {
            sequencer,
            backlash_steps,
            last_direction: None,
        }
    }

    /// Validate a SystemConfig, then build the sequencer and drive from it.
    pub fn from_config(board: B, delay: D, config: &SystemConfig) -> Result<Self> {
        validate_config(config)?;
        let sequencer = SequencerBuilder::new()
            .board(board)
            .delay(delay)
            .from_config(config)
            .build()?;
        Ok(Self::new(sequencer, config.motion.backlash_steps))
    }

    /// Configured backlash in half-steps.
    #[inline]
    pub fn backlash_steps(&self) -> u32 {
        self.backlash_steps
    }

    /// Running direction of the last move, cleared by a stop.
    #[inline]
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// The underlying sequencer.
    #[inline]
    pub fn sequencer(&self) -> &StepperSequencer<B, D> {
        &self.sequencer
    }

    /// Mutable access to the underlying sequencer.
    #[inline]
    pub fn sequencer_mut(&mut self) -> &mut StepperSequencer<B, D> {
        &mut self.sequencer
    }

    /// Move `count` half-steps, then sample the limit sensors.
    ///
    /// Reversing the previous running direction adds the backlash
    /// half-steps. `Stop` releases the coils and forgets the previous
    /// direction, so the next move gets no backlash.
    pub fn move_steps(&mut self, count: u32, direction: Direction) -> Result<MoveReport> {
        let reversing = direction.is_moving()
            && self.last_direction.and_then(Direction::reversed) == Some(direction);
        let issued = if reversing {
            count.saturating_add(self.backlash_steps)
        } else {
            count
        };

        #[cfg(feature = "defmt")]
        {
            if reversing {
                defmt::debug!(
                    "{}: taking up {} backlash steps",
                    self.sequencer.name(),
                    self.backlash_steps
                );
            }
        }

        self.sequencer.step(i64::from(issued), direction)?;
        self.last_direction = if direction.is_moving() {
            Some(direction)
        } else {
            None
        };

        let limit_difference = self.sequencer.read_limits()?;

        #[cfg(feature = "defmt")]
        {
            if limit_difference != 0 {
                defmt::warn!(
                    "{}: limit sensors triggered (difference {})",
                    self.sequencer.name(),
                    limit_difference
                );
            }
        }

        Ok(MoveReport {
            direction,
            requested: count,
            issued,
            position: self.sequencer.position(),
            limit_difference,
        })
    }

    /// Move by a signed number of half-steps: positive is forward,
    /// negative backward, zero releases the coils.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `|delta|` does not fit in a `u32`.
    pub fn move_by(&mut self, delta: i64) -> Result<MoveReport> {
        let count = u32::try_from(delta.unsigned_abs())
            .map_err(|_| MotorError::InvalidArgument(delta))?;
        self.move_steps(count, Direction::from_sign(delta))
    }

    /// De-energize the coils.
    pub fn release(&mut self) -> Result<()> {
        self.last_direction = None;
        self.sequencer.release()
    }

    /// Unwrap the sequencer.
    pub fn into_inner(self) -> StepperSequencer<B, D> {
        self.sequencer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PinId, PinMode};
    use crate::error::{ConfigError, Error};
    use embedded_hal::digital::PinState;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    #[derive(Default)]
    struct CountingBoard {
        writes: usize,
        refuse_after: Option<usize>,
        analog: [u16; 20],
    }

    #[derive(Debug)]
    struct WriteRefused;

    impl Board for CountingBoard {
        type Error = WriteRefused;

        fn pin_count(&self) -> u8 {
            20
        }

        fn configure_pin(&mut self, _: PinId, _: PinMode) -> core::result::Result<(), WriteRefused> {
            Ok(())
        }

        fn write_digital(&mut self, _: PinId, _: PinState) -> core::result::Result<(), WriteRefused> {
            if self.refuse_after.map_or(false, |limit| self.writes >= limit) {
                return Err(WriteRefused);
            }
            self.writes += 1;
            Ok(())
        }

        fn read_analog(&mut self, pin: PinId) -> core::result::Result<u16, WriteRefused> {
            Ok(self.analog[pin.0 as usize])
        }
    }

    fn monochromator(backlash: u32) -> Monochromator<CountingBoard, NoopDelay> {
        let mut config = SystemConfig::with_pins([2, 3, 4, 5], [6, 7]);
        config.motion.backlash_steps = backlash;
        Monochromator::from_config(CountingBoard::default(), NoopDelay::new(), &config).unwrap()
    }

    #[test]
    fn test_same_direction_has_no_backlash() {
        let mut mono = monochromator(32);
        let first = mono.move_steps(10, Direction::Forward).unwrap();
        let second = mono.move_steps(5, Direction::Forward).unwrap();

        assert_eq!(first.issued, 10);
        assert_eq!(second.issued, 5);
        assert_eq!(second.position, 15);
        assert!(!second.limits_tripped());
    }

    #[test]
    fn test_reversal_adds_backlash() {
        let mut mono = monochromator(32);
        mono.move_steps(10, Direction::Forward).unwrap();
        let back = mono.move_steps(4, Direction::Backward).unwrap();

        assert_eq!(back.issued, 36);
        assert_eq!(back.backlash(), 32);
        assert_eq!(mono.last_direction(), Some(Direction::Backward));
        assert_eq!(mono.sequencer().board().writes, 4 * 46);
    }

    #[test]
    fn test_stop_clears_direction_history() {
        let mut mono = monochromator(32);
        mono.move_steps(10, Direction::Forward).unwrap();
        mono.move_steps(0, Direction::Stop).unwrap();
        let back = mono.move_steps(4, Direction::Backward).unwrap();

        assert_eq!(back.issued, 4);
        assert_eq!(mono.last_direction(), Some(Direction::Backward));
    }

    #[test]
    fn test_move_by_sign() {
        let mut mono = monochromator(0);
        let report = mono.move_by(-12).unwrap();
        assert_eq!(report.direction, Direction::Backward);
        assert_eq!(report.requested, 12);

        let report = mono.move_by(0).unwrap();
        assert_eq!(report.direction, Direction::Stop);
        assert!(mono.sequencer().energized().is_released());
    }

    #[test]
    fn test_limit_difference_reported() {
        let mut board = CountingBoard::default();
        board.analog[6] = 5;
        board.analog[7] = 900;
        let config = SystemConfig::with_pins([2, 3, 4, 5], [6, 7]);
        let mut mono = Monochromator::from_config(board, NoopDelay::new(), &config).unwrap();

        let report = mono.move_steps(2, Direction::Forward).unwrap();
        assert_eq!(report.limit_difference, 895);
        assert!(report.limits_tripped());
    }

    #[test]
    fn test_move_by_rejects_count_beyond_u32() {
        let mut mono = monochromator(0);
        let delta = i64::from(u32::MAX) + 1;

        assert_eq!(
            mono.move_by(delta),
            Err(Error::Motor(MotorError::InvalidArgument(delta)))
        );
        assert_eq!(
            mono.move_by(-delta),
            Err(Error::Motor(MotorError::InvalidArgument(-delta)))
        );
        assert_eq!(mono.sequencer().board().writes, 0);
        assert_eq!(mono.last_direction(), None);
    }

    #[test]
    fn test_from_config_validates() {
        let mut config = SystemConfig::with_pins([2, 3, 4, 5], [6, 7]);
        config.motion.settling_delay_ms = 0;
        let result = Monochromator::from_config(CountingBoard::default(), NoopDelay::new(), &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidSettlingDelay(0)))
        ));

        let mut config = SystemConfig::with_pins([2, 3, 4, 5], [6, 7]);
        config.motion.travel_limit = -10;
        let result = Monochromator::from_config(CountingBoard::default(), NoopDelay::new(), &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidTravelLimit(-10)))
        ));
    }

    #[test]
    fn test_failed_move_keeps_direction_history() {
        // Coil writes start failing after three forward half-steps.
        let board = CountingBoard {
            refuse_after: Some(3 * 4),
            ..CountingBoard::default()
        };
        let mut config = SystemConfig::with_pins([2, 3, 4, 5], [6, 7]);
        config.motion.backlash_steps = 32;
        let mut mono = Monochromator::from_config(board, NoopDelay::new(), &config).unwrap();

        mono.move_steps(3, Direction::Forward).unwrap();
        assert_eq!(
            mono.move_steps(5, Direction::Backward),
            Err(Error::Motor(MotorError::PinError))
        );
        assert_eq!(mono.last_direction(), Some(Direction::Forward));
        assert_eq!(mono.sequencer().position(), 3);
    }
}
