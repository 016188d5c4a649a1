//! Property tests for step sequencing.

use std::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use proptest::prelude::*;

use monochromator_stepper::{
    Board, CoilPattern, Direction, PinId, PinMode, StepperSequencer, FORWARD_SEQUENCE,
    REVERSE_SEQUENCE, STOP_PATTERN,
};

#[derive(Default)]
struct RecordingBoard {
    writes: Vec<(PinId, PinState)>,
    analog: [u16; 2],
}

impl RecordingBoard {
    fn patterns(&self) -> Vec<CoilPattern> {
        self.writes
            .chunks(4)
            .map(|w| CoilPattern([w[0].1, w[1].1, w[2].1, w[3].1]))
            .collect()
    }
}

impl Board for RecordingBoard {
    type Error = Infallible;

    fn pin_count(&self) -> u8 {
        20
    }

    fn configure_pin(&mut self, _: PinId, _: PinMode) -> Result<(), Infallible> {
        Ok(())
    }

    fn write_digital(&mut self, pin: PinId, level: PinState) -> Result<(), Infallible> {
        self.writes.push((pin, level));
        Ok(())
    }

    fn read_analog(&mut self, pin: PinId) -> Result<u16, Infallible> {
        Ok(self.analog[(pin.0 - 6) as usize])
    }
}

#[derive(Default)]
struct CountingDelay {
    settles: usize,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, _ms: u32) {
        self.settles += 1;
    }
}

fn sequencer(board: RecordingBoard) -> StepperSequencer<RecordingBoard, CountingDelay> {
    StepperSequencer::new(
        board,
        CountingDelay::default(),
        [PinId(2), PinId(3), PinId(4), PinId(5)],
        [PinId(6), PinId(7)],
    )
    .unwrap()
}

/// Run `warmup` forward half-steps, clear the record, and return the
/// sequencer at that position.
fn warmed_up(warmup: i64) -> StepperSequencer<RecordingBoard, CountingDelay> {
    let mut seq = sequencer(RecordingBoard::default());
    seq.step(warmup, Direction::Forward).unwrap();
    let (mut board, _) = seq.free();
    board.writes.clear();
    StepperSequencer::new(
        board,
        CountingDelay::default(),
        [PinId(2), PinId(3), PinId(4), PinId(5)],
        [PinId(6), PinId(7)],
    )
    .unwrap()
}

proptest! {
    #[test]
    fn forward_patterns_follow_position(start in 0i64..8, count in 0i64..200) {
        let mut seq = sequencer(RecordingBoard::default());
        seq.step(start, Direction::Forward).unwrap();
        let before = seq.board().writes.len();

        seq.step(count, Direction::Forward).unwrap();

        prop_assert_eq!(seq.position(), start + count);
        let written: Vec<CoilPattern> = seq.board().patterns().split_off(before / 4);
        prop_assert_eq!(written.len() as i64, count);
        for (i, p) in written.iter().enumerate() {
            let phase = ((start + i as i64) % 4) as usize;
            prop_assert_eq!(*p, FORWARD_SEQUENCE.get(phase));
        }

        let (_, delay) = seq.free();
        prop_assert_eq!(delay.settles as i64, start + count);
    }

    #[test]
    fn backward_patterns_reverse_phase_and_still_advance(start in 0i64..8, count in 0i64..100) {
        let mut seq = sequencer(RecordingBoard::default());
        seq.step(start, Direction::Forward).unwrap();
        let before = seq.board().writes.len();

        seq.step(count, Direction::Backward).unwrap();

        prop_assert_eq!(seq.position(), start + count);
        let written: Vec<CoilPattern> = seq.board().patterns().split_off(before / 4);
        prop_assert_eq!(written.len() as i64, count);
        for (i, p) in written.iter().enumerate() {
            let pos = start + i as i64;
            let phase = 3 - (pos % 4) as usize;
            prop_assert_eq!(*p, FORWARD_SEQUENCE.get(phase));
            prop_assert_eq!(*p, REVERSE_SEQUENCE.at_position(pos));
        }
    }

    #[test]
    fn stop_writes_one_release_regardless_of_count(count in 0i64..10_000) {
        let mut seq = sequencer(RecordingBoard::default());
        seq.step(count, Direction::Stop).unwrap();

        prop_assert_eq!(seq.position(), 0);
        prop_assert_eq!(seq.board().patterns(), vec![STOP_PATTERN]);
    }

    #[test]
    fn read_limits_is_second_minus_first(first in any::<u16>(), second in any::<u16>()) {
        let board = RecordingBoard { writes: Vec::new(), analog: [first, second] };
        let mut seq = sequencer(board);

        let expected = i32::from(second) - i32::from(first);
        prop_assert_eq!(seq.read_limits().unwrap(), expected);
        prop_assert_eq!(seq.read_limits().unwrap(), expected);
    }
}

#[test]
fn fresh_sequencer_starts_from_phase_zero_each_time() {
    // Position is owned by the sequencer, not the board: rebuilding
    // restarts the phase table at index 0.
    let mut seq = warmed_up(3);
    seq.step(1, Direction::Forward).unwrap();
    assert_eq!(seq.board().patterns(), vec![FORWARD_SEQUENCE.get(0)]);
    assert_eq!(seq.position(), 1);
}
