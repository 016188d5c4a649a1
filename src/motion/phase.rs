//! Coil excitation tables.
//!
//! One full electrical cycle is four half-steps. Running the forward
//! table in ascending order turns the shaft one way; the reverse table
//! is the same cycle read backwards.

use embedded_hal::digital::PinState::{self, High, Low};

/// Levels applied simultaneously to the four coil pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilPattern(pub [PinState; 4]);

impl CoilPattern {
    /// Build a pattern from booleans (`true` = HIGH).
    pub const fn from_bits(bits: [bool; 4]) -> Self {
        const fn level(b: bool) -> PinState {
            if b {
                High
            } else {
                Low
            }
        }
        CoilPattern([level(bits[0]), level(bits[1]), level(bits[2]), level(bits[3])])
    }

    /// Level for coil `index` (0..4).
    #[inline]
    pub fn level(&self, index: usize) -> PinState {
        self.0[index]
    }

    /// Levels in coil order.
    #[inline]
    pub fn levels(&self) -> &[PinState; 4] {
        &self.0
    }

    /// True when no coil is energized.
    pub fn is_released(&self) -> bool {
        self.0.iter().all(|l| *l == Low)
    }
}

/// Fixed four-entry table of coil patterns indexed by phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTable([CoilPattern; 4]);

impl PhaseTable {
    /// Number of phases in one electrical cycle.
    pub const PHASES: usize = 4;

    /// Create a table from four patterns in phase order.
    pub const fn new(patterns: [CoilPattern; 4]) -> Self {
        Self(patterns)
    }

    /// Same cycle, read in the opposite order.
    pub const fn reversed(&self) -> Self {
        Self([self.0[3], self.0[2], self.0[1], self.0[0]])
    }

    /// Pattern for a phase index. Indices wrap modulo four.
    #[inline]
    pub fn get(&self, phase: usize) -> CoilPattern {
        self.0[phase % Self::PHASES]
    }

    /// Pattern for an absolute half-step position.
    #[inline]
    pub fn at_position(&self, position: i64) -> CoilPattern {
        self.0[Self::phase_of(position)]
    }

    /// Phase index of an absolute position, always in `0..4`.
    #[inline]
    pub fn phase_of(position: i64) -> usize {
        position.rem_euclid(Self::PHASES as i64) as usize
    }

    /// Iterate patterns in phase order.
    pub fn iter(&self) -> impl Iterator<Item = &CoilPattern> {
        self.0.iter()
    }
}

/// Forward excitation cycle.
pub const FORWARD_SEQUENCE: PhaseTable = PhaseTable::new([
    CoilPattern([Low, High, High, Low]),
    CoilPattern([Low, High, Low, High]),
    CoilPattern([High, Low, Low, High]),
    CoilPattern([High, Low, High, Low]),
]);

/// Backward excitation cycle: `REVERSE_SEQUENCE[i] == FORWARD_SEQUENCE[3 - i]`.
pub const REVERSE_SEQUENCE: PhaseTable = FORWARD_SEQUENCE.reversed();

/// All coils off.
pub const STOP_PATTERN: CoilPattern = CoilPattern([Low; 4]);
