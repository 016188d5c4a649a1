//! Absolute half-step position.

use crate::motion::PhaseTable;

/// Half-step counter, starting at zero when the sequencer is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position(i64);

impl Position {
    /// Position at origin.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Position at an arbitrary step count.
    #[inline]
    pub const fn at(steps: i64) -> Self {
        Self(steps)
    }

    /// Current position in half-steps.
    #[inline]
    pub fn steps(&self) -> i64 {
        self.0
    }

    /// Phase index `steps mod 4`.
    #[inline]
    pub fn phase(&self) -> usize {
        PhaseTable::phase_of(self.0)
    }

    /// Advance by one half-step.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}
