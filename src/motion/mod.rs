//! Motion module for monochromator-stepper.
//!
//! Provides step direction and the four-phase coil excitation tables.

mod direction;
mod phase;

pub use direction::Direction;
pub use phase::{CoilPattern, PhaseTable, FORWARD_SEQUENCE, REVERSE_SEQUENCE, STOP_PATTERN};
