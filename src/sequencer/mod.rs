//! Sequencer module for monochromator-stepper.
//!
//! Provides the four-phase stepper sequencer, its builder, and the
//! position and limit-sensor state it tracks.

mod builder;
mod driver;
mod limits;
mod position;

pub use builder::SequencerBuilder;
pub use driver::{StepperSequencer, DEFAULT_SETTLING_DELAY_MS, DEFAULT_TRAVEL_LIMIT};
pub use limits::LimitReading;
pub use position::Position;
