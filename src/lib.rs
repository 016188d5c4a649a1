//! # monochromator-stepper
//!
//! Four-phase stepper sequencing and limit sensing for a monochromator
//! grating drive, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Half-step sequencing**: fixed forward/reverse excitation tables on four coil pins
//! - **Limit sensing**: signed difference between two analog limit sensors
//! - **Injectable timing**: the settling pause uses embedded-hal `DelayNs`
//! - **Backlash take-up**: extra half-steps when the grating reverses
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use monochromator_stepper::{Direction, Monochromator};
//!
//! let config = monochromator_stepper::load_config("monochromator.toml")?;
//!
//! let mut mono = Monochromator::from_config(board, delay, &config)?;
//!
//! let report = mono.move_steps(200, Direction::Forward)?;
//! if report.limits_tripped() {
//!     mono.release()?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod board;
pub mod config;
pub mod error;
pub mod monochromator;
pub mod motion;
pub mod sequencer;

// Re-exports for ergonomic API
pub use board::{AnalogChannel, Board, HalBoard, PinId, PinMode};
pub use config::{validate_config, SystemConfig};
pub use error::{Error, Result};
pub use monochromator::{Monochromator, MoveReport};
pub use motion::{CoilPattern, Direction, PhaseTable, FORWARD_SEQUENCE, REVERSE_SEQUENCE, STOP_PATTERN};
pub use sequencer::{LimitReading, SequencerBuilder, StepperSequencer};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
