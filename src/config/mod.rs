//! Configuration module for monochromator-stepper.
//!
//! Provides types for loading and validating the board, pin and motion
//! configuration from TOML files (with `std` feature) or pre-parsed data.

mod board;
#[cfg(feature = "std")]
mod loader;
mod motion;
mod pins;
mod system;
mod validation;

pub use board::BoardConfig;
pub use motion::MotionConfig;
pub use pins::PinConfig;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
