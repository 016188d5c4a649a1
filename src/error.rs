//! Error types for monochromator-stepper.
//!
//! Configuration errors and sequencer errors share one top-level `Error`.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all monochromator-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Sequencer or pin operation error
    Motor(MotorError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A builder field required to construct the sequencer was not set
    MissingField(&'static str),
    /// Pin number is outside the board's pin range
    InvalidPinBinding {
        /// Offending pin number
        pin: u8,
        /// Number of pins the board exposes
        pin_count: u8,
    },
    /// The same pin is bound to more than one role
    DuplicatePin(u8),
    /// Board pin count must be > 0
    InvalidPinCount(u8),
    /// Settling delay must be > 0 ms
    InvalidSettlingDelay(u32),
    /// Travel limit must be > 0
    InvalidTravelLimit(i64),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Sequencer operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Pin identifier outside the host platform's valid range
    InvalidPinBinding {
        /// Offending pin identifier
        pin: u8,
        /// Number of pins the board exposes
        pin_count: u8,
    },
    /// The same pin identifier was bound twice
    DuplicatePin(u8),
    /// Step count must be non-negative
    InvalidArgument(i64),
    /// Host pin primitive failed
    PinError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::InvalidPinBinding { pin, pin_count } => {
                write!(f, "Pin {} out of range: board has {} pins", pin, pin_count)
            }
            ConfigError::DuplicatePin(pin) => write!(f, "Pin {} is bound more than once", pin),
            ConfigError::InvalidPinCount(v) => write!(f, "Invalid pin count: {}. Must be > 0", v),
            ConfigError::InvalidSettlingDelay(v) => {
                write!(f, "Invalid settling delay: {} ms. Must be > 0", v)
            }
            ConfigError::InvalidTravelLimit(v) => {
                write!(f, "Invalid travel limit: {}. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::InvalidPinBinding { pin, pin_count } => {
                write!(f, "Invalid pin binding: pin {} (board has {} pins)", pin, pin_count)
            }
            MotorError::DuplicatePin(pin) => write!(f, "Pin {} is bound more than once", pin),
            MotorError::InvalidArgument(count) => {
                write!(f, "Invalid step count: {}. Must be >= 0", count)
            }
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
