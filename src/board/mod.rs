//! Host platform I/O.
//!
//! The sequencer talks to the hardware only through the [`Board`] trait:
//! pin configuration, digital writes and analog reads addressed by pin
//! identifier. [`HalBoard`] implements it on top of embedded-hal pins.

mod hal;

pub use hal::{AnalogChannel, BoardError, HalBoard};

use embedded_hal::digital::PinState;

/// Opaque pin identifier, as numbered by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(pub u8);

impl PinId {
    /// Raw pin number.
    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(n: u8) -> Self {
        PinId(n)
    }
}

/// Pin direction requested at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Digital output (coil drivers).
    Output,
    /// Input (limit sensors).
    Input,
}

/// Pin I/O primitives supplied by the host platform.
pub trait Board {
    /// Error reported by the underlying pin drivers.
    type Error: core::fmt::Debug;

    /// Number of addressable pins; valid identifiers are `0..pin_count()`.
    fn pin_count(&self) -> u8;

    /// Configure a pin as input or output.
    fn configure_pin(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error>;

    /// Drive a digital output pin.
    fn write_digital(&mut self, pin: PinId, level: PinState) -> Result<(), Self::Error>;

    /// Sample an analog input pin.
    fn read_analog(&mut self, pin: PinId) -> Result<u16, Self::Error>;
}

impl<B: Board + ?Sized> Board for &mut B {
    type Error = B::Error;

    #[inline]
    fn pin_count(&self) -> u8 {
        (**self).pin_count()
    }

    #[inline]
    fn configure_pin(&mut self, pin: PinId, mode: PinMode) -> Result<(), Self::Error> {
        (**self).configure_pin(pin, mode)
    }

    #[inline]
    fn write_digital(&mut self, pin: PinId, level: PinState) -> Result<(), Self::Error> {
        (**self).write_digital(pin, level)
    }

    #[inline]
    fn read_analog(&mut self, pin: PinId) -> Result<u16, Self::Error> {
        (**self).read_analog(pin)
    }
}

/// Problem found in a set of pin bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingFault {
    OutOfRange(u8),
    Duplicate(u8),
}

/// First fault in `pins` for a board with `pin_count` pins, in binding order.
pub(crate) fn binding_fault(pins: &[u8], pin_count: u8) -> Option<BindingFault> {
    pins.iter().enumerate().find_map(|(i, &pin)| {
        if pin >= pin_count {
            Some(BindingFault::OutOfRange(pin))
        } else if pins[..i].contains(&pin) {
            Some(BindingFault::Duplicate(pin))
        } else {
            None
        }
    })
}
