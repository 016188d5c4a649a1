//! [`Board`] implementation over embedded-hal pins.

use core::fmt;

use embedded_hal::digital::{OutputPin, PinState};

use super::{Board, PinId, PinMode};

/// Single-channel analog input.
///
/// embedded-hal 1.0 has no ADC trait, so sensor inputs are read through
/// this one instead.
pub trait AnalogChannel {
    /// Error reported by the converter.
    type Error: fmt::Debug;

    /// Take one raw sample.
    fn read(&mut self) -> Result<u16, Self::Error>;
}

/// Errors raised by [`HalBoard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// No pin is bound to this identifier.
    UnknownPin(PinId),
    /// Pin exists but not in the requested role.
    WrongMode(PinId),
    /// Underlying pin driver failed.
    Pin,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::UnknownPin(pin) => write!(f, "No pin bound to identifier {}", pin.0),
            BoardError::WrongMode(pin) => write!(f, "Pin {} used in the wrong mode", pin.0),
            BoardError::Pin => write!(f, "Pin driver error"),
        }
    }
}

/// Board made of four output pins and two analog channels, each
/// answering to a host pin identifier.
pub struct HalBoard<C, A>
where
    C: OutputPin,
    A: AnalogChannel,
{
    coils: [(PinId, C); 4],
    sensors: [(PinId, A); 2],
    pin_count: u8,
}

impl<C, A> HalBoard<C, A>
where
    C: OutputPin,
    A: AnalogChannel,
{
    /// Bind pins to identifiers. `pin_count` is the size of the host's pin space.
    pub fn new(coils: [(PinId, C); 4], sensors: [(PinId, A); 2], pin_count: u8) -> Self {
        Self {
            coils,
            sensors,
            pin_count,
        }
    }

    /// Identifiers of the bound output pins, in order.
    pub fn coil_ids(&self) -> [PinId; 4] {
        [
            self.coils[0].0,
            self.coils[1].0,
            self.coils[2].0,
            self.coils[3].0,
        ]
    }

    /// Identifiers of the bound analog channels, in order.
    pub fn sensor_ids(&self) -> [PinId; 2] {
        [self.sensors[0].0, self.sensors[1].0]
    }

    /// Give the pins back.
    pub fn free(self) -> ([C; 4], [A; 2]) {
        (self.coils.map(|(_, c)| c), self.sensors.map(|(_, a)| a))
    }

    fn coil(&mut self, pin: PinId) -> Option<&mut C> {
        self.coils
            .iter_mut()
            .find(|(id, _)| *id == pin)
            .map(|(_, c)| c)
    }

    fn sensor(&mut self, pin: PinId) -> Option<&mut A> {
        self.sensors
            .iter_mut()
            .find(|(id, _)| *id == pin)
            .map(|(_, a)| a)
    }

    fn is_coil(&self, pin: PinId) -> bool {
        self.coils.iter().any(|(id, _)| *id == pin)
    }

    fn is_sensor(&self, pin: PinId) -> bool {
        self.sensors.iter().any(|(id, _)| *id == pin)
    }
}

impl<C, A> Board for HalBoard<C, A>
where
    C: OutputPin,
    A: AnalogChannel,
{
    type Error = BoardError;

    fn pin_count(&self) -> u8 {
        self.pin_count
    }

    // embedded-hal pins are already in their final mode; only check roles.
    fn configure_pin(&mut self, pin: PinId, mode: PinMode) -> Result<(), BoardError> {
        let (matches, other) = match mode {
            PinMode::Output => (self.is_coil(pin), self.is_sensor(pin)),
            PinMode::Input => (self.is_sensor(pin), self.is_coil(pin)),
        };
        match (matches, other) {
            (true, _) => Ok(()),
            (false, true) => Err(BoardError::WrongMode(pin)),
            (false, false) => Err(BoardError::UnknownPin(pin)),
        }
    }

    fn write_digital(&mut self, pin: PinId, level: PinState) -> Result<(), BoardError> {
        if self.is_sensor(pin) && !self.is_coil(pin) {
            return Err(BoardError::WrongMode(pin));
        }
        let coil = self.coil(pin).ok_or(BoardError::UnknownPin(pin))?;
        coil.set_state(level).map_err(|_| BoardError::Pin)
    }

    fn read_analog(&mut self, pin: PinId) -> Result<u16, BoardError> {
        if self.is_coil(pin) && !self.is_sensor(pin) {
            return Err(BoardError::WrongMode(pin));
        }
        let sensor = self.sensor(pin).ok_or(BoardError::UnknownPin(pin))?;
        sensor.read().map_err(|_| BoardError::Pin)
    }
}
