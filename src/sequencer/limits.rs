//! Limit-sensor sampling.

/// Most recent raw readings of the two limit sensors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LimitReading {
    /// Raw value of the first sensor.
    pub first: u16,
    /// Raw value of the second sensor.
    pub second: u16,
}

impl LimitReading {
    /// Second reading minus first. Zero means the carriage sits between
    /// the limits; the sign tells which side is closer.
    #[inline]
    pub fn difference(&self) -> i32 {
        i32::from(self.second) - i32::from(self.first)
    }

    /// True when the sensors disagree.
    #[inline]
    pub fn is_tripped(&self) -> bool {
        self.difference() != 0
    }
}
