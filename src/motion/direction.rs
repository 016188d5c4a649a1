//! Step direction.

/// Direction requested for a step command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Ascending phase order.
    Forward,
    /// Descending phase order.
    Backward,
    /// De-energize all coils.
    Stop,
}

impl Direction {
    /// Get direction from a signed value: positive is forward, negative
    /// is backward, zero is stop.
    #[inline]
    pub fn from_sign(value: i64) -> Self {
        match value {
            v if v > 0 => Direction::Forward,
            v if v < 0 => Direction::Backward,
            _ => Direction::Stop,
        }
    }

    /// Sign of the direction (`1`, `-1` or `0`).
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
            Direction::Stop => 0,
        }
    }

    /// The opposite running direction. `Stop` has no opposite.
    #[inline]
    pub fn reversed(self) -> Option<Self> {
        match self {
            Direction::Forward => Some(Direction::Backward),
            Direction::Backward => Some(Direction::Forward),
            Direction::Stop => None,
        }
    }

    /// Whether this direction moves the motor.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sign() {
        assert_eq!(Direction::from_sign(12), Direction::Forward);
        assert_eq!(Direction::from_sign(-1), Direction::Backward);
        assert_eq!(Direction::from_sign(0), Direction::Stop);
    }

    #[test]
    fn test_sign_round_trips_through_from_sign() {
        for dir in [Direction::Forward, Direction::Backward, Direction::Stop] {
            assert_eq!(Direction::from_sign(dir.sign()), dir);
        }
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Direction::Forward.reversed(), Some(Direction::Backward));
        assert_eq!(Direction::Backward.reversed(), Some(Direction::Forward));
        assert_eq!(Direction::Stop.reversed(), None);
        assert!(!Direction::Stop.is_moving());
    }
}
