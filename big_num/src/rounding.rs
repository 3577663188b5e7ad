use std::cmp::Ordering;
use std::fmt::Display;

use crate::error::NumError;

/// How to discard digits when a result has to be shortened.
///
/// The integer codes are stable and are the ones that travel over the C ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Toward zero (truncation).
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Nearest neighbour, ties away from zero.
    HalfUp,
    /// Nearest neighbour, ties toward zero.
    HalfDown,
    /// Nearest neighbour, ties toward the even neighbour.
    HalfEven,
    /// The result must be exact; anything else is an error.
    Unnecessary,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    pub fn code(self) -> i32 {
        match self {
            RoundingMode::Up => 0,
            RoundingMode::Down => 1,
            RoundingMode::Ceiling => 2,
            RoundingMode::Floor => 3,
            RoundingMode::HalfUp => 4,
            RoundingMode::HalfDown => 5,
            RoundingMode::HalfEven => 6,
            RoundingMode::Unnecessary => 7,
        }
    }

    pub fn from_code(code: i32) -> Result<Self, NumError> {
        usize::try_from(code)
            .ok()
            .and_then(|i| RoundingMode::ALL.get(i).copied())
            .ok_or(NumError::InvalidRoundingMode(code))
    }

    /// Decides whether a truncated quotient has to move one unit away from zero.
    ///
    /// `half_cmp` compares twice the discarded remainder with the divisor,
    /// `negative` is the sign of the exact result and `odd` the parity of the
    /// truncated quotient. Only called when the remainder is non-zero.
    pub(crate) fn increments(self, half_cmp: Ordering, negative: bool, odd: bool) -> bool {
        match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => half_cmp != Ordering::Less,
            RoundingMode::HalfDown => half_cmp == Ordering::Greater,
            RoundingMode::HalfEven => match half_cmp {
                Ordering::Greater => true,
                Ordering::Equal => odd,
                Ordering::Less => false,
            },
            RoundingMode::Unnecessary => false,
        }
    }
}

impl Default for RoundingMode {
    fn default() -> Self {
        RoundingMode::HalfUp
    }
}

impl TryFrom<i32> for RoundingMode {
    type Error = NumError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        RoundingMode::from_code(code)
    }
}

impl Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Unnecessary => "UNNECESSARY",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for mode in RoundingMode::ALL {
            assert_eq!(RoundingMode::from_code(mode.code()), Ok(mode));
        }
        assert_eq!(RoundingMode::from_code(4), Ok(RoundingMode::HalfUp));
        assert_eq!(RoundingMode::from_code(6), Ok(RoundingMode::HalfEven));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(RoundingMode::from_code(-1), Err(NumError::InvalidRoundingMode(-1)));
        assert_eq!(RoundingMode::from_code(8), Err(NumError::InvalidRoundingMode(8)));
        assert!(RoundingMode::try_from(i32::MAX).is_err());
    }

    #[test]
    fn half_even_ties() {
        assert!(!RoundingMode::HalfEven.increments(Ordering::Equal, false, false));
        assert!(RoundingMode::HalfEven.increments(Ordering::Equal, false, true));
        assert!(RoundingMode::HalfEven.increments(Ordering::Greater, true, false));
    }
}
