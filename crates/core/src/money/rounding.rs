//! Rounding modes for converting real intermediates to minor units.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{MoneyError, MoneyResult};

/// Policy for turning a non-integral value into a whole number of minor units.
///
/// Values that are not exactly halfway round to the nearest integer in
/// every mode; the modes differ only on ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum RoundingMode {
    /// Ties away from zero: 2.5 → 3, -2.5 → -3.
    #[default]
    HalfUp,
    /// Ties toward zero: 2.5 → 2, -2.5 → -2.
    HalfDown,
    /// Ties to the even neighbour (banker's rounding): 2.5 → 2, 3.5 → 4.
    HalfEven,
    /// Ties to the odd neighbour: 2.5 → 3, 3.5 → 3.
    HalfOdd,
}

impl RoundingMode {
    /// All supported modes.
    pub const ALL: [Self; 4] = [Self::HalfUp, Self::HalfDown, Self::HalfEven, Self::HalfOdd];

    /// Rounds `value` to an integral decimal.
    #[must_use]
    pub fn round(self, value: Decimal) -> Decimal {
        match self {
            Self::HalfUp => value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            Self::HalfDown => value.round_dp_with_strategy(0, RoundingStrategy::MidpointTowardZero),
            Self::HalfEven => value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven),
            Self::HalfOdd => {
                let truncated = value.trunc();
                if (value - truncated).abs() != Decimal::new(5, 1) {
                    return value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
                }
                if (truncated % Decimal::TWO).is_zero() {
                    truncated + value.signum()
                } else {
                    truncated
                }
            }
        }
    }

    /// Rounds `value` and converts it to a minor-unit amount.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if the rounded value does not fit in `i64`.
    pub fn round_to_amount(self, value: Decimal) -> MoneyResult<i64> {
        self.round(value).to_i64().ok_or(MoneyError::AmountOverflow)
    }

    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HalfUp => "HALF_UP",
            Self::HalfDown => "HALF_DOWN",
            Self::HalfEven => "HALF_EVEN",
            Self::HalfOdd => "HALF_ODD",
        }
    }
}

/// Legacy numeric codes: 1 = half up, 2 = half down, 3 = half even, 4 = half odd.
impl TryFrom<i32> for RoundingMode {
    type Error = MoneyError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::HalfUp),
            2 => Ok(Self::HalfDown),
            3 => Ok(Self::HalfEven),
            4 => Ok(Self::HalfOdd),
            _ => Err(MoneyError::InvalidRoundingMode(code.to_string())),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| MoneyError::InvalidRoundingMode(s.to_string()))
    }
}

impl TryFrom<String> for RoundingMode {
    type Error = MoneyError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
