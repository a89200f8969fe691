//! Money error types.

use tally_shared::AppError;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction, arithmetic, and allocation.
///
/// Every error is raised before any computation, so a failed operation
/// never produces a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Two values with different currencies were combined or compared.
    #[error("Currency mismatch: {expected} != {got}")]
    CurrencyMismatch {
        /// Currency of the receiver.
        expected: String,
        /// Currency of the other operand.
        got: String,
    },

    /// Rounding mode outside the supported set.
    #[error("{0} is not a valid rounding mode")]
    InvalidRoundingMode(String),

    /// Ratio vector, target count, or divisor is unusable.
    #[error("Invalid ratio: {0}")]
    InvalidRatio(String),

    /// Currency descriptor is malformed.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// An aggregate was requested over no values.
    #[error("Cannot aggregate an empty collection")]
    EmptyCollection,

    /// Result does not fit in a 64-bit minor-unit amount.
    #[error("Amount overflow")]
    AmountOverflow,
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::AmountOverflow => Self::BusinessRule(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
