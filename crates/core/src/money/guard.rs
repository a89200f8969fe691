//! Currency-equality guard used by every same-currency operation.

use tracing::debug;

use super::error::{MoneyError, MoneyResult};
use super::monetary::MonetaryValue;

/// Fails with `CurrencyMismatch` unless both values share a currency.
///
/// # Example
///
/// ```
/// use tally_core::currency::Currency;
/// use tally_core::money::{assert_same_currency, Money, MoneyError};
///
/// let eur = Money::new(1, Currency::new("EUR", "€", 100).unwrap());
/// let usd = Money::new(1, Currency::new("USD", "$", 100).unwrap());
///
/// assert!(assert_same_currency(&eur, &eur).is_ok());
/// assert!(matches!(
///     assert_same_currency(&eur, &usd),
///     Err(MoneyError::CurrencyMismatch { .. })
/// ));
/// ```
pub fn assert_same_currency(
    value: &impl MonetaryValue,
    other: &impl MonetaryValue,
) -> MoneyResult<()> {
    if value.has_same_currency(other) {
        return Ok(());
    }

    debug!(
        expected = value.currency_code(),
        got = other.currency_code(),
        "Rejected operation across currencies"
    );
    Err(MoneyError::CurrencyMismatch {
        expected: value.currency_code().to_string(),
        got: other.currency_code().to_string(),
    })
}
