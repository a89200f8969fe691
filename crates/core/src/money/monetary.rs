//! The money-like capability shared by formatters and aggregators.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::error::MoneyResult;
use super::rounding::RoundingMode;
use crate::currency::Currency;

/// A monetary value: an integer amount of minor units in one currency.
///
/// Collaborators such as [`DecimalFormatter`](super::DecimalFormatter) and
/// [`MoneyAggregator`](super::MoneyAggregator) depend on this trait rather
/// than on [`Money`](super::Money), so alternative backings can be plugged
/// in without touching them.
pub trait MonetaryValue: Clone {
    /// Amount in minor units.
    fn amount(&self) -> i64;

    /// Currency descriptor.
    fn currency(&self) -> &Currency;

    /// ISO 4217 code of the currency.
    fn currency_code(&self) -> &str {
        self.currency().iso_code()
    }

    /// True if both values are in the same currency. Never fails.
    fn has_same_currency(&self, other: &impl MonetaryValue) -> bool {
        self.currency_code() == other.currency_code()
    }

    /// Same-currency addition.
    fn add(&self, other: &Self) -> MoneyResult<Self>;

    /// Same-currency subtraction.
    fn subtract(&self, other: &Self) -> MoneyResult<Self>;

    /// Multiplication by a real factor, rounded with `mode`.
    fn multiply(&self, factor: Decimal, mode: RoundingMode) -> MoneyResult<Self>;

    /// Division by a real divisor, rounded with `mode`.
    fn divide(&self, divisor: Decimal, mode: RoundingMode) -> MoneyResult<Self>;

    /// Same-currency three-way comparison of amounts.
    fn compare(&self, other: &Self) -> MoneyResult<Ordering>;
}
