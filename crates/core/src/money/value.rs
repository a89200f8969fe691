//! Money value type: an integer amount of minor units plus its currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `i64` minor units; real factors are `rust_decimal::Decimal`
//! and results are rounded back to whole minor units with an explicit
//! [`RoundingMode`].

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{MoneyError, MoneyResult};
use super::format::DecimalFormatter;
use super::guard::assert_same_currency;
use super::monetary::MonetaryValue;
use super::percentage::{ExtractedPercentage, PercentageExtractor};
use super::rounding::RoundingMode;
use crate::currency::{AllocationEngine, Currency};

/// Immutable monetary value.
///
/// Every operation returns a new value; the currency descriptor is shared
/// between all values derived from one another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "MoneyRecord", try_from = "MoneyRecord")]
pub struct Money {
    amount: i64,
    currency: Arc<Currency>,
}

/// Minimal read-only projection for collaborators that only need the
/// amount and currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneySnapshot {
    /// Amount in minor units.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// Serialized shape of [`Money`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoneyRecord {
    amount: i64,
    currency_code: String,
    currency: Currency,
}

impl Money {
    /// Creates a new Money instance.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_core::currency::Currency;
    /// use tally_core::money::Money;
    ///
    /// let money = Money::new(1234, Currency::new("EUR", "€", 100).unwrap());
    /// assert_eq!(money.amount(), 1234);
    /// assert_eq!(money.currency_code(), "EUR");
    /// ```
    #[must_use]
    pub fn new(amount: i64, currency: impl Into<Arc<Currency>>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: impl Into<Arc<Currency>>) -> Self {
        Self::new(0, currency)
    }

    /// Creates a value from a major-unit decimal (e.g. `12.345` EUR).
    ///
    /// The major amount is scaled by the minor-unit factor and rounded with
    /// `mode`, so `12.345` EUR becomes 1235 cents under [`RoundingMode::HalfUp`].
    pub fn from_major(
        major: Decimal,
        currency: impl Into<Arc<Currency>>,
        mode: RoundingMode,
    ) -> MoneyResult<Self> {
        let currency = currency.into();
        let minor = major
            .checked_mul(Decimal::from(currency.minor_unit_factor()))
            .ok_or(MoneyError::AmountOverflow)?;
        Ok(Self {
            amount: mode.round_to_amount(minor)?,
            currency,
        })
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Currency descriptor.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// ISO 4217 currency code.
    #[must_use]
    pub fn currency_code(&self) -> &str {
        self.currency.iso_code()
    }

    /// Minimal `{amount, currencyCode}` projection.
    #[must_use]
    pub fn snapshot(&self) -> MoneySnapshot {
        MoneySnapshot {
            amount: self.amount,
            currency_code: self.currency_code().to_string(),
        }
    }

    /// New amount in the same (shared) currency.
    pub(crate) fn with_amount(&self, amount: i64) -> Self {
        Self {
            amount,
            currency: Arc::clone(&self.currency),
        }
    }

    // ========== Arithmetic ==========

    /// Adds another value in the same currency.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        assert_same_currency(self, other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::AmountOverflow)
    }

    /// Subtracts another value in the same currency.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        assert_same_currency(self, other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::AmountOverflow)
    }

    /// Multiplies by a real factor and rounds the product with `mode`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::currency::Currency;
    /// use tally_core::money::{Money, RoundingMode};
    ///
    /// let money = Money::new(5, Currency::new("EUR", "€", 100).unwrap());
    /// let half = money.multiply(dec!(0.5), RoundingMode::HalfEven).unwrap();
    /// assert_eq!(half.amount(), 2);
    /// ```
    pub fn multiply(&self, factor: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        let product = Decimal::from(self.amount)
            .checked_mul(factor)
            .ok_or(MoneyError::AmountOverflow)?;
        Ok(self.with_amount(mode.round_to_amount(product)?))
    }

    /// Divides by a real divisor and rounds the quotient with `mode`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRatio` if `divisor` is zero.
    pub fn divide(&self, divisor: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        if divisor.is_zero() {
            debug!(amount = self.amount, "Rejected division by zero");
            return Err(MoneyError::InvalidRatio("Division by zero".to_string()));
        }
        let quotient = Decimal::from(self.amount)
            .checked_div(divisor)
            .ok_or(MoneyError::AmountOverflow)?;
        Ok(self.with_amount(mode.round_to_amount(quotient)?))
    }

    /// Remainder of dividing this amount by another amount in the same currency.
    ///
    /// The sign follows the dividend, as with `%` on integers.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRatio` if `other` is zero.
    pub fn modulo(&self, other: &Self) -> MoneyResult<Self> {
        assert_same_currency(self, other)?;
        if other.is_zero() {
            return Err(MoneyError::InvalidRatio("Modulo by zero".to_string()));
        }
        self.amount
            .checked_rem(other.amount)
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::AmountOverflow)
    }

    /// Absolute value.
    pub fn absolute(&self) -> MoneyResult<Self> {
        self.amount
            .checked_abs()
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::AmountOverflow)
    }

    /// Sign-flipped value.
    pub fn negate(&self) -> MoneyResult<Self> {
        self.amount
            .checked_neg()
            .map(|amount| self.with_amount(amount))
            .ok_or(MoneyError::AmountOverflow)
    }

    /// This amount divided by another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRatio` if `other` is zero.
    pub fn ratio_of(&self, other: &Self) -> MoneyResult<Decimal> {
        assert_same_currency(self, other)?;
        if other.is_zero() {
            return Err(MoneyError::InvalidRatio(
                "Cannot calculate a ratio of zero".to_string(),
            ));
        }
        Decimal::from(self.amount)
            .checked_div(Decimal::from(other.amount))
            .ok_or(MoneyError::AmountOverflow)
    }

    // ========== Predicates ==========

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// True if both values are in the same currency. Never fails.
    pub fn has_same_currency(&self, other: &impl MonetaryValue) -> bool {
        self.currency_code() == other.currency_code()
    }

    // ========== Allocation ==========

    /// Splits the value into `count` near-equal parts.
    ///
    /// See [`AllocationEngine::allocate_to_targets`].
    pub fn allocate_to_targets(&self, count: usize) -> MoneyResult<Vec<Self>> {
        let shares = AllocationEngine::allocate_to_targets(self.amount, count)?;
        Ok(shares.into_iter().map(|share| self.with_amount(share)).collect())
    }

    /// Splits the value by integer ratios.
    ///
    /// See [`AllocationEngine::allocate_by_ratios`].
    pub fn allocate_by_ratios(&self, ratios: &[i64]) -> MoneyResult<Vec<Self>> {
        let shares = AllocationEngine::allocate_by_ratios(self.amount, ratios)?;
        Ok(shares.into_iter().map(|share| self.with_amount(share)).collect())
    }

    /// Splits out a percentage already included in this amount (e.g. VAT).
    ///
    /// See [`PercentageExtractor::extract`].
    pub fn extract_percentage(
        &self,
        percentage: Decimal,
        mode: RoundingMode,
    ) -> MoneyResult<ExtractedPercentage> {
        PercentageExtractor::extract(self, percentage, mode)
    }

    // ========== Comparison ==========

    /// Three-way comparison of amounts in the same currency.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        assert_same_currency(self, other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Same-currency amount equality.
    pub fn equals(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_eq())
    }

    /// Same-currency `>`.
    pub fn greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_gt())
    }

    /// Same-currency `>=`.
    pub fn greater_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_ge())
    }

    /// Same-currency `<`.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_lt())
    }

    /// Same-currency `<=`.
    pub fn less_than_or_equal(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_le())
    }
}

impl MonetaryValue for Money {
    fn amount(&self) -> i64 {
        self.amount
    }

    fn currency(&self) -> &Currency {
        &self.currency
    }

    fn add(&self, other: &Self) -> MoneyResult<Self> {
        Self::add(self, other)
    }

    fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        Self::subtract(self, other)
    }

    fn multiply(&self, factor: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        Self::multiply(self, factor, mode)
    }

    fn divide(&self, divisor: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        Self::divide(self, divisor, mode)
    }

    fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        Self::compare(self, other)
    }
}

impl From<Money> for MoneyRecord {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount,
            currency_code: money.currency_code().to_string(),
            currency: Currency::clone(&money.currency),
        }
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        if !record.currency_code.eq_ignore_ascii_case(record.currency.iso_code()) {
            return Err(MoneyError::CurrencyMismatch {
                expected: record.currency.iso_code().to_string(),
                got: record.currency_code,
            });
        }
        Ok(Self::new(record.amount, record.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", DecimalFormatter::format(self), self.currency_code())
    }
}
