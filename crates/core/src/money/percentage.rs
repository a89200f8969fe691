//! Extraction of a percentage already embedded in a gross amount.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::{MoneyError, MoneyResult};
use super::rounding::RoundingMode;
use super::value::Money;

/// A gross amount split into its embedded percentage and the remainder.
///
/// `percentage.amount() + sub_total.amount()` always equals the gross amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedPercentage {
    percentage: Money,
    sub_total: Money,
}

impl ExtractedPercentage {
    /// The embedded percentage amount (e.g. the VAT part).
    #[must_use]
    pub const fn percentage(&self) -> &Money {
        &self.percentage
    }

    /// Gross amount minus the percentage amount.
    #[must_use]
    pub const fn sub_total(&self) -> &Money {
        &self.sub_total
    }

    /// Consumes the split, returning `(percentage, sub_total)`.
    #[must_use]
    pub fn into_parts(self) -> (Money, Money) {
        (self.percentage, self.sub_total)
    }
}

/// Splits a gross amount into an included percentage and its subtotal.
pub struct PercentageExtractor;

impl PercentageExtractor {
    /// Extracts `percentage` percent from a gross amount that already includes it.
    ///
    /// The percentage part is `gross * p / (100 + p)`, computed in decimal and
    /// rounded once with `mode`; the subtotal is the exact integer difference.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRatio` if `percentage` is -100 (the base would be zero).
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tally_core::currency::Currency;
    /// use tally_core::money::{Money, RoundingMode};
    ///
    /// let gross = Money::new(10_000, Currency::new("EUR", "€", 100).unwrap());
    /// let vat = gross.extract_percentage(dec!(21), RoundingMode::HalfUp).unwrap();
    /// assert_eq!(vat.percentage().amount(), 1736);
    /// assert_eq!(vat.sub_total().amount(), 8264);
    /// ```
    pub fn extract(
        gross: &Money,
        percentage: Decimal,
        mode: RoundingMode,
    ) -> MoneyResult<ExtractedPercentage> {
        let base = Decimal::ONE_HUNDRED
            .checked_add(percentage)
            .ok_or(MoneyError::AmountOverflow)?;
        if base.is_zero() {
            return Err(MoneyError::InvalidRatio(
                "Percentage of -100 has no base amount".to_string(),
            ));
        }

        let exact = Decimal::from(gross.amount())
            .checked_mul(percentage)
            .and_then(|scaled| scaled.checked_div(base))
            .ok_or(MoneyError::AmountOverflow)?;
        let percentage_amount = gross.with_amount(mode.round_to_amount(exact)?);
        let sub_total = gross.subtract(&percentage_amount)?;

        Ok(ExtractedPercentage {
            percentage: percentage_amount,
            sub_total,
        })
    }
}
