//! Builder for money values in one fixed currency.

use std::sync::Arc;

use rust_decimal::Decimal;
use tally_shared::MoneyConfig;
use tracing::info;

use super::error::MoneyResult;
use super::rounding::RoundingMode;
use super::value::Money;
use crate::currency::Currency;

/// Builds [`Money`] values that all share one currency descriptor.
#[derive(Debug, Clone)]
pub struct MoneyFactory {
    currency: Arc<Currency>,
    rounding_mode: RoundingMode,
}

impl MoneyFactory {
    /// Creates a factory for `currency` using `rounding_mode` for major-unit input.
    #[must_use]
    pub fn new(currency: impl Into<Arc<Currency>>, rounding_mode: RoundingMode) -> Self {
        Self {
            currency: currency.into(),
            rounding_mode,
        }
    }

    /// Creates a factory from configuration, validating the raw values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` or `InvalidRoundingMode` for bad config values.
    pub fn from_config(config: &MoneyConfig) -> MoneyResult<Self> {
        let currency = Currency::new(
            &config.currency.iso_code,
            config.currency.symbol.clone(),
            config.currency.minor_unit_factor,
        )?;
        let rounding_mode = config.default_rounding_mode.parse::<RoundingMode>()?;

        info!(
            currency = %currency,
            rounding_mode = %rounding_mode,
            "Money factory configured"
        );
        Ok(Self::new(currency, rounding_mode))
    }

    /// Currency of every value this factory builds.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Rounding mode applied by [`Self::build_from_major`].
    #[must_use]
    pub const fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    /// Builds a value from a minor-unit amount.
    #[must_use]
    pub fn build(&self, amount: i64) -> Money {
        Money::new(amount, Arc::clone(&self.currency))
    }

    /// Builds a value from a major-unit decimal, rounded with the factory's mode.
    pub fn build_from_major(&self, major: Decimal) -> MoneyResult<Money> {
        Money::from_major(major, Arc::clone(&self.currency), self.rounding_mode)
    }
}
