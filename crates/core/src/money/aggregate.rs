//! Sum, min, max, and average over same-currency collections.
//!
//! Every function validates the whole collection up front, so a currency
//! mismatch anywhere fails before any arithmetic runs.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::error::{MoneyError, MoneyResult};
use super::guard::assert_same_currency;
use super::monetary::MonetaryValue;
use super::rounding::RoundingMode;

/// Aggregates over slices of monetary values.
pub struct MoneyAggregator;

impl MoneyAggregator {
    /// Sum of all values.
    pub fn sum<M: MonetaryValue>(values: &[M]) -> MoneyResult<M> {
        let (first, rest) = Self::validated(values)?;
        rest.iter().try_fold(first.clone(), |total, value| total.add(value))
    }

    /// Smallest value; the first one wins on ties.
    pub fn min<M: MonetaryValue>(values: &[M]) -> MoneyResult<M> {
        Self::extreme(values, Ordering::Less)
    }

    /// Largest value; the first one wins on ties.
    pub fn max<M: MonetaryValue>(values: &[M]) -> MoneyResult<M> {
        Self::extreme(values, Ordering::Greater)
    }

    /// Average, rounded half up.
    pub fn avg<M: MonetaryValue>(values: &[M]) -> MoneyResult<M> {
        Self::avg_with_mode(values, RoundingMode::default())
    }

    /// Average, rounded with `mode`.
    pub fn avg_with_mode<M: MonetaryValue>(values: &[M], mode: RoundingMode) -> MoneyResult<M> {
        let total = Self::sum(values)?;
        total.divide(Decimal::from(values.len()), mode)
    }

    fn extreme<M: MonetaryValue>(values: &[M], wanted: Ordering) -> MoneyResult<M> {
        let (first, rest) = Self::validated(values)?;
        let mut best = first;
        for value in rest {
            if value.compare(best)? == wanted {
                best = value;
            }
        }
        Ok(best.clone())
    }

    fn validated<M: MonetaryValue>(values: &[M]) -> MoneyResult<(&M, &[M])> {
        let (first, rest) = values.split_first().ok_or(MoneyError::EmptyCollection)?;
        for value in rest {
            assert_same_currency(first, value)?;
        }
        Ok((first, rest))
    }
}
