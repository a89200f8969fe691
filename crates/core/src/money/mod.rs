//! Money values, rounding, and the operations built on them.
//!
//! This module implements:
//! - The immutable `Money` value and its same-currency arithmetic
//! - Rounding modes for real-valued intermediates
//! - The `MonetaryValue` capability used by collaborators
//! - Percentage extraction, aggregation, formatting, and a fixed-currency factory

pub mod aggregate;
pub mod error;
pub mod factory;
pub mod format;
pub mod guard;
pub mod monetary;
pub mod percentage;
pub mod rounding;
pub mod value;

#[cfg(test)]
mod props;

pub use aggregate::MoneyAggregator;
pub use error::{MoneyError, MoneyResult};
pub use factory::MoneyFactory;
pub use format::DecimalFormatter;
pub use guard::assert_same_currency;
pub use monetary::MonetaryValue;
pub use percentage::{ExtractedPercentage, PercentageExtractor};
pub use rounding::RoundingMode;
pub use value::{Money, MoneySnapshot};
