//! Plain decimal rendering of minor-unit amounts.

use rust_decimal::Decimal;

use super::monetary::MonetaryValue;

/// Renders amounts as plain decimals in major units (`1234567.89`).
///
/// No locale, grouping, or symbol handling.
pub struct DecimalFormatter;

impl DecimalFormatter {
    /// Formats with as many decimals as the currency's minor unit.
    ///
    /// A factor that is not a power of ten can need more digits than the
    /// minor unit; those extra digits are kept so no value is lost.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_core::currency::Currency;
    /// use tally_core::money::{DecimalFormatter, Money};
    ///
    /// let money = Money::new(-5990, Currency::new("EUR", "€", 100).unwrap());
    /// assert_eq!(DecimalFormatter::format(&money), "-59.90");
    /// ```
    #[must_use]
    pub fn format(value: &impl MonetaryValue) -> String {
        let currency = value.currency();
        let major = Decimal::from(value.amount()) / Decimal::from(currency.minor_unit_factor());
        let prec = currency.minor_unit().max(major.normalize().scale());
        format!("{major:.prec$}", prec = prec as usize)
    }
}
