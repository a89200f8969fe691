//! Currency descriptor.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::money::{MoneyError, MoneyResult};

/// Immutable currency descriptor.
///
/// Two currencies are equal when their ISO codes are equal; symbol and
/// minor-unit factor do not take part in equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CurrencyRecord")]
pub struct Currency {
    iso_code: String,
    symbol: String,
    minor_unit_factor: i64,
    minor_unit: u32,
}

/// Wire shape accepted when deserializing a [`Currency`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyRecord {
    iso_code: String,
    symbol: String,
    minor_unit_factor: i64,
}

impl Currency {
    /// Creates a currency descriptor.
    ///
    /// The ISO code is upper-cased; it must be exactly three ASCII letters.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_core::currency::Currency;
    ///
    /// let eur = Currency::new("eur", "€", 100).unwrap();
    /// assert_eq!(eur.iso_code(), "EUR");
    /// assert_eq!(eur.minor_unit(), 2);
    /// ```
    pub fn new(iso_code: &str, symbol: impl Into<String>, minor_unit_factor: i64) -> MoneyResult<Self> {
        if iso_code.len() != 3 || !iso_code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(MoneyError::InvalidCurrency(
                "ISO code must be exactly 3 letters (A-Z)".to_string(),
            ));
        }
        if minor_unit_factor <= 0 {
            return Err(MoneyError::InvalidCurrency(
                "Minor unit factor must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            iso_code: iso_code.to_ascii_uppercase(),
            symbol: symbol.into(),
            minor_unit_factor,
            minor_unit: minor_unit_factor.ilog10(),
        })
    }

    /// ISO 4217 code, always upper case.
    #[must_use]
    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    /// Display symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Minor units per major unit (100 for EUR, 1 for JPY).
    #[must_use]
    pub const fn minor_unit_factor(&self) -> i64 {
        self.minor_unit_factor
    }

    /// Number of decimal digits of the minor unit (log10 of the factor).
    ///
    /// Rounded down when the factor is not a power of ten (50 gives 1).
    #[must_use]
    pub const fn minor_unit(&self) -> u32 {
        self.minor_unit
    }
}

impl TryFrom<CurrencyRecord> for Currency {
    type Error = MoneyError;

    fn try_from(record: CurrencyRecord) -> Result<Self, Self::Error> {
        Self::new(&record.iso_code, record.symbol, record.minor_unit_factor)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.iso_code == other.iso_code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iso_code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_code)
    }
}
