//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Money defaults.
    #[serde(default)]
    pub money: MoneyConfig,
}

/// Money defaults used when building values without an explicit currency
/// or rounding mode.
///
/// Values are kept raw here; the core crate validates them.
#[derive(Debug, Clone, Deserialize)]
pub struct MoneyConfig {
    /// Rounding mode name (`HALF_UP`, `HALF_DOWN`, `HALF_EVEN`, `HALF_ODD`).
    #[serde(default = "default_rounding_mode")]
    pub default_rounding_mode: String,
    /// Currency descriptor used by the default factory.
    #[serde(default)]
    pub currency: CurrencyConfig,
}

/// Raw currency descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// ISO 4217 code.
    #[serde(default = "default_iso_code")]
    pub iso_code: String,
    /// Display symbol.
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Minor units per major unit.
    #[serde(default = "default_minor_unit_factor")]
    pub minor_unit_factor: i64,
}

fn default_rounding_mode() -> String {
    "HALF_UP".to_string()
}

fn default_iso_code() -> String {
    "EUR".to_string()
}

fn default_symbol() -> String {
    "€".to_string()
}

fn default_minor_unit_factor() -> i64 {
    100
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_rounding_mode: default_rounding_mode(),
            currency: CurrencyConfig::default(),
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            iso_code: default_iso_code(),
            symbol: default_symbol(),
            minor_unit_factor: default_minor_unit_factor(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `.env`, config files, and the environment.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `TALLY__*` environment variables (`__` separates nesting levels).
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a source cannot be read or a value has
    /// the wrong type.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
