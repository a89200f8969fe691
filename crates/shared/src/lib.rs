//! Shared errors, configuration, and telemetry for Tally.
//!
//! This crate provides the ambient pieces used by every other crate:
//! - Application-wide error types
//! - Configuration management
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use self::config::{AppConfig, CurrencyConfig, MoneyConfig};
pub use error::{AppError, AppResult};
