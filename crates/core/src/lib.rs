//! Core money logic for Tally.
//!
//! This crate contains pure value arithmetic with ZERO I/O dependencies.
//! Amounts are integer minor units; nothing is ever mutated in place.
//!
//! # Modules
//!
//! - `currency` - Currency descriptors and largest-remainder allocation
//! - `money` - The `Money` value, rounding modes, percentage extraction, and aggregation

pub mod currency;
pub mod money;
