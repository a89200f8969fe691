//! Property-based tests for money operations.
//!
//! - Property 3: Round-trip
//! - Property 4: Percentage conservation
//! - Property 5: Currency-mismatch guard
//! - Property 6: Allocation through `Money` keeps the currency

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Money, MoneyAggregator, MoneyError, RoundingMode};
use crate::currency::Currency;

/// Strategy to generate ISO codes.
fn iso_code() -> impl Strategy<Value = String> {
    "[A-Za-z]{3}"
}

/// Strategy to generate minor-unit factors (1, 10, ..., 10^6).
fn minor_unit_factor() -> impl Strategy<Value = i64> {
    (0u32..=6).prop_map(|exp| 10i64.pow(exp))
}

/// Strategy to generate minor-unit amounts (-10^12 to 10^12).
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to generate percentages (-500.00 to 500.00, never -100.00).
fn percentage() -> impl Strategy<Value = Decimal> {
    prop_oneof![-50_000i64..-10_000i64, -9_999i64..=50_000i64].prop_map(|v| Decimal::new(v, 2))
}

fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

fn eur() -> Arc<Currency> {
    Arc::new(Currency::new("EUR", "€", 100).unwrap())
}

fn usd() -> Arc<Currency> {
    Arc::new(Currency::new("USD", "$", 100).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 3: Round-trip
    // =========================================================================

    /// Property 3.1: Amount and currency code come back unchanged.
    #[test]
    fn prop_money_round_trip(
        amount in amount(),
        code in iso_code(),
        factor in minor_unit_factor(),
    ) {
        let currency = Currency::new(&code, "$", factor).unwrap();
        let money = Money::new(amount, currency);
        prop_assert_eq!(money.amount(), amount);
        prop_assert_eq!(money.currency_code(), code.to_ascii_uppercase());
    }

    /// Property 3.2: JSON serialization round-trips exactly.
    #[test]
    fn prop_money_serde_round_trip(
        amount in any::<i64>(),
        factor in minor_unit_factor(),
    ) {
        let money = Money::new(amount, Currency::new("CHF", "Fr.", factor).unwrap());
        let json = serde_json::to_string(&money).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.amount(), amount);
        prop_assert_eq!(back.currency_code(), "CHF");
        prop_assert_eq!(back.currency().minor_unit_factor(), factor);
    }

    // =========================================================================
    // Property 4: Percentage conservation
    // =========================================================================

    /// Property 4.1: percentage + subtotal == gross, same currency.
    #[test]
    fn prop_extract_percentage_conserves(
        amount in amount(),
        percentage in percentage(),
        mode in rounding_mode(),
    ) {
        let gross = Money::new(amount, eur());
        let extracted = gross.extract_percentage(percentage, mode).unwrap();
        prop_assert_eq!(
            extracted.percentage().amount() + extracted.sub_total().amount(),
            amount
        );
        prop_assert!(extracted.percentage().has_same_currency(&gross));
        prop_assert!(extracted.sub_total().has_same_currency(&gross));
    }

    // =========================================================================
    // Property 5: Currency-mismatch guard
    // =========================================================================

    /// Property 5.1: Every binary operation across currencies fails.
    #[test]
    fn prop_binary_ops_reject_mismatch(
        a in amount(),
        b in amount(),
    ) {
        let left = Money::new(a, eur());
        let right = Money::new(b, usd());
        let is_mismatch = |err: &MoneyError| matches!(err, MoneyError::CurrencyMismatch { .. });

        prop_assert!(is_mismatch(&left.add(&right).unwrap_err()));
        prop_assert!(is_mismatch(&left.subtract(&right).unwrap_err()));
        prop_assert!(is_mismatch(&left.modulo(&right).unwrap_err()));
        prop_assert!(is_mismatch(&left.ratio_of(&right).unwrap_err()));
        prop_assert!(is_mismatch(&left.equals(&right).unwrap_err()));
        prop_assert!(is_mismatch(&left.greater_than(&right).unwrap_err()));
        prop_assert!(is_mismatch(&left.greater_than_or_equal(&right).unwrap_err()));
        prop_assert!(is_mismatch(&left.less_than(&right).unwrap_err()));
        prop_assert!(is_mismatch(&left.less_than_or_equal(&right).unwrap_err()));
        prop_assert!(is_mismatch(&MoneyAggregator::sum(&[left.clone(), right.clone()]).unwrap_err()));
        prop_assert!(!left.has_same_currency(&right));
    }

    // =========================================================================
    // Property 6: Allocation through Money
    // =========================================================================

    /// Property 6.1: Allocated parts sum back to the original in its currency.
    #[test]
    fn prop_money_allocation_conserves(
        amount in amount(),
        ratios in prop::collection::vec(1i64..100, 1..10),
    ) {
        let money = Money::new(amount, eur());
        let parts = money.allocate_by_ratios(&ratios).unwrap();
        prop_assert_eq!(MoneyAggregator::sum(&parts).unwrap(), money);
    }

    /// Property 6.2: Multiplying by an integer never needs rounding.
    #[test]
    fn prop_integer_multiply_is_exact(
        amount in -1_000_000i64..1_000_000i64,
        factor in -1_000i64..1_000i64,
        mode in rounding_mode(),
    ) {
        let money = Money::new(amount, eur());
        let product = money.multiply(Decimal::from(factor), mode).unwrap();
        prop_assert_eq!(product.amount(), amount * factor);
    }
}
