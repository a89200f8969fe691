//! Amount allocation using the Largest Remainder Method.
//!
//! This module splits an integer minor-unit amount into shares while
//! ensuring the shares sum exactly to the original amount (no cents lost).
//!
//! The Largest Remainder Method works by:
//! 1. Calculate each exact share `amount * ratio / total_ratio`
//! 2. Round every share down
//! 3. Calculate the remainder (amount - sum of rounded shares)
//! 4. Give one unit each to the shares with the largest fractional parts,
//!    lowest index first on ties
//!
//! Fractional parts all share the denominator `total_ratio`, so they are
//! compared as integer remainders and no rounding is ever involved.

use tracing::trace;

use crate::money::{MoneyError, MoneyResult};

/// Allocation engine for distributing amounts.
///
/// Guarantees:
/// - Output has the same length and order as the ratios
/// - Sum of shares EXACTLY equals the amount
/// - Ties are broken deterministically by lowest index
pub struct AllocationEngine;

impl AllocationEngine {
    /// Allocate an amount as evenly as possible across `count` targets.
    ///
    /// Every share is `amount / count` rounded down or that plus one; the
    /// larger shares go to the lowest indices.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_core::currency::AllocationEngine;
    ///
    /// let shares = AllocationEngine::allocate_to_targets(100, 3).unwrap();
    /// assert_eq!(shares, vec![34, 33, 33]);
    /// ```
    pub fn allocate_to_targets(amount: i64, count: usize) -> MoneyResult<Vec<i64>> {
        if count == 0 {
            return Err(MoneyError::InvalidRatio(
                "Number of targets must be greater than 0".to_string(),
            ));
        }

        Self::allocate_by_ratios(amount, &vec![1; count])
    }

    /// Allocate an amount by integer ratios.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRatio` if the ratios sum to zero or less (including
    /// an empty slice) or if any ratio is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_core::currency::AllocationEngine;
    ///
    /// let shares = AllocationEngine::allocate_by_ratios(5, &[3, 7]).unwrap();
    /// assert_eq!(shares, vec![2, 3]);
    /// ```
    pub fn allocate_by_ratios(amount: i64, ratios: &[i64]) -> MoneyResult<Vec<i64>> {
        let total_ratio: i128 = ratios.iter().map(|r| i128::from(*r)).sum();
        if total_ratio <= 0 {
            return Err(MoneyError::InvalidRatio(
                "Total ratio must be greater than 0".to_string(),
            ));
        }
        if ratios.iter().any(|r| *r < 0) {
            return Err(MoneyError::InvalidRatio(
                "Ratio must be equal or greater than 0".to_string(),
            ));
        }

        let amount_wide = i128::from(amount);

        // Round down each, keeping the fractional part as a numerator over total_ratio
        let mut shares = Vec::with_capacity(ratios.len());
        let mut remainders = Vec::with_capacity(ratios.len());
        for (index, ratio) in ratios.iter().enumerate() {
            let exact = amount_wide * i128::from(*ratio);
            shares.push(exact.div_euclid(total_ratio));
            remainders.push((index, exact.rem_euclid(total_ratio)));
        }

        // 0 <= remaining < ratios.len() since every share was floored
        let allocated: i128 = shares.iter().sum();
        let remaining = usize::try_from(amount_wide - allocated).unwrap_or(0);

        trace!(
            amount,
            targets = ratios.len(),
            remaining,
            "Distributing allocation remainder"
        );

        if remaining > 0 {
            // Stable sort: equal remainders keep ascending index order
            remainders.sort_by(|a, b| b.1.cmp(&a.1));
            for (index, _) in remainders.iter().take(remaining) {
                shares[*index] += 1;
            }
        }

        shares
            .into_iter()
            .map(|share| i64::try_from(share).map_err(|_| MoneyError::AmountOverflow))
            .collect()
    }
}
