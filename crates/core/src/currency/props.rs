//! Property-based tests for allocation.
//!
//! - Property 1: Conservation
//! - Property 2: Even-split bound

use proptest::prelude::*;

use super::allocation::AllocationEngine;

/// Strategy to generate minor-unit amounts, negative amounts included.
fn any_amount() -> impl Strategy<Value = i64> {
    -10_000_000_000i64..10_000_000_000i64
}

/// Strategy to generate ratio vectors with a positive total.
fn ratios() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..1_000, 1..20).prop_filter("total ratio must be positive", |r| {
        r.iter().sum::<i64>() > 0
    })
}

/// Strategy to generate target counts (1 to 100).
fn target_count() -> impl Strategy<Value = usize> {
    1usize..100
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Conservation
    // =========================================================================

    /// Property 1.1: Shares always sum to the amount.
    #[test]
    fn prop_allocate_by_ratios_conserves_amount(
        amount in any_amount(),
        ratios in ratios(),
    ) {
        let shares = AllocationEngine::allocate_by_ratios(amount, &ratios).unwrap();
        prop_assert_eq!(shares.iter().sum::<i64>(), amount);
    }

    /// Property 1.2: One share per ratio, zero ratios get zero.
    #[test]
    fn prop_allocate_by_ratios_shape(
        amount in any_amount(),
        ratios in ratios(),
    ) {
        let shares = AllocationEngine::allocate_by_ratios(amount, &ratios).unwrap();
        prop_assert_eq!(shares.len(), ratios.len());
        for (share, ratio) in shares.iter().zip(&ratios) {
            if *ratio == 0 {
                prop_assert_eq!(*share, 0);
            }
        }
    }

    /// Property 1.3: Each share is within one unit of its exact value.
    #[test]
    fn prop_allocate_by_ratios_within_one_unit(
        amount in any_amount(),
        ratios in ratios(),
    ) {
        let shares = AllocationEngine::allocate_by_ratios(amount, &ratios).unwrap();
        let total = i128::from(ratios.iter().sum::<i64>());
        for (share, ratio) in shares.iter().zip(&ratios) {
            let exact = i128::from(amount) * i128::from(*ratio);
            let floor = exact.div_euclid(total);
            let share = i128::from(*share);
            prop_assert!(share == floor || share == floor + 1);
        }
    }

    /// Property 1.4: Allocation is deterministic.
    #[test]
    fn prop_allocate_is_deterministic(
        amount in any_amount(),
        ratios in ratios(),
    ) {
        let first = AllocationEngine::allocate_by_ratios(amount, &ratios).unwrap();
        let second = AllocationEngine::allocate_by_ratios(amount, &ratios).unwrap();
        prop_assert_eq!(first, second);
    }

    // =========================================================================
    // Property 2: Even-split bound
    // =========================================================================

    /// Property 2.1: Shares are floor(amount/n) or one more, the larger ones first.
    #[test]
    fn prop_allocate_to_targets_even_split(
        amount in any_amount(),
        count in target_count(),
    ) {
        let shares = AllocationEngine::allocate_to_targets(amount, count).unwrap();
        let n = i64::try_from(count).unwrap();
        let base = amount.div_euclid(n);
        let extra = usize::try_from(amount.rem_euclid(n)).unwrap();

        prop_assert_eq!(shares.len(), count);
        for (index, share) in shares.iter().enumerate() {
            let expected = if index < extra { base + 1 } else { base };
            prop_assert_eq!(*share, expected, "share {} of {} for amount {}", index, count, amount);
        }
    }
}
