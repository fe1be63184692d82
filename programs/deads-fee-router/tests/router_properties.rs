// Property-based tests for the fee split engine.
// These verify invariants that must hold across all valid inputs.

use deads_fee_router::constants::{LP_BP, MAX_BPS, STAKERS_BP, TREASURY_BP};
use deads_fee_router::math::{compute_splits, split_amount};
use proptest::prelude::*;

proptest! {
    // For every amount in the non-overflow domain, the three shares
    // reassemble the amount exactly. No dust is ever dropped.
    #[test]
    fn prop_shares_sum_exactly(amount in 0u64..=u64::MAX / MAX_BPS as u64) {
        let (stakers, treasury, lp) = compute_splits(amount).unwrap();
        prop_assert_eq!(
            stakers as u128 + treasury as u128 + lp as u128,
            amount as u128
        );
    }

    // Treasury and LP receive their exact floor shares; only the stakers
    // share carries the truncation remainder.
    #[test]
    fn prop_treasury_and_lp_are_floors(amount in 0u64..=u64::MAX / MAX_BPS as u64) {
        let (stakers, treasury, lp) = compute_splits(amount).unwrap();
        prop_assert_eq!(treasury, amount * TREASURY_BP as u64 / MAX_BPS as u64);
        prop_assert_eq!(lp, amount * LP_BP as u64 / MAX_BPS as u64);

        let stakers_floor = amount * STAKERS_BP as u64 / MAX_BPS as u64;
        let remainder = amount - (stakers_floor + treasury + lp);
        prop_assert_eq!(stakers, stakers_floor + remainder);
    }

    // Three floored shares can each lose strictly less than one unit, so the
    // remainder folded into stakers is at most two units.
    #[test]
    fn prop_remainder_bounded(amount in 0u64..=u64::MAX / MAX_BPS as u64) {
        let (stakers, _, _) = compute_splits(amount).unwrap();
        let stakers_floor = amount * STAKERS_BP as u64 / MAX_BPS as u64;
        prop_assert!(stakers - stakers_floor <= 2);
    }

    // Amounts whose bp product leaves the u64 domain are rejected whole, not
    // silently truncated.
    #[test]
    fn prop_overflow_rejected(amount in (u64::MAX / STAKERS_BP as u64 + 1)..=u64::MAX) {
        prop_assert!(compute_splits(amount).is_err());
    }

    // The exact-sum invariant holds for any ratio table covering 10000 bps,
    // not just the production one.
    #[test]
    fn prop_arbitrary_tables_sum_exactly(
        amount in 0u64..=1_000_000_000_000u64,
        stakers_bp in 0u16..=10_000u16,
        treasury_bp in 0u16..=10_000u16,
    ) {
        prop_assume!(stakers_bp as u32 + treasury_bp as u32 <= 10_000);
        let lp_bp = 10_000 - stakers_bp - treasury_bp;

        let (stakers, treasury, lp) =
            split_amount(amount, stakers_bp, treasury_bp, lp_bp).unwrap();
        prop_assert_eq!(stakers + treasury + lp, amount);
    }
}
