//! Property-based tests using `proptest`.
//!
//! 1. **Ether round-trip**: `ether_to_wei(wei_to_ether(x)) == x`.
//! 2. **Zero**: `parse_units(0, d) == 0` for every `d`.
//! 3. **Shift inverse**: removing then adding digits floors to a multiple of `10^n`.
//! 4. **Ordering**: `sort_tokens` is symmetric and ascending.
//! 5. **Derivation**: pair addresses ignore token argument order.

use alloy::primitives::Address;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;
use proptest::prelude::*;

use super::{
    add_trailing_digits, derive_pair_address, ether_to_wei, parse_units, remove_trailing_digits,
    sort_tokens, to_base_units, wei_to_ether,
};

fn any_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

fn any_bigint() -> impl Strategy<Value = BigInt> {
    prop::collection::vec(any::<u8>(), 0..40).prop_map(|bytes| BigInt::from_signed_bytes_be(&bytes))
}

proptest! {
    #[test]
    fn ether_round_trip(wei in any_bigint()) {
        prop_assert_eq!(ether_to_wei(&wei_to_ether(&wei)), wei);
    }

    #[test]
    fn base_units_round_trip(amount in any::<u128>(), decimals in any::<u8>()) {
        let amount = BigInt::from(amount);
        prop_assert_eq!(to_base_units(&parse_units(&amount, decimals), decimals), amount);
    }

    #[test]
    fn parse_units_of_zero_is_zero(decimals in any::<u8>()) {
        prop_assert_eq!(parse_units(&BigInt::zero(), decimals), BigDecimal::zero());
    }

    #[test]
    fn shift_inverse_floors(amount in any_bigint(), count in 0u32..40) {
        let shifted = add_trailing_digits(&remove_trailing_digits(&amount, count), count);
        let step = add_trailing_digits(&BigInt::from(1), count);

        prop_assert!(shifted <= amount);
        prop_assert!(&amount - &shifted < step);
        prop_assert!((&shifted % &step).is_zero());
    }

    #[test]
    fn shift_inverse_exact_on_multiples(amount in any::<i64>(), count in 0u32..30) {
        let amount = add_trailing_digits(&BigInt::from(amount), count);
        prop_assert_eq!(
            add_trailing_digits(&remove_trailing_digits(&amount, count), count),
            amount
        );
    }

    #[test]
    fn sort_is_symmetric_and_ascending(a in any_address(), b in any_address()) {
        let (low, high) = sort_tokens(a, b);
        prop_assert!(low <= high);
        prop_assert_eq!(sort_tokens(b, a), (low, high));
    }

    #[test]
    fn derivation_ignores_token_order(
        a in any_address(),
        b in any_address(),
        factory in any_address(),
        suffix in any::<[u8; 32]>(),
    ) {
        let suffix = alloy::hex::encode(suffix);
        let forward = derive_pair_address(a, b, factory, &suffix);
        let reverse = derive_pair_address(b, a, factory, &suffix);
        prop_assert_eq!(forward.ok(), reverse.ok());
    }
}
