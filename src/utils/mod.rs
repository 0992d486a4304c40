//! Numeric conversion and address derivation utilities.
//!
//! This module is organized into focused submodules:
//!
//! - [`conversion`] - Base-unit <-> decimal conversions (wei, gwei, ether, token units)
//! - [`shift`] - Adding and removing trailing decimal digits on integers
//! - [`tokens`] - Canonical token ordering
//! - [`pair_address`] - Uniswap V2 style pair address derivation
//! - [`storage`] - Mapping storage slot computation

mod conversion;
mod pair_address;
mod shift;
mod storage;
mod tokens;

#[cfg(test)]
mod proptest_properties;

// ============================================
// Re-exports
// ============================================

// Conversion utilities
pub use conversion::{
    bigint_to_u256, ether_to_wei, gwei_to_wei, parse_units, to_base_units, u256_to_bigint,
    wei_to_ether, wei_to_gwei, ETHER, ETHER_DECIMALS, GWEI, GWEI_DECIMALS, WEI,
};

// Decimal shifting
pub use shift::{add_trailing_digits, remove_trailing_digits};

// Token ordering
pub use tokens::{sort_tokens, OrderedTokenPair};

// Pair address derivation
pub use pair_address::{derive_pair_address, pair_salt};

// Storage slots
pub use storage::{mapping_slot, mapping_slot_for_word, nested_mapping_slot};
