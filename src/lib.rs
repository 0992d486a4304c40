pub mod abi;
pub mod config;
pub mod error;
pub mod utils;

pub use crate::abi::{encode, encode_from_strs, encode_packed, encode_values, AbiValue};
pub use crate::config::{FactoryPreset, Settings};
pub use crate::error::{Error, Result};
pub use crate::utils::{
    add_trailing_digits, bigint_to_u256, derive_pair_address, ether_to_wei, gwei_to_wei,
    mapping_slot, mapping_slot_for_word, nested_mapping_slot, pair_salt, parse_units,
    remove_trailing_digits, sort_tokens, to_base_units, u256_to_bigint, wei_to_ether, wei_to_gwei,
    OrderedTokenPair,
};
