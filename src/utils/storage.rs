//! Solidity mapping storage slot computation.
//!
//! A value `map[key]` of a mapping declared at storage slot `p` lives at
//! `keccak256(pad32(key) ++ pad32(p))`. The declared slot of a mapping is a
//! property of the contract's layout and must be supplied by the caller
//! (e.g. `0` for OpenZeppelin ERC20 `_balances`, `9` for USDC's `balanceOf`).

use alloy::primitives::{keccak256, Address, B256, U256};

/// Storage slot of `map[key]` for an address-keyed mapping at `slot_index`.
pub fn mapping_slot(key: Address, slot_index: U256) -> B256 {
    mapping_slot_for_word(key.into_word(), slot_index)
}

/// Storage slot of `map[key]` where `key` is already a left-padded 32-byte word
/// (`bytes32`, `uint256`, ...).
pub fn mapping_slot_for_word(key: B256, slot_index: U256) -> B256 {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(key.as_slice());
    preimage[32..].copy_from_slice(&slot_index.to_be_bytes::<32>());
    keccak256(preimage)
}

/// Storage slot of `map[outer][inner]` for a two-level address mapping,
/// such as ERC20 `_allowances[owner][spender]`.
pub fn nested_mapping_slot(outer: Address, inner: Address, slot_index: U256) -> B256 {
    let outer_slot = mapping_slot(outer, slot_index);
    mapping_slot_for_word(inner.into_word(), U256::from_be_bytes(outer_slot.0))
}
