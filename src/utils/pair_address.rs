//! Uniswap V2 style pair address derivation.
//!
//! Constant-product factories deploy every pair with CREATE2, so a pair's
//! address can be computed off-chain from the two tokens, the factory and
//! the factory's init code hash.

use alloy::hex;
use alloy::primitives::{keccak256, Address, B256};
use log::trace;

use super::tokens::sort_tokens;
use crate::error::{Error, Result};

/// CREATE2 domain separator byte.
const CREATE2_PREFIX: u8 = 0xff;

/// Compute the pair salt: `keccak256(token0 ++ token1)` over the sorted tokens.
pub fn pair_salt(token_a: Address, token_b: Address) -> B256 {
    let (token0, token1) = sort_tokens(token_a, token_b);

    let mut packed = [0u8; 40];
    packed[..20].copy_from_slice(token0.as_slice());
    packed[20..].copy_from_slice(token1.as_slice());

    keccak256(packed)
}

/// Derive the pair address for two tokens deployed by a V2 factory clone.
///
/// The address is computed as:
/// ```text
/// keccak256(0xff ++ factory ++ keccak256(token0 ++ token1) ++ suffix)[12..]
/// ```
///
/// where `suffix` is the hex-decoded `salt_suffix_hex`, normally the
/// factory's init code hash. Tokens are sorted first, so the argument order
/// of `token_a` and `token_b` does not matter.
///
/// # Arguments
/// * `token_a` - First token address
/// * `token_b` - Second token address
/// * `factory` - Factory contract that deploys the pairs
/// * `salt_suffix_hex` - Hex string appended after the salt, with or without `0x`
///
/// # Errors
/// Returns [`Error::MalformedInput`] if `salt_suffix_hex` is not valid hex.
///
/// # Example
/// ```ignore
/// let pair = derive_pair_address(
///     address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"), // WETH
///     address!("dac17f958d2ee523a2206206994597c13d831ec7"), // USDT
///     address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f"), // Uniswap V2 factory
///     "96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f",
/// )?;
/// ```
pub fn derive_pair_address(
    token_a: Address,
    token_b: Address,
    factory: Address,
    salt_suffix_hex: &str,
) -> Result<Address> {
    let suffix =
        hex::decode(salt_suffix_hex).map_err(|e| Error::malformed(salt_suffix_hex, e))?;

    let salt = pair_salt(token_a, token_b);

    let mut message = Vec::with_capacity(1 + 20 + 32 + suffix.len());
    message.push(CREATE2_PREFIX);
    message.extend_from_slice(factory.as_slice());
    message.extend_from_slice(salt.as_slice());
    message.extend_from_slice(&suffix);

    // The digest is an unsigned 256-bit value; the address is its low 20 bytes
    let digest = keccak256(&message);
    let pair = Address::from_slice(&digest[12..]);

    trace!("derived pair {pair} for {token_a}/{token_b} on factory {factory}");

    Ok(pair)
}
