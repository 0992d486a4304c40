//! Unit conversion utilities.
//!
//! Converts between base-unit integer amounts (wei, token units) and their
//! human-readable decimal form without ever going through `f64`. Decimal
//! amounts are `BigDecimal` (integer mantissa plus decimal scale), so a value
//! with at most `decimals` fractional digits survives a round-trip unchanged.

use alloy::primitives::U256;
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use once_cell::sync::Lazy;

use crate::error::{Error, Result};

// ============================================
// Denominations
// ============================================

/// One wei, the smallest unit of ether.
pub const WEI: u64 = 1;

/// One gwei expressed in wei (10^9).
pub const GWEI: u64 = 1_000_000_000;

/// One ether expressed in wei (10^18).
pub const ETHER: u64 = 1_000_000_000_000_000_000;

/// Decimal places between wei and gwei.
pub const GWEI_DECIMALS: u8 = 9;

/// Decimal places between wei and ether.
pub const ETHER_DECIMALS: u8 = 18;

// ============================================
// Base Units -> Decimal
// ============================================

/// Format a wei amount as ether.
///
/// The result is the exact quotient `wei / 10^18`; zero and negative amounts
/// are accepted.
///
/// # Example
/// ```ignore
/// let eth = wei_to_ether(&BigInt::from(100_000_000_000u64)); // 0.0000001
/// ```
pub fn wei_to_ether(wei: &BigInt) -> BigDecimal {
    parse_units(wei, ETHER_DECIMALS)
}

/// Format a wei amount as gwei.
pub fn wei_to_gwei(wei: &BigInt) -> BigDecimal {
    parse_units(wei, GWEI_DECIMALS)
}

/// Shift the implied decimal point of a base-unit amount by `decimals` places.
///
/// Mirrors ethers' `formatUnits`: the returned value is exactly
/// `amount / 10^decimals`, normalized so that no trailing fractional zeros
/// are carried around (`1001` with 2 decimals is `10.01`).
///
/// `Display` on a normalized `BigDecimal` may switch to exponent notation for
/// small values (`0.0000001` prints as `1E-7`); use `to_plain_string()` for
/// fixed-point text.
///
/// # Arguments
/// * `amount` - The amount in the token's smallest unit
/// * `decimals` - The token's decimal places
pub fn parse_units(amount: &BigInt, decimals: u8) -> BigDecimal {
    if amount.is_zero() {
        return BigDecimal::zero();
    }

    BigDecimal::new(amount.clone(), i64::from(decimals)).normalized()
}

// ============================================
// Decimal -> Base Units
// ============================================

/// Convert an ether amount to wei.
///
/// Inverse of [`wei_to_ether`]: `ether_to_wei(&wei_to_ether(&x)) == x` for
/// every integer `x`. Ether amounts with more than 18 fractional digits cannot
/// be represented in wei; the excess digits are rounded away.
pub fn ether_to_wei(ether: &BigDecimal) -> BigInt {
    to_base_units(ether, ETHER_DECIMALS)
}

/// Convert a gwei amount to wei.
pub fn gwei_to_wei(gwei: &BigDecimal) -> BigInt {
    to_base_units(gwei, GWEI_DECIMALS)
}

/// Convert a decimal amount to base units with `decimals` fractional digits.
///
/// The result is `trunc(amount) * 10^decimals` plus the first `decimals`
/// fractional digits read as an integer. A shorter fraction counts as if it
/// were padded with trailing zeros (`1.5` at 18 decimals is
/// `1_500_000_000_000_000_000`). Digits past `decimals` are rounded half-to-even.
pub fn to_base_units(amount: &BigDecimal, decimals: u8) -> BigInt {
    let scale = i64::from(decimals);

    // At exactly `decimals` scale the mantissa is the base-unit amount.
    let (units, exponent) = amount
        .with_scale_round(scale, RoundingMode::HalfEven)
        .into_bigint_and_exponent();
    debug_assert_eq!(exponent, scale);

    units
}

// ============================================
// U256 Bridges
// ============================================

/// Convert alloy U256 to an arbitrary-precision BigInt.
pub fn u256_to_bigint(value: U256) -> BigInt {
    let bytes: [u8; 32] = value.to_le_bytes();
    BigInt::from_bytes_le(Sign::Plus, &bytes)
}

/// Convert a BigInt back to alloy U256.
///
/// Fails with [`Error::OutOfRange`] for negative values and values wider
/// than 256 bits.
pub fn bigint_to_u256(value: &BigInt) -> Result<U256> {
    let (sign, bytes) = value.to_bytes_be();
    if sign == Sign::Minus {
        return Err(Error::OutOfRange(format!("{value} is negative")));
    }

    U256::try_from_be_slice(&bytes)
        .ok_or_else(|| Error::OutOfRange(format!("{value} exceeds 256 bits")))
}

// ============================================
// Internal Helpers
// ============================================

static POW10_CACHE: Lazy<[BigInt; 25]> =
    Lazy::new(|| std::array::from_fn(|i| BigInt::from(10u32).pow(i as u32)));

/// Compute 10^exp as BigInt.
pub(crate) fn big_pow10(exp: u32) -> BigInt {
    if (exp as usize) < POW10_CACHE.len() {
        POW10_CACHE[exp as usize].clone()
    } else {
        BigInt::from(10u32).pow(exp)
    }
}
