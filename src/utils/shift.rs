//! Decimal shifting on base-unit integers.
//!
//! Useful for moving an amount between tokens with different decimal counts
//! (e.g. 18-decimal WETH units to 6-decimal USDC units) while staying in
//! integer arithmetic.

use num_bigint::BigInt;
use num_traits::Signed;

use super::conversion::big_pow10;

/// Drop `count` trailing decimal digits from `amount`.
///
/// This is floor division by `10^count`: the removed digits are discarded,
/// never rounded, and negative amounts move toward negative infinity.
///
/// # Example
/// ```ignore
/// assert_eq!(remove_trailing_digits(&BigInt::from(1_000_000), 3), BigInt::from(1000));
/// ```
pub fn remove_trailing_digits(amount: &BigInt, count: u32) -> BigInt {
    let factor = big_pow10(count);
    let quotient = amount / &factor;

    // BigInt division truncates toward zero
    if amount.is_negative() && &quotient * &factor != *amount {
        quotient - 1
    } else {
        quotient
    }
}

/// Append `count` zero digits to `amount` (multiply by `10^count`).
pub fn add_trailing_digits(amount: &BigInt, count: u32) -> BigInt {
    amount * big_pow10(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_trailing_digits() {
        assert_eq!(remove_trailing_digits(&BigInt::from(1_000_000), 3), BigInt::from(1000));
        assert_eq!(remove_trailing_digits(&BigInt::from(1_999), 3), BigInt::from(1));
        assert_eq!(remove_trailing_digits(&BigInt::from(999), 3), BigInt::from(0));
        assert_eq!(remove_trailing_digits(&BigInt::from(42), 0), BigInt::from(42));
    }

    #[test]
    fn test_remove_trailing_digits_floors_negatives() {
        assert_eq!(remove_trailing_digits(&BigInt::from(-1_500), 3), BigInt::from(-2));
        assert_eq!(remove_trailing_digits(&BigInt::from(-2_000), 3), BigInt::from(-2));
    }

    #[test]
    fn test_add_trailing_digits() {
        assert_eq!(add_trailing_digits(&BigInt::from(1000), 3), BigInt::from(1_000_000));
        assert_eq!(add_trailing_digits(&BigInt::from(-7), 2), BigInt::from(-700));
        assert_eq!(
            add_trailing_digits(&BigInt::from(1), 40).to_string(),
            format!("1{}", "0".repeat(40))
        );
    }

    #[test]
    fn test_rescale_weth_units_to_usdc_units() {
        // 1234.5678901 with 18 decimals down to 6 decimals
        let weth_units = BigInt::from(1_234_567_890_100_000_000_000u128);
        let usdc_units = remove_trailing_digits(&weth_units, 12);
        assert_eq!(usdc_units, BigInt::from(1_234_567_890u64));
        assert_eq!(add_trailing_digits(&usdc_units, 12), BigInt::from(1_234_567_890_000_000_000_000u128));
    }
}
