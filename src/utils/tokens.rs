//! Canonical token ordering.

use std::fmt;

use alloy::primitives::Address;

/// Sort two token addresses in ascending numeric order.
///
/// Addresses compare as unsigned big-endian integers, which is the same order
/// Uniswap-style factories use to pick `token0` and `token1`.
#[inline]
pub fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

/// A token pair whose addresses are always stored in sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrderedTokenPair {
    token0: Address,
    token1: Address,
}

impl OrderedTokenPair {
    pub fn new(token_a: Address, token_b: Address) -> Self {
        let (token0, token1) = sort_tokens(token_a, token_b);
        Self { token0, token1 }
    }

    /// The numerically lower address.
    pub fn token0(&self) -> Address {
        self.token0
    }

    /// The numerically higher address.
    pub fn token1(&self) -> Address {
        self.token1
    }

    pub fn contains(&self, token: Address) -> bool {
        self.token0 == token || self.token1 == token
    }

    /// Returns the counterpart of `token`, or `None` if it is not in the pair.
    pub fn other(&self, token: Address) -> Option<Address> {
        if token == self.token0 {
            Some(self.token1)
        } else if token == self.token1 {
            Some(self.token0)
        } else {
            None
        }
    }

    pub fn into_tuple(self) -> (Address, Address) {
        (self.token0, self.token1)
    }
}

impl From<(Address, Address)> for OrderedTokenPair {
    fn from((token_a, token_b): (Address, Address)) -> Self {
        Self::new(token_a, token_b)
    }
}

impl fmt::Display for OrderedTokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token0, self.token1)
    }
}
