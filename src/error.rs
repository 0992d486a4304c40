//! Error types shared by every toolkit module.

use alloy::dyn_abi;
use alloy::hex::FromHexError;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A hex string (salt suffix, address, init code hash) could not be decoded.
    #[error("malformed input {input:?}: {source}")]
    MalformedInput {
        input: String,
        #[source]
        source: FromHexError,
    },

    /// An ABI type name is not recognized.
    #[error("unknown ABI type {type_name:?}: {source}")]
    TypeResolution {
        type_name: String,
        #[source]
        source: dyn_abi::Error,
    },

    /// A value does not fit the shape of its resolved ABI type.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// An arbitrary-precision integer does not fit the fixed-width target.
    #[error("value out of range: {0}")]
    OutOfRange(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub(crate) fn malformed(input: &str, source: FromHexError) -> Self {
        Error::MalformedInput { input: input.to_string(), source }
    }
}
