use std::path::Path;

use alloy::primitives::Address;
use config::{Config, Environment, File};
use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::utils::derive_pair_address;

/// A constant-product factory deployment (Uniswap V2 or one of its clones).
///
/// The init code hash is the keccak256 of the pair contract's creation code
/// and becomes the suffix of the CREATE2 preimage in [`derive_pair_address`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FactoryPreset {
    pub name: String,
    pub address: String,
    pub init_code_hash: String,
}

impl FactoryPreset {
    pub fn new(name: &str, address: &str, init_code_hash: &str) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            init_code_hash: init_code_hash.to_string(),
        }
    }

    /// Parsed factory address.
    pub fn factory_address(&self) -> Result<Address> {
        self.address.parse().map_err(|e| Error::malformed(&self.address, e))
    }

    /// Derive the address of the pair this factory deploys for two tokens.
    pub fn pair_address(&self, token_a: Address, token_b: Address) -> Result<Address> {
        derive_pair_address(token_a, token_b, self.factory_address()?, &self.init_code_hash)
    }
}

/// Root toolkit configuration.
///
/// Loaded from an optional `evm_toolkit.{yaml,toml,json}` file next to the
/// working directory, with `EVM_TOOLKIT__` environment overrides. Without a
/// file, the built-in mainnet presets are used.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_factories")]
    pub factories: Vec<FactoryPreset>,
}

fn default_factories() -> Vec<FactoryPreset> {
    vec![
        FactoryPreset::new(
            "uniswap_v2",
            "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f",
            "96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f",
        ),
        FactoryPreset::new(
            "sushiswap",
            "0xC0AEe478e3658e2610c5F7A4A2E1777cE9e4f2Ac",
            "e18a34eb0e04b04f7a0ac29a6e80748dca96319b42c54d679cb821dca90c6303",
        ),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self { factories: default_factories() }
    }
}

impl Settings {
    pub fn new() -> Result<Self> {
        let s = Config::builder()
            .add_source(File::with_name("evm_toolkit").required(false))
            .add_source(Environment::with_prefix("EVM_TOOLKIT").separator("__"))
            .build()?;

        let settings: Settings = s.try_deserialize()?;
        debug!("loaded {} factory presets", settings.factories.len());

        Ok(settings)
    }

    /// Load settings from an explicit file path; the format is taken from the extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = Config::builder().add_source(File::from(path.as_ref())).build()?;

        let settings: Settings = s.try_deserialize()?;
        debug!("loaded {} factory presets from {}", settings.factories.len(), path.as_ref().display());

        Ok(settings)
    }

    /// Look up a factory preset by name (case-insensitive).
    pub fn factory(&self, name: &str) -> Option<&FactoryPreset> {
        self.factories.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }
}
