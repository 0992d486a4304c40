//! Factory presets for pair address derivation.

#[allow(clippy::module_inception)]
mod config;

pub use self::config::{FactoryPreset, Settings};
