//! ABI encoding of dynamically typed values.
//!
//! Type names are resolved at runtime into [`DynSolType`] descriptors and
//! packed with alloy's ABI codec, so the same layout Solidity produces for
//! `abi.encode` / `abi.encodePacked` is available without `sol!` bindings.

mod encoder;

use alloy::dyn_abi::{DynSolType, DynSolValue};

pub use encoder::{encode, encode_from_strs, encode_packed, encode_values};

/// A value tagged with the ABI type name it should be encoded as.
#[derive(Debug, Clone, PartialEq)]
pub struct AbiValue {
    pub type_name: String,
    pub value: DynSolValue,
}

impl AbiValue {
    pub fn new(type_name: impl Into<String>, value: DynSolValue) -> Self {
        Self { type_name: type_name.into(), value }
    }

    /// Tag a value with its own canonical type name.
    ///
    /// Returns `None` for values whose type cannot be inferred (empty arrays).
    pub fn inferred(value: DynSolValue) -> Option<Self> {
        let type_name = value.as_type()?.sol_type_name().into_owned();
        Some(Self { type_name, value })
    }

    /// Resolve `type_name` into a type descriptor.
    pub fn resolve(&self) -> crate::Result<DynSolType> {
        encoder::resolve_type(&self.type_name)
    }
}
