//! Runtime ABI encoder.

use alloy::dyn_abi::{DynSolType, DynSolValue};
use alloy::primitives::I256;
use log::trace;

use super::AbiValue;
use crate::error::{Error, Result};

/// Encode `values` as the ABI parameter tuple described by `type_names`.
///
/// Equivalent to Solidity's `abi.encode(v0, v1, ...)`: static types are
/// written inline, dynamic types (`bytes`, `string`, `T[]`) through head/tail
/// offsets.
///
/// # Errors
/// * [`Error::TypeResolution`] if a type name is not a valid ABI type
/// * [`Error::Encoding`] if the counts differ or a value does not fit its type
///
/// # Example
/// ```ignore
/// let data = encode(
///     &["address", "uint256"],
///     &[DynSolValue::Address(weth), DynSolValue::Uint(U256::from(10_000_000_000u64), 256)],
/// )?;
/// ```
pub fn encode(type_names: &[&str], values: &[DynSolValue]) -> Result<Vec<u8>> {
    let params = validated_params(type_names, values)?;
    let data = params.abi_encode_params();
    trace!("abi encoded {} values into {} bytes", values.len(), data.len());
    Ok(data)
}

/// Encode a list of tagged values, see [`encode`].
pub fn encode_values(values: &[AbiValue]) -> Result<Vec<u8>> {
    let type_names: Vec<&str> = values.iter().map(|v| v.type_name.as_str()).collect();
    let values: Vec<DynSolValue> = values.iter().map(|v| v.value.clone()).collect();
    encode(&type_names, &values)
}

/// Encode values given in their textual form (`"0x..."`, `"1000"`, `"true"`, `"[1,2]"`).
///
/// Each string is coerced into its resolved type before encoding; a string
/// that cannot be read as that type is an [`Error::Encoding`].
pub fn encode_from_strs(type_names: &[&str], values: &[&str]) -> Result<Vec<u8>> {
    let types = resolve_all(type_names)?;
    check_arity(types.len(), values.len())?;

    let coerced = types
        .iter()
        .zip(type_names)
        .zip(values)
        .map(|((ty, name), raw)| {
            ty.coerce_str(raw)
                .map_err(|e| Error::Encoding(format!("cannot read {raw:?} as {name}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    encode(type_names, &coerced)
}

/// Encode values with the non-standard packed layout of `abi.encodePacked`.
pub fn encode_packed(type_names: &[&str], values: &[DynSolValue]) -> Result<Vec<u8>> {
    let params = validated_params(type_names, values)?;
    let data = params.abi_encode_packed();
    trace!("abi packed {} values into {} bytes", values.len(), data.len());
    Ok(data)
}

/// Resolve a single ABI type name.
pub(crate) fn resolve_type(type_name: &str) -> Result<DynSolType> {
    DynSolType::parse(type_name).map_err(|source| Error::TypeResolution {
        type_name: type_name.to_string(),
        source,
    })
}

/// Resolve every type name before any value is looked at.
fn resolve_all(type_names: &[&str]) -> Result<Vec<DynSolType>> {
    type_names.iter().map(|name| resolve_type(name)).collect()
}

/// Resolve every type name, check each value against it and wrap the values
/// in a parameter tuple.
fn validated_params(type_names: &[&str], values: &[DynSolValue]) -> Result<DynSolValue> {
    let types = resolve_all(type_names)?;
    check_arity(types.len(), values.len())?;

    for ((ty, name), value) in types.iter().zip(type_names).zip(values) {
        if !ty.matches(value) {
            let found = value.sol_type_name().unwrap_or_default();
            return Err(Error::Encoding(format!("expected {name}, found {found}")));
        }
        check_width(value)?;
    }

    Ok(DynSolValue::Tuple(values.to_vec()))
}

fn check_arity(types: usize, values: usize) -> Result<()> {
    if types != values {
        return Err(Error::Encoding(format!("{types} types but {values} values")));
    }
    Ok(())
}

/// The codec trusts the bit and byte sizes carried by a value, so reject
/// payloads that would not fit them.
fn check_width(value: &DynSolValue) -> Result<()> {
    match value {
        DynSolValue::Uint(v, bits) if v.bit_len() > *bits => {
            Err(Error::Encoding(format!("{v} does not fit in uint{bits}")))
        }
        DynSolValue::Int(v, bits) if !int_fits(*v, *bits) => {
            Err(Error::Encoding(format!("{v} does not fit in int{bits}")))
        }
        DynSolValue::FixedBytes(word, size) if word.0.iter().skip(*size).any(|b| *b != 0) => {
            Err(Error::Encoding(format!("{word} does not fit in bytes{size}")))
        }
        DynSolValue::Array(items) | DynSolValue::FixedArray(items) | DynSolValue::Tuple(items) => {
            items.iter().try_for_each(check_width)
        }
        _ => Ok(()),
    }
}

/// Two's complement fit: the magnitude (or its complement for negatives)
/// must leave the sign bit of an `bits`-wide integer free.
fn int_fits(v: I256, bits: usize) -> bool {
    let magnitude = if v.is_negative() { !v.into_raw() } else { v.into_raw() };
    magnitude.bit_len() < bits
}
