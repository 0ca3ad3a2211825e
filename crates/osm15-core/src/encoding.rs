//! Struct hashing and value encoding.
//!
//! Every value contributes exactly 32 bytes to its parent:
//!
//! - `T[]`: SHA-256 of the concatenated element contributions
//! - record: `hash_struct` = SHA-256(type_hash || member contributions);
//!   an absent record is SHA-256 of the empty string
//! - `string` / `address`: SHA-256 of the UTF-8 text
//! - integer-like: SHA-256 of the canonical decimal rendering
//! - anything else: SHA-256 of the JSON serialization
//!
//! Prefixing the member contributions with the type hash is what gives two
//! record types with identical field lists distinct struct hashes.

use std::collections::BTreeMap;

use crate::canonical::type_hash;
use crate::config::DIGEST_LEN;
use crate::crypto::Sha256Hash;
use crate::error::{CoreError, Result, SchemaError};
use crate::types::{classify, TypeClass, TypeDictionary, TypedValue};

/// Stand-in for a member missing from the value map.
static ABSENT: TypedValue = TypedValue::Null;

/// Largest integral float with an exact decimal rendering.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// Hash one record value against its declared type.
///
/// Members are encoded in declaration order. A member missing from
/// `record` is encoded as an absent value, not rejected.
pub fn hash_struct(
    type_name: &str,
    record: &BTreeMap<String, TypedValue>,
    types: &TypeDictionary,
) -> Result<Sha256Hash> {
    let members = types.get(type_name).map(Vec::as_slice).unwrap_or_default();

    let mut buf = Vec::with_capacity(DIGEST_LEN * (members.len() + 1));
    buf.extend_from_slice(type_hash(type_name, types).as_bytes());

    for member in members {
        let value = record.get(&member.name).unwrap_or(&ABSENT);
        let encoded = encode_value(&member.type_name, value, types)?;
        buf.extend_from_slice(encoded.as_bytes());
    }

    Ok(Sha256Hash::hash(&buf))
}

/// Encode a single field value into its 32-byte contribution.
pub fn encode_value(type_name: &str, value: &TypedValue, types: &TypeDictionary) -> Result<Sha256Hash> {
    match classify(type_name, types) {
        TypeClass::Array(element_type) => {
            let TypedValue::Array(items) = value else {
                return Err(mismatch(type_name, "array", value));
            };
            let mut buf = Vec::with_capacity(DIGEST_LEN * items.len());
            for item in items {
                buf.extend_from_slice(encode_value(element_type, item, types)?.as_bytes());
            }
            Ok(Sha256Hash::hash(&buf))
        }
        TypeClass::Record => match value {
            TypedValue::Record(fields) => hash_struct(type_name, fields, types),
            // No recursion: a self-referential type would never bottom out
            TypedValue::Null => Ok(Sha256Hash::hash(b"")),
            other => Err(mismatch(type_name, "record", other)),
        },
        TypeClass::Text | TypeClass::Address => match value {
            TypedValue::Text(s) => Ok(Sha256Hash::hash(s.as_bytes())),
            TypedValue::Null => Ok(Sha256Hash::hash(b"")),
            other => Err(mismatch(type_name, "string", other)),
        },
        TypeClass::Integer => {
            let decimal = canonical_decimal(type_name, value)?;
            Ok(Sha256Hash::hash(decimal.as_bytes()))
        }
        TypeClass::Other | TypeClass::Unknown => {
            let json =
                serde_json::to_vec(value).map_err(|e| CoreError::EncodingError(e.to_string()))?;
            Ok(Sha256Hash::hash(&json))
        }
    }
}

fn mismatch(type_name: &str, expected: &'static str, found: &TypedValue) -> CoreError {
    SchemaError::TypeMismatch {
        type_name: type_name.to_string(),
        expected,
        found: found.kind(),
    }
    .into()
}

fn invalid_integer(type_name: &str, value: impl ToString) -> CoreError {
    SchemaError::InvalidInteger {
        type_name: type_name.to_string(),
        value: value.to_string(),
    }
    .into()
}

/// Canonical base-10 rendering of an integer-like value.
///
/// `1000`, `1000.0`, `"1000"` and `"001000"` all render as `1000`. Absent
/// values render as the empty string. Unsigned types reject negatives.
pub fn canonical_decimal(type_name: &str, value: &TypedValue) -> Result<String> {
    let decimal = match value {
        TypedValue::Null => return Ok(String::new()),
        TypedValue::Number(n) => {
            if let Some(u) = n.as_u64() {
                u.to_string()
            } else if let Some(i) = n.as_i64() {
                i.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT => {
                        (f as i64).to_string()
                    }
                    _ => return Err(invalid_integer(type_name, n)),
                }
            }
        }
        TypedValue::Text(s) => {
            normalize_decimal(s).ok_or_else(|| invalid_integer(type_name, s))?
        }
        other => return Err(mismatch(type_name, "integer", other)),
    };

    let signed = type_name.starts_with("int");
    if !signed && decimal.starts_with('-') {
        return Err(invalid_integer(type_name, decimal));
    }
    Ok(decimal)
}

/// Strip leading zeros from an optionally negative decimal string.
fn normalize_decimal(s: &str) -> Option<String> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return Some("0".to_string());
    }
    Some(if negative {
        format!("-{trimmed}")
    } else {
        trimmed.to_string()
    })
}
