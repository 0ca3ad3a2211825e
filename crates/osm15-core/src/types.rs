//! Typed-data model: type declarations, domain, values and records.
//!
//! Values are a closed tagged variant. The declared type string drives
//! encoding, and a value whose variant does not fit the declared type is
//! rejected instead of coerced.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ARRAY_SUFFIX, DOMAIN_TYPE_NAME};

/// One field of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeMember {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl TypeMember {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Type name → ordered field list.
///
/// Member order is significant: it fixes field-encoding order.
pub type TypeDictionary = BTreeMap<String, Vec<TypeMember>>;

/// The domain separator shared by every record of one application/network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypedDomain {
    pub name: String,
    pub version: String,
    #[serde(rename = "chainId")]
    pub chain_id: u64,
}

impl TypedDomain {
    pub fn new(name: impl Into<String>, version: impl Into<String>, chain_id: u64) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
        }
    }

    /// The reserved type declaration for the domain record.
    pub fn type_members() -> Vec<TypeMember> {
        vec![
            TypeMember::new("name", "string"),
            TypeMember::new("version", "string"),
            TypeMember::new("chainId", "uint256"),
        ]
    }

    /// The domain as a record value, keyed by its declared field names.
    pub fn to_value(&self) -> BTreeMap<String, TypedValue> {
        let mut map = BTreeMap::new();
        map.insert("name".to_string(), TypedValue::Text(self.name.clone()));
        map.insert("version".to_string(), TypedValue::Text(self.version.clone()));
        map.insert("chainId".to_string(), TypedValue::from(self.chain_id));
        map
    }
}

/// A single field value.
///
/// Deserializes from any JSON value. `Null` stands for an absent field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypedValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Array(Vec<TypedValue>),
    Record(BTreeMap<String, TypedValue>),
}

impl TypedValue {
    /// Build a record value from `(field, value)` pairs.
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TypedValue)>,
    {
        TypedValue::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Short name of the variant, used in mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            TypedValue::Null => "null",
            TypedValue::Bool(_) => "bool",
            TypedValue::Number(_) => "number",
            TypedValue::Text(_) => "string",
            TypedValue::Array(_) => "array",
            TypedValue::Record(_) => "record",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        TypedValue::Text(s.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        TypedValue::Text(s)
    }
}

impl From<u64> for TypedValue {
    fn from(n: u64) -> Self {
        TypedValue::Number(n.into())
    }
}

impl From<i64> for TypedValue {
    fn from(n: i64) -> Self {
        TypedValue::Number(n.into())
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Bool(b)
    }
}

impl From<Vec<TypedValue>> for TypedValue {
    fn from(items: Vec<TypedValue>) -> Self {
        TypedValue::Array(items)
    }
}

impl From<BTreeMap<String, TypedValue>> for TypedValue {
    fn from(map: BTreeMap<String, TypedValue>) -> Self {
        TypedValue::Record(map)
    }
}

/// A complete structured record: domain, schema, primary type and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedData {
    pub domain: TypedDomain,
    #[serde(default)]
    pub types: TypeDictionary,
    #[serde(rename = "primaryType")]
    pub primary_type: String,
    #[serde(default)]
    pub message: BTreeMap<String, TypedValue>,
}

impl TypedData {
    pub fn new(
        domain: TypedDomain,
        types: TypeDictionary,
        primary_type: impl Into<String>,
        message: BTreeMap<String, TypedValue>,
    ) -> Self {
        Self {
            domain,
            types,
            primary_type: primary_type.into(),
            message,
        }
    }

    /// A working copy of the dictionary with the reserved domain type injected.
    ///
    /// The record's own dictionary is left untouched.
    pub fn working_types(&self) -> TypeDictionary {
        let mut types = self.types.clone();
        types.insert(DOMAIN_TYPE_NAME.to_string(), TypedDomain::type_members());
        types
    }
}

/// Classification of a declared type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass<'a> {
    /// `T[]`, carrying the element type `T`.
    Array(&'a str),
    /// A key of the dictionary.
    Record,
    /// `string`: hashed as UTF-8.
    Text,
    /// `address`: hashed as its raw textual form.
    Address,
    /// Integer-like: hashed as a canonical decimal string.
    Integer,
    /// Other known primitives: hashed as JSON.
    Other,
    /// Neither a known primitive nor declared.
    Unknown,
}

/// Classify a type string against a dictionary.
pub fn classify<'a>(type_name: &'a str, types: &TypeDictionary) -> TypeClass<'a> {
    if let Some(base) = type_name.strip_suffix(ARRAY_SUFFIX) {
        return TypeClass::Array(base);
    }
    if types.contains_key(type_name) {
        return TypeClass::Record;
    }
    match type_name {
        "string" => TypeClass::Text,
        "address" => TypeClass::Address,
        "int" | "uint" | "chainId" => TypeClass::Integer,
        "bool" | "bytes" => TypeClass::Other,
        _ if is_sized(type_name, "uint", 8, 256) || is_sized(type_name, "int", 8, 256) => {
            TypeClass::Integer
        }
        _ if is_sized(type_name, "bytes", 1, 32) => TypeClass::Other,
        _ => TypeClass::Unknown,
    }
}

/// `uint8`, `int256`, `bytes32` ...: prefix followed by a size in range.
/// Integer sizes must also be a multiple of 8.
fn is_sized(type_name: &str, prefix: &str, min: u32, max: u32) -> bool {
    let Some(digits) = type_name.strip_prefix(prefix) else {
        return false;
    };
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Ok(size) = digits.parse::<u32>() else {
        return false;
    };
    let aligned = prefix == "bytes" || size % 8 == 0;
    (min..=max).contains(&size) && aligned
}

/// Strip every trailing `[]` from a type string.
pub fn base_type(type_name: &str) -> &str {
    let mut base = type_name;
    while let Some(inner) = base.strip_suffix(ARRAY_SUFFIX) {
        base = inner;
    }
    base
}
