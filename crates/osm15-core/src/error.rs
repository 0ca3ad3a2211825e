//! Error types for OSM-15 core.

use thiserror::Error;

/// A record does not match its declared schema.
///
/// These are never coerced into a default value: signing data that failed to
/// encode would produce a signature that does not cover the claimed structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("primary type {0:?} is not declared")]
    UnknownPrimaryType(String),

    #[error("type {owner:?} field {field:?} references undeclared type {missing:?}")]
    UnknownType {
        owner: String,
        field: String,
        missing: String,
    },

    #[error("type mismatch for {type_name}: expected {expected}, found {found}")]
    TypeMismatch {
        type_name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid integer for {type_name}: {value}")]
    InvalidInteger { type_name: String, value: String },
}

/// Core errors that can occur while hashing, signing or verifying.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}

impl CoreError {
    /// True if this error means the signature did not authenticate the record.
    pub fn is_authentication(&self) -> bool {
        matches!(self, CoreError::InvalidSignature)
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
