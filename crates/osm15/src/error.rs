//! Error types for the unified API.

use osm15_core::{CoreError, SchemaError};
use osm15_keystore::KeystoreError;
use thiserror::Error;

/// Errors that can occur in the unified API.
#[derive(Debug, Error)]
pub enum Error {
    /// Hashing, signing or verification error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Keystore error.
    #[error("keystore error: {0}")]
    Keystore(#[from] KeystoreError),

    /// Malformed signed-payload JSON.
    #[error("decoding error: {0}")]
    Decoding(String),

    /// Serialization failure.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl From<SchemaError> for Error {
    fn from(e: SchemaError) -> Self {
        Error::Core(CoreError::Schema(e))
    }
}

impl Error {
    /// Wrong password or a signature that does not verify.
    ///
    /// These are expected, user-recoverable conditions.
    pub fn is_authentication(&self) -> bool {
        match self {
            Error::Core(e) => e.is_authentication(),
            Error::Keystore(e) => e.is_authentication(),
            _ => false,
        }
    }

    /// The record does not match its declared schema.
    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Core(CoreError::Schema(_)))
    }

    /// Malformed JSON or base64 in a persisted artifact.
    pub fn is_decoding(&self) -> bool {
        matches!(
            self,
            Error::Decoding(_)
                | Error::Core(CoreError::DecodingError(_))
                | Error::Keystore(KeystoreError::DecodingError(_))
        )
    }
}

/// Result type for the unified API.
pub type Result<T> = std::result::Result<T, Error>;
