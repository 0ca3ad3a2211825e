//! Error types for the keystore.

use thiserror::Error;

/// Errors that can occur during keystore operations.
#[derive(Debug, Error)]
pub enum KeystoreError {
    /// The record could not be opened with this password.
    ///
    /// Deliberately uniform: a wrong password, a corrupted record, unknown
    /// algorithm names and out-of-range parameters all look the same.
    #[error("invalid password")]
    InvalidPassword,

    /// KDF parameters rejected before encryption.
    #[error("invalid kdf parameters: {0}")]
    InvalidKdfParams(String),

    /// Key derivation error.
    #[error("key derivation error: {0}")]
    KeyDerivationError(String),

    /// Encryption error.
    #[error("encryption error: {0}")]
    EncryptionError(String),

    /// Malformed keystore JSON.
    #[error("decoding error: {0}")]
    DecodingError(String),
}

impl KeystoreError {
    /// True for the uniform authentication failure.
    pub fn is_authentication(&self) -> bool {
        matches!(self, KeystoreError::InvalidPassword)
    }
}

/// Result type for keystore operations.
pub type Result<T> = std::result::Result<T, KeystoreError>;
