//! # OSM-15 Keystore
//!
//! Password protection for raw Ed25519 signing seeds.
//!
//! A keystore record seals a 32-byte seed with an AEAD cipher under a key
//! derived from a password by scrypt. The record is self-describing: it
//! carries the cipher name, KDF name, cost parameters, salt and nonce, so a
//! record written with one [`KeystoreConfig`] opens under any other.
//!
//! ## Failure model
//!
//! Decryption reports a single [`KeystoreError::InvalidPassword`] for every
//! failure: wrong password, tag mismatch, unknown algorithm names, malformed
//! base64, hostile cost parameters, or an address that does not match the
//! recovered key. Nothing about the cause leaks to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use osm15_core::Seed;
//! use osm15_keystore::{KdfParams, Keystore, KeystoreConfig};
//!
//! let seed = Seed::from_bytes([7u8; 32]);
//! let config = KeystoreConfig::default().with_kdf(KdfParams::new(1024, 8, 1));
//!
//! let keystore = Keystore::encrypt(&seed, "correct horse", &config).unwrap();
//! let json = keystore.to_json().unwrap();
//!
//! let restored = Keystore::from_json(&json).unwrap();
//! assert_eq!(restored.decrypt("correct horse").unwrap(), seed);
//! assert!(restored.decrypt("battery staple").is_err());
//! ```

pub mod cipher;
pub mod config;
pub mod error;
pub mod kdf;
pub mod keystore;

pub use cipher::{CipherKind, EncryptionKey, NONCE_LEN};
pub use config::KeystoreConfig;
pub use error::{KeystoreError, Result};
pub use kdf::{KdfParams, KDF_NAME, SALT_LEN};
pub use keystore::{
    decrypt_key, encrypt_key, CipherParams, CryptoSection, KdfParamsRecord, Keystore,
};
