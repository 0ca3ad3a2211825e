//! # OSM-15
//!
//! The unified API for the Octra Structured Message standard: deterministic,
//! domain-separated hashing and Ed25519 signing of typed records, with
//! password-protected keystores for the signing seed.
//!
//! ## Overview
//!
//! - **Typed data**: a record with a domain, a type dictionary, a primary
//!   type and a message. Its digest commits to all four.
//! - **Signed payload**: a record plus its base64 signature, as JSON.
//! - **Wallet**: an unlocked keypair that signs records one at a time or in
//!   batches where each item fails on its own.
//! - **Keystore**: scrypt + AEAD protection for the 32-byte seed.
//!
//! ## Usage
//!
//! ```rust
//! use osm15::{verify_json, KdfParams, KeystoreConfig, TypedData, Wallet};
//!
//! let data: TypedData = serde_json::from_str(r#"{
//!     "domain": {"name": "OctraPay", "version": "1", "chainId": 1},
//!     "types": {"Transfer": [
//!         {"name": "to", "type": "address"},
//!         {"name": "amount", "type": "uint256"}
//!     ]},
//!     "primaryType": "Transfer",
//!     "message": {"to": "octBob", "amount": 1000}
//! }"#).unwrap();
//!
//! let wallet = Wallet::generate();
//! let json = wallet.sign_payload(&data).unwrap().to_json().unwrap();
//! assert!(verify_json(&json, &wallet.public_key()).unwrap());
//!
//! let config = KeystoreConfig::default().with_kdf(KdfParams::new(1024, 8, 1));
//! let keystore = wallet.lock("password", &config).unwrap();
//! let restored = Wallet::unlock(&keystore.to_json().unwrap(), "password").unwrap();
//! assert_eq!(restored.address(), wallet.address());
//! ```
//!
//! ## Re-exports
//!
//! - `osm15::core` - hashing, signing and key types
//! - `osm15::keystore` - keystore records and ciphers

pub mod error;
pub mod payload;
pub mod wallet;

// Re-export component crates
pub use osm15_core as core;
pub use osm15_keystore as keystore;

pub use error::{Error, Result};
pub use payload::{export_json, verify_json, SignedPayload};
pub use wallet::Wallet;

// Re-export commonly used types
pub use osm15_core::{
    compute_digest, derive_address, encode_type, generate_keypair, hash_struct, sign_typed_data,
    signer_address, signing_body, verify_typed_data, Address, Keypair, PublicKey, Seed,
    Signature, TypeDictionary, TypeMember, TypedData, TypedDigest, TypedDomain, TypedValue,
};
pub use osm15_keystore::{
    decrypt_key, encrypt_key, CipherKind, KdfParams, Keystore, KeystoreConfig,
};
