//! # OSM-15 Core
//!
//! Pure primitives for the Octra Structured Message standard: typed-data
//! hashing with domain separation, and Ed25519 signing over the result.
//!
//! This crate contains no I/O and no logging. Every function is a pure
//! computation over its inputs and may be called from any thread.
//!
//! ## Pipeline
//!
//! 1. [`canonical`] resolves a primary type's dependencies and renders its
//!    canonical type signature.
//! 2. [`encoding`] hashes record values field by field ([`hash_struct`]).
//! 3. [`digest`] frames the domain and message hashes under a fixed prefix
//!    and hashes the result into a [`TypedDigest`].
//! 4. [`signer`] signs or verifies that digest.
//!
//! ## Usage
//!
//! ```rust
//! use osm15_core::{compute_digest, sign_typed_data, verify_typed_data, Keypair, TypedData};
//!
//! let data: TypedData = serde_json::from_str(r#"{
//!     "domain": {"name": "OctraPay", "version": "1", "chainId": 1},
//!     "types": {"Mail": [{"name": "content", "type": "string"}]},
//!     "primaryType": "Mail",
//!     "message": {"content": "hello"}
//! }"#).unwrap();
//!
//! let keypair = Keypair::generate();
//! let signature = sign_typed_data(&data, &keypair).unwrap();
//! assert!(verify_typed_data(&data, &signature, &keypair.public_key()).unwrap());
//! ```

pub mod canonical;
pub mod config;
pub mod crypto;
pub mod digest;
pub mod encoding;
pub mod error;
pub mod signer;
pub mod types;
pub mod validation;

pub use canonical::{encode_type, resolve_dependencies, type_hash};
pub use crypto::{
    derive_address, generate_keypair, Address, Keypair, PublicKey, Seed, Sha256Hash, Signature,
    TypedDigest,
};
pub use digest::{compute_digest, hash_typed_data, signing_body, TypedDataHashes};
pub use encoding::{encode_value, hash_struct};
pub use error::{CoreError, Result, SchemaError};
pub use signer::{sign_digest, sign_typed_data, signer_address, verify_typed_data};
pub use types::{TypeDictionary, TypeMember, TypedData, TypedDomain, TypedValue};
pub use validation::validate_schema;
