//! # OSM-15 Testkit
//!
//! Testing utilities for OSM-15.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known records with pinned type signatures, digests, signatures and addresses
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs and records for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the encoding so independent implementations can be
//! checked against each other:
//!
//! ```rust
//! use osm15_testkit::vectors::{all_vectors, typed_data_from_vector};
//! use osm15_core::compute_digest;
//!
//! for vector in all_vectors() {
//!     let data = typed_data_from_vector(&vector);
//!     let digest = compute_digest(&data).unwrap();
//!     assert_eq!(digest.to_hex(), vector.expected_digest);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use osm15_testkit::generators::{wallet_data_from_params, WalletParams};
//!
//! proptest! {
//!     #[test]
//!     fn digest_is_deterministic(params: WalletParams) {
//!         let d1 = compute_digest(&wallet_data_from_params(&params)).unwrap();
//!         let d2 = compute_digest(&wallet_data_from_params(&params)).unwrap();
//!         prop_assert_eq!(d1, d2);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use osm15_testkit::fixtures::{wallet_record, TestFixture};
//!
//! let fixture = TestFixture::new();
//! let signature = fixture.sign(&wallet_record(1000));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    fast_keystore_config, mail_record, multi_party_fixtures, wallet_record, wallet_types,
    TestFixture,
};
pub use generators::{wallet_data_from_params, WalletParams};
pub use vectors::{all_vectors, typed_data_from_vector, verify_all_vectors, GoldenVector};
