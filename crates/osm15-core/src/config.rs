//! Fixed protocol constants.
//!
//! **CRITICAL**: These values are part of the wire format. Changing any of
//! them changes every digest and every address.

/// Domain tag that opens every signing body.
///
/// The body is `TYPED_DATA_PREFIX || len || "\n" || domain_hash || message_hash`.
pub const TYPED_DATA_PREFIX: &[u8] = b"\x19Octra Typed Data:\n";

/// Reserved name of the domain record type injected into every dictionary.
pub const DOMAIN_TYPE_NAME: &str = "TypedDomain";

/// Network prefix for human-readable addresses.
pub const ADDRESS_PREFIX: &str = "oct";

/// Suffix marking a homogeneous array type.
pub const ARRAY_SUFFIX: &str = "[]";

/// Length of a digest or struct hash.
pub const DIGEST_LEN: usize = 32;

/// Length of an Ed25519 seed.
pub const SEED_LEN: usize = 32;

/// Length of an Ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;
