//! Digest construction with domain separation.
//!
//! The signing body is
//!
//! ```text
//! "\x19Octra Typed Data:\n" || "64" || "\n" || domain_hash || message_hash
//! ```
//!
//! and the digest is its SHA-256. The explicit length binds the prefix to a
//! payload of exactly two 32-byte hashes, so no (domain, message) pair can
//! shift bytes across the boundary of another.
//!
//! **CRITICAL**: This framing is FROZEN. Changes break all existing signatures.

use crate::config::{DIGEST_LEN, DOMAIN_TYPE_NAME, TYPED_DATA_PREFIX};
use crate::crypto::{Sha256Hash, TypedDigest};
use crate::encoding::hash_struct;
use crate::error::Result;
use crate::types::TypedData;
use crate::validation::validate_schema;

/// The intermediate hashes of a typed-data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedDataHashes {
    /// Struct hash of the domain record.
    pub domain_hash: Sha256Hash,
    /// Struct hash of the message under the primary type.
    pub message_hash: Sha256Hash,
}

impl TypedDataHashes {
    /// Frame the two hashes into the signing body.
    pub fn signing_body(&self) -> Vec<u8> {
        let payload_len = (2 * DIGEST_LEN).to_string();
        let mut body =
            Vec::with_capacity(TYPED_DATA_PREFIX.len() + payload_len.len() + 1 + 2 * DIGEST_LEN);
        body.extend_from_slice(TYPED_DATA_PREFIX);
        body.extend_from_slice(payload_len.as_bytes());
        body.push(b'\n');
        body.extend_from_slice(self.domain_hash.as_bytes());
        body.extend_from_slice(self.message_hash.as_bytes());
        body
    }

    /// The final digest: SHA-256 of the signing body.
    pub fn digest(&self) -> TypedDigest {
        Sha256Hash::hash(&self.signing_body())
    }
}

/// Validate a record and compute its domain and message struct hashes.
///
/// The reserved domain type is injected into a working copy of the
/// dictionary; `data.types` is never modified.
pub fn hash_typed_data(data: &TypedData) -> Result<TypedDataHashes> {
    let types = data.working_types();
    validate_schema(&data.primary_type, &types)?;

    let domain_hash = hash_struct(DOMAIN_TYPE_NAME, &data.domain.to_value(), &types)?;
    let message_hash = hash_struct(&data.primary_type, &data.message, &types)?;

    Ok(TypedDataHashes {
        domain_hash,
        message_hash,
    })
}

/// Compute the 32-byte signing digest of a record.
pub fn compute_digest(data: &TypedData) -> Result<TypedDigest> {
    Ok(hash_typed_data(data)?.digest())
}

/// The exact bytes that are hashed into the digest.
pub fn signing_body(data: &TypedData) -> Result<Vec<u8>> {
    Ok(hash_typed_data(data)?.signing_body())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, SchemaError};
    use serde_json::json;

    fn mail(domain_name: &str) -> TypedData {
        serde_json::from_value(json!({
            "domain": {"name": domain_name, "version": "1", "chainId": 1},
            "types": {"Mail": [{"name": "content", "type": "string"}]},
            "primaryType": "Mail",
            "message": {"content": "Octra is awesome"}
        }))
        .unwrap()
    }

    #[test]
    fn test_signing_body_layout() {
        let body = signing_body(&mail("AppA")).unwrap();
        let header = b"\x19Octra Typed Data:\n64\n";

        assert_eq!(body.len(), header.len() + 64);
        assert_eq!(&body[..header.len()], header);
    }

    #[test]
    fn test_digest_is_hash_of_body() {
        let data = mail("AppA");
        let body = signing_body(&data).unwrap();
        assert_eq!(compute_digest(&data).unwrap(), Sha256Hash::hash(&body));
    }

    #[test]
    fn test_digest_deterministic() {
        let data = mail("AppA");
        assert_eq!(compute_digest(&data).unwrap(), compute_digest(&data).unwrap());
    }

    #[test]
    fn test_domain_isolation() {
        assert_ne!(
            compute_digest(&mail("AppA")).unwrap(),
            compute_digest(&mail("AppB")).unwrap()
        );

        let mut other_chain = mail("AppA");
        other_chain.domain.chain_id = 2;
        assert_ne!(
            compute_digest(&mail("AppA")).unwrap(),
            compute_digest(&other_chain).unwrap()
        );
    }

    fn transfer(member_name: &str, member_type: &str) -> TypedData {
        serde_json::from_value(json!({
            "domain": {"name": "AppA", "version": "1", "chainId": 1},
            "types": {"Transfer": [
                {"name": "to", "type": "address"},
                {"name": member_name, "type": member_type}
            ]},
            "primaryType": "Transfer",
            "message": {"to": "octBob", (member_name): "1000"}
        }))
        .unwrap()
    }

    #[test]
    fn test_member_rename_changes_digest() {
        // Same value, same type, only the member name differs
        assert_ne!(
            compute_digest(&transfer("amount", "uint256")).unwrap(),
            compute_digest(&transfer("amt", "uint256")).unwrap()
        );
    }

    #[test]
    fn test_member_type_change_changes_digest() {
        let base = compute_digest(&transfer("amount", "uint256")).unwrap();

        // "1000" encodes identically under both integer widths
        assert_ne!(base, compute_digest(&transfer("amount", "uint128")).unwrap());
        // and identically as text, so only the declaration differs here too
        assert_ne!(
            compute_digest(&transfer("amount", "string")).unwrap(),
            compute_digest(&transfer("amount", "address")).unwrap()
        );
    }

    #[test]
    fn test_user_domain_declaration_is_replaced() {
        let plain = mail("AppA");
        let mut shadowed = plain.clone();
        shadowed.types.insert(
            DOMAIN_TYPE_NAME.into(),
            vec![crate::types::TypeMember::new("evil", "string")],
        );

        // The caller's dictionary still holds its own entry
        assert_eq!(shadowed.types[DOMAIN_TYPE_NAME].len(), 1);
        assert_eq!(
            hash_typed_data(&plain).unwrap().domain_hash,
            hash_typed_data(&shadowed).unwrap().domain_hash
        );
    }

    #[test]
    fn test_undeclared_primary_type_fails() {
        let mut data = mail("AppA");
        data.primary_type = "Letter".into();
        assert!(matches!(
            compute_digest(&data),
            Err(CoreError::Schema(SchemaError::UnknownPrimaryType(_)))
        ));
    }

    #[test]
    fn test_message_encoding_error_propagates() {
        let mut data = mail("AppA");
        data.message
            .insert("content".into(), crate::types::TypedValue::Array(vec![]));
        assert!(matches!(
            compute_digest(&data),
            Err(CoreError::Schema(SchemaError::TypeMismatch { .. }))
        ));
    }
}
