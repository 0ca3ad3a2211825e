//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of OSM-15 must produce identical:
//! - canonical type signature
//! - domain and message struct hashes
//! - signing body and digest
//! - signature (deterministic Ed25519)
//! - address

use osm15::core::config::TYPED_DATA_PREFIX;
use osm15::core::{hash_typed_data, CoreError, SchemaError};
use osm15::{
    compute_digest, encode_type, export_json, sign_typed_data, signing_body, verify_json,
    verify_typed_data, PublicKey, Signature, TypedData,
};
use osm15_testkit::vectors::{all_vectors, keypair_from_vector, typed_data_from_vector};
use serde::Serialize;
use serde_json::json;

fn hex32(s: &str) -> [u8; 32] {
    hex::decode(s).unwrap().try_into().unwrap()
}

fn hex64(s: &str) -> [u8; 64] {
    hex::decode(s).unwrap().try_into().unwrap()
}

#[test]
fn test_vectors_encode_type() {
    for v in all_vectors() {
        let data = typed_data_from_vector(&v);
        assert_eq!(
            encode_type(&data.primary_type, &data.working_types()),
            v.expected_encode_type,
            "encode_type mismatch for {}",
            v.name
        );
    }
}

#[test]
fn test_vectors_hashes() {
    for v in all_vectors() {
        let data = typed_data_from_vector(&v);
        let hashes = hash_typed_data(&data).unwrap();

        assert_eq!(hashes.domain_hash.to_hex(), v.expected_domain_hash, "domain_hash mismatch for {}", v.name);
        assert_eq!(hashes.message_hash.to_hex(), v.expected_message_hash, "message_hash mismatch for {}", v.name);
        assert_eq!(compute_digest(&data).unwrap().to_hex(), v.expected_digest, "digest mismatch for {}", v.name);
    }
}

#[test]
fn test_vectors_keys_and_signatures() {
    for v in all_vectors() {
        let data = typed_data_from_vector(&v);
        let keypair = keypair_from_vector(&v);

        assert_eq!(keypair.public_key().to_hex(), v.expected_public_key, "public_key mismatch for {}", v.name);
        assert_eq!(keypair.address().as_str(), v.expected_address, "address mismatch for {}", v.name);

        let signature = sign_typed_data(&data, &keypair).unwrap();
        assert_eq!(signature.to_hex(), v.expected_signature, "signature mismatch for {}", v.name);
    }
}

#[test]
fn test_vectors_verify_from_pinned_values() {
    // Verification uses only the pinned public key and signature
    for v in all_vectors() {
        let data = typed_data_from_vector(&v);
        let public_key = PublicKey::from_bytes(hex32(v.expected_public_key));
        let signature = Signature::from_bytes(hex64(v.expected_signature));

        assert!(verify_typed_data(&data, &signature, &public_key).unwrap(), "verify failed for {}", v.name);

        let json = export_json(&data, &signature).unwrap();
        assert!(verify_json(&json, &public_key).unwrap(), "verify_json failed for {}", v.name);
    }
}

#[test]
fn test_domain_prefix_exact_bytes() {
    // These bytes are FROZEN - changing them breaks all signatures
    assert_eq!(TYPED_DATA_PREFIX, b"\x19Octra Typed Data:\n");

    let v = &all_vectors()[0];
    let body = signing_body(&typed_data_from_vector(v)).unwrap();
    let expected = format!(
        "194f6374726120547970656420446174613a0a36340a{}{}",
        v.expected_domain_hash, v.expected_message_hash
    );
    assert_eq!(hex::encode(&body), expected);
}

#[test]
fn test_vectors_survive_json_roundtrip() {
    for v in all_vectors() {
        let data = typed_data_from_vector(&v);
        let reparsed: TypedData = serde_json::from_str(&serde_json::to_string(&data).unwrap()).unwrap();
        assert_eq!(compute_digest(&reparsed).unwrap().to_hex(), v.expected_digest, "{}", v.name);
    }
}

#[test]
fn print_golden_vectors_json() {
    #[derive(Serialize)]
    struct VectorEntry {
        name: &'static str,
        seed: String,
        data: serde_json::Value,
        encode_type: &'static str,
        domain_hash: &'static str,
        message_hash: &'static str,
        digest: &'static str,
        public_key: &'static str,
        signature: &'static str,
        address: &'static str,
    }

    let vectors: Vec<_> = all_vectors()
        .into_iter()
        .map(|v| VectorEntry {
            name: v.name,
            seed: hex::encode(v.seed),
            data: serde_json::from_str(v.data_json).unwrap(),
            encode_type: v.expected_encode_type,
            domain_hash: v.expected_domain_hash,
            message_hash: v.expected_message_hash,
            digest: v.expected_digest,
            public_key: v.expected_public_key,
            signature: v.expected_signature,
            address: v.expected_address,
        })
        .collect();

    let file = json!({
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Golden test vectors for OSM-15. Every implementation must produce identical outputs.",
        "prefix": String::from_utf8_lossy(TYPED_DATA_PREFIX),
        "vectors": vectors,
    });

    println!("{}", serde_json::to_string_pretty(&file).unwrap());
}

// =============================================================================
// REJECTION TEST VECTORS
// These test that invalid inputs are properly rejected.
// =============================================================================

fn transfer(amount_type: &str, amount: serde_json::Value) -> TypedData {
    serde_json::from_value(json!({
        "domain": {"name": "OctraPay", "version": "1", "chainId": 1},
        "types": {"Transfer": [
            {"name": "to", "type": "address"},
            {"name": "amount", "type": amount_type}
        ]},
        "primaryType": "Transfer",
        "message": {"to": "octBob", "amount": amount}
    }))
    .unwrap()
}

fn schema_error(data: &TypedData) -> SchemaError {
    match compute_digest(data) {
        Err(CoreError::Schema(e)) => e,
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_reject_unknown_primary_type() {
    let mut data = transfer("uint256", json!(1));
    data.primary_type = "Payment".into();
    assert_eq!(schema_error(&data), SchemaError::UnknownPrimaryType("Payment".into()));
}

#[test]
fn test_reject_unknown_member_type() {
    let data = transfer("Money", json!(1));
    assert!(matches!(schema_error(&data), SchemaError::UnknownType { .. }));
}

#[test]
fn test_reject_unknown_array_element_type() {
    let data = transfer("Money[]", json!([]));
    assert!(matches!(schema_error(&data), SchemaError::UnknownType { .. }));
}

#[test]
fn test_reject_text_for_integer() {
    let data = transfer("uint256", json!("one thousand"));
    assert!(matches!(schema_error(&data), SchemaError::InvalidInteger { .. }));
}

#[test]
fn test_reject_negative_unsigned() {
    assert!(matches!(
        schema_error(&transfer("uint256", json!(-5))),
        SchemaError::InvalidInteger { .. }
    ));
    assert!(compute_digest(&transfer("int256", json!(-5))).is_ok());
}

#[test]
fn test_reject_fractional_integer() {
    let data = transfer("uint256", json!(1.5));
    assert!(matches!(schema_error(&data), SchemaError::InvalidInteger { .. }));
}

#[test]
fn test_reject_scalar_for_array() {
    let data = transfer("uint256[]", json!(5));
    assert!(matches!(schema_error(&data), SchemaError::TypeMismatch { .. }));
}

#[test]
fn test_reject_absent_array() {
    let mut data = transfer("uint256[]", json!([1, 2]));
    data.message.remove("amount");
    assert!(matches!(schema_error(&data), SchemaError::TypeMismatch { .. }));
}

#[test]
fn test_reject_number_for_string() {
    let mut data = transfer("uint256", json!(1));
    data.message.insert("to".into(), 42u64.into());
    assert!(matches!(schema_error(&data), SchemaError::TypeMismatch { .. }));
}

#[test]
fn test_reject_invalid_signature() {
    let v = &all_vectors()[0];
    let data = typed_data_from_vector(v);
    let public_key = PublicKey::from_bytes(hex32(v.expected_public_key));

    let mut bytes = hex64(v.expected_signature);
    bytes[0] ^= 0x01;
    assert!(!verify_typed_data(&data, &Signature::from_bytes(bytes), &public_key).unwrap());

    assert!(!verify_typed_data(&data, &Signature::from_bytes([0xff; 64]), &public_key).unwrap());
}
