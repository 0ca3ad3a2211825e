//! Golden test vectors for deterministic verification.
//!
//! Each vector pins the canonical type signature, the domain and message
//! struct hashes, the final digest, and the Ed25519 signature and address
//! for a fixed seed. Any change to the encoding rules shows up here first.

use osm15_core::{encode_type, hash_typed_data, sign_typed_data, Keypair, Seed, TypedData};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Seed for deterministic key generation.
    pub seed: [u8; 32],
    /// The typed-data record as JSON.
    pub data_json: &'static str,
    /// Expected canonical type signature of the primary type.
    pub expected_encode_type: &'static str,
    /// Expected domain struct hash (hex).
    pub expected_domain_hash: &'static str,
    /// Expected message struct hash (hex).
    pub expected_message_hash: &'static str,
    /// Expected signing digest (hex).
    pub expected_digest: &'static str,
    /// Expected public key for `seed` (hex).
    pub expected_public_key: &'static str,
    /// Expected signature over the digest (hex).
    pub expected_signature: &'static str,
    /// Expected address for `seed`.
    pub expected_address: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "mail",
            seed: [0x42; 32],
            data_json: r#"{
                "domain": {"name": "OctraMail", "version": "1", "chainId": 1},
                "types": {
                    "Mail": [
                        {"name": "from", "type": "address"},
                        {"name": "to", "type": "address"},
                        {"name": "content", "type": "string"}
                    ]
                },
                "primaryType": "Mail",
                "message": {
                    "from": "octAlice",
                    "to": "octBob",
                    "content": "Octra is awesome"
                }
            }"#,
            expected_encode_type: "Mail(address from,address to,string content)",
            expected_domain_hash: "da799266c203a9d704043299215ed14cc8b2b3f87341e1fd1acd40b4b77af8f7",
            expected_message_hash: "089c8f55eb495c303a08d20c27bd9fe80649f0f5a0970f56e1064f17cc6ca6fe",
            expected_digest: "f068b56c4030d638df749787d75cabbf4bff39226e0f250058665d8d0ce5cb7c",
            expected_public_key: "2152f8d19b791d24453242e15f2eab6cb7cffa7b6a5ed30097960e069881db12",
            expected_signature: "5c837eec2712a495efcfd7860fb4b9fc4613d038d4a5d580113975a2eac0f1a7\
                9bca443a9b8dcd46273072bf8cf07d30e982e84848aa3cd6445f2e0cad252900",
            expected_address: "oct4Ggu7KR7npHqno1xRbPsGeRjW4N1aDzk4oDAvQFBxJN2",
        },
        GoldenVector {
            name: "wallet_assets",
            seed: [0x42; 32],
            data_json: r#"{
                "domain": {"name": "OctraVault", "version": "1", "chainId": 1},
                "types": {
                    "Wallet": [
                        {"name": "owner", "type": "address"},
                        {"name": "assets", "type": "Asset[]"}
                    ],
                    "Asset": [
                        {"name": "name", "type": "string"},
                        {"name": "amount", "type": "uint256"}
                    ]
                },
                "primaryType": "Wallet",
                "message": {
                    "owner": "octAlice",
                    "assets": [
                        {"name": "OCT", "amount": 1000},
                        {"name": "USDC", "amount": "250"}
                    ]
                }
            }"#,
            expected_encode_type: "Wallet(address owner,Asset[] assets)Asset(string name,uint256 amount)",
            expected_domain_hash: "dc0ed8fbfd275f10d5b61931102244f9dfccf06ca5f1c12cdc926ffdf5346e3f",
            expected_message_hash: "905de256865d5a418e1e852136b279be02284f9fb2c2a2ac04dd28ca60dd677a",
            expected_digest: "14ab82e10d980e5a468404633d85fc1355ee646c9c7ceeb929af007df0bdd492",
            expected_public_key: "2152f8d19b791d24453242e15f2eab6cb7cffa7b6a5ed30097960e069881db12",
            expected_signature: "13c7b9611db95be510f2d02c2e7e6b2d05bb8390ee8ddbda4f08e3218320d842\
                a0c28060207a3afdd52db0a642b0a233f608d79ea6b7669333f4e05e11a0b90c",
            expected_address: "oct4Ggu7KR7npHqno1xRbPsGeRjW4N1aDzk4oDAvQFBxJN2",
        },
        GoldenVector {
            name: "nested_order",
            seed: [0x01; 32],
            data_json: r#"{
                "domain": {"name": "OctraShop", "version": "2", "chainId": 42},
                "types": {
                    "Order": [
                        {"name": "buyer", "type": "Person"},
                        {"name": "items", "type": "Item[]"},
                        {"name": "paid", "type": "bool"}
                    ],
                    "Person": [
                        {"name": "name", "type": "string"},
                        {"name": "wallet", "type": "address"}
                    ],
                    "Item": [
                        {"name": "sku", "type": "string"},
                        {"name": "qty", "type": "uint32"}
                    ]
                },
                "primaryType": "Order",
                "message": {
                    "buyer": {"name": "Carol", "wallet": "octCarol"},
                    "items": [
                        {"sku": "A-1", "qty": 2},
                        {"sku": "B-7", "qty": 0}
                    ],
                    "paid": true
                }
            }"#,
            expected_encode_type: "Order(Person buyer,Item[] items,bool paid)Item(string sku,uint32 qty)Person(string name,address wallet)",
            expected_domain_hash: "b6b7d70530a3227461711bb9f8b6424e30a1ea50bd85d9e664f05cdb09f53e97",
            expected_message_hash: "10abfac348a1ed72c486fb9174fc69414ccc1de9bfcf83440bd9d6f5a352d2d1",
            expected_digest: "40960ba4a657aec8e62ec89852d776127957140c5a94ab8123ddd09655afa5d8",
            expected_public_key: "8a88e3dd7409f195fd52db2d3cba5d72ca6709bf1d94121bf3748801b40f6f5c",
            expected_signature: "e0c33c0df6a472adbd795160a72bcb7ee07fab428e91821824dad0e58acd3afe\
                e3b5952e07cb675890a6aa59675a4d865e2c9c9b648792147e85315e4af25002",
            expected_address: "oct4XmjKEd9A96KhoMX94zWJmd28dcPisbWGYWtad1dQ9v5",
        },
        GoldenVector {
            name: "absent_fields",
            seed: [0x00; 32],
            data_json: r#"{
                "domain": {"name": "OctraPay", "version": "1", "chainId": 7},
                "types": {
                    "Transfer": [
                        {"name": "to", "type": "address"},
                        {"name": "amount", "type": "uint64"},
                        {"name": "memo", "type": "string"},
                        {"name": "urgent", "type": "bool"}
                    ]
                },
                "primaryType": "Transfer",
                "message": {
                    "to": "octBob"
                }
            }"#,
            expected_encode_type: "Transfer(address to,uint64 amount,string memo,bool urgent)",
            expected_domain_hash: "71917ac3fce047d508939240209f69f70655462e8d1f612a50009cc45e7f368e",
            expected_message_hash: "4c864647c3e2475b5a55b8c4725b3f14778a03768e3b221b25904dcb0de6a22a",
            expected_digest: "97900a9d23fddb57fa536e5dc90abdf6e979942637b42fcdeaabbbcdbbdfbca7",
            expected_public_key: "3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29",
            expected_signature: "a22386bbec7ab722aff034f490ad301d6d9de7edc1748f9d4da88a5819fc0cc4\
                4ef69be39d492e555d6f37c69466f1610306d11c43a311c7333c1f46631c280f",
            expected_address: "oct2KagShR4Usj2uARXJeDw7XJEKvQ3XDr84dC47hUB3Uyd",
        },
    ]
}

/// Parse the record of a golden vector.
pub fn typed_data_from_vector(vector: &GoldenVector) -> TypedData {
    serde_json::from_str(vector.data_json).expect("golden vector JSON is valid")
}

/// The keypair of a golden vector.
pub fn keypair_from_vector(vector: &GoldenVector) -> Keypair {
    Keypair::from_seed(&Seed::from_bytes(vector.seed))
}

/// Recompute every vector and compare against the pinned values.
///
/// Returns `(name, matches, mismatch description)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let mismatches = check_vector(v);
            (v.name.to_string(), mismatches.is_empty(), mismatches.join(", "))
        })
        .collect()
}

fn check_vector(v: &GoldenVector) -> Vec<String> {
    let data = typed_data_from_vector(v);
    let keypair = keypair_from_vector(v);
    let mut mismatches = Vec::new();

    let mut check = |field: &str, got: String, expected: &str| {
        if got != expected {
            mismatches.push(format!("{field}: got {got}"));
        }
    };

    check(
        "encode_type",
        encode_type(&data.primary_type, &data.working_types()),
        v.expected_encode_type,
    );

    match hash_typed_data(&data) {
        Ok(hashes) => {
            check("domain_hash", hashes.domain_hash.to_hex(), v.expected_domain_hash);
            check("message_hash", hashes.message_hash.to_hex(), v.expected_message_hash);
            check("digest", hashes.digest().to_hex(), v.expected_digest);
        }
        Err(e) => check("digest", format!("error: {e}"), v.expected_digest),
    }

    check("public_key", keypair.public_key().to_hex(), v.expected_public_key);
    check("address", keypair.address().to_string(), v.expected_address);

    match sign_typed_data(&data, &keypair) {
        Ok(sig) => check("signature", sig.to_hex(), v.expected_signature),
        Err(e) => check("signature", format!("error: {e}"), v.expected_signature),
    }

    mismatches
}
