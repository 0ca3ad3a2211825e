//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::collections::BTreeMap;

use osm15_core::{
    sign_typed_data, Address, Keypair, PublicKey, Seed, Signature, TypeDictionary, TypeMember,
    TypedData, TypedDomain, TypedValue,
};
use osm15_keystore::{KdfParams, KeystoreConfig};

/// A test fixture with a signing keypair.
pub struct TestFixture {
    pub keypair: Keypair,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&Seed::from_bytes(seed)),
        }
    }

    pub fn public_key(&self) -> PublicKey {
        self.keypair.public_key()
    }

    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// Sign a record, panicking on schema errors.
    pub fn sign(&self, data: &TypedData) -> Signature {
        sign_typed_data(data, &self.keypair).expect("fixture record failed to sign")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}

/// Keystore settings cheap enough for tests (scrypt N = 1024).
pub fn fast_keystore_config() -> KeystoreConfig {
    KeystoreConfig::default().with_kdf(KdfParams::new(1024, 8, 1))
}

/// `Wallet(address owner,Asset[] assets)` with `Asset(string name,uint256 amount)`.
pub fn wallet_types() -> TypeDictionary {
    let mut types = TypeDictionary::new();
    types.insert(
        "Wallet".into(),
        vec![
            TypeMember::new("owner", "address"),
            TypeMember::new("assets", "Asset[]"),
        ],
    );
    types.insert(
        "Asset".into(),
        vec![
            TypeMember::new("name", "string"),
            TypeMember::new("amount", "uint256"),
        ],
    );
    types
}

/// One `Asset` record value.
pub fn asset(name: &str, amount: u64) -> TypedValue {
    TypedValue::record([
        ("name", TypedValue::from(name)),
        ("amount", TypedValue::from(amount)),
    ])
}

/// A `Wallet` record holding a single `OCT` asset of `amount`.
pub fn wallet_record(amount: u64) -> TypedData {
    let mut message = BTreeMap::new();
    message.insert("owner".to_string(), TypedValue::from("octAlice"));
    message.insert(
        "assets".to_string(),
        TypedValue::Array(vec![asset("OCT", amount)]),
    );
    TypedData::new(
        TypedDomain::new("OctraVault", "1", 1),
        wallet_types(),
        "Wallet",
        message,
    )
}

/// A one-field `Mail` record under the named domain.
pub fn mail_record(domain_name: &str) -> TypedData {
    let mut types = TypeDictionary::new();
    types.insert("Mail".into(), vec![TypeMember::new("content", "string")]);

    let mut message = BTreeMap::new();
    message.insert("content".to_string(), TypedValue::from("Octra is awesome"));

    TypedData::new(TypedDomain::new(domain_name, "1", 1), types, "Mail", message)
}
