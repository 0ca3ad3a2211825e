//! Proptest generators for property-based testing.

use std::collections::BTreeMap;

use proptest::prelude::*;

use osm15_core::{Keypair, PublicKey, Seed, TypedData, TypedDomain, TypedValue};

use crate::fixtures::{asset, wallet_types};

/// Generate a random seed.
pub fn seed() -> impl Strategy<Value = Seed> {
    any::<[u8; 32]>().prop_map(Seed::from_bytes)
}

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    seed().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a random public key.
pub fn public_key() -> impl Strategy<Value = PublicKey> {
    keypair().prop_map(|kp| kp.public_key())
}

/// Generate a domain separator.
pub fn domain() -> impl Strategy<Value = TypedDomain> {
    ("[A-Z][A-Za-z0-9]{0,15}", "[0-9]{1,2}", any::<u64>())
        .prop_map(|(name, version, chain_id)| TypedDomain::new(name, version, chain_id))
}

/// Generate a JSON-like value, nested up to three levels.
pub fn typed_value() -> impl Strategy<Value = TypedValue> {
    let leaf = prop_oneof![
        Just(TypedValue::Null),
        any::<bool>().prop_map(TypedValue::Bool),
        any::<u64>().prop_map(TypedValue::from),
        any::<i64>().prop_map(TypedValue::from),
        "[ -~]{0,16}".prop_map(TypedValue::Text),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(TypedValue::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(TypedValue::Record),
        ]
    })
}

/// Parameters for generating a `Wallet` record.
#[derive(Debug, Clone)]
pub struct WalletParams {
    pub seed: [u8; 32],
    pub domain: TypedDomain,
    pub owner: String,
    pub assets: Vec<(String, u64)>,
}

impl Arbitrary for WalletParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            any::<[u8; 32]>(), // seed
            domain(),
            "oct[1-9A-HJ-NP-Za-km-z]{8,44}",
            prop::collection::vec(("[A-Z]{2,6}", any::<u64>()), 0..6),
        )
            .prop_map(|(seed, domain, owner, assets)| WalletParams {
                seed,
                domain,
                owner,
                assets,
            })
            .boxed()
    }
}

impl WalletParams {
    pub fn keypair(&self) -> Keypair {
        Keypair::from_seed(&Seed::from_bytes(self.seed))
    }
}

/// Build the `Wallet` record described by `params`.
pub fn wallet_data_from_params(params: &WalletParams) -> TypedData {
    let assets = params
        .assets
        .iter()
        .map(|(name, amount)| asset(name, *amount))
        .collect();

    let mut message = BTreeMap::new();
    message.insert("owner".to_string(), TypedValue::from(params.owner.as_str()));
    message.insert("assets".to_string(), TypedValue::Array(assets));

    TypedData::new(params.domain.clone(), wallet_types(), "Wallet", message)
}
