//! An unlocked signing identity.
//!
//! A [`Wallet`] holds a keypair in memory. It is created fresh, from a raw
//! seed, or by unlocking a keystore record, and can be sealed back into a
//! keystore with [`Wallet::lock`].

use std::fmt;

use tracing::{debug, warn};

use osm15_core::{
    compute_digest, generate_keypair, sign_digest, Address, Keypair, PublicKey, Seed, Signature,
    TypedData,
};
use osm15_keystore::{Keystore, KeystoreConfig};

use crate::error::Result;
use crate::payload::SignedPayload;

/// An in-memory keypair with its cached address.
#[derive(Clone)]
pub struct Wallet {
    keypair: Keypair,
    address: Address,
}

impl Wallet {
    /// A wallet with a fresh random key.
    pub fn generate() -> Self {
        Self::from_keypair(generate_keypair())
    }

    /// A wallet for an existing seed.
    pub fn from_seed(seed: &Seed) -> Self {
        Self::from_keypair(Keypair::from_seed(seed))
    }

    pub fn from_keypair(keypair: Keypair) -> Self {
        let address = keypair.address();
        Self { keypair, address }
    }

    /// Unlock a keystore given as JSON.
    pub fn unlock(keystore_json: &str, password: &str) -> Result<Self> {
        let keystore = Keystore::from_json(keystore_json)?;
        Self::unlock_keystore(&keystore, password)
    }

    /// Unlock a parsed keystore record.
    pub fn unlock_keystore(keystore: &Keystore, password: &str) -> Result<Self> {
        let seed = keystore.decrypt(password)?;
        let wallet = Self::from_seed(&seed);
        debug!(address = %wallet.address, "wallet unlocked");
        Ok(wallet)
    }

    /// Seal this wallet's seed into a new keystore record.
    pub fn lock(&self, password: &str, config: &KeystoreConfig) -> Result<Keystore> {
        Ok(Keystore::encrypt(&self.keypair.seed(), password, config)?)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn public_key(&self) -> PublicKey {
        self.keypair.public_key()
    }

    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    /// Sign a typed-data record.
    pub fn sign(&self, data: &TypedData) -> Result<Signature> {
        let digest = compute_digest(data)?;
        let signature = sign_digest(&digest, &self.keypair);
        let digest_hex = digest.to_hex();
        debug!(
            address = %self.address,
            primary_type = %data.primary_type,
            digest = %&digest_hex[..16],
            "signed typed data"
        );
        Ok(signature)
    }

    /// Sign a record and bundle it with its signature.
    pub fn sign_payload(&self, data: &TypedData) -> Result<SignedPayload> {
        let signature = self.sign(data)?;
        Ok(SignedPayload::new(data.clone(), signature))
    }

    /// Sign every record independently.
    ///
    /// Results are in input order. A failing record yields an `Err` in its
    /// own slot and does not affect the others.
    pub fn sign_all<'a, I>(&self, records: I) -> Vec<Result<SignedPayload>>
    where
        I: IntoIterator<Item = &'a TypedData>,
    {
        records
            .into_iter()
            .enumerate()
            .map(|(index, data)| {
                let result = self.sign_payload(data);
                if let Err(e) = &result {
                    warn!(index, primary_type = %data.primary_type, error = %e, "batch item failed");
                }
                result
            })
            .collect()
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
