//! The persisted keystore record.
//!
//! ```json
//! {
//!   "address": "oct...",
//!   "crypto": {
//!     "cipher": "aes-256-gcm",
//!     "ciphertext": "<base64>",
//!     "cipherparams": { "iv": "<base64>" },
//!     "kdf": "scrypt",
//!     "kdfparams": { "n": 32768, "r": 8, "p": 1, "salt": "<base64>" }
//!   }
//! }
//! ```
//!
//! The record never holds the derived key or the plaintext seed. Each call
//! to [`encrypt_key`] draws a fresh salt and nonce, so sealing the same seed
//! twice yields unrelated records.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use osm15_core::config::SEED_LEN;
use osm15_core::{Address, Keypair, Seed};

use crate::cipher::CipherKind;
use crate::config::KeystoreConfig;
use crate::error::{KeystoreError, Result};
use crate::kdf::{KdfParams, KDF_NAME, SALT_LEN};

/// A password-protected signing seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keystore {
    /// Address of the sealed key.
    pub address: Address,
    /// Algorithm names, parameters and ciphertext.
    pub crypto: CryptoSection,
}

/// The `crypto` section of a keystore record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoSection {
    pub cipher: String,
    /// Base64 of `ciphertext || tag`.
    pub ciphertext: String,
    pub cipherparams: CipherParams,
    pub kdf: String,
    pub kdfparams: KdfParamsRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherParams {
    /// Base64 nonce.
    pub iv: String,
}

/// scrypt parameters as persisted, salt included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParamsRecord {
    #[serde(alias = "N")]
    pub n: u64,
    pub r: u32,
    pub p: u32,
    /// Base64 salt.
    pub salt: String,
}

impl KdfParamsRecord {
    /// The cost parameters without the salt.
    pub fn params(&self) -> KdfParams {
        KdfParams::new(self.n, self.r, self.p)
    }
}

impl Keystore {
    /// Seal `seed` under `password` with the given settings.
    pub fn encrypt(seed: &Seed, password: &str, config: &KeystoreConfig) -> Result<Self> {
        encrypt_key(seed, password, config)
    }

    /// Recover the seed.
    pub fn decrypt(&self, password: &str) -> Result<Seed> {
        decrypt_key(self, password)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| KeystoreError::DecodingError(e.to_string()))
    }

    /// Parse a record. Only the JSON shape is checked here; field contents
    /// are checked by [`Keystore::decrypt`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| KeystoreError::DecodingError(e.to_string()))
    }
}

/// Seal a seed into a new keystore record.
pub fn encrypt_key(seed: &Seed, password: &str, config: &KeystoreConfig) -> Result<Keystore> {
    config.kdf.validate()?;

    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    let nonce = config.cipher.generate_nonce();

    let key = config.kdf.derive_key(password.as_bytes(), &salt)?;
    let ciphertext = key.seal(config.cipher, &nonce, seed.as_bytes())?;

    Ok(Keystore {
        address: Keypair::from_seed(seed).address(),
        crypto: CryptoSection {
            cipher: config.cipher.name().to_string(),
            ciphertext: STANDARD.encode(ciphertext),
            cipherparams: CipherParams {
                iv: STANDARD.encode(&nonce),
            },
            kdf: KDF_NAME.to_string(),
            kdfparams: KdfParamsRecord {
                n: config.kdf.n,
                r: config.kdf.r,
                p: config.kdf.p,
                salt: STANDARD.encode(salt),
            },
        },
    })
}

/// Open a keystore record.
///
/// Every failure is reported as [`KeystoreError::InvalidPassword`]; callers
/// cannot tell a wrong password from a damaged or hostile record.
pub fn decrypt_key(keystore: &Keystore, password: &str) -> Result<Seed> {
    open_record(keystore, password).ok_or(KeystoreError::InvalidPassword)
}

fn open_record(keystore: &Keystore, password: &str) -> Option<Seed> {
    let crypto = &keystore.crypto;
    if crypto.kdf != KDF_NAME {
        return None;
    }
    let cipher = CipherKind::from_name(&crypto.cipher)?;
    let params = crypto.kdfparams.params();
    params.validate().ok()?;

    let salt = STANDARD.decode(&crypto.kdfparams.salt).ok()?;
    let nonce = STANDARD.decode(&crypto.cipherparams.iv).ok()?;
    let ciphertext = STANDARD.decode(&crypto.ciphertext).ok()?;

    let key = params.derive_key(password.as_bytes(), &salt).ok()?;
    let plaintext = key.open(cipher, &nonce, &ciphertext).ok()?;

    let mut bytes = Zeroizing::new([0u8; SEED_LEN]);
    if plaintext.len() != SEED_LEN {
        return None;
    }
    bytes.copy_from_slice(&plaintext);
    let seed = Seed::from_bytes(*bytes);

    (Keypair::from_seed(&seed).address() == keystore.address).then_some(seed)
}
