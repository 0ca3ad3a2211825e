//! Password-based key derivation (scrypt).

use crate::cipher::EncryptionKey;
use crate::error::{KeystoreError, Result};

/// Name written to the `kdf` field.
pub const KDF_NAME: &str = "scrypt";

/// Length of the random salt (32 bytes).
pub const SALT_LEN: usize = 32;

/// Length of the derived key (32 bytes).
pub const DERIVED_KEY_LEN: usize = 32;

/// Upper bound on `log2(N)`; records asking for more are refused.
pub const MAX_LOG_N: u8 = 20;

/// Upper bound on the parallelization parameter `p`.
pub const MAX_P: u32 = 16;

/// Upper bound on scrypt working memory, `128 * r * (N + p)` bytes (1 GiB).
pub const MAX_MEMORY_BYTES: u128 = 1 << 30;

/// scrypt cost parameters, persisted with every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KdfParams {
    /// CPU/memory cost; a power of two greater than 1.
    pub n: u64,
    /// Block size.
    pub r: u32,
    /// Parallelization.
    pub p: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            n: 32768,
            r: 8,
            p: 1,
        }
    }
}

impl KdfParams {
    pub const fn new(n: u64, r: u32, p: u32) -> Self {
        Self { n, r, p }
    }

    /// Check the parameters and convert them for the scrypt crate.
    fn to_scrypt(self) -> Result<scrypt::Params> {
        if self.n < 2 || !self.n.is_power_of_two() {
            return Err(KeystoreError::InvalidKdfParams(format!(
                "n must be a power of two greater than 1, got {}",
                self.n
            )));
        }
        if self.r == 0 || self.p == 0 {
            return Err(KeystoreError::InvalidKdfParams(
                "r and p must be positive".to_string(),
            ));
        }
        let log_n = self.n.trailing_zeros() as u8;
        if log_n > MAX_LOG_N {
            return Err(KeystoreError::InvalidKdfParams(format!(
                "n exceeds 2^{MAX_LOG_N}"
            )));
        }
        if self.p > MAX_P {
            return Err(KeystoreError::InvalidKdfParams(format!(
                "p exceeds {MAX_P}"
            )));
        }
        let memory = 128 * u128::from(self.r) * (u128::from(self.n) + u128::from(self.p));
        if memory > MAX_MEMORY_BYTES {
            return Err(KeystoreError::InvalidKdfParams(format!(
                "parameters need {memory} bytes of memory, limit is {MAX_MEMORY_BYTES}"
            )));
        }
        scrypt::Params::new(log_n, self.r, self.p, DERIVED_KEY_LEN)
            .map_err(|e| KeystoreError::InvalidKdfParams(e.to_string()))
    }

    /// Validate without deriving.
    pub fn validate(&self) -> Result<()> {
        self.to_scrypt().map(|_| ())
    }

    /// Derive a 32-byte symmetric key from a password and salt.
    pub fn derive_key(&self, password: &[u8], salt: &[u8]) -> Result<EncryptionKey> {
        let params = self.to_scrypt()?;
        let mut out = [0u8; DERIVED_KEY_LEN];
        scrypt::scrypt(password, salt, &params, &mut out)
            .map_err(|e| KeystoreError::KeyDerivationError(e.to_string()))?;
        let key = EncryptionKey::from_bytes(out);
        zeroize::Zeroize::zeroize(&mut out);
        Ok(key)
    }
}
