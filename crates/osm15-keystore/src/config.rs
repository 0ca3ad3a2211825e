//! Keystore configuration.

use crate::cipher::CipherKind;
use crate::kdf::KdfParams;

/// Settings used when sealing a new keystore record.
///
/// Decryption never consults this: every record carries its own cipher name
/// and KDF parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeystoreConfig {
    /// AEAD cipher for new records.
    pub cipher: CipherKind,
    /// scrypt cost for new records.
    pub kdf: KdfParams,
}

impl Default for KeystoreConfig {
    fn default() -> Self {
        Self {
            cipher: CipherKind::Aes256Gcm,
            kdf: KdfParams::default(),
        }
    }
}

impl KeystoreConfig {
    /// Use a different cipher.
    pub fn with_cipher(mut self, cipher: CipherKind) -> Self {
        self.cipher = cipher;
        self
    }

    /// Use different scrypt parameters.
    pub fn with_kdf(mut self, kdf: KdfParams) -> Self {
        self.kdf = kdf;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KeystoreConfig::default();
        assert_eq!(config.cipher.name(), "aes-256-gcm");
        assert_eq!(config.kdf, KdfParams::new(32768, 8, 1));
    }

    #[test]
    fn test_builders() {
        let config = KeystoreConfig::default()
            .with_cipher(CipherKind::ChaCha20Poly1305)
            .with_kdf(KdfParams::new(1024, 8, 1));
        assert_eq!(config.cipher, CipherKind::ChaCha20Poly1305);
        assert_eq!(config.kdf.n, 1024);
    }
}
