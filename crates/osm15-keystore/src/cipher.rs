//! Authenticated encryption of the raw seed.
//!
//! Provides AES-256-GCM (the default) and ChaCha20-Poly1305. Both produce
//! `ciphertext || tag` and use a 96-bit nonce.

use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{KeystoreError, Result};

/// Nonce size shared by both ciphers (12 bytes).
pub const NONCE_LEN: usize = 12;

/// Supported AEAD ciphers, identified by their persisted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherKind {
    /// AES-256-GCM, persisted as `aes-256-gcm`.
    #[default]
    Aes256Gcm,
    /// ChaCha20-Poly1305, persisted as `chacha20-poly1305`.
    ChaCha20Poly1305,
}

impl CipherKind {
    /// The name written to the `cipher` field.
    pub const fn name(&self) -> &'static str {
        match self {
            CipherKind::Aes256Gcm => "aes-256-gcm",
            CipherKind::ChaCha20Poly1305 => "chacha20-poly1305",
        }
    }

    /// Look up a cipher by its persisted name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "aes-256-gcm" => Some(CipherKind::Aes256Gcm),
            "chacha20-poly1305" => Some(CipherKind::ChaCha20Poly1305),
            _ => None,
        }
    }

    /// Nonce size for this cipher.
    pub const fn nonce_len(&self) -> usize {
        NONCE_LEN
    }

    /// Generate a fresh random nonce.
    pub fn generate_nonce(&self) -> Vec<u8> {
        let mut nonce = vec![0u8; self.nonce_len()];
        rand::thread_rng().fill_bytes(&mut nonce);
        nonce
    }
}

/// A 256-bit symmetric key, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKey([u8; 32]);

impl EncryptionKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Encrypt data with this key.
    pub fn seal(&self, cipher: CipherKind, nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        check_nonce(cipher, nonce)?;
        let sealed = match cipher {
            CipherKind::Aes256Gcm => {
                use aes_gcm::aead::{Aead, KeyInit};
                let aead = aes_gcm::Aes256Gcm::new_from_slice(&self.0)
                    .map_err(|e| KeystoreError::EncryptionError(e.to_string()))?;
                aead.encrypt(aes_gcm::Nonce::from_slice(nonce), plaintext)
            }
            CipherKind::ChaCha20Poly1305 => {
                use chacha20poly1305::aead::{Aead, KeyInit};
                let aead = chacha20poly1305::ChaCha20Poly1305::new_from_slice(&self.0)
                    .map_err(|e| KeystoreError::EncryptionError(e.to_string()))?;
                aead.encrypt(chacha20poly1305::Nonce::from_slice(nonce), plaintext)
            }
        };
        sealed.map_err(|e| KeystoreError::EncryptionError(e.to_string()))
    }

    /// Decrypt data with this key.
    ///
    /// Any failure (bad nonce length, tag mismatch) is reported as
    /// [`KeystoreError::InvalidPassword`].
    pub fn open(
        &self,
        cipher: CipherKind,
        nonce: &[u8],
        ciphertext: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>> {
        check_nonce(cipher, nonce).map_err(|_| KeystoreError::InvalidPassword)?;
        let opened = match cipher {
            CipherKind::Aes256Gcm => {
                use aes_gcm::aead::{Aead, KeyInit};
                let aead = aes_gcm::Aes256Gcm::new_from_slice(&self.0)
                    .map_err(|_| KeystoreError::InvalidPassword)?;
                aead.decrypt(aes_gcm::Nonce::from_slice(nonce), ciphertext)
            }
            CipherKind::ChaCha20Poly1305 => {
                use chacha20poly1305::aead::{Aead, KeyInit};
                let aead = chacha20poly1305::ChaCha20Poly1305::new_from_slice(&self.0)
                    .map_err(|_| KeystoreError::InvalidPassword)?;
                aead.decrypt(chacha20poly1305::Nonce::from_slice(nonce), ciphertext)
            }
        };
        opened
            .map(Zeroizing::new)
            .map_err(|_| KeystoreError::InvalidPassword)
    }
}

// from_slice panics on a length mismatch
fn check_nonce(cipher: CipherKind, nonce: &[u8]) -> Result<()> {
    if nonce.len() != cipher.nonce_len() {
        return Err(KeystoreError::EncryptionError(format!(
            "{} nonce must be {} bytes, got {}",
            cipher.name(),
            cipher.nonce_len(),
            nonce.len()
        )));
    }
    Ok(())
}
