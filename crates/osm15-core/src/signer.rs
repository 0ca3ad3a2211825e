//! Signing and verification of typed data.
//!
//! Verification always recomputes the digest from the record itself; a
//! digest or hash carried alongside the record is never trusted.

use crate::crypto::{derive_address, Address, Keypair, PublicKey, Signature, TypedDigest};
use crate::digest::compute_digest;
use crate::error::{CoreError, Result};
use crate::types::TypedData;

/// Sign the digest of `data`.
pub fn sign_typed_data(data: &TypedData, keypair: &Keypair) -> Result<Signature> {
    let digest = compute_digest(data)?;
    Ok(sign_digest(&digest, keypair))
}

/// Sign an already computed typed-data digest.
pub fn sign_digest(digest: &TypedDigest, keypair: &Keypair) -> Signature {
    keypair.sign(digest.as_bytes())
}

/// Check `signature` over `data` against `public_key`.
///
/// Returns `Ok(false)` for a signature that does not match. Schema errors
/// and undecodable public keys are returned as errors.
pub fn verify_typed_data(
    data: &TypedData,
    signature: &Signature,
    public_key: &PublicKey,
) -> Result<bool> {
    let digest = compute_digest(data)?;
    match public_key.verify(digest.as_bytes(), signature) {
        Ok(()) => Ok(true),
        Err(CoreError::InvalidSignature) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Verify, then return the signer's address.
///
/// Fails closed with [`CoreError::InvalidSignature`] so that the address of
/// an unverified key is never handed out.
pub fn signer_address(
    data: &TypedData,
    signature: &Signature,
    public_key: &PublicKey,
) -> Result<Address> {
    if !verify_typed_data(data, signature, public_key)? {
        return Err(CoreError::InvalidSignature);
    }
    Ok(derive_address(public_key))
}
