//! Signed payload JSON: a record together with its signature.
//!
//! ```json
//! { "data": { "domain": ..., "types": ..., "primaryType": ..., "message": ... },
//!   "signature": "<base64>" }
//! ```
//!
//! The signature is the only thing carried alongside the record. Digests are
//! always recomputed on verification.

use serde::{Deserialize, Serialize};

use osm15_core::{
    sign_typed_data, signer_address, verify_typed_data, Address, Keypair, PublicKey, Signature,
    TypedData,
};

use crate::error::{Error, Result};

/// A typed-data record and its signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedPayload {
    pub data: TypedData,
    pub signature: Signature,
}

impl SignedPayload {
    pub fn new(data: TypedData, signature: Signature) -> Self {
        Self { data, signature }
    }

    /// Sign `data` and bundle it with the signature.
    pub fn sign(data: TypedData, keypair: &Keypair) -> Result<Self> {
        let signature = sign_typed_data(&data, keypair)?;
        Ok(Self { data, signature })
    }

    /// Check the embedded signature against `public_key`.
    pub fn verify(&self, public_key: &PublicKey) -> Result<bool> {
        Ok(verify_typed_data(&self.data, &self.signature, public_key)?)
    }

    /// Verify, then return the signer's address.
    pub fn signer(&self, public_key: &PublicKey) -> Result<Address> {
        Ok(signer_address(&self.data, &self.signature, public_key)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Encoding(e.to_string()))
    }

    /// Parse a signed payload; a bad signature encoding is a decoding error.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Decoding(e.to_string()))
    }
}

/// Serialize a record and its signature as signed-payload JSON.
pub fn export_json(data: &TypedData, signature: &Signature) -> Result<String> {
    SignedPayload::new(data.clone(), *signature).to_json()
}

/// Parse signed-payload JSON and verify it against `public_key`.
pub fn verify_json(json: &str, public_key: &PublicKey) -> Result<bool> {
    SignedPayload::from_json(json)?.verify(public_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use osm15_core::Seed;
    use serde_json::json;

    fn mail() -> TypedData {
        serde_json::from_value(json!({
            "domain": {"name": "OctraMail", "version": "1", "chainId": 7},
            "types": {"Mail": [
                {"name": "from", "type": "address"},
                {"name": "content", "type": "string"}
            ]},
            "primaryType": "Mail",
            "message": {"from": "octAlice", "content": "hi"}
        }))
        .unwrap()
    }

    fn keypair() -> Keypair {
        Keypair::from_seed(&Seed::from_bytes([0x07; 32]))
    }

    #[test]
    fn test_export_verify_roundtrip() {
        let keypair = keypair();
        let data = mail();
        let signature = sign_typed_data(&data, &keypair).unwrap();

        let json = export_json(&data, &signature).unwrap();
        assert!(verify_json(&json, &keypair.public_key()).unwrap());
        assert!(!verify_json(&json, &Keypair::generate().public_key()).unwrap());
    }

    #[test]
    fn test_json_field_names() {
        let payload = SignedPayload::sign(mail(), &keypair()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(value["data"]["primaryType"], "Mail");
        assert_eq!(value["data"]["domain"]["chainId"], 7);
        assert_eq!(value["data"]["types"]["Mail"][0]["type"], "address");
        assert_eq!(value["signature"], payload.signature.to_base64().as_str());
    }

    #[test]
    fn test_tampered_json_fails_verification() {
        let keypair = keypair();
        let payload = SignedPayload::sign(mail(), &keypair).unwrap();
        let json = payload.to_json().unwrap().replace("\"hi\"", "\"bye\"");

        assert!(!verify_json(&json, &keypair.public_key()).unwrap());
    }

    #[test]
    fn test_malformed_json() {
        let key = keypair().public_key();
        assert!(verify_json("{", &key).unwrap_err().is_decoding());

        let payload = SignedPayload::sign(mail(), &keypair()).unwrap();
        let mut value = serde_json::to_value(&payload).unwrap();
        value["signature"] = json!("not base64!");
        let err = verify_json(&value.to_string(), &key).unwrap_err();
        assert!(err.is_decoding());

        value["signature"] = json!("AAAA");
        let err = verify_json(&value.to_string(), &key).unwrap_err();
        assert!(err.is_decoding());
    }

    #[test]
    fn test_signer() {
        let keypair = keypair();
        let payload = SignedPayload::sign(mail(), &keypair).unwrap();

        assert_eq!(payload.signer(&keypair.public_key()).unwrap(), keypair.address());

        let err = payload
            .signer(&Keypair::generate().public_key())
            .unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn test_schema_error_surfaces() {
        let mut data = mail();
        data.primary_type = "Letter".into();
        let err = SignedPayload::sign(data, &keypair()).unwrap_err();
        assert!(err.is_schema());
    }
}
