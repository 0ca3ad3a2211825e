//! End-to-end flows through the unified API.

use osm15::keystore::{CipherKind, KeystoreError};
use osm15::{
    compute_digest, signer_address, verify_json, verify_typed_data, Error, Keystore, Seed,
    SignedPayload, TypedValue, Wallet,
};
use osm15_testkit::fixtures::{fast_keystore_config, mail_record, wallet_record, TestFixture};
use osm15_testkit::generators::{wallet_data_from_params, WalletParams};
use proptest::prelude::*;

#[test]
fn test_tampered_amount_fails_verification() {
    let fixture = TestFixture::with_seed([0x42; 32]);
    let signed = wallet_record(1000);
    let signature = fixture.sign(&signed);

    assert!(verify_typed_data(&signed, &signature, &fixture.public_key()).unwrap());

    let tampered = wallet_record(1001);
    assert!(!verify_typed_data(&tampered, &signature, &fixture.public_key()).unwrap());
}

#[test]
fn test_signature_does_not_transfer_between_domains() {
    let fixture = TestFixture::new();
    let app_a = mail_record("AppA");
    let app_b = mail_record("AppB");

    // Identical messages, different domains
    assert_eq!(app_a.message, app_b.message);
    assert_ne!(compute_digest(&app_a).unwrap(), compute_digest(&app_b).unwrap());

    let signature = fixture.sign(&app_a);
    assert!(!verify_typed_data(&app_b, &signature, &fixture.public_key()).unwrap());
}

#[test]
fn test_integer_renderings_share_a_signature() {
    let fixture = TestFixture::new();
    let as_number = wallet_record(1000);
    let signature = fixture.sign(&as_number);

    let mut as_text = as_number.clone();
    as_text.message.insert(
        "assets".into(),
        TypedValue::Array(vec![TypedValue::record([
            ("name", TypedValue::from("OCT")),
            ("amount", TypedValue::from("0001000")),
        ])]),
    );
    assert!(verify_typed_data(&as_text, &signature, &fixture.public_key()).unwrap());
}

#[test]
fn test_signed_payload_json_flow() {
    let wallet = Wallet::from_seed(&Seed::from_bytes([0x05; 32]));
    let payload = wallet.sign_payload(&wallet_record(250)).unwrap();
    let json = payload.to_json().unwrap();

    // A verifier with only the JSON and a public key
    assert!(verify_json(&json, &wallet.public_key()).unwrap());

    let parsed = SignedPayload::from_json(&json).unwrap();
    assert_eq!(parsed, payload);
    assert_eq!(parsed.signer(&wallet.public_key()).unwrap(), *wallet.address());
    assert_eq!(
        signer_address(&parsed.data, &parsed.signature, &wallet.public_key()).unwrap(),
        *wallet.address()
    );
}

#[test]
fn test_keystore_flow() {
    let wallet = Wallet::generate();
    let config = fast_keystore_config();

    let json = wallet.lock("correct horse", &config).unwrap().to_json().unwrap();
    let restored = Wallet::unlock(&json, "correct horse").unwrap();
    assert_eq!(restored.address(), wallet.address());

    // The restored wallet produces the same signatures
    let data = mail_record("AppA");
    assert_eq!(restored.sign(&data).unwrap(), wallet.sign(&data).unwrap());

    let err = Wallet::unlock(&json, "battery staple").unwrap_err();
    assert!(err.is_authentication());
    assert!(matches!(err, Error::Keystore(KeystoreError::InvalidPassword)));
}

#[test]
fn test_keystore_chacha_flow() {
    let wallet = Wallet::generate();
    let config = fast_keystore_config().with_cipher(CipherKind::ChaCha20Poly1305);

    let keystore = wallet.lock("pw", &config).unwrap();
    assert_eq!(keystore.crypto.cipher, "chacha20-poly1305");

    let parsed = Keystore::from_json(&keystore.to_json().unwrap()).unwrap();
    assert_eq!(Wallet::unlock_keystore(&parsed, "pw").unwrap().address(), wallet.address());
}

#[test]
fn test_batch_signing_is_item_local() {
    let wallet = Wallet::generate();
    let mut broken = mail_record("AppA");
    broken.primary_type = "Letter".into();

    let records = vec![mail_record("AppA"), broken, wallet_record(7)];
    let results = wallet.sign_all(&records);

    assert!(results[0].as_ref().unwrap().verify(&wallet.public_key()).unwrap());
    assert!(results[1].as_ref().unwrap_err().is_schema());
    assert!(results[2].as_ref().unwrap().verify(&wallet.public_key()).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_payload_json_roundtrip(params: WalletParams) {
        let data = wallet_data_from_params(&params);
        let wallet = Wallet::from_keypair(params.keypair());

        let json = wallet.sign_payload(&data).unwrap().to_json().unwrap();
        prop_assert!(verify_json(&json, &wallet.public_key()).unwrap());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn prop_keystore_roundtrip(seed in any::<[u8; 32]>(), password in "[ -~]{0,32}") {
        let wallet = Wallet::from_seed(&Seed::from_bytes(seed));
        let keystore = wallet.lock(&password, &fast_keystore_config()).unwrap();

        let restored = Wallet::unlock_keystore(&keystore, &password).unwrap();
        prop_assert_eq!(restored.address(), wallet.address());
    }
}
