//! Integration tests for the signed-message protocol.
//!
//! Run with:
//! ```bash
//! cargo test --test messaging
//! ```

use audit_relayer_sdk::prelude::*;
use proptest::prelude::*;
use serde_json::json;
use solana_keypair::Keypair;

fn fields(value: serde_json::Value) -> Fields {
    value.as_object().cloned().expect("test payloads are objects")
}

fn content(text: &str) -> SignedMessage<Fields> {
    SignedMessage::new(fields(json!({ "content": text })))
}

// ─── Sign / verify ───────────────────────────────────────────────────────────

#[test]
fn sign_and_verify() {
    let keypair = Keypair::new();
    let mut message = content("Hello, world!");
    message.sign(&keypair).unwrap();
    assert!(message.verify());
}

#[test]
fn verify_without_signature() {
    let message = content("Hello, world!");
    assert!(!message.verify());
}

#[test]
fn verify_with_substituted_address() {
    let keypair = Keypair::new();
    let mut message = content("Hello, world!");
    message.sign(&keypair).unwrap();
    message.address = Some(MessageSigner::address(&Keypair::new()));
    assert!(!message.verify());
}

#[test]
fn verify_with_empty_credentials() {
    let keypair = Keypair::new();
    let mut message = content("Hello, world!");
    message.sign(&keypair).unwrap();

    let mut no_signature = message.clone();
    no_signature.signature = Some(String::new());
    assert!(!no_signature.verify());

    let mut no_address = message.clone();
    no_address.address = Some(Address::from(""));
    assert!(!no_address.verify());
}

#[test]
fn sign_and_verify_with_extra_fields() {
    let keypair = Keypair::new();
    let mut message =
        SignedMessage::new(fields(json!({"content": "Extra fields", "extra_field": 123})));
    message.sign(&keypair).unwrap();
    assert!(message.verify());
}

#[test]
fn mutating_any_field_breaks_verification() {
    let keypair = Keypair::new();
    let message = SignedMessage::signed(
        fields(json!({"content": "Hello, world!", "nonce": 1, "tags": ["a"]})),
        &keypair,
    )
    .unwrap();

    for (key, replacement) in [
        ("content", json!("Hello, world?")),
        ("nonce", json!(2)),
        ("tags", json!(["a", "b"])),
        ("added", json!(null)),
    ] {
        let mut tampered = message.clone();
        tampered.payload.insert(key.to_string(), replacement);
        assert!(!tampered.verify(), "mutating {key} must invalidate the signature");
    }
}

#[test]
fn strict_verify_rejects_corrupted_signature() {
    let keypair = Keypair::new();
    let mut message = content("Test");
    message.sign(&keypair).unwrap();
    message.signature = Some("0xdeadbeef".to_string());
    assert!(message.verify_strict().is_err());
}

#[test]
fn strict_verify_reports_mismatch() {
    let keypair = Keypair::new();
    let mut message = content("Test");
    message.sign(&keypair).unwrap();
    message.address = Some(MessageSigner::address(&Keypair::new()));
    assert_eq!(message.verify_strict(), Err(VerifyError::Mismatch));
}

#[test]
fn free_functions_agree_with_message_methods() {
    let keypair = Keypair::new();
    let message = SignedMessage::signed(fields(json!({"k": "v"})), &keypair).unwrap();
    let signable = message.to_signable().unwrap();
    let pair = sign(&signable, &keypair).unwrap();
    assert_eq!(Some(&pair.signature), message.signature.as_ref());
    assert!(verify(
        &signable,
        message.signature.as_deref(),
        message.address.as_ref().map(Address::as_str)
    ));
}

// ─── Timestamped messages ────────────────────────────────────────────────────

#[test]
fn timestamped_message_sign_sets_timestamp() {
    let keypair = Keypair::new();
    let mut message = TimestampedMessage::timestamped(fields(json!({"content": "Test timestamp"})));
    assert!(message.timestamp().is_none());

    message.sign(&keypair).unwrap();

    let stamped = message.timestamp().expect("signing stamps the message");
    assert!((stamped - SystemClock.now_unix()).abs() < 5);
    assert!(message.verify());
}

#[test]
fn timestamped_message_with_fixed_clock() {
    let keypair = Keypair::new();
    let mut message = TimestampedMessage::timestamped(fields(json!({"content": "x"})));
    message
        .sign_with_clock(&keypair, &FixedClock(1_600_000_000))
        .unwrap();
    assert_eq!(message.timestamp(), Some(1_600_000_000));
    assert!(message.is_fresh(&FixedClock(1_600_000_010), 30));
    assert!(!message.is_fresh(&FixedClock(1_600_000_100), 30));
    assert!(message.verify());
}

// ─── Serialization round-trips ───────────────────────────────────────────────

#[test]
fn timestamped_message_survives_reconstruction_as_plain_message() {
    let keypair = Keypair::new();
    let mut initial = TimestampedMessage::timestamped(fields(json!({"content": "wire"})));
    initial.sign(&keypair).unwrap();
    assert!(initial.signature.is_some());
    assert!(initial.address.is_some());

    let serialized = initial.to_value().unwrap();
    let rebuilt: SignedMessage<Fields> = serde_json::from_value(serialized).unwrap();
    assert!(rebuilt.verify());
}

#[test]
fn typed_message_survives_string_roundtrip() {
    let keypair = Keypair::new();
    let message = RelayerMessage::signed(
        RelayerContext {
            network_id: 1,
            subnet_uid: 42,
        },
        &keypair,
    )
    .unwrap();

    let text = serde_json::to_string(&message).unwrap();
    let typed: RelayerMessage = serde_json::from_str(&text).unwrap();
    let untyped: SignedMessage<Fields> = serde_json::from_str(&text).unwrap();
    assert!(typed.verify());
    assert!(untyped.verify());
    assert_eq!(typed.to_signable().unwrap(), untyped.to_signable().unwrap());
}

proptest! {
    #[test]
    fn prop_sign_and_verify(text in ".*") {
        let keypair = Keypair::new();
        let mut message = content(&text);
        message.sign(&keypair).unwrap();
        prop_assert!(message.verify());
    }

    #[test]
    fn prop_substituted_address_never_verifies(text in ".*") {
        let keypair = Keypair::new();
        let mut message = content(&text);
        message.sign(&keypair).unwrap();
        message.address = Some(MessageSigner::address(&Keypair::new()));
        prop_assert!(!message.verify());
        prop_assert_eq!(message.verify_strict(), Err(VerifyError::Mismatch));
    }

    #[test]
    fn prop_signature_survives_serialization(text in ".*") {
        let keypair = Keypair::new();
        let mut initial = TimestampedMessage::timestamped(fields(json!({ "content": text })));
        initial.sign(&keypair).unwrap();
        prop_assert!(initial.signature.is_some());
        prop_assert!(initial.address.is_some());

        let serialized = initial.to_value().unwrap();
        let rebuilt: SignedMessage<Fields> = serde_json::from_value(serialized).unwrap();
        prop_assert!(rebuilt.verify());
    }

    #[test]
    fn prop_empty_credentials_never_verify(payload in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert!(!verify(&payload, None, None));
        prop_assert!(!verify(&payload, Some(""), Some("")));
    }
}
