use crate::Envelope;

use serde_json::{Value, json};

#[test]
fn test_chat_envelope_wire_shape() {
    let json = Envelope::chat("hello", "alice").to_json().unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value,
        json!({"type": "chat", "text": "hello", "handle": "alice"})
    );
}

#[test]
fn test_clear_envelope_wire_shape() {
    let json = Envelope::Clear.to_json().unwrap();

    assert_eq!(json, r#"{"type":"clear"}"#);
}

#[test]
fn test_chat_without_handle_defaults_to_empty() {
    let envelope = Envelope::from_json(r#"{"type":"chat","text":"hi"}"#).unwrap();

    assert_eq!(envelope, Envelope::chat("hi", ""));
}

#[test]
fn test_unknown_type_is_an_error() {
    assert!(Envelope::from_json(r#"{"type":"shout","text":"hi"}"#).is_err());
    assert!(Envelope::from_json("plain words").is_err());
}

#[test]
fn test_envelope_kind() {
    assert_eq!(Envelope::chat("a", "b").kind(), "chat");
    assert_eq!(Envelope::Clear.kind(), "clear");
}
