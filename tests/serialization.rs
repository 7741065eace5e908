//! Wire-shape tests for the serde representation of every error kind.

use sanitize_errors::{
    BasicError, ErrorCollection, ExtendedError, Extra, InternalExtra, InternalValue, Sanitize,
    http,
};
use serde_json::{Value, json};
use std::io;

fn parse(s: &str) -> Value {
    serde_json::from_str(s).expect("valid JSON")
}

#[test]
fn basic_error_fields() {
    let err = BasicError::new("Bad Request", "missing `name`");
    assert_eq!(
        parse(&err.to_json()),
        json!({"message": "Bad Request", "description": "missing `name`"})
    );
}

#[test]
fn empty_fields_are_omitted() {
    assert_eq!(parse(&BasicError::default().to_json()), json!({}));
    assert_eq!(parse(&ExtendedError::default().to_json()), json!({}));

    let err = ExtendedError::with_fields("m", "", Extra::new(), None);
    assert_eq!(parse(&err.to_json()), json!({"message": "m"}));
}

#[test]
fn extended_error_never_serializes_internal_extra() {
    let internal = InternalExtra::from([
        ("query".to_string(), InternalValue::from("SELECT * FROM users")),
        ("error".to_string(), InternalValue::error(io::Error::other("timeout"))),
    ]);
    let err = ExtendedError::with_fields(
        "Timeout",
        "upstream",
        Extra::from([("retry_after".to_string(), json!(30))]),
        internal,
    );

    let value = parse(&err.to_json());
    assert_eq!(
        value,
        json!({
            "message": "Timeout",
            "description": "upstream",
            "extra": {"retry_after": 30}
        })
    );
    assert!(value.get("internal_extra").is_none());
}

#[test]
fn sanitized_http_error_shape() {
    let mut err = http::forbidden_error(
        Some(io::Error::other("role=viewer lacks billing:write")),
        [sanitize_errors::with_description("billing:write denied")],
    )
    .expect("cause present");
    err.sanitize();

    assert_eq!(
        parse(&err.to_json()),
        json!({"message": "Forbidden", "extra": {"http_code": 403}})
    );
}

#[test]
fn collection_serializes_under_errors_key() {
    let mut errs = ErrorCollection::new();
    errs.add([BasicError::new("A", "1"), BasicError::new("B", "")]);

    assert_eq!(
        serde_json::to_value(&errs).expect("serializable"),
        json!({"errors": [
            {"message": "A", "description": "1"},
            {"message": "B"}
        ]})
    );
}

#[test]
fn public_shape_round_trips() {
    let sent = ExtendedError::with_fields(
        "Conflict",
        "version 3 != 4",
        Extra::from([("field".to_string(), json!("version"))]),
        InternalExtra::from([("row".to_string(), InternalValue::from(json!(17)))]),
    );

    let decoded: ExtendedError = serde_json::from_str(&sent.to_json()).expect("decodes");
    assert_eq!(decoded.message(), "Conflict");
    assert_eq!(decoded.description(), "version 3 != 4");
    assert_eq!(decoded.extra(), sent.extra());
    assert!(decoded.internal_extra().is_none());
}

#[test]
fn missing_fields_deserialize_to_defaults() {
    let err: BasicError = serde_json::from_str(r#"{"message":"only"}"#).expect("decodes");
    assert_eq!(err, BasicError::new("only", ""));

    let errs: ErrorCollection<ExtendedError> =
        serde_json::from_str(r#"{"errors":[{}]}"#).expect("decodes");
    assert_eq!(errs.errors(), &[ExtendedError::default()]);
}
