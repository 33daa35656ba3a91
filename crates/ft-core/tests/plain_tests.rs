//! Decode/encode tests for the plain wrapper family (`Str`, `Int`, `Float`, `Bool`).
//!
//! Each case decodes a small JSON document through `serde_json`, the way the
//! wrappers are used as struct fields.

use ft_core::{Bool, Float, FtError, Int, Str};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StringData {
    string: Str,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct IntData {
    int: Int,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FloatData {
    float: Float,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct BoolData {
    bool: Bool,
}

fn string(json: &str) -> String {
    let d: StringData = serde_json::from_str(json).unwrap();
    d.string.into_inner()
}

fn int(json: &str) -> serde_json::Result<i64> {
    serde_json::from_str::<IntData>(json).map(|d| d.int.into_inner())
}

fn float(json: &str) -> serde_json::Result<f64> {
    serde_json::from_str::<FloatData>(json).map(|d| d.float.into_inner())
}

fn boolean(json: &str) -> bool {
    let d: BoolData = serde_json::from_str(json).unwrap();
    d.bool.into_inner()
}

// ============================================================================
// Str
// ============================================================================

#[test]
fn string_null_and_missing() {
    assert_eq!(string(r#"{"string": null}"#), "");
    assert_eq!(string("{}"), "");
}

#[test]
fn string_from_string() {
    assert_eq!(string(r#"{"string": "123"}"#), "123");
}

#[test]
fn string_from_int_keeps_literal() {
    assert_eq!(string(r#"{"string": 123}"#), "123");
    assert_eq!(string(r#"{"string": 0}"#), "0");
    assert_eq!(string(r#"{"string": -123}"#), "-123");
}

#[test]
fn string_from_float_keeps_literal() {
    assert_eq!(string(r#"{"string": 123.456}"#), "123.456");
    assert_eq!(string(r#"{"string": -123.456}"#), "-123.456");
    assert_eq!(string(r#"{"string": 1.50}"#), "1.50");
    assert_eq!(string(r#"{"string": 2e10}"#), "2e10");
}

#[test]
fn string_from_oversized_integer_keeps_literal() {
    assert_eq!(
        string(r#"{"string": 123456789012345678901234567890}"#),
        "123456789012345678901234567890"
    );
}

#[test]
fn string_from_bool_keeps_literal() {
    assert_eq!(string(r#"{"string": true}"#), "true");
    assert_eq!(string(r#"{"string": false}"#), "false");
}

// ============================================================================
// Int
// ============================================================================

#[test]
fn int_null_and_missing() {
    assert_eq!(int(r#"{"int": null}"#).unwrap(), 0);
    assert_eq!(int("{}").unwrap(), 0);
}

#[test]
fn int_from_string() {
    assert_eq!(int(r#"{"int": "123"}"#).unwrap(), 123);
    assert_eq!(int(r#"{"int": "-123"}"#).unwrap(), -123);
}

#[test]
fn int_from_unparsable_string_fails() {
    let err = int(r#"{"int": "abc"}"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("\"abc\""), "message should name the input: {msg}");
    assert!(msg.contains("int"), "message should name the target: {msg}");
}

#[test]
fn int_from_blank_string_fails() {
    assert!(int(r#"{"int": ""}"#).is_err());
    assert!(int(r#"{"int": "  "}"#).is_err());
}

#[test]
fn int_from_number() {
    assert_eq!(int(r#"{"int": -123}"#).unwrap(), -123);
    assert_eq!(int(r#"{"int": -123.456}"#).unwrap(), -123);
    assert_eq!(int(r#"{"int": 9.99}"#).unwrap(), 9);
}

#[test]
fn int_from_bool_fails() {
    let err = int(r#"{"int": true}"#).unwrap_err();
    assert!(err.to_string().contains("value is a bool"));
    assert!(int(r#"{"int": false}"#).is_err());
}

// ============================================================================
// Float
// ============================================================================

#[test]
fn float_null_and_missing() {
    assert_eq!(float(r#"{"float": null}"#).unwrap(), 0.0);
    assert_eq!(float("{}").unwrap(), 0.0);
}

#[test]
fn float_from_string() {
    assert_eq!(float(r#"{"float": "1.618"}"#).unwrap(), 1.618);
    assert_eq!(float(r#"{"float": "-1.618"}"#).unwrap(), -1.618);
}

#[test]
fn float_from_unparsable_string_fails() {
    let msg = float(r#"{"float": "abc"}"#).unwrap_err().to_string();
    assert!(msg.contains("\"abc\"") && msg.contains("float"), "{msg}");
}

#[test]
fn float_from_number() {
    assert_eq!(float(r#"{"float": -1}"#).unwrap(), -1.0);
    assert_eq!(float(r#"{"float": -1.618}"#).unwrap(), -1.618);
}

#[test]
fn float_from_bool_fails() {
    let err = float(r#"{"float": true}"#).unwrap_err();
    assert!(err.to_string().contains("value is a bool"));
}

// ============================================================================
// Bool
// ============================================================================

#[test]
fn bool_null_and_missing() {
    assert!(!boolean(r#"{"bool": null}"#));
    assert!(!boolean("{}"));
}

#[test]
fn bool_from_falsy_strings() {
    for s in ["false", "0", "", "FALSE", " False ", " "] {
        let json = serde_json::json!({ "bool": s }).to_string();
        assert!(!boolean(&json), "{s:?} should be false");
    }
}

#[test]
fn bool_from_truthy_strings() {
    for s in ["true", "1", "abc", "no", "off"] {
        let json = serde_json::json!({ "bool": s }).to_string();
        assert!(boolean(&json), "{s:?} should be true");
    }
}

#[test]
fn bool_from_numbers() {
    assert!(!boolean(r#"{"bool": 0}"#));
    assert!(boolean(r#"{"bool": 1}"#));
    assert!(boolean(r#"{"bool": -1}"#));
    assert!(boolean(r#"{"bool": 1.23}"#));
    assert!(boolean(r#"{"bool": -1.23}"#));
    assert!(!boolean(r#"{"bool": 0.0}"#));
}

#[test]
fn bool_from_bool() {
    assert!(!boolean(r#"{"bool": false}"#));
    assert!(boolean(r#"{"bool": true}"#));
}

// ============================================================================
// Direct entry points
// ============================================================================

#[test]
fn from_json_on_raw_tokens() {
    assert_eq!(Int::from_json("  42 ").unwrap(), Int::new(42));
    assert!(matches!(Int::from_json("{}"), Err(FtError::NotScalar { .. })));
    assert!(matches!(Bool::from_json("yes"), Err(FtError::MalformedToken(_))));
}

#[test]
fn constructors_and_accessors() {
    assert_eq!(Str::from("foo").value(), "foo");
    assert_eq!(*Int::from(123).value(), 123);
    assert_eq!(*Float::from(1.618).value(), 1.618);
    assert!(Bool::from(true).into_inner());
    assert!(Int::default().is_zero());
    assert!(!Str::from("x").is_zero());
}

// ============================================================================
// Buffered decoding (flatten, untagged, internally tagged)
// ============================================================================

#[derive(Debug, Deserialize)]
struct Amounts {
    amount: Float,
    label: Str,
}

#[derive(Debug, Deserialize)]
struct Invoice {
    name: Str,
    #[serde(flatten)]
    amounts: Amounts,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Reading {
    Count { n: Int },
    Other(String),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind")]
enum Event {
    Tick { at: Int, note: Str, on: Bool },
}

#[test]
fn flattened_fields_decode() {
    let invoice: Invoice =
        serde_json::from_str(r#"{"name": 7, "amount": "19.99", "label": 1.50}"#).unwrap();
    assert_eq!(invoice.name.value(), "7");
    assert_eq!(*invoice.amounts.amount.value(), 19.99);
    assert_eq!(invoice.amounts.label.value(), "1.50");
}

#[test]
fn flattened_fields_keep_null_and_missing_rules() {
    let invoice: Invoice = serde_json::from_str(r#"{"name": null, "label": 2E3}"#).unwrap();
    assert_eq!(invoice.name.value(), "");
    assert_eq!(*invoice.amounts.amount.value(), 0.0);
    assert_eq!(invoice.amounts.label.value(), "2E3");
}

#[test]
fn flattened_fields_surface_errors() {
    let err = serde_json::from_str::<Invoice>(r#"{"amount": true}"#).unwrap_err();
    assert!(err.to_string().contains("value is a bool"), "{err}");
}

#[test]
fn untagged_variants_decode() {
    match serde_json::from_str::<Reading>(r#"{"n": 5}"#).unwrap() {
        Reading::Count { n } => assert_eq!(n, Int::new(5)),
        other => panic!("unexpected {other:?}"),
    }
    match serde_json::from_str::<Reading>(r#"{"n": -12.9}"#).unwrap() {
        Reading::Count { n } => assert_eq!(n, Int::new(-12)),
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        serde_json::from_str::<Reading>(r#""abc""#).unwrap(),
        Reading::Other(_)
    ));
}

#[test]
fn internally_tagged_variants_decode() {
    let Event::Tick { at, note, on } =
        serde_json::from_str(r#"{"kind": "Tick", "at": "12", "note": 0.10, "on": "0"}"#).unwrap();
    assert_eq!(at, Int::new(12));
    assert_eq!(note.value(), "0.10");
    assert!(!on.into_inner());
}

#[test]
fn decode_from_value() {
    let int: Int = serde_json::from_value(serde_json::json!(5)).unwrap();
    assert_eq!(int, Int::new(5));
    let float: Float = serde_json::from_value(serde_json::json!("2.5")).unwrap();
    assert_eq!(*float.value(), 2.5);
    let missing: Bool = serde_json::from_value(serde_json::Value::Null).unwrap();
    assert!(!missing.into_inner());
}
