use optchain_types::{Callable, Value, ValueKind};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Absence & truthiness ─────────────────────────────────────────

#[test]
fn default_value_is_absent() {
    assert!(Value::default().is_absent());
    assert!(!Value::default().is_present());
}

#[test]
fn falsy_values_match_logical_or() {
    assert!(Value::Absent.is_falsy());
    assert!(Value::from(false).is_falsy());
    assert!(Value::from(0).is_falsy());
    assert!(Value::from(0.0).is_falsy());
    assert!(Value::from(-0.0).is_falsy());
    assert!(Value::from("").is_falsy());
}

#[test]
fn falsy_values_are_still_present() {
    assert!(Value::from(false).is_present());
    assert!(Value::from(0).is_present());
    assert!(Value::from("").is_present());
}

#[test]
fn containers_and_callables_are_truthy() {
    assert!(Value::List(vec![]).is_truthy());
    assert!(Value::record(Vec::<(String, Value)>::new()).is_truthy());
    assert!(Value::callable(|| Value::Absent).is_truthy());
    assert!(Value::from(-1).is_truthy());
    assert!(Value::from("0").is_truthy());
}

#[test]
fn non_finite_float_becomes_absent() {
    assert!(Value::from(f64::NAN).is_absent());
    assert!(Value::from(f64::INFINITY).is_absent());
}

#[test]
fn none_becomes_absent() {
    let missing: Option<i64> = None;
    assert!(Value::from(missing).is_absent());
    assert_eq!(Value::from(Some(3)), Value::from(3));
}

// ── Accessors ────────────────────────────────────────────────────

#[test]
fn scalar_accessors_check_type() {
    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert_eq!(Value::from(7).as_i64(), Some(7));
    assert_eq!(Value::from(2.5).as_f64(), Some(2.5));
    assert_eq!(Value::from(2.5).as_i64(), None);
    assert_eq!(Value::from("x").as_str(), Some("x"));
    assert_eq!(Value::from("x").as_bool(), None);
    assert_eq!(Value::Absent.as_str(), None);
}

#[test]
fn get_reads_record_fields_only() {
    let v = Value::record([("damage", 30)]);
    assert_eq!(v.get("damage"), Some(&Value::from(30)));
    assert_eq!(v.get("missing"), None);
    assert_eq!(Value::from("damage").get("damage"), None);
}

#[test]
fn get_index_reads_list_elements_only() {
    let v = Value::List(vec![Value::from("a"), Value::from("b")]);
    assert_eq!(v.get_index(1), Some(&Value::from("b")));
    assert_eq!(v.get_index(2), None);
    assert_eq!(Value::record([("0", 1)]).get_index(0), None);
}

#[test]
fn kind_reports_variant() {
    assert_eq!(Value::Absent.kind(), ValueKind::Absent);
    assert_eq!(Value::from(1).kind(), ValueKind::Number);
    assert_eq!(Value::callable(|| Value::Absent).kind(), ValueKind::Callable);
    assert_eq!(ValueKind::Record.to_string(), "record");
}

// ── Callables ────────────────────────────────────────────────────

#[test]
fn callable_returns_its_value() {
    let c = Callable::returning(5);
    assert_eq!(c.call(), Value::from(5));
}

#[test]
fn callable_equality_is_identity() {
    let a = Callable::returning(5);
    let b = Callable::returning(5);
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
}

#[test]
fn callable_debug_is_opaque() {
    assert_eq!(format!("{:?}", Callable::returning(1)), "Callable(..)");
}

// ── JSON ─────────────────────────────────────────────────────────

#[test]
fn from_json_maps_null_to_absent() {
    let v = Value::from(json!({"weapon": null, "health": 100}));
    assert_eq!(v.get("weapon"), Some(&Value::Absent));
    assert_eq!(v.get("health"), Some(&Value::from(100)));
}

#[test]
fn from_json_str_parses_nested_document() {
    let v = Value::from_json_str(r#"{"skills": {"run": {"description": "Escape"}}}"#).unwrap();
    let desc = v.get("skills").and_then(|s| s.get("run")).and_then(|r| r.get("description"));
    assert_eq!(desc.and_then(Value::as_str), Some("Escape"));
}

#[test]
fn from_json_str_keeps_document_key_order() {
    let v = Value::from_json_str(r#"{"weapon": {"name": "Sword", "damage": 30}, "armor": 1}"#)
        .unwrap();
    assert_eq!(v.to_string(), r#"{"weapon":{"name":"Sword","damage":30},"armor":1}"#);
    let weapon = v.get("weapon").unwrap();
    assert_eq!(weapon.to_string(), r#"{"name":"Sword","damage":30}"#);
    let keys: Vec<&str> = weapon.as_record().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["name", "damage"]);
}

#[test]
fn from_json_str_rejects_invalid_text() {
    assert!(Value::from_json_str("{not json").is_err());
}

#[test]
fn to_json_renders_callables_as_null() {
    let v = Value::record([
        ("name", Value::from("Llama")),
        ("attack", Value::callable(|| Value::from(5))),
    ]);
    assert_eq!(v.to_json(), json!({"name": "Llama", "attack": null}));
}

#[test]
fn serialize_matches_to_json() {
    let v = Value::record([
        ("list", Value::List(vec![Value::from(1), Value::Absent])),
        ("flag", Value::from(false)),
    ]);
    let text = serde_json::to_string(&v).unwrap();
    assert_eq!(text, r#"{"list":[1,null],"flag":false}"#);
    assert_eq!(v.to_string(), text);
}

#[test]
fn deserialize_through_serde() {
    let v: Value = serde_json::from_str(r#"[true, "x", 1.5]"#).unwrap();
    assert_eq!(
        v,
        Value::List(vec![Value::from(true), Value::from("x"), Value::from(1.5)])
    );
}
