use std::collections::HashSet;

use error_class::Kind;

const PAYMENT_REQUIRED: Kind = Kind::from_static("payment_required");

#[test]
fn test_predefined_kinds() {
    assert_eq!(Kind::UNKNOWN.as_str(), "unknown");
    assert_eq!(Kind::NOT_AUTHORIZED.as_str(), "not_authorized");
    assert_eq!(Kind::default(), Kind::UNKNOWN);
    assert!(Kind::UNKNOWN.is_unknown());
    assert!(!Kind::NOT_AUTHORIZED.is_unknown());
}

#[test]
fn test_equality_is_by_label() {
    let owned = Kind::new(String::from("payment_required"));
    assert_eq!(owned, PAYMENT_REQUIRED);
    assert_eq!(Kind::from("payment_required"), PAYMENT_REQUIRED);
    assert_eq!(Kind::from(String::from("unknown")), Kind::UNKNOWN);
    assert_ne!(PAYMENT_REQUIRED, Kind::UNKNOWN);
}

#[test]
fn test_compares_with_str() {
    assert_eq!(PAYMENT_REQUIRED, "payment_required");
    assert_eq!("payment_required", PAYMENT_REQUIRED);
    assert!(PAYMENT_REQUIRED == *"payment_required");
}

#[test]
fn test_display_is_label() {
    assert_eq!(PAYMENT_REQUIRED.to_string(), "payment_required");
    assert_eq!(format!("[{}]", Kind::NOT_AUTHORIZED), "[not_authorized]");
}

#[test]
fn test_hash_matches_equality() {
    let mut kinds = HashSet::new();
    kinds.insert(Kind::NOT_AUTHORIZED);
    kinds.insert(Kind::new(String::from("not_authorized")));
    kinds.insert(Kind::UNKNOWN);
    assert_eq!(kinds.len(), 2);
}

#[test]
fn test_ordering_is_lexicographic() {
    let mut kinds = vec![Kind::UNKNOWN, PAYMENT_REQUIRED, Kind::NOT_AUTHORIZED];
    kinds.sort();
    let labels: Vec<&str> = kinds.iter().map(Kind::as_str).collect();
    assert_eq!(labels, ["not_authorized", "payment_required", "unknown"]);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_as_plain_string() {
    let json = serde_json::to_string(&Kind::NOT_AUTHORIZED).unwrap();
    assert_eq!(json, "\"not_authorized\"");

    let back: Kind = serde_json::from_str("\"rate_limited\"").unwrap();
    assert_eq!(back, "rate_limited");
}
