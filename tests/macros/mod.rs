use error_class::{metadata, Metadata, Value};

#[test]
fn metadata_macro_builds_empty_map() {
    let meta = metadata!();
    assert!(meta.is_empty());
    assert_eq!(meta, Metadata::default());
}

#[test]
fn metadata_macro_accepts_mixed_values() {
    let meta = metadata! {
        "env" => "prod",
        "status" => 500,
        "ratio" => 0.5,
        "retried" => true,
        "tags" => vec!["a", "b"],
        "owner" => None::<&str>,
    };

    assert_eq!(meta.len(), 6);
    assert_eq!(meta.get("env"), Some(&Value::String("prod".into())));
    assert_eq!(meta.get("status"), Some(&Value::Int(500)));
    assert_eq!(meta.get("ratio"), Some(&Value::Float(0.5)));
    assert_eq!(meta.get("retried"), Some(&Value::Bool(true)));
    assert_eq!(meta.get("tags").and_then(Value::as_list).map(<[Value]>::len), Some(2));
    assert_eq!(meta.get("owner"), Some(&Value::Null));
}

#[test]
fn metadata_macro_last_duplicate_wins() {
    let meta = metadata! { "env" => "prod", "env" => "dev" };
    assert_eq!(meta.len(), 1);
    assert_eq!(meta.get("env").and_then(Value::as_str), Some("dev"));
}

#[test]
fn metadata_macro_accepts_owned_keys() {
    let key = String::from("request_id");
    let meta = metadata! { key => "r-19" };
    assert!(meta.contains_key("request_id"));
}
