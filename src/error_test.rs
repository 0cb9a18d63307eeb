use super::*;

#[test]
fn storage_write_message_names_key_and_reason() {
    let err = Error::StorageWrite { key: "bms-theme".into(), reason: "QuotaExceededError".into() };
    assert_eq!(err.to_string(), "failed to write `bms-theme` to storage: QuotaExceededError");
}

#[test]
fn selector_message_names_selector() {
    let err = Error::Selector { selector: "form[".into(), reason: "SyntaxError".into() };
    assert!(err.to_string().contains("`form[`"));
}

#[test]
fn config_error_converts_from_serde_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().starts_with("invalid ui config:"));
}
