#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let config = Config::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.default_theme, "light");
    assert_eq!(config.default_year, "2023");
    assert_eq!(config.notice_ms, 3200.0);
    assert_eq!(config.switch_delay_ms, 200.0);
    assert_eq!(config.progress_delay_ms, 400.0);
    assert_eq!(config.default_progress_level, 85.0);
    assert_eq!(config.counter_duration_ms, 1400.0);
    assert_eq!(config.counter_tick_ms, 16.0);
    assert_eq!(config.copied_message, "Copied!");
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "defaultYear": "2025", "copiedMessage": "Done" }"#).unwrap();
    assert_eq!(config.default_year, "2025");
    assert_eq!(config.copied_message, "Done");
    assert_eq!(config.notice_ms, 3200.0);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn invalid_json_is_config_error() {
    let err = Config::from_json("{ nope").unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
    assert!(err.to_string().starts_with("invalid page config"));
}

#[test]
fn wrong_field_type_is_config_error() {
    assert!(Config::from_json(r#"{ "noticeMs": "long" }"#).is_err());
}

#[test]
fn or_default_handles_missing_and_broken_input() {
    assert_eq!(Config::from_json_or_default(None), Config::default());
    assert_eq!(Config::from_json_or_default(Some("   ")), Config::default());
    assert_eq!(Config::from_json_or_default(Some("[1, 2")), Config::default());
}

#[test]
fn non_positive_durations_fall_back() {
    let config = Config::from_json(r#"{ "noticeMs": 0, "counterTickMs": -5, "switchDelayMs": 0 }"#).unwrap();
    assert_eq!(config.notice_ms, 3200.0);
    assert_eq!(config.counter_tick_ms, 16.0);
    assert_eq!(config.switch_delay_ms, 0.0);
}

#[test]
fn empty_storage_key_falls_back() {
    let config = Config::from_json(r#"{ "storageKey": "" }"#).unwrap();
    assert_eq!(config.storage_key, "theme");
}
