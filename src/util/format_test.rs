use super::*;

#[test]
fn skill_message_trims_name() {
    assert_eq!(skill_message("  Rust \n", Some("90")), "Rust — 90%");
}

#[test]
fn skill_message_without_level_uses_dash() {
    assert_eq!(skill_message("Go", None), "Go — —%");
    assert_eq!(skill_message("Go", Some("")), "Go — —%");
}

#[test]
fn progress_width_reads_level() {
    assert_eq!(progress_width(Some("70"), 85.0), "70%");
    assert_eq!(progress_width(Some("62.5"), 85.0), "62.5%");
}

#[test]
fn progress_width_defaults() {
    assert_eq!(progress_width(None, 85.0), "85%");
    assert_eq!(progress_width(Some("high"), 85.0), "85%");
    assert_eq!(progress_width(Some("inf"), 85.0), "85%");
}

#[test]
fn copy_payload_skips_missing_and_empty() {
    assert_eq!(copy_payload(None), None);
    assert_eq!(copy_payload(Some(String::new())), None);
    assert_eq!(copy_payload(Some("@handle".to_owned())), Some("@handle".to_owned()));
}
