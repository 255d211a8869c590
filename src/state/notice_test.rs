#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn each_severity_has_one_distinct_icon() {
    let severities = [Severity::Info, Severity::Success, Severity::Error, Severity::Warning];
    for (i, a) in severities.iter().enumerate() {
        let icon = a.icon_class();
        assert_eq!(Severity::ALL_ICONS.iter().filter(|c| **c == icon).count(), 1);
        for (j, b) in severities.iter().enumerate() {
            if i != j {
                assert_ne!(icon, b.icon_class());
            }
        }
    }
}

#[test]
fn parse_known_names() {
    assert_eq!(Severity::parse("info"), Severity::Info);
    assert_eq!(Severity::parse("success"), Severity::Success);
    assert_eq!(Severity::parse("ERROR"), Severity::Error);
    assert_eq!(Severity::parse(" warning "), Severity::Warning);
}

#[test]
fn unknown_severity_uses_info_icon() {
    assert_eq!(Severity::parse("fatal"), Severity::Info);
    assert_eq!(Severity::parse("").icon_class(), "fa-info-circle");
}

#[test]
fn default_severity_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn show_sets_message_and_deadline() {
    let mut notice = NoticeState::new();
    notice.show("Hello", Severity::Success, 1000.0, 3200.0);
    assert!(notice.visible);
    assert_eq!(notice.message, "Hello");
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.hide_at_ms, Some(4200.0));
    assert_eq!(notice.icon_class_name(), "notification-icon fas fa-check-circle");
}

#[test]
fn expire_waits_for_deadline() {
    let mut notice = NoticeState::new();
    notice.show("x", Severity::Info, 0.0, 3200.0);
    assert!(!notice.expire(3199.0));
    assert!(notice.visible);
    assert!(notice.expire(3200.0));
    assert!(!notice.visible);
    assert!(!notice.expire(9999.0));
}

#[test]
fn second_show_replaces_and_extends() {
    let mut notice = NoticeState::new();
    notice.show("first", Severity::Info, 0.0, 3200.0);
    notice.show("second", Severity::Error, 2000.0, 3200.0);
    assert_eq!(notice.message, "second");
    assert_eq!(notice.severity, Severity::Error);
    assert!(!notice.expire(3200.0));
    assert!(notice.expire(5200.0));
}
