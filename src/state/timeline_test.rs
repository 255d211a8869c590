use super::*;

fn years(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn timeline() -> Timeline {
    Timeline::new(years(&["2023", "2024", "2025"]), "2023").unwrap()
}

#[test]
fn no_markers_means_no_timeline() {
    assert!(Timeline::new(Vec::new(), "2023").is_none());
    assert!(Timeline::new(years(&["", "  "]), "2023").is_none());
}

#[test]
fn starts_at_default_year() {
    assert_eq!(timeline().current(), "2023");
    let t = Timeline::new(years(&["2023", "2024", "2025"]), "2024").unwrap();
    assert_eq!(t.current(), "2024");
}

#[test]
fn missing_default_falls_back_to_first_marker() {
    let t = Timeline::new(years(&["2021", "2022"]), "2023").unwrap();
    assert_eq!(t.current(), "2021");
}

#[test]
fn duplicate_markers_collapse() {
    let mut t = Timeline::new(years(&["2023", "2024", "2023"]), "2023").unwrap();
    assert_eq!(t.next(), "2024");
    assert_eq!(t.next(), "2023");
}

#[test]
fn next_walks_and_wraps() {
    let mut t = timeline();
    assert_eq!(t.next(), "2024");
    assert_eq!(t.next(), "2025");
    assert_eq!(t.next(), "2023");
}

#[test]
fn prev_wraps_backward() {
    let mut t = timeline();
    assert_eq!(t.prev(), "2025");
    assert_eq!(t.prev(), "2024");
    assert_eq!(t.prev(), "2023");
}

#[test]
fn single_year_wraps_onto_itself() {
    let mut t = Timeline::new(years(&["2024"]), "2023").unwrap();
    assert_eq!(t.next(), "2024");
    assert_eq!(t.prev(), "2024");
}

#[test]
fn select_known_year() {
    let mut t = timeline();
    assert!(t.select("2025"));
    assert_eq!(t.current(), "2025");
    assert!(year_matches("2025", t.current()));
    assert!(!year_matches("2023", t.current()));
}

#[test]
fn select_unknown_year_keeps_current() {
    let mut t = timeline();
    t.select("2024");
    assert!(!t.select("1999"));
    assert_eq!(t.current(), "2024");
}

#[test]
fn navigation_continues_from_selected_year() {
    let mut t = timeline();
    t.select("2025");
    assert_eq!(t.next(), "2023");
    t.select("2024");
    assert_eq!(t.prev(), "2023");
}

#[test]
fn padded_marker_year_is_trimmed() {
    let mut t = Timeline::new(years(&["2023", " 2024 "]), "2023").unwrap();
    assert!(t.select("2024"));
    assert_eq!(t.current(), "2024");
}

#[test]
fn year_matches_ignores_attribute_padding() {
    assert!(year_matches(" 2024 ", "2024"));
    assert!(year_matches("2024", "2024"));
    assert!(!year_matches("2024", "2025"));
    assert!(!year_matches("", "2024"));
}
