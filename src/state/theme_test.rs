use super::*;

#[test]
fn parse_known_themes() {
    assert_eq!(Theme::parse("light").unwrap(), Theme::Light);
    assert_eq!(Theme::parse("Dark").unwrap(), Theme::Dark);
}

#[test]
fn parse_unknown_theme_errors() {
    let err = Theme::parse("sepia").unwrap_err();
    assert!(matches!(err, UiError::UnknownTheme(ref name) if name == "sepia"));
}

#[test]
fn as_str_roundtrips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()).unwrap(), theme);
        assert_eq!(theme.to_string(), theme.as_str());
    }
}

#[test]
fn resolve_prefers_stored_value() {
    assert_eq!(Theme::resolve(Some("dark"), "light"), Theme::Dark);
}

#[test]
fn resolve_defaults_when_nothing_stored() {
    assert_eq!(Theme::resolve(None, "light"), Theme::Light);
    assert_eq!(Theme::resolve(None, "dark"), Theme::Dark);
}

#[test]
fn resolve_ignores_garbage() {
    assert_eq!(Theme::resolve(Some("neon"), "dark"), Theme::Dark);
    assert_eq!(Theme::resolve(Some("neon"), "also-bad"), Theme::Light);
}
