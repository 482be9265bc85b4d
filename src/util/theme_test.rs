use super::*;

#[test]
fn parse_defaults_to_light() {
    assert_eq!(Theme::parse(None), Theme::Light);
    assert_eq!(Theme::parse(Some("purple")), Theme::Light);
    assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
    assert_eq!(Theme::parse(Some("system")), Theme::System);
}

#[test]
fn as_str_matches_stored_values() {
    for theme in [Theme::Light, Theme::Dark, Theme::System] {
        assert_eq!(Theme::parse(Some(theme.as_str())), theme);
    }
}

#[test]
fn system_resolves_from_media_query() {
    assert_eq!(Theme::System.resolve(true), Theme::Dark);
    assert_eq!(Theme::System.resolve(false), Theme::Light);
    assert_eq!(Theme::Dark.resolve(false), Theme::Dark);
}

#[test]
fn toggle_flips_what_is_shown() {
    assert_eq!(Theme::Light.toggle(true), Theme::Dark);
    assert_eq!(Theme::Dark.toggle(false), Theme::Light);
    assert_eq!(Theme::System.toggle(true), Theme::Light);
    assert_eq!(Theme::System.toggle(false), Theme::Dark);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_preference_is_default_and_writes_are_ignored() {
    save(Theme::Dark);
    assert_eq!(read_preference(), Theme::Light);
    apply(Theme::Dark);
}
