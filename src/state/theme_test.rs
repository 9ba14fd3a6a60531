use super::*;

// =============================================================
// Theme flip
// =============================================================

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn flip_alternates_between_exactly_two_values() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

#[test]
fn double_flip_restores_original() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.flipped().flipped(), theme);
    }
}

// =============================================================
// Attribute mirror value
// =============================================================

#[test]
fn attr_values_match_stylesheet_contract() {
    assert_eq!(Theme::Light.as_attr(), "light");
    assert_eq!(Theme::Dark.as_attr(), "dark");
}
