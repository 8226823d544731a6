use super::*;

#[test]
fn default_matches_theme_markup() {
    let config = PageConfig::default();
    assert_eq!(config.nav_id, "mainNav");
    assert_eq!(config.theme_icon_id, "theme-icon");
    assert_eq!(config.theme_toggle_id, "theme-toggle");
    assert_eq!(config.profile_menu_id, "profile-menu");
    assert_eq!(config.tooltip_selector, "[data-bs-toggle='tooltip']");
    assert_eq!(config.theme_attribute, "data-bs-theme");
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.fixed_class, "is-fixed");
    assert_eq!(config.visible_class, "is-visible");
    assert_eq!(config.hidden_class, "d-none");
}

#[test]
fn empty_object_is_default() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PageConfig::from_json(r#"{"nav_id": "topNav", "theme_storage_key": "blog-theme"}"#).unwrap();
    assert_eq!(config.nav_id, "topNav");
    assert_eq!(config.theme_storage_key, "blog-theme");
    assert_eq!(config.theme_icon_id, "theme-icon");
    assert_eq!(config.hidden_class, "d-none");
}

#[test]
fn unknown_field_is_rejected() {
    let err = PageConfig::from_json(r#"{"navId": "topNav"}"#).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(PageConfig::from_json("nav_id=topNav"), Err(PageError::Config(_))));
}
