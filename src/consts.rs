//! Default identifiers shared by the page behaviors.
//!
//! These match the theme's markup. [`crate::PageConfig`] starts from them and
//! lets a page override any single value.

// ── Elements ────────────────────────────────────────────────────

/// Id of the navigation container.
pub const NAV_ID: &str = "mainNav";

/// Id of the `<i>` element showing the sun/moon icon.
pub const THEME_ICON_ID: &str = "theme-icon";

/// Id of the button that flips the theme.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Id of the profile dropdown panel.
pub const PROFILE_MENU_ID: &str = "profile-menu";

/// Selector for elements that get a tooltip widget.
pub const TOOLTIP_SELECTOR: &str = "[data-bs-toggle='tooltip']";

// ── Theme ───────────────────────────────────────────────────────

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Icon shown while the dark theme is active.
pub const SUN_ICON_CLASS: &str = "fa-sun";

/// Icon shown while the light theme is active.
pub const MOON_ICON_CLASS: &str = "fa-moon";

// ── Classes ─────────────────────────────────────────────────────

/// Nav is pinned to the top of the viewport.
pub const FIXED_CLASS: &str = "is-fixed";

/// Pinned nav is currently shown.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Bootstrap utility class that hides an element.
pub const HIDDEN_CLASS: &str = "d-none";

// ── Config ──────────────────────────────────────────────────────

/// Attribute on `<html>` that may carry a JSON `PageConfig` override.
pub const PAGE_CONFIG_ATTRIBUTE: &str = "data-page-config";
