//! Light/dark theme preference.
//!
//! The active theme lives in an attribute on `<html>`, which the stylesheet
//! keys off. The preference is persisted as `"light"` or `"dark"` in
//! `localStorage`. The icon next to the toggle shows the theme the reader
//! would switch *to*: a sun while dark, a moon while light.
//!
//! Load reads storage. Toggle reads the attribute, so a click flips the theme
//! currently on screen.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::consts::{MOON_ICON_CLASS, SUN_ICON_CLASS};
use crate::dom::{Attributes, ClassList, KeyValueStore};
use crate::error::PageError;

/// Display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class offering the switch away from this theme.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON_CLASS,
            Self::Dark => SUN_ICON_CLASS,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Where the theme is read from and written to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeKeys<'a> {
    /// Attribute on the document root.
    pub attribute: &'a str,
    /// Storage key for the persisted preference.
    pub storage_key: &'a str,
}

/// Persisted preference, or [`Theme::Light`] when absent or unrecognised.
#[must_use]
pub fn load_preference(store: &impl KeyValueStore, storage_key: &str) -> Theme {
    store
        .get_item(storage_key)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

/// Page-load path: apply the persisted preference to `root` and, when the
/// page has one, set the icon.
///
/// # Errors
///
/// Propagates attribute and class-list failures.
pub fn apply_saved<S, R, I>(store: &S, root: &R, icon: Option<&I>, keys: ThemeKeys<'_>) -> Result<Theme, PageError>
where
    S: KeyValueStore,
    R: Attributes,
    I: ClassList,
{
    let theme = load_preference(store, keys.storage_key);
    root.set_attribute(keys.attribute, theme.as_str())?;
    if let Some(icon) = icon {
        icon.remove_class(SUN_ICON_CLASS)?;
        icon.remove_class(MOON_ICON_CLASS)?;
        icon.add_class(theme.icon_class())?;
    }
    Ok(theme)
}

/// Click path: flip the theme shown on `root`, persist it, and swap the icon.
///
/// The icon is expected whenever the toggle exists. If it is missing, the
/// attribute and stored value are already updated when
/// [`PageError::MissingElement`] is returned.
///
/// # Errors
///
/// Returns [`PageError::MissingElement`] naming `icon_id` when `icon` is
/// `None`, and propagates attribute, storage, and class-list failures.
pub fn toggle<S, R, I>(
    store: &S,
    root: &R,
    icon: Option<&I>,
    keys: ThemeKeys<'_>,
    icon_id: &str,
) -> Result<Theme, PageError>
where
    S: KeyValueStore,
    R: Attributes,
    I: ClassList,
{
    let current = if root.attribute(keys.attribute).as_deref() == Some(Theme::Dark.as_str()) {
        Theme::Dark
    } else {
        Theme::Light
    };
    let next = current.toggled();

    root.set_attribute(keys.attribute, next.as_str())?;
    store.set_item(keys.storage_key, next.as_str())?;

    let icon = icon.ok_or_else(|| PageError::missing(icon_id))?;
    icon.replace_class(current.icon_class(), next.icon_class())?;
    Ok(next)
}
