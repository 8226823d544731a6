//! Identifiers the page behaviors look up, with the theme's defaults.
//!
//! A page whose markup uses different ids puts a partial JSON document in the
//! `data-page-config` attribute on `<html>`; every field left out keeps its
//! default from [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::PageError;

/// Element ids, selectors, class names, and the storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub nav_id: String,
    pub theme_icon_id: String,
    pub theme_toggle_id: String,
    pub profile_menu_id: String,
    pub tooltip_selector: String,
    pub theme_attribute: String,
    pub theme_storage_key: String,
    pub fixed_class: String,
    pub visible_class: String,
    pub hidden_class: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_id: consts::NAV_ID.to_owned(),
            theme_icon_id: consts::THEME_ICON_ID.to_owned(),
            theme_toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
            profile_menu_id: consts::PROFILE_MENU_ID.to_owned(),
            tooltip_selector: consts::TOOLTIP_SELECTOR.to_owned(),
            theme_attribute: consts::THEME_ATTRIBUTE.to_owned(),
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            fixed_class: consts::FIXED_CLASS.to_owned(),
            visible_class: consts::VISIBLE_CLASS.to_owned(),
            hidden_class: consts::HIDDEN_CLASS.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse an override document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] for malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }
}
