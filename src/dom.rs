//! The slice of the page the behaviors touch.
//!
//! Methods take `&self` because DOM handles are shared references to
//! browser-owned nodes. The `hydrate` feature implements these traits for
//! `web_sys::Element` and `web_sys::Storage`; tests use in-memory fakes.

use crate::error::PageError;

/// An element's class list, with `DOMTokenList` semantics.
pub trait ClassList {
    fn has_class(&self, class: &str) -> bool;

    /// # Errors
    ///
    /// Returns [`PageError::Dom`] if the browser rejects the token.
    fn add_class(&self, class: &str) -> Result<(), PageError>;

    /// # Errors
    ///
    /// Returns [`PageError::Dom`] if the browser rejects the token.
    fn remove_class(&self, class: &str) -> Result<(), PageError>;

    /// Flip `class`, returning whether it is now present.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Dom`] if the browser rejects the token.
    fn toggle_class(&self, class: &str) -> Result<bool, PageError> {
        if self.has_class(class) {
            self.remove_class(class)?;
            Ok(false)
        } else {
            self.add_class(class)?;
            Ok(true)
        }
    }

    /// Swap `old` for `new` when `old` is present. Returns whether it was.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Dom`] if the browser rejects either token.
    fn replace_class(&self, old: &str, new: &str) -> Result<bool, PageError> {
        if !self.has_class(old) {
            return Ok(false);
        }
        self.remove_class(old)?;
        self.add_class(new)?;
        Ok(true)
    }
}

/// Named string attributes on an element.
pub trait Attributes {
    fn attribute(&self, name: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`PageError::Dom`] if the browser rejects the attribute.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), PageError>;
}

/// String key-value storage that survives reloads.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`PageError::Storage`] if the write fails (e.g. quota).
    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError>;
}
