//! `web-sys` bindings for the [`crate::dom`] traits and page lookups.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window`, `document`, or `localStorage` lives
//! here so the behavior modules stay host-agnostic.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Storage, Window};

use crate::dom::{Attributes, ClassList, KeyValueStore};
use crate::error::PageError;

/// Render a thrown `JsValue` for [`PageError`].
pub(crate) fn dom_error(err: JsValue) -> PageError {
    PageError::Dom(describe(&err))
}

fn storage_error(err: JsValue) -> PageError {
    PageError::Storage(describe(&err))
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// =============================================================================
// LOOKUPS
// =============================================================================

/// # Errors
///
/// [`PageError::NoWindow`] outside a browser.
pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

/// # Errors
///
/// [`PageError::NoWindow`] / [`PageError::NoDocument`] outside a page.
pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// The page's `localStorage`.
///
/// # Errors
///
/// [`PageError::Storage`] when storage is disabled (private mode, sandboxed
/// iframe).
pub fn local_storage() -> Result<Storage, PageError> {
    window()?
        .local_storage()
        .map_err(storage_error)?
        .ok_or_else(|| PageError::Storage("localStorage unavailable".into()))
}

/// # Errors
///
/// [`PageError::MissingElement`] when no element has `id`.
pub fn require_element(document: &Document, id: &str) -> Result<Element, PageError> {
    document.get_element_by_id(id).ok_or_else(|| PageError::missing(id))
}

/// How far the page body has scrolled, in CSS pixels. Negative during
/// elastic overscroll above the top.
pub fn scroll_top(document: &Document) -> f64 {
    document
        .body()
        .map_or(0.0, |body| -body.get_bounding_client_rect().top())
}

/// Rendered height of `element` in CSS pixels.
pub fn client_height(element: &Element) -> f64 {
    f64::from(element.client_height())
}

// =============================================================================
// TRAIT IMPLS
// =============================================================================

impl ClassList for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), PageError> {
        self.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> Result<(), PageError> {
        self.class_list().remove_1(class).map_err(dom_error)
    }

    fn toggle_class(&self, class: &str) -> Result<bool, PageError> {
        self.class_list().toggle(class).map_err(dom_error)
    }

    fn replace_class(&self, old: &str, new: &str) -> Result<bool, PageError> {
        self.class_list().replace(old, new).map_err(dom_error)
    }
}

impl Attributes for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), PageError> {
        Element::set_attribute(self, name, value).map_err(dom_error)
    }
}

impl KeyValueStore for Storage {
    fn get_item(&self, key: &str) -> Option<String> {
        Storage::get_item(self, key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError> {
        Storage::set_item(self, key, value).map_err(storage_error)
    }
}
