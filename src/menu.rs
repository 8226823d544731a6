//! Profile menu visibility toggle.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::dom::ClassList;
use crate::error::PageError;

/// Flip `hidden_class` on `menu`. Returns whether the menu is now hidden.
///
/// # Errors
///
/// Propagates class-list failures.
pub fn toggle_menu(menu: &impl ClassList, hidden_class: &str) -> Result<bool, PageError> {
    menu.toggle_class(hidden_class)
}
