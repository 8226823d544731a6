//! Page behaviors for the blog theme, compiled to WebAssembly.
//!
//! The crate replaces the theme's page script. It pins and hides the
//! navigation bar as the reader scrolls, attaches Bootstrap tooltips, keeps
//! the light/dark theme preference in `localStorage`, and toggles the
//! profile menu.
//!
//! All decisions live in plain Rust that talks to the page through the
//! [`dom`] traits, so they run and test on any host. The `hydrate` feature
//! adds the [`browser`] bindings and the [`controller`] that wires DOM events
//! to the core on page load.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Default element ids, class names, and the storage key |
//! | [`config`] | Overridable identifiers (`PageConfig`) |
//! | [`dom`] | Traits over class lists, attributes, and key-value storage |
//! | [`error`] | `PageError` |
//! | [`nav`] | Scroll tracker and the fixed/visible nav transition |
//! | [`tooltip`] | Tooltip widget attachment |
//! | [`theme`] | Theme preference load and toggle |
//! | [`menu`] | Profile menu visibility toggle |
//! | `browser` | `web-sys` implementations of the [`dom`] traits (`hydrate`) |
//! | `controller` | Page-load wiring and JS exports (`hydrate`) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod menu;
pub mod nav;
pub mod theme;
pub mod tooltip;

#[cfg(feature = "hydrate")]
pub mod browser;
#[cfg(feature = "hydrate")]
pub mod controller;

#[cfg(test)]
mod testing;

pub use config::PageConfig;
pub use error::PageError;
