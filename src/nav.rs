//! Scroll-driven navigation bar: pin after scrolling past it, hide while
//! scrolling down, reveal while scrolling up.
//!
//! Two flags live on the nav element as classes. `fixed` pins the bar to the
//! viewport top once the page has scrolled past the bar's own height;
//! `visible` slides a pinned bar back into view. The transition depends only
//! on the previous and current offset, so [`NavFlags::next`] is a pure
//! function and [`ScrollTracker`] just carries the last offset between
//! events.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::dom::ClassList;
use crate::error::PageError;

/// Presentation flags on the nav element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavFlags {
    /// Pinned to the viewport top.
    pub fixed: bool,
    /// Pinned and currently shown.
    pub visible: bool,
}

impl NavFlags {
    /// Read the flags from the nav's classes.
    #[must_use]
    pub fn read(nav: &impl ClassList, fixed_class: &str, visible_class: &str) -> Self {
        Self {
            fixed: nav.has_class(fixed_class),
            visible: nav.has_class(visible_class),
        }
    }

    /// Flags after the page scrolls from `last` to `current`.
    #[must_use]
    pub fn next(self, last: f64, current: f64, header_height: f64) -> Self {
        if current < last {
            // Scrolling up.
            if current > 0.0 && self.fixed {
                Self { fixed: true, visible: true }
            } else {
                Self::default()
            }
        } else {
            Self {
                fixed: self.fixed || current > header_height,
                visible: false,
            }
        }
    }
}

/// Scroll state kept between events for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
    header_height: f64,
    fixed_class: String,
    visible_class: String,
}

impl ScrollTracker {
    /// Tracker for a nav `header_height` pixels tall, starting at offset 0.
    pub fn new(header_height: f64, fixed_class: impl Into<String>, visible_class: impl Into<String>) -> Self {
        Self {
            last_offset: 0.0,
            header_height,
            fixed_class: fixed_class.into(),
            visible_class: visible_class.into(),
        }
    }

    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    #[must_use]
    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    /// Apply one scroll sample to `nav` and remember `current_top`.
    ///
    /// Only classes whose state changes are touched.
    ///
    /// # Errors
    ///
    /// Propagates class-list failures from `nav`. The offset is still
    /// recorded so the next sample compares against this one.
    pub fn on_scroll(&mut self, nav: &impl ClassList, current_top: f64) -> Result<NavFlags, PageError> {
        let before = NavFlags::read(nav, &self.fixed_class, &self.visible_class);
        let after = before.next(self.last_offset, current_top, self.header_height);
        self.last_offset = current_top;

        sync_class(nav, &self.visible_class, before.visible, after.visible)?;
        sync_class(nav, &self.fixed_class, before.fixed, after.fixed)?;
        Ok(after)
    }
}

fn sync_class(nav: &impl ClassList, class: &str, was: bool, now: bool) -> Result<(), PageError> {
    match (was, now) {
        (false, true) => nav.add_class(class),
        (true, false) => nav.remove_class(class),
        _ => Ok(()),
    }
}
