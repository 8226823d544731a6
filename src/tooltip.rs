//! Tooltip widget attachment.
//!
//! The widget itself belongs to Bootstrap's bundle, loaded by the page as a
//! global. This module only walks the trigger elements and hands each one to
//! a constructor; a constructor that throws is not caught here.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

/// Construct one widget per element with `factory`. Returns the count.
pub fn attach_all<E, W>(elements: impl IntoIterator<Item = E>, mut factory: impl FnMut(&E) -> W) -> usize {
    let mut count = 0;
    for el in elements {
        factory(&el);
        count += 1;
    }
    count
}

#[cfg(feature = "hydrate")]
mod bootstrap {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// `bootstrap.Tooltip` from the page's Bootstrap bundle.
        #[wasm_bindgen(js_namespace = bootstrap)]
        pub type Tooltip;

        #[wasm_bindgen(constructor, js_namespace = bootstrap)]
        pub fn new(element: &web_sys::Element) -> Tooltip;
    }
}

#[cfg(feature = "hydrate")]
pub use bootstrap::Tooltip;

/// Attach a `bootstrap.Tooltip` to every element matching `selector`.
///
/// # Errors
///
/// Returns [`crate::PageError::Dom`] if `selector` is not a valid selector.
#[cfg(feature = "hydrate")]
pub fn init_tooltips(document: &web_sys::Document, selector: &str) -> Result<usize, crate::PageError> {
    use wasm_bindgen::JsCast;

    let nodes = document
        .query_selector_all(selector)
        .map_err(crate::browser::dom_error)?;
    let elements = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok());
    Ok(attach_all(elements, Tooltip::new))
}
