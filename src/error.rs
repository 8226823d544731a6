//! Error type for page behaviors.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("element not found: #{0}")]
    MissingElement(String),
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PageError {
    /// Stable code for log lines and JS-facing errors.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingElement(_) => "E_MISSING_ELEMENT",
            Self::NoWindow => "E_NO_WINDOW",
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::Storage(_) => "E_STORAGE",
            Self::Dom(_) => "E_DOM",
            Self::Config(_) => "E_CONFIG",
        }
    }

    pub(crate) fn missing(id: &str) -> Self {
        Self::MissingElement(id.to_owned())
    }
}

#[cfg(feature = "hydrate")]
impl From<PageError> for wasm_bindgen::JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&format!("{}: {err}", err.error_code())).into()
    }
}
