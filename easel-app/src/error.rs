//! Error types for the browser shell.

use easel_core::EditorError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type for shell operations.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while binding the editor to the page.
#[derive(Debug, Error)]
pub enum AppError {
    /// No `window` object (not running in a browser).
    #[error("No window object")]
    NoWindow,

    /// The window has no document.
    #[error("No document object")]
    NoDocument,

    /// A configured widget id matched nothing.
    #[error("Element '{0}' not found")]
    MissingElement(String),

    /// A widget exists but has the wrong element type.
    #[error("Element '{id}' is not an {expected}")]
    WrongElementType {
        /// Configured element id.
        id: String,
        /// Expected element interface.
        expected: &'static str,
    },

    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The configuration JSON could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Editor core error.
    #[error(transparent)]
    Editor(#[from] EditorError),
}

impl AppError {
    /// Wrap a thrown JavaScript value.
    pub(crate) fn dom(value: &JsValue) -> Self {
        Self::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
