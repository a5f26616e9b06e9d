//! Error types for editor operations.

use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur in editor operations.
///
/// User-facing [`Editor`](crate::Editor) operations never surface these; a
/// failed precondition is logged and the operation becomes a no-op.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Node not found in the scene.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Element kind name is not one of text, image or shape.
    #[error("Unknown element kind: {0}")]
    UnknownKind(String),

    /// Identifier cannot be used as a CSS id selector.
    #[error("Invalid node identifier: {0:?}")]
    InvalidNodeId(String),

    /// Style field only exists for another kind of node.
    #[error("Field {field} does not apply to {kind} nodes")]
    FieldNotApplicable {
        /// CSS name of the rejected field.
        field: &'static str,
        /// Kind of the selected node.
        kind: &'static str,
    },

    /// Style value would break out of its declaration.
    #[error("Rejected style value: {0:?}")]
    InvalidStyleValue(String),

    /// Operation requires a selected node.
    #[error("No node is selected")]
    NoSelection,

    /// Operation is suspended while preview mode is active.
    #[error("Preview mode is active")]
    PreviewActive,

    /// Uploaded file is not an image.
    #[error("Unsupported media type: {0:?}")]
    UnsupportedMedia(String),

    /// Uploaded file has no content.
    #[error("Image file is empty")]
    EmptyImage,

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration or script serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
