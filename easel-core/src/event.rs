//! Editor events and the changes they produce.

use serde::{Deserialize, Serialize};

use crate::{AdditionalField, HoverProperty, NodeId, NodeKind, Position, StyleField};

/// A user action, as delivered by the page or a replay script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEvent {
    /// Add-element button for one kind.
    AddElement {
        /// Kind of element to add.
        kind: NodeKind,
    },
    /// A local image finished loading.
    AddImage {
        /// `data:` URL or other image source.
        src: String,
    },
    /// Pointer pressed on a node.
    PointerDown {
        /// Node under the pointer.
        node: NodeId,
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
    /// Pointer moved anywhere on the page.
    PointerMove {
        /// Pointer x.
        x: f32,
        /// Pointer y.
        y: f32,
    },
    /// Pointer released anywhere on the page.
    PointerUp,
    /// Click on empty canvas area.
    BackgroundClick,
    /// Key pressed.
    Key {
        /// `KeyboardEvent.key` value.
        key: String,
    },
    /// Delete affordance clicked.
    DeleteSelected,
    /// Preview toggle clicked.
    TogglePreview,
    /// Canvas background picker changed.
    SetCanvasBackground {
        /// New background color.
        color: String,
    },
    /// Basic panel field changed.
    SetStyleField {
        /// Which field.
        field: StyleField,
        /// New value.
        value: String,
    },
    /// Additional panel field changed.
    SetAdditionalField {
        /// Which field.
        field: AdditionalField,
        /// New raw input value.
        value: String,
    },
    /// Hover field changed.
    SetHover {
        /// Which hover property.
        property: HoverProperty,
        /// New value.
        value: String,
    },
    /// Text typed into an editable text node.
    EditText {
        /// Edited node.
        node: NodeId,
        /// Full new text.
        text: String,
    },
}

impl EditorEvent {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::PointerDown { x, y, .. } | Self::PointerMove { x, y } => {
                Some(Position::new(*x, *y))
            }
            _ => None,
        }
    }
}

/// Something an editor operation touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "change", content = "value", rename_all = "snake_case")]
pub enum Change {
    /// A node was appended to the scene.
    NodeAdded(NodeId),
    /// A node's position changed.
    NodeMoved(NodeId),
    /// A node's inline style changed.
    NodeRestyled(NodeId),
    /// A node's text content changed.
    NodeContentChanged(NodeId),
    /// A node was removed from the scene.
    NodeRemoved(NodeId),
    /// The selection changed; the panel must be rebuilt.
    SelectionChanged,
    /// A drag session began for this node.
    DragStarted(NodeId),
    /// The drag session ended.
    DragEnded,
    /// Preview mode was switched.
    PreviewToggled(bool),
    /// The canvas background changed.
    CanvasBackgroundChanged,
    /// The hover rule of a node changed.
    HoverRuleChanged(NodeId),
}

impl Change {
    /// Whether the property panel must be rebuilt after this change.
    #[must_use]
    pub fn rebuilds_panel(&self) -> bool {
        matches!(
            self,
            Self::SelectionChanged | Self::NodeRemoved(_) | Self::PreviewToggled(_)
        )
    }
}
