//! Element factory: builds new nodes with kind-specific defaults.

use crate::{format_px, CanvasNode, EditorConfig, NodeContent, NodeId, NodeKind, Position, Size};

/// Builds nodes of a requested kind with default styling and a fresh identifier.
#[derive(Debug, Clone)]
pub struct ElementFactory {
    spawn_position: Position,
    placeholder_text: String,
    placeholder_image: String,
    shape_size: Size,
    shape_fill: String,
}

impl ElementFactory {
    /// Create a factory from the editor configuration.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            spawn_position: config.spawn_position,
            placeholder_text: config.placeholder_text.clone(),
            placeholder_image: config.placeholder_image.clone(),
            shape_size: config.shape_size,
            shape_fill: config.shape_fill.clone(),
        }
    }

    /// Build a node of the given kind at the spawn position.
    #[must_use]
    pub fn create(&self, kind: NodeKind) -> CanvasNode {
        match kind {
            NodeKind::Text => self.spawn(NodeContent::Text {
                text: self.placeholder_text.clone(),
            }),
            NodeKind::Image => self.create_image(&self.placeholder_image),
            NodeKind::Shape => self
                .spawn(NodeContent::Shape)
                .with_style("width", format_px(self.shape_size.width))
                .with_style("height", format_px(self.shape_size.height))
                .with_style("background-color", self.shape_fill.clone()),
        }
    }

    /// Build an image node showing `src` at the spawn position.
    #[must_use]
    pub fn create_image(&self, src: &str) -> CanvasNode {
        self.spawn(NodeContent::Image {
            src: src.to_string(),
        })
    }

    fn spawn(&self, content: NodeContent) -> CanvasNode {
        CanvasNode::new(NodeId::generate(), content).with_position(self.spawn_position)
    }
}

impl Default for ElementFactory {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
