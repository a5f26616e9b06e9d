//! Scene: the nodes currently on the canvas.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{CanvasNode, EditorError, EditorResult, NodeId};

/// All nodes on the canvas, in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    /// All nodes, indexed by ID.
    nodes: HashMap<NodeId, CanvasNode>,
    /// Insertion order of node IDs.
    order: Vec<NodeId>,
    /// Canvas-level background color, if one was picked.
    background: Option<String>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node to the scene.
    pub fn add_node(&mut self, node: CanvasNode) -> NodeId {
        let id = node.id.clone();
        if self.nodes.insert(id.clone(), node).is_none() {
            self.order.push(id.clone());
        }
        id
    }

    /// Remove a node from the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not found.
    pub fn remove_node(&mut self, id: &NodeId) -> EditorResult<CanvasNode> {
        let node = self
            .nodes
            .remove(id)
            .ok_or_else(|| EditorError::NodeNotFound(id.to_string()))?;
        self.order.retain(|nid| nid != id);
        Ok(node)
    }

    /// Get a node by ID.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&CanvasNode> {
        self.nodes.get(id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut CanvasNode> {
        self.nodes.get_mut(id)
    }

    /// Whether a node with this ID is on the canvas.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &CanvasNode> {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Number of nodes on the canvas.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the canvas is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Canvas background color.
    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Set the canvas background color.
    pub fn set_background(&mut self, color: impl Into<String>) {
        self.background = Some(color.into());
    }
}
