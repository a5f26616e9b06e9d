//! Editor state.
//!
//! Invariants kept here:
//! - the selection, when set, names a node present in the scene;
//! - while preview is active the selection and the drag session are empty;
//! - removing a node clears the selection, drag session and hover container
//!   that refer to it in the same call.

use crate::{
    CanvasNode, DragSession, EditorError, EditorResult, HoverRuleRegistry, NodeId, Scene,
};

/// The complete editor state.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    scene: Scene,
    selection: Option<NodeId>,
    preview: bool,
    drag: Option<DragSession>,
    hover: HoverRuleRegistry,
}

impl EditorState {
    /// Create an empty editor state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene.
    ///
    /// Node removal must go through [`EditorState::remove_node`].
    pub(crate) fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Currently selected node ID.
    #[must_use]
    pub fn selection(&self) -> Option<&NodeId> {
        self.selection.as_ref()
    }

    /// Currently selected node.
    #[must_use]
    pub fn selected_node(&self) -> Option<&CanvasNode> {
        self.selection.as_ref().and_then(|id| self.scene.node(id))
    }

    /// Mutable access to the currently selected node.
    pub fn selected_node_mut(&mut self) -> Option<&mut CanvasNode> {
        let id = self.selection.as_ref()?;
        self.scene.node_mut(id)
    }

    /// Whether preview mode is active.
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.preview
    }

    /// Active drag session.
    #[must_use]
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Hover rule registry.
    #[must_use]
    pub fn hover(&self) -> &HoverRuleRegistry {
        &self.hover
    }

    /// Mutable access to the hover rule registry.
    pub(crate) fn hover_mut(&mut self) -> &mut HoverRuleRegistry {
        &mut self.hover
    }

    /// Whether the delete affordance should be offered.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        !self.preview && self.selection.is_some()
    }

    /// Select a node.
    ///
    /// # Errors
    ///
    /// Returns an error in preview mode or if the node is not in the scene.
    pub fn select(&mut self, id: &NodeId) -> EditorResult<()> {
        if self.preview {
            return Err(EditorError::PreviewActive);
        }
        if !self.scene.contains(id) {
            return Err(EditorError::NodeNotFound(id.to_string()));
        }
        self.selection = Some(id.clone());
        Ok(())
    }

    /// Clear the selection. Returns `true` if something was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.selection.take().is_some()
    }

    /// Start a drag session for the selected node.
    ///
    /// # Errors
    ///
    /// Returns an error if the session's node is not the selection.
    pub fn begin_drag(&mut self, session: DragSession) -> EditorResult<()> {
        if self.selection.as_ref() != Some(session.node()) {
            return Err(EditorError::NoSelection);
        }
        self.drag = Some(session);
        Ok(())
    }

    /// End the drag session, returning it if one was active.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        self.drag.take()
    }

    /// Switch preview mode. Entering preview clears selection and drag.
    pub fn set_preview(&mut self, preview: bool) {
        self.preview = preview;
        if preview {
            self.selection = None;
            self.drag = None;
        }
    }

    /// Remove a node and everything that points at it.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not found.
    pub fn remove_node(&mut self, id: &NodeId) -> EditorResult<CanvasNode> {
        let node = self.scene.remove_node(id)?;
        if self.selection.as_ref() == Some(id) {
            self.selection = None;
        }
        if self.drag.as_ref().is_some_and(|s| s.node() == id) {
            self.drag = None;
        }
        self.hover.remove(id);
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementFactory, NodeKind, Position};

    fn state_with_node() -> (EditorState, NodeId) {
        let mut state = EditorState::new();
        let id = state
            .scene_mut()
            .add_node(ElementFactory::default().create(NodeKind::Shape));
        (state, id)
    }

    #[test]
    fn select_requires_present_node() {
        let mut state = EditorState::new();
        assert!(state.select(&NodeId::generate()).is_err());
        assert!(state.selection().is_none());
    }

    #[test]
    fn preview_clears_and_blocks_selection() {
        let (mut state, id) = state_with_node();
        state.select(&id).expect("select");
        state.set_preview(true);
        assert!(state.selection().is_none());
        assert!(matches!(state.select(&id), Err(EditorError::PreviewActive)));
        state.set_preview(false);
        assert!(state.selection().is_none());
    }

    #[test]
    fn removing_selected_node_clears_everything_pointing_at_it() {
        let (mut state, id) = state_with_node();
        state.select(&id).expect("select");
        state
            .begin_drag(DragSession::begin(
                id.clone(),
                Position::new(20.0, 20.0),
                Position::new(10.0, 10.0),
            ))
            .expect("drag");
        state.hover_mut().ensure_container(&id);

        state.remove_node(&id).expect("remove");
        assert!(state.selection().is_none());
        assert!(state.drag().is_none());
        assert!(!state.hover().has_container(&id));
        assert!(!state.can_delete());
    }

    #[test]
    fn drag_needs_matching_selection() {
        let (mut state, id) = state_with_node();
        let session = DragSession::begin(id, Position::default(), Position::default());
        assert!(state.begin_drag(session).is_err());
    }
}
