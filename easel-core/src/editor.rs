//! The editor controller.
//!
//! [`Editor`] owns the [`EditorState`] and applies every user action to it.
//! Operations are total: when a precondition fails (preview active, nothing
//! selected, unknown node) the operation logs why and reports no changes.

use serde::Serialize;

use crate::{
    AdditionalField, CanvasNode, Change, DragSession, EditorConfig, EditorError, EditorEvent,
    EditorResult, EditorState, ElementFactory, HoverProperty, NodeContent, NodeId, NodeKind,
    PanelView, Position, StyleField,
};

/// The single controller of an editing session.
#[derive(Debug, Clone)]
pub struct Editor {
    state: EditorState,
    factory: ElementFactory,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty canvas.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: EditorState::new(),
            factory: ElementFactory::new(&config),
            config,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Build the property panel for the current selection.
    #[must_use]
    pub fn panel(&self) -> PanelView {
        PanelView::build(&self.state, &self.config)
    }

    /// Apply one event.
    pub fn dispatch(&mut self, event: &EditorEvent) -> Vec<Change> {
        match event {
            EditorEvent::AddElement { kind } => self.add_element(*kind),
            EditorEvent::AddImage { src } => self.add_image(src),
            EditorEvent::PointerDown { node, x, y } => self.select(node, Position::new(*x, *y)),
            EditorEvent::PointerMove { x, y } => self.pointer_move(Position::new(*x, *y)),
            EditorEvent::PointerUp => self.pointer_up(),
            EditorEvent::BackgroundClick => self.click_background(),
            EditorEvent::Key { key } => self.key_down(key),
            EditorEvent::DeleteSelected => self.delete_selected(),
            EditorEvent::TogglePreview => self.toggle_preview(),
            EditorEvent::SetCanvasBackground { color } => self.set_canvas_background(color),
            EditorEvent::SetStyleField { field, value } => self.set_style_field(*field, value),
            EditorEvent::SetAdditionalField { field, value } => {
                self.set_additional_field(*field, value)
            }
            EditorEvent::SetHover { property, value } => self.set_hover(*property, value),
            EditorEvent::EditText { node, text } => self.edit_text(node, text),
        }
    }

    /// Add a new node of `kind` and select it.
    pub fn add_element(&mut self, kind: NodeKind) -> Vec<Change> {
        let node = self.factory.create(kind);
        self.insert(node)
    }

    /// Add an image node showing `src` and select it.
    pub fn add_image(&mut self, src: &str) -> Vec<Change> {
        let node = self.factory.create_image(src);
        self.insert(node)
    }

    fn insert(&mut self, mut node: CanvasNode) -> Vec<Change> {
        if self.state.is_preview() {
            tracing::debug!("Ignoring add of {} node in preview mode", node.kind());
            return Vec::new();
        }
        while self.state.scene().contains(&node.id) {
            node.id = NodeId::generate();
        }
        let kind = node.kind();
        let id = self.state.scene_mut().add_node(node);
        tracing::debug!("Added {kind} node {id}");

        let mut changes = vec![Change::NodeAdded(id.clone())];
        if self.state.drag().is_some() {
            self.state.end_drag();
            changes.push(Change::DragEnded);
        }
        if let Err(e) = self.state.select(&id) {
            tracing::warn!("New node {id} could not be selected: {e}");
        } else {
            changes.push(Change::SelectionChanged);
        }
        changes
    }

    /// Select `node` and start dragging it from `pointer`.
    pub fn select(&mut self, node: &NodeId, pointer: Position) -> Vec<Change> {
        match self.try_select(node, pointer) {
            Ok(changes) => changes,
            Err(e) => {
                tracing::debug!("Ignoring select of {node}: {e}");
                Vec::new()
            }
        }
    }

    fn try_select(&mut self, node: &NodeId, pointer: Position) -> EditorResult<Vec<Change>> {
        self.state.select(node)?;
        let origin = self
            .state
            .selected_node()
            .map(|n| n.position)
            .ok_or_else(|| EditorError::NodeNotFound(node.to_string()))?;

        let mut changes = Vec::new();
        if self.state.end_drag().is_some() {
            changes.push(Change::DragEnded);
        }
        self.state
            .begin_drag(DragSession::begin(node.clone(), pointer, origin))?;
        changes.push(Change::SelectionChanged);
        changes.push(Change::DragStarted(node.clone()));
        Ok(changes)
    }

    /// Move the dragged node so it follows the pointer.
    pub fn pointer_move(&mut self, pointer: Position) -> Vec<Change> {
        let Some(session) = self.state.drag().cloned() else {
            return Vec::new();
        };
        let Some(node) = self.state.scene_mut().node_mut(session.node()) else {
            return Vec::new();
        };
        let target = session.target(pointer);
        if node.position == target {
            return Vec::new();
        }
        node.position = target;
        vec![Change::NodeMoved(session.node().clone())]
    }

    /// End the drag session.
    pub fn pointer_up(&mut self) -> Vec<Change> {
        match self.state.end_drag() {
            Some(session) => {
                tracing::debug!("Drag of {} ended", session.node());
                vec![Change::DragEnded]
            }
            None => Vec::new(),
        }
    }

    /// Clear the selection after a click on empty canvas.
    pub fn click_background(&mut self) -> Vec<Change> {
        if self.state.clear_selection() {
            vec![Change::SelectionChanged]
        } else {
            Vec::new()
        }
    }

    /// Handle a key press; the configured delete key removes the selection.
    pub fn key_down(&mut self, key: &str) -> Vec<Change> {
        if key == self.config.delete_key && self.state.can_delete() {
            self.delete_selected()
        } else {
            Vec::new()
        }
    }

    /// Delete the selected node.
    pub fn delete_selected(&mut self) -> Vec<Change> {
        if self.state.is_preview() {
            tracing::debug!("Ignoring delete in preview mode");
            return Vec::new();
        }
        let Some(id) = self.state.selection().cloned() else {
            return Vec::new();
        };
        let had_drag = self.state.drag().is_some();
        match self.state.remove_node(&id) {
            Ok(node) => {
                tracing::debug!("Deleted {} node {id}", node.kind());
                let mut changes = vec![Change::NodeRemoved(id), Change::SelectionChanged];
                if had_drag && self.state.drag().is_none() {
                    changes.push(Change::DragEnded);
                }
                changes
            }
            Err(e) => {
                tracing::warn!("Selected node vanished: {e}");
                Vec::new()
            }
        }
    }

    /// Flip preview mode.
    pub fn toggle_preview(&mut self) -> Vec<Change> {
        let entering = !self.state.is_preview();
        let had_selection = self.state.selection().is_some();
        let had_drag = self.state.drag().is_some();
        self.state.set_preview(entering);
        tracing::info!("Preview mode {}", if entering { "on" } else { "off" });

        let mut changes = vec![Change::PreviewToggled(entering)];
        if had_drag && entering {
            changes.push(Change::DragEnded);
        }
        if had_selection && entering {
            changes.push(Change::SelectionChanged);
        }
        changes
    }

    /// Set the canvas background color.
    pub fn set_canvas_background(&mut self, color: &str) -> Vec<Change> {
        self.state.scene_mut().set_background(color);
        vec![Change::CanvasBackgroundChanged]
    }

    /// Commit a basic panel field to the selected node.
    pub fn set_style_field(&mut self, field: StyleField, value: &str) -> Vec<Change> {
        let Some(node) = self.state.selected_node_mut() else {
            tracing::debug!("Ignoring {} change without selection", field.css_name());
            return Vec::new();
        };
        match field.commit(node, value) {
            Ok(()) => vec![Change::NodeRestyled(node.id.clone())],
            Err(e) => {
                tracing::warn!("{e}");
                Vec::new()
            }
        }
    }

    /// Commit an additional panel field to the selected node.
    pub fn set_additional_field(&mut self, field: AdditionalField, value: &str) -> Vec<Change> {
        let Some(node) = self.state.selected_node_mut() else {
            tracing::debug!("Ignoring {} change without selection", field.key());
            return Vec::new();
        };
        match field.declaration(value) {
            Ok((property, css)) => {
                node.style.set(property, css);
                vec![Change::NodeRestyled(node.id.clone())]
            }
            Err(e) => {
                tracing::warn!("{} of {} not updated: {e}", field.key(), node.id);
                Vec::new()
            }
        }
    }

    /// Rewrite the selected node's hover rule.
    pub fn set_hover(&mut self, property: HoverProperty, value: &str) -> Vec<Change> {
        let Some(id) = self.state.selection().cloned() else {
            tracing::debug!("Ignoring hover {} without selection", property.css_name());
            return Vec::new();
        };
        match self.state.hover_mut().set(&id, property, value) {
            Ok(()) => vec![Change::HoverRuleChanged(id)],
            Err(e) => {
                tracing::warn!("Hover rule for {id} not updated: {e}");
                Vec::new()
            }
        }
    }

    /// Sync text typed into a text node.
    pub fn edit_text(&mut self, node: &NodeId, text: &str) -> Vec<Change> {
        if self.state.is_preview() {
            return Vec::new();
        }
        match self.state.scene_mut().node_mut(node).map(|n| &mut n.content) {
            Some(NodeContent::Text { text: current }) => {
                if *current == text {
                    return Vec::new();
                }
                *current = text.to_string();
                vec![Change::NodeContentChanged(node.clone())]
            }
            Some(_) => {
                tracing::debug!("Ignoring text edit of non-text node {node}");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Serializable view of the whole editor.
    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            nodes: self.state.scene().nodes().cloned().collect(),
            canvas_background: self.state.scene().background().map(str::to_string),
            selection: self.state.selection().cloned(),
            preview: self.state.is_preview(),
            dragging: self.state.drag().map(|s| s.node().clone()),
            hover_stylesheet: self.state.hover().stylesheet(),
            panel: self.panel(),
        }
    }
}

/// Point-in-time view of the editor, for diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorSnapshot {
    /// Nodes in insertion order.
    pub nodes: Vec<CanvasNode>,
    /// Canvas background color.
    pub canvas_background: Option<String>,
    /// Selected node.
    pub selection: Option<NodeId>,
    /// Whether preview mode is active.
    pub preview: bool,
    /// Node being dragged.
    pub dragging: Option<NodeId>,
    /// All hover rules.
    pub hover_stylesheet: String,
    /// Property panel contents.
    pub panel: PanelView,
}
