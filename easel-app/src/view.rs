//! DOM mirror of the scene.
//!
//! Each node is a `div.element.<kind>` inside the canvas whose `id` is the
//! node id and whose inline style is rewritten from the model after every
//! move or restyle. Hover rules live in one `<style>` element per node in
//! the document head.

use std::collections::HashMap;

use easel_core::{CanvasNode, EditorEvent, NodeContent, NodeId, NodeKind};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlStyleElement, MouseEvent};

use crate::dom::{self, Listener};
use crate::error::{AppError, AppResult};
use crate::session::Handle;

/// Class list of a node element.
pub(crate) fn class_name(kind: NodeKind) -> String {
    format!("element {kind}")
}

/// Id of the `<style>` element holding a node's hover rule.
pub(crate) fn hover_style_id(node: &NodeId) -> String {
    format!("{node}-hover")
}

fn place(node: &CanvasNode, element: &HtmlElement) -> AppResult<()> {
    element
        .set_attribute("style", &node.inline_style())
        .map_err(|e| AppError::dom(&e))
}

struct NodeView {
    element: HtmlElement,
    listeners: Vec<(&'static str, Listener)>,
}

impl NodeView {
    fn unlisten(&self) {
        for (event, listener) in &self.listeners {
            dom::unlisten(&self.element, event, listener);
        }
    }

    fn detach(self) {
        self.unlisten();
        self.element.remove();
    }
}

/// Node elements currently on the canvas.
pub(crate) struct CanvasView {
    document: Document,
    canvas: HtmlElement,
    nodes: HashMap<NodeId, NodeView>,
    hover_styles: HashMap<NodeId, HtmlStyleElement>,
}

impl CanvasView {
    pub(crate) fn new(document: Document, canvas: HtmlElement) -> Self {
        Self {
            document,
            canvas,
            nodes: HashMap::new(),
            hover_styles: HashMap::new(),
        }
    }

    /// Create the element for a new node and append it to the canvas.
    pub(crate) fn mount(&mut self, node: &CanvasNode, handle: &Handle) -> AppResult<()> {
        let element: HtmlElement = dom::create(&self.document, "div")?;
        element.set_id(node.id.as_str());
        element.set_class_name(&class_name(node.kind()));

        match &node.content {
            NodeContent::Text { text } => {
                element.set_text_content(Some(text));
                element.set_content_editable("true");
            }
            NodeContent::Image { src } => {
                let img: HtmlImageElement = dom::create(&self.document, "img")?;
                img.set_src(src);
                img.set_draggable(false);
                element.append_child(&img).map_err(|e| AppError::dom(&e))?;
            }
            NodeContent::Shape => {}
        }

        let mut listeners = Vec::new();

        let id = node.id.clone();
        let h = handle.clone();
        let on_press = dom::listener(move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let pointer = dom::pointer(mouse);
                h.dispatch(&EditorEvent::PointerDown {
                    node: id.clone(),
                    x: pointer.x,
                    y: pointer.y,
                });
            }
        });
        listeners.push(("mousedown", on_press));

        if node.kind() == NodeKind::Text {
            let target = element.clone();
            let on_double_click = dom::listener(move |_| {
                if let Err(e) = target.focus() {
                    tracing::debug!("Focus failed: {:?}", e);
                }
            });
            listeners.push(("dblclick", on_double_click));

            let id = node.id.clone();
            let source = element.clone();
            let h = handle.clone();
            let on_input = dom::listener(move |_| {
                h.dispatch(&EditorEvent::EditText {
                    node: id.clone(),
                    text: source.text_content().unwrap_or_default(),
                });
            });
            listeners.push(("input", on_input));
        }

        for (event, listener) in &listeners {
            dom::listen(&element, event, listener)?;
        }
        self.canvas
            .append_child(&element)
            .map_err(|e| AppError::dom(&e))?;

        let view = NodeView { element, listeners };
        place(node, &view.element)?;
        if let Some(old) = self.nodes.insert(node.id.clone(), view) {
            old.detach();
        }
        Ok(())
    }

    /// Rewrite a node's inline style from the model.
    pub(crate) fn restyle(&self, node: &CanvasNode) -> AppResult<()> {
        let view = self
            .nodes
            .get(&node.id)
            .ok_or_else(|| AppError::MissingElement(node.id.to_string()))?;
        place(node, &view.element)
    }

    /// Remove a node's element and hover rule.
    pub(crate) fn unmount(&mut self, id: &NodeId) {
        if let Some(view) = self.nodes.remove(id) {
            view.detach();
        }
        if let Some(style) = self.hover_styles.remove(id) {
            style.remove();
        }
    }

    /// Turn in-place text editing on or off for every text node.
    pub(crate) fn set_editable(&self, editable: bool) {
        let value = if editable { "true" } else { "false" };
        for view in self.nodes.values() {
            if view.element.class_list().contains(NodeKind::Text.as_str()) {
                view.element.set_content_editable(value);
            }
        }
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.nodes.values().map(|view| view.listeners.len()).sum()
    }

    pub(crate) fn set_background(&self, color: &str) -> AppResult<()> {
        self.canvas
            .style()
            .set_property("background-color", color)
            .map_err(|e| AppError::dom(&e))
    }

    /// Replace the text of a node's hover `<style>` element, creating it on first use.
    pub(crate) fn write_hover_rule(&mut self, id: &NodeId, css: &str) -> AppResult<()> {
        if let Some(style) = self.hover_styles.get(id) {
            style.set_text_content(Some(css));
            return Ok(());
        }
        let style: HtmlStyleElement = dom::create(&self.document, "style")?;
        style.set_id(&hover_style_id(id));
        style.set_text_content(Some(css));
        self.document
            .head()
            .ok_or(AppError::NoDocument)?
            .append_child(&style)
            .map_err(|e| AppError::dom(&e))?;
        self.hover_styles.insert(id.clone(), style);
        Ok(())
    }
}

// Node elements stay on the page; only their callbacks go away.
impl Drop for CanvasView {
    fn drop(&mut self) {
        for view in self.nodes.values() {
            view.unlisten();
        }
    }
}
