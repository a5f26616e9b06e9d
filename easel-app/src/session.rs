//! The live editing session: editor model plus its DOM mirror.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use easel_core::{Change, Editor, EditorEvent};
use web_sys::Document;

use crate::error::{AppError, AppResult};
use crate::listeners::DragListeners;
use crate::panel::PanelWidgets;
use crate::view::CanvasView;

pub(crate) type Shared = Rc<RefCell<Session>>;

/// Weak reference held by DOM callbacks.
#[derive(Clone)]
pub(crate) struct Handle(Weak<RefCell<Session>>);

impl Handle {
    pub(crate) fn new(shared: &Shared) -> Self {
        Self(Rc::downgrade(shared))
    }

    /// Apply an event and update the page.
    ///
    /// Events raised while another event is being applied (a DOM call firing
    /// a listener synchronously) are dropped.
    pub(crate) fn dispatch(&self, event: &EditorEvent) {
        let Some(shared) = self.0.upgrade() else {
            return;
        };
        let Ok(mut session) = shared.try_borrow_mut() else {
            tracing::debug!("Dropping re-entrant event {:?}", event);
            return;
        };
        session.dispatch(self, event);
    }
}

pub(crate) struct Session {
    pub(crate) editor: Editor,
    document: Document,
    canvas: CanvasView,
    panel: PanelWidgets,
    drag: DragListeners,
}

impl Session {
    pub(crate) fn new(
        editor: Editor,
        document: Document,
        canvas: CanvasView,
        panel: PanelWidgets,
    ) -> Self {
        Self {
            editor,
            canvas,
            panel,
            drag: DragListeners::new(document.clone()),
            document,
        }
    }

    fn dispatch(&mut self, handle: &Handle, event: &EditorEvent) {
        let changes = self.editor.dispatch(event);
        let mut rebuild = false;
        for change in &changes {
            if let Err(e) = self.apply(handle, change) {
                tracing::warn!("Failed to apply {:?}: {}", change, e);
            }
            rebuild |= change.rebuilds_panel();
        }
        if rebuild {
            if let Err(e) = self.panel.rebuild(&self.editor.panel(), handle) {
                tracing::warn!("Failed to rebuild property panel: {}", e);
            }
        }
    }

    fn apply(&mut self, handle: &Handle, change: &Change) -> AppResult<()> {
        let scene = self.editor.state().scene();
        match change {
            Change::NodeAdded(id) => {
                let node = scene
                    .node(id)
                    .ok_or_else(|| AppError::MissingElement(id.to_string()))?;
                self.canvas.mount(node, handle)
            }
            Change::NodeMoved(id) | Change::NodeRestyled(id) => match scene.node(id) {
                Some(node) => self.canvas.restyle(node),
                None => Ok(()),
            },
            Change::NodeRemoved(id) => {
                self.canvas.unmount(id);
                Ok(())
            }
            Change::DragStarted(_) => self.drag.attach(handle),
            Change::DragEnded => {
                self.drag.detach();
                Ok(())
            }
            Change::PreviewToggled(preview) => {
                self.canvas.set_editable(!*preview);
                let body = self.document.body().ok_or(AppError::NoDocument)?;
                body.class_list()
                    .toggle_with_force("preview-mode", *preview)
                    .map(|_| ())
                    .map_err(|e| AppError::dom(&e))
            }
            Change::CanvasBackgroundChanged => match scene.background() {
                Some(color) => self.canvas.set_background(color),
                None => Ok(()),
            },
            Change::HoverRuleChanged(id) => {
                let css = self.editor.state().hover().css_text(id).unwrap_or_default();
                self.canvas.write_hover_rule(id, &css)
            }
            // The DOM already holds typed text; panel rebuilds happen after the batch.
            Change::NodeContentChanged(_) | Change::SelectionChanged => Ok(()),
        }
    }

    /// Attach the sidebar listeners and show the initial, empty panel.
    pub(crate) fn attach_panel(&mut self, handle: &Handle) -> AppResult<()> {
        self.panel.listen(handle)?;
        self.panel.rebuild(&self.editor.panel(), handle)?;
        tracing::debug!("Panel bound with {} listeners", self.panel.listener_count());
        Ok(())
    }

    /// DOM listeners registered by the panel, the nodes and an active drag.
    pub(crate) fn listener_count(&self) -> usize {
        self.panel.listener_count() + self.canvas.listener_count() + self.drag.len()
    }
}
