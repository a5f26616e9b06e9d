//! # Easel WASM Application
//!
//! Binds the Easel editor core to an HTML page: the canvas, the property
//! sidebar, the delete button, the background picker and the image upload
//! input are looked up by id and wired to the editor. Add and preview
//! buttons are bound when the page has them.
//!
//! ## Usage
//!
//! Build for WASM:
//! ```bash
//! wasm-pack build --target web easel-app
//! ```
//!
//! Then import in JavaScript:
//! ```javascript
//! import init, { EaselApp } from './pkg/easel_app.js';
//!
//! await init();
//! const app = new EaselApp();
//! app.addElement('shape');
//! // Unregisters every listener the editor added to the page.
//! app.free();
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
mod dom;
pub mod error;
mod listeners;
mod panel;
mod session;
mod view;

use std::{cell::RefCell, rc::Rc};

use easel_core::{Editor, EditorEvent, NodeKind};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub use config::{AppConfig, WidgetIds};
pub use error::{AppError, AppResult};

use listeners::PageListeners;
use panel::PanelWidgets;
use session::{Handle, Session, Shared};
use view::CanvasView;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
    tracing::info!("Easel WASM initialized");
}

/// The editor bound to the current page.
#[wasm_bindgen]
pub struct EaselApp {
    shared: Shared,
    handle: Handle,
    page: PageListeners,
}

#[wasm_bindgen]
impl EaselApp {
    /// Bind the editor to the page, optionally with a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a required widget
    /// is missing from the page.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<EaselApp, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => AppConfig::from_json(json)?,
            None => AppConfig::default(),
        };
        Ok(Self::bind(config)?)
    }

    /// Add an element of the given kind (`text`, `image` or `shape`).
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown kind.
    #[wasm_bindgen(js_name = addElement)]
    pub fn add_element(&self, kind: &str) -> Result<(), JsValue> {
        let kind: NodeKind = kind.parse().map_err(AppError::from)?;
        self.handle.dispatch(&EditorEvent::AddElement { kind });
        Ok(())
    }

    /// Switch preview mode on or off.
    #[wasm_bindgen(js_name = togglePreview)]
    pub fn toggle_preview(&self) {
        self.handle.dispatch(&EditorEvent::TogglePreview);
    }

    /// Delete the selected element.
    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&self) {
        self.handle.dispatch(&EditorEvent::DeleteSelected);
    }

    /// Set the canvas background color.
    #[wasm_bindgen(js_name = setCanvasBackground)]
    pub fn set_canvas_background(&self, color: &str) {
        self.handle.dispatch(&EditorEvent::SetCanvasBackground {
            color: color.to_string(),
        });
    }

    /// Id of the selected element, if any.
    #[wasm_bindgen(js_name = selectedId)]
    #[must_use]
    pub fn selected_id(&self) -> Option<String> {
        self.editor(|editor| editor.state().selection().map(ToString::to_string))
            .flatten()
    }

    /// Whether preview mode is active.
    #[wasm_bindgen(js_name = isPreview)]
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.editor(|editor| editor.state().is_preview())
            .unwrap_or_default()
    }

    /// Number of elements on the canvas.
    #[wasm_bindgen(js_name = nodeCount)]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.editor(|editor| editor.state().scene().node_count())
            .unwrap_or_default()
    }

    /// Number of DOM listeners the editor has registered on the page.
    #[wasm_bindgen(js_name = listenerCount)]
    #[must_use]
    pub fn listener_count(&self) -> usize {
        let session = self
            .shared
            .try_borrow()
            .map_or(0, |session| session.listener_count());
        self.page.len() + session
    }

    /// The full editor state as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor is busy or serialization fails.
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        let snapshot = self
            .editor(Editor::snapshot)
            .ok_or_else(|| JsValue::from_str("Editor is busy"))?;
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl EaselApp {
    fn bind(config: AppConfig) -> AppResult<Self> {
        let document = dom::document()?;
        let ids = &config.widgets;
        let canvas: HtmlElement = dom::widget(&document, &ids.canvas)?;

        let panel = PanelWidgets::resolve(&document, ids)?;
        let shared: Shared = Rc::new(RefCell::new(Session::new(
            Editor::new(config.editor.clone()),
            document.clone(),
            CanvasView::new(document.clone(), canvas.clone()),
            panel,
        )));
        let handle = Handle::new(&shared);
        let page = PageListeners::bind(&document, &canvas, ids, &handle)?;
        shared.borrow_mut().attach_panel(&handle)?;
        tracing::info!(
            "Easel bound to #{} with {} page listeners",
            ids.canvas,
            page.len()
        );

        Ok(Self {
            shared,
            handle,
            page,
        })
    }

    fn editor<T>(&self, f: impl FnOnce(&Editor) -> T) -> Option<T> {
        match self.shared.try_borrow() {
            Ok(session) => Some(f(&session.editor)),
            Err(_) => None,
        }
    }
}
