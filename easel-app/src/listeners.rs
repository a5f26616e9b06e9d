//! Page-level event listeners.

use easel_core::{image_data_url, EditorEvent, NodeKind};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, EventTarget, File, HtmlElement, HtmlInputElement, KeyboardEvent, MouseEvent,
};

use crate::config::WidgetIds;
use crate::dom::{self, Listener};
use crate::error::{AppError, AppResult};
use crate::session::Handle;

/// Document listeners that exist only while a node is being dragged.
///
/// Listeners removed on pointer-up are kept until the next drag starts,
/// since the pointer-up callback is still running when they are removed.
pub(crate) struct DragListeners {
    document: Document,
    active: Option<(Listener, Listener)>,
    retired: Vec<Listener>,
}

impl DragListeners {
    pub(crate) fn new(document: Document) -> Self {
        Self {
            document,
            active: None,
            retired: Vec::new(),
        }
    }

    pub(crate) fn attach(&mut self, handle: &Handle) -> AppResult<()> {
        self.detach();
        self.retired.clear();

        let h = handle.clone();
        let on_move = dom::listener(move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let pointer = dom::pointer(mouse);
                h.dispatch(&EditorEvent::PointerMove {
                    x: pointer.x,
                    y: pointer.y,
                });
            }
        });
        let h = handle.clone();
        let on_up = dom::listener(move |_| h.dispatch(&EditorEvent::PointerUp));

        dom::listen(&self.document, "mousemove", &on_move)?;
        if let Err(e) = dom::listen(&self.document, "mouseup", &on_up) {
            dom::unlisten(&self.document, "mousemove", &on_move);
            return Err(e);
        }
        self.active = Some((on_move, on_up));
        Ok(())
    }

    pub(crate) fn detach(&mut self) {
        if let Some((on_move, on_up)) = self.active.take() {
            dom::unlisten(&self.document, "mousemove", &on_move);
            dom::unlisten(&self.document, "mouseup", &on_up);
            self.retired.push(on_move);
            self.retired.push(on_up);
        }
    }

    /// Number of listeners registered on the document.
    pub(crate) fn len(&self) -> usize {
        if self.active.is_some() {
            2
        } else {
            0
        }
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Listeners on the canvas, document and toolbar widgets, alive for the
/// lifetime of the app.
pub(crate) struct PageListeners {
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

impl PageListeners {
    pub(crate) fn bind(
        document: &Document,
        canvas: &HtmlElement,
        ids: &WidgetIds,
        handle: &Handle,
    ) -> AppResult<Self> {
        // Owned by the result from the start so a failed lookup unregisters
        // whatever was already bound.
        let mut page = Self {
            listeners: Vec::new(),
        };
        let listeners = &mut page.listeners;

        // Clicks that bubble up from a node do not clear the selection.
        let h = handle.clone();
        let on_canvas_click = dom::listener(move |event| {
            if event.target() == event.current_target() {
                h.dispatch(&EditorEvent::BackgroundClick);
            }
        });
        dom::listen(canvas, "click", &on_canvas_click)?;
        listeners.push((canvas.clone().into(), "click", on_canvas_click));

        let h = handle.clone();
        let on_key = dom::listener(move |event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                h.dispatch(&EditorEvent::Key { key: key.key() });
            }
        });
        dom::listen(document, "keydown", &on_key)?;
        listeners.push((document.clone().into(), "keydown", on_key));

        let picker: HtmlInputElement = dom::widget(document, &ids.canvas_background_color)?;
        let source = picker.clone();
        let h = handle.clone();
        let on_background = dom::listener(move |_| {
            h.dispatch(&EditorEvent::SetCanvasBackground {
                color: source.value(),
            });
        });
        dom::listen(&picker, "change", &on_background)?;
        listeners.push((picker.into(), "change", on_background));

        let upload: HtmlInputElement = dom::widget(document, &ids.image_upload)?;
        let source = upload.clone();
        let h = handle.clone();
        let on_upload = dom::listener(move |_| load_picked_image(&source, &h));
        dom::listen(&upload, "change", &on_upload)?;
        listeners.push((upload.into(), "change", on_upload));

        if let Some(toggle) = dom::optional_widget::<HtmlElement>(document, &ids.preview_toggle) {
            let h = handle.clone();
            let on_toggle = dom::listener(move |_| h.dispatch(&EditorEvent::TogglePreview));
            dom::listen(&toggle, "click", &on_toggle)?;
            listeners.push((toggle.into(), "click", on_toggle));
        } else {
            tracing::debug!("No preview toggle '{}' on the page", ids.preview_toggle);
        }

        for kind in NodeKind::ALL {
            let Some(button) = dom::optional_widget::<HtmlElement>(document, ids.add(kind)) else {
                continue;
            };
            let h = handle.clone();
            let on_add = dom::listener(move |_| h.dispatch(&EditorEvent::AddElement { kind }));
            dom::listen(&button, "click", &on_add)?;
            listeners.push((button.into(), "click", on_add));
        }

        Ok(page)
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for PageListeners {
    fn drop(&mut self) {
        for (target, event, listener) in &self.listeners {
            dom::unlisten(target, event, listener);
        }
    }
}

fn load_picked_image(input: &HtmlInputElement, handle: &Handle) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    // Let the same file be picked again.
    input.set_value("");

    let handle = handle.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match read_image(&file).await {
            Ok(src) => handle.dispatch(&EditorEvent::AddImage { src }),
            Err(e) => tracing::warn!("Image '{}' not added: {}", file.name(), e),
        }
    });
}

async fn read_image(file: &File) -> AppResult<String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AppError::dom(&e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(image_data_url(&file.type_(), &bytes)?)
}
