//! Small DOM helpers shared by the view and the listeners.

use easel_core::Position;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, EventTarget, HtmlElement, MouseEvent};

use crate::error::{AppError, AppResult};

/// Boxed DOM event callback, kept alive for as long as it is registered.
pub(crate) type Listener = Closure<dyn FnMut(web_sys::Event)>;

pub(crate) fn document() -> AppResult<Document> {
    web_sys::window()
        .ok_or(AppError::NoWindow)?
        .document()
        .ok_or(AppError::NoDocument)
}

/// Look up a widget by id and cast it to the expected interface.
pub(crate) fn widget<T: JsCast>(document: &Document, id: &str) -> AppResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| AppError::WrongElementType {
            id: id.to_string(),
            expected: short_type_name::<T>(),
        })
}

/// Like [`widget`], but a missing element is not an error.
pub(crate) fn optional_widget<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub(crate) fn create<T: JsCast>(document: &Document, tag: &str) -> AppResult<T> {
    document
        .create_element(tag)
        .map_err(|e| AppError::dom(&e))?
        .dyn_into::<T>()
        .map_err(|_| AppError::WrongElementType {
            id: tag.to_string(),
            expected: short_type_name::<T>(),
        })
}

pub(crate) fn listen(target: &EventTarget, event: &str, listener: &Listener) -> AppResult<()> {
    target
        .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        .map_err(|e| AppError::dom(&e))
}

pub(crate) fn unlisten(target: &EventTarget, event: &str, listener: &Listener) {
    if let Err(e) =
        target.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
    {
        tracing::warn!("Failed to remove {event} listener: {:?}", e);
    }
}

pub(crate) fn listener(f: impl FnMut(web_sys::Event) + 'static) -> Listener {
    Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>)
}

pub(crate) fn set_display(element: &HtmlElement, visible: bool) {
    let value = if visible { "block" } else { "none" };
    if let Err(e) = element.style().set_property("display", value) {
        tracing::warn!("Failed to set display: {:?}", e);
    }
}

/// Client coordinates of a mouse event.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn pointer(event: &MouseEvent) -> Position {
    Position::new(event.client_x() as f32, event.client_y() as f32)
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
