//! Sidebar widgets.
//!
//! Basic fields are generated on every rebuild; the additional and hover
//! inputs are static page widgets whose listeners are attached once.

use easel_core::{AdditionalField, EditorEvent, FieldView, HoverProperty, InputType, PanelView};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

use crate::config::WidgetIds;
use crate::dom::{self, Listener};
use crate::error::{AppError, AppResult};
use crate::session::Handle;

/// Resolved sidebar widgets and the listeners bound to them.
pub(crate) struct PanelWidgets {
    document: Document,
    properties: HtmlElement,
    additional_block: HtmlElement,
    delete_button: HtmlElement,
    additional: Vec<(AdditionalField, HtmlInputElement)>,
    hover: Vec<(HoverProperty, HtmlInputElement)>,
    field_listeners: Vec<(Element, Listener)>,
    static_listeners: Vec<(EventTarget, &'static str, Listener)>,
}

impl PanelWidgets {
    /// Resolve the sidebar widgets.
    pub(crate) fn resolve(document: &Document, ids: &WidgetIds) -> AppResult<Self> {
        let additional = AdditionalField::ALL
            .into_iter()
            .map(|field| {
                let input: HtmlInputElement = dom::widget(document, ids.additional(field))?;
                Ok::<_, AppError>((field, input))
            })
            .collect::<AppResult<Vec<_>>>()?;
        let hover = HoverProperty::ALL
            .into_iter()
            .map(|property| {
                let input: HtmlInputElement = dom::widget(document, ids.hover(property))?;
                Ok::<_, AppError>((property, input))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            document: document.clone(),
            properties: dom::widget(document, &ids.properties)?,
            additional_block: dom::widget(document, &ids.additional_properties)?,
            delete_button: dom::widget(document, &ids.delete_element)?,
            additional,
            hover,
            field_listeners: Vec::new(),
            static_listeners: Vec::new(),
        })
    }

    /// Attach the listeners of the static inputs and the delete button.
    pub(crate) fn listen(&mut self, handle: &Handle) -> AppResult<()> {
        for (field, input) in &self.additional {
            let field = *field;
            let source = input.clone();
            let h = handle.clone();
            let listener = dom::listener(move |_| {
                h.dispatch(&EditorEvent::SetAdditionalField {
                    field,
                    value: source.value(),
                });
            });
            dom::listen(input, "input", &listener)?;
            self.static_listeners
                .push((input.clone().into(), "input", listener));
        }

        for (property, input) in &self.hover {
            let property = *property;
            let source = input.clone();
            let h = handle.clone();
            let listener = dom::listener(move |_| {
                h.dispatch(&EditorEvent::SetHover {
                    property,
                    value: source.value(),
                });
            });
            dom::listen(input, "input", &listener)?;
            self.static_listeners
                .push((input.clone().into(), "input", listener));
        }

        let h = handle.clone();
        let on_delete = dom::listener(move |_| h.dispatch(&EditorEvent::DeleteSelected));
        dom::listen(&self.delete_button, "click", &on_delete)?;
        self.static_listeners
            .push((self.delete_button.clone().into(), "click", on_delete));
        Ok(())
    }

    /// Show the panel for the current selection.
    pub(crate) fn rebuild(&mut self, view: &PanelView, handle: &Handle) -> AppResult<()> {
        self.properties.set_inner_html("");
        self.clear_fields();

        for field in &view.fields {
            let label = self.field(field, handle)?;
            self.properties
                .append_child(&label)
                .map_err(|e| AppError::dom(&e))?;
        }

        dom::set_display(&self.additional_block, view.show_additional);
        dom::set_display(&self.delete_button, view.show_delete);

        for (field, input) in &self.additional {
            let value = view
                .additional
                .iter()
                .find(|a| a.field == *field)
                .map_or("", |a| a.value.as_str());
            input.set_value(value);
        }
        for (property, input) in &self.hover {
            let value = view
                .hover
                .iter()
                .find(|h| h.property == *property)
                .map_or("", |h| h.value.as_str());
            input.set_value(value);
        }
        Ok(())
    }

    /// Build `<label>Name: <control></label>` for one basic field.
    fn field(&mut self, view: &FieldView, handle: &Handle) -> AppResult<Element> {
        let label = self
            .document
            .create_element("label")
            .map_err(|e| AppError::dom(&e))?;
        label.set_text_content(Some(&format!("{}: ", view.label)));

        let field = view.field;
        let h = handle.clone();
        let (control, listener): (Element, Listener) = if view.input == InputType::Select {
            let select: HtmlSelectElement = dom::create(&self.document, "select")?;
            for choice in &view.options {
                let option = HtmlOptionElement::new_with_text_and_value(choice, choice)
                    .map_err(|e| AppError::dom(&e))?;
                select
                    .append_child(&option)
                    .map_err(|e| AppError::dom(&e))?;
            }
            // Options must exist before the value can select one.
            select.set_value(&view.value);
            let source = select.clone();
            let listener = dom::listener(move |_| {
                h.dispatch(&EditorEvent::SetStyleField {
                    field,
                    value: source.value(),
                });
            });
            (select.into(), listener)
        } else {
            let input: HtmlInputElement = dom::create(&self.document, "input")?;
            input.set_type(view.input.html_type());
            input.set_value(&view.value);
            let source = input.clone();
            let listener = dom::listener(move |_| {
                h.dispatch(&EditorEvent::SetStyleField {
                    field,
                    value: source.value(),
                });
            });
            (input.into(), listener)
        };

        dom::listen(&control, "change", &listener)?;
        label
            .append_child(&control)
            .map_err(|e| AppError::dom(&e))?;
        self.field_listeners.push((control, listener));
        Ok(label)
    }

    fn clear_fields(&mut self) {
        for (element, listener) in std::mem::take(&mut self.field_listeners) {
            dom::unlisten(&element, "change", &listener);
        }
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.field_listeners.len() + self.static_listeners.len()
    }
}

impl Drop for PanelWidgets {
    fn drop(&mut self) {
        self.clear_fields();
        for (target, event, listener) in &self.static_listeners {
            dom::unlisten(target, event, listener);
        }
    }
}
