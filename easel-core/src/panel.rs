//! Property panel model.
//!
//! [`PanelView::build`] turns the editor state into the list of sidebar
//! fields with their current values. Field commits go straight into the
//! selected node's style map through [`StyleField::commit`] and
//! [`AdditionalField::declaration`]; there is no intermediate model.

use serde::{Deserialize, Serialize};

use crate::{
    check_style_value, parse_px, CanvasNode, EditorConfig, EditorError, EditorResult, EditorState, HoverProperty,
    NodeKind,
};

/// HTML control used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Free text input.
    Text,
    /// Color picker.
    Color,
    /// Drop-down choice.
    Select,
    /// Ratio slider.
    Range,
}

impl InputType {
    /// Value of the `type` attribute for `<input>` controls.
    #[must_use]
    pub fn html_type(self) -> &'static str {
        match self {
            Self::Text | Self::Select => "text",
            Self::Color => "color",
            Self::Range => "range",
        }
    }
}

/// Basic fields generated per selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleField {
    /// `width`
    Width,
    /// `height`
    Height,
    /// `background-color`
    BackgroundColor,
    /// Text `color`.
    TextColor,
    /// `font-size`
    FontSize,
    /// `font-weight`
    FontWeight,
    /// `font-family`
    FontFamily,
}

impl StyleField {
    /// Fields every node gets.
    pub const COMMON: [StyleField; 3] = [Self::Width, Self::Height, Self::BackgroundColor];

    /// Fields only text nodes get.
    pub const TYPOGRAPHY: [StyleField; 4] = [
        Self::TextColor,
        Self::FontSize,
        Self::FontWeight,
        Self::FontFamily,
    ];

    /// CSS property written by the field.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::BackgroundColor => "background-color",
            Self::TextColor => "color",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::FontFamily => "font-family",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Width => "Width",
            Self::Height => "Height",
            Self::BackgroundColor => "Background color",
            Self::TextColor => "Text color",
            Self::FontSize => "Font size",
            Self::FontWeight => "Font weight",
            Self::FontFamily => "Font family",
        }
    }

    /// Control used for the field.
    #[must_use]
    pub fn input_type(self) -> InputType {
        match self {
            Self::BackgroundColor | Self::TextColor => InputType::Color,
            Self::FontFamily => InputType::Select,
            Self::Width | Self::Height | Self::FontSize | Self::FontWeight => InputType::Text,
        }
    }

    /// Whether the field exists for nodes of `kind`.
    #[must_use]
    pub fn applies_to(self, kind: NodeKind) -> bool {
        kind == NodeKind::Text || Self::COMMON.contains(&self)
    }

    /// Fields shown for a node of `kind`, in sidebar order.
    #[must_use]
    pub fn for_kind(kind: NodeKind) -> Vec<StyleField> {
        let mut fields = Self::COMMON.to_vec();
        if kind == NodeKind::Text {
            fields.extend(Self::TYPOGRAPHY);
        }
        fields
    }

    /// Value shown for an unset property.
    #[must_use]
    pub fn default_value(self, config: &EditorConfig) -> &str {
        let defaults = &config.panel;
        match self {
            Self::Width => &defaults.width,
            Self::Height => &defaults.height,
            Self::BackgroundColor => &defaults.background_color,
            Self::TextColor => &defaults.text_color,
            Self::FontSize => &defaults.font_size,
            Self::FontWeight => &defaults.font_weight,
            Self::FontFamily => &defaults.font_family,
        }
    }

    /// Write a field value into a node's style.
    ///
    /// # Errors
    ///
    /// Returns an error if the field does not exist for the node's kind or
    /// the value could end its declaration.
    pub fn commit(self, node: &mut CanvasNode, value: &str) -> EditorResult<()> {
        if !self.applies_to(node.kind()) {
            return Err(EditorError::FieldNotApplicable {
                field: self.css_name(),
                kind: node.kind().as_str(),
            });
        }
        let value = check_style_value(value)?;
        node.style.set(self.css_name(), value);
        Ok(())
    }
}

/// Decoration fields shown for every selected node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionalField {
    /// Corner radius.
    BorderRadius,
    /// Drop shadow.
    BoxShadow,
    /// Background gradient, written to `background`.
    BackgroundGradient,
    /// Border shorthand.
    Border,
    /// Opacity ratio.
    Opacity,
    /// Blur radius, written as a `filter`.
    Blur,
}

impl AdditionalField {
    /// All additional fields, in sidebar order.
    pub const ALL: [AdditionalField; 6] = [
        Self::BorderRadius,
        Self::BoxShadow,
        Self::BackgroundGradient,
        Self::Border,
        Self::Opacity,
        Self::Blur,
    ];

    /// Key of the field's widget in the page, also its default element id.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::BorderRadius => "borderRadius",
            Self::BoxShadow => "boxShadow",
            Self::BackgroundGradient => "backgroundGradient",
            Self::Border => "border",
            Self::Opacity => "opacity",
            Self::Blur => "blur",
        }
    }

    /// CSS property the field writes.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::BorderRadius => "border-radius",
            Self::BoxShadow => "box-shadow",
            Self::BackgroundGradient => "background",
            Self::Border => "border",
            Self::Opacity => "opacity",
            Self::Blur => "filter",
        }
    }

    /// Control used for the field.
    #[must_use]
    pub fn input_type(self) -> InputType {
        match self {
            Self::Opacity | Self::Blur => InputType::Range,
            Self::BorderRadius | Self::BoxShadow | Self::BackgroundGradient | Self::Border => {
                InputType::Text
            }
        }
    }

    /// CSS `(property, value)` written for a raw input value.
    ///
    /// Text-typed fields get a `px` unit when the value is a bare number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could end its declaration.
    pub fn declaration(self, raw: &str) -> EditorResult<(&'static str, String)> {
        let raw = check_style_value(raw)?;
        let value = match self {
            Self::BackgroundGradient => raw.to_string(),
            Self::Blur => format!("blur({raw}px)"),
            _ if self.input_type() == InputType::Range => raw.to_string(),
            _ if raw.parse::<f64>().is_ok() => format!("{raw}px"),
            _ => raw.to_string(),
        };
        Ok((self.css_name(), value))
    }

    /// Value shown in the field for a node's current style.
    #[must_use]
    pub fn read(self, node: &CanvasNode) -> String {
        let Some(current) = node.style.get(self.css_name()) else {
            return String::new();
        };
        match self {
            Self::Blur => current
                .strip_prefix("blur(")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(parse_px)
                .map(|px| px.to_string())
                .unwrap_or_default(),
            _ => current.to_string(),
        }
    }
}

/// A basic field as the sidebar renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldView {
    /// Which field.
    pub field: StyleField,
    /// Label text.
    pub label: String,
    /// Control type.
    pub input: InputType,
    /// Current value.
    pub value: String,
    /// Choices, for select controls.
    pub options: Vec<String>,
}

/// An additional field with its current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalView {
    /// Which field.
    pub field: AdditionalField,
    /// Current value.
    pub value: String,
}

/// A hover field with its current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverView {
    /// Which hover property.
    pub property: HoverProperty,
    /// Label text.
    pub label: String,
    /// Value of the node's hover rule when it targets this property.
    pub value: String,
}

/// Everything the sidebar shows for the current selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelView {
    /// Basic fields, empty without a selection.
    pub fields: Vec<FieldView>,
    /// Whether the additional and hover blocks are visible.
    pub show_additional: bool,
    /// Additional fields.
    pub additional: Vec<AdditionalView>,
    /// Hover fields.
    pub hover: Vec<HoverView>,
    /// Whether the delete affordance is visible.
    pub show_delete: bool,
}

impl PanelView {
    /// Build the panel for the current selection.
    #[must_use]
    pub fn build(state: &EditorState, config: &EditorConfig) -> Self {
        let Some(node) = state.selected_node() else {
            return Self::default();
        };

        let fields = StyleField::for_kind(node.kind())
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label().to_string(),
                input: field.input_type(),
                value: node
                    .style
                    .get(field.css_name())
                    .unwrap_or_else(|| field.default_value(config))
                    .to_string(),
                options: if field.input_type() == InputType::Select {
                    config.font_families.clone()
                } else {
                    Vec::new()
                },
            })
            .collect();

        let additional = AdditionalField::ALL
            .into_iter()
            .map(|field| AdditionalView {
                field,
                value: field.read(node),
            })
            .collect();

        let rule = state.hover().declaration(&node.id);
        let hover = HoverProperty::ALL
            .into_iter()
            .map(|property| HoverView {
                property,
                label: property.label().to_string(),
                value: rule
                    .filter(|decl| decl.property == property)
                    .map(|decl| decl.value.clone())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            fields,
            show_additional: true,
            additional,
            hover,
            show_delete: state.can_delete(),
        }
    }

    /// Whether the panel shows nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && !self.show_additional && !self.show_delete
    }

    /// Current value of a basic field, if shown.
    #[must_use]
    pub fn value_of(&self, field: StyleField) -> Option<&str> {
        self.fields
            .iter()
            .find(|view| view.field == field)
            .map(|view| view.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementFactory, NodeContent, NodeId};

    fn text_node() -> CanvasNode {
        ElementFactory::default().create(NodeKind::Text)
    }

    #[test]
    fn typography_only_for_text() {
        assert_eq!(StyleField::for_kind(NodeKind::Shape).len(), 3);
        assert_eq!(StyleField::for_kind(NodeKind::Image).len(), 3);
        assert_eq!(StyleField::for_kind(NodeKind::Text).len(), 7);
    }

    #[test]
    fn commit_rejects_typography_on_shapes() {
        let mut shape = ElementFactory::default().create(NodeKind::Shape);
        let err = StyleField::FontSize.commit(&mut shape, "20px").unwrap_err();
        assert!(matches!(err, EditorError::FieldNotApplicable { .. }));
        assert!(shape.style.get("font-size").is_none());
    }

    #[test]
    fn commit_writes_css_property() {
        let mut node = text_node();
        StyleField::TextColor
            .commit(&mut node, "#333333")
            .expect("commit");
        assert_eq!(node.style.get("color"), Some("#333333"));
    }

    #[test]
    fn additional_declarations() {
        assert_eq!(
            AdditionalField::BorderRadius.declaration("8").ok(),
            Some(("border-radius", "8px".to_string()))
        );
        assert_eq!(
            AdditionalField::Border.declaration("1px solid #000").ok(),
            Some(("border", "1px solid #000".to_string()))
        );
        assert_eq!(
            AdditionalField::BackgroundGradient.declaration("linear-gradient(red, blue)").ok(),
            Some(("background", "linear-gradient(red, blue)".to_string()))
        );
        assert_eq!(
            AdditionalField::Opacity.declaration("0.5").ok(),
            Some(("opacity", "0.5".to_string()))
        );
        assert_eq!(
            AdditionalField::Blur.declaration("4").ok(),
            Some(("filter", "blur(4px)".to_string()))
        );
    }

    #[test]
    fn commit_rejects_values_that_end_the_declaration() {
        let mut node = text_node();
        let err = StyleField::Width
            .commit(&mut node, "10px; display: none")
            .unwrap_err();
        assert!(matches!(err, EditorError::InvalidStyleValue(_)));
        assert!(node.style.get("width").is_none());
        assert!(!node.inline_style().contains("display"));
    }

    #[test]
    fn additional_declaration_rejects_values_that_end_it() {
        let err = AdditionalField::Border
            .declaration("1px solid red; position: fixed")
            .unwrap_err();
        assert!(matches!(err, EditorError::InvalidStyleValue(_)));
        assert!(AdditionalField::BackgroundGradient
            .declaration("red } body {")
            .is_err());
    }

    #[test]
    fn blur_reads_back_its_radius() {
        let node = CanvasNode::new(NodeId::generate(), NodeContent::Shape)
            .with_style("filter", "blur(4px)");
        assert_eq!(AdditionalField::Blur.read(&node), "4");
        let other = CanvasNode::new(NodeId::generate(), NodeContent::Shape)
            .with_style("filter", "grayscale(1)");
        assert_eq!(AdditionalField::Blur.read(&other), "");
    }

    #[test]
    fn empty_panel_without_selection() {
        let panel = PanelView::build(&EditorState::new(), &EditorConfig::default());
        assert!(panel.is_empty());
        assert!(panel.hover.is_empty());
    }
}
