//! Shell configuration: editor settings plus the ids of the page widgets.

use easel_core::{AdditionalField, EditorConfig, HoverProperty, NodeKind};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Element ids of the page widgets the shell binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetIds {
    /// The canvas nodes are placed in.
    pub canvas: String,
    /// Container of the basic property fields.
    pub properties: String,
    /// Block holding the additional and hover fields.
    pub additional_properties: String,
    /// Delete button.
    pub delete_element: String,
    /// Canvas background color picker.
    pub canvas_background_color: String,
    /// File input for local images.
    pub image_upload: String,
    /// Border radius input.
    pub border_radius: String,
    /// Box shadow input.
    pub box_shadow: String,
    /// Background gradient input.
    pub background_gradient: String,
    /// Border input.
    pub border: String,
    /// Opacity slider.
    pub opacity: String,
    /// Blur slider.
    pub blur: String,
    /// Hover text color input.
    pub hover_color: String,
    /// Hover background input.
    pub hover_background: String,
    /// Preview toggle button. Optional: pages may call `togglePreview` instead.
    pub preview_toggle: String,
    /// Add-text button. Optional, like the other add buttons: pages may call
    /// `addElement` instead.
    pub add_text: String,
    /// Add-image button.
    pub add_image: String,
    /// Add-shape button.
    pub add_shape: String,
}

impl Default for WidgetIds {
    fn default() -> Self {
        Self {
            canvas: "canvas".to_string(),
            properties: "properties".to_string(),
            additional_properties: "additionalProperties".to_string(),
            delete_element: "deleteElement".to_string(),
            canvas_background_color: "canvasBackgroundColor".to_string(),
            image_upload: "imageUpload".to_string(),
            border_radius: AdditionalField::BorderRadius.key().to_string(),
            box_shadow: AdditionalField::BoxShadow.key().to_string(),
            background_gradient: AdditionalField::BackgroundGradient.key().to_string(),
            border: AdditionalField::Border.key().to_string(),
            opacity: AdditionalField::Opacity.key().to_string(),
            blur: AdditionalField::Blur.key().to_string(),
            hover_color: "hoverColor".to_string(),
            hover_background: "hoverBackground".to_string(),
            preview_toggle: "previewToggle".to_string(),
            add_text: "addText".to_string(),
            add_image: "addImage".to_string(),
            add_shape: "addShape".to_string(),
        }
    }
}

impl WidgetIds {
    /// Id of the input bound to an additional field.
    #[must_use]
    pub fn additional(&self, field: AdditionalField) -> &str {
        match field {
            AdditionalField::BorderRadius => &self.border_radius,
            AdditionalField::BoxShadow => &self.box_shadow,
            AdditionalField::BackgroundGradient => &self.background_gradient,
            AdditionalField::Border => &self.border,
            AdditionalField::Opacity => &self.opacity,
            AdditionalField::Blur => &self.blur,
        }
    }

    /// Id of the button that adds nodes of `kind`.
    #[must_use]
    pub fn add(&self, kind: NodeKind) -> &str {
        match kind {
            NodeKind::Text => &self.add_text,
            NodeKind::Image => &self.add_image,
            NodeKind::Shape => &self.add_shape,
        }
    }

    /// Id of the input bound to a hover property.
    #[must_use]
    pub fn hover(&self, property: HoverProperty) -> &str {
        match property {
            HoverProperty::Color => &self.hover_color,
            HoverProperty::BackgroundColor => &self.hover_background,
        }
    }
}

/// Full shell configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Editor behaviour.
    pub editor: EditorConfig,
    /// Page widget ids.
    pub widgets: WidgetIds,
}

impl AppConfig {
    /// Parse a configuration, falling back to defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the editor settings are invalid.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.editor.validate()?;
        Ok(config)
    }
}
