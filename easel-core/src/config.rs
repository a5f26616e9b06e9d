//! Editor configuration.
//!
//! Every field has a default, so a partial JSON document only overrides what
//! it names.

use serde::{Deserialize, Serialize};

use crate::{EditorError, EditorResult, Position, Size};

/// Fallback values the property panel shows for unset style properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelDefaults {
    /// Shown for an unset `width`.
    pub width: String,
    /// Shown for an unset `height`.
    pub height: String,
    /// Shown for an unset `background-color`.
    pub background_color: String,
    /// Shown for an unset text `color`.
    pub text_color: String,
    /// Shown for an unset `font-size`.
    pub font_size: String,
    /// Shown for an unset `font-weight`.
    pub font_weight: String,
    /// Shown for an unset `font-family`.
    pub font_family: String,
}

impl Default for PanelDefaults {
    fn default() -> Self {
        Self {
            width: "100px".to_string(),
            height: "100px".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            font_size: "16px".to_string(),
            font_weight: "normal".to_string(),
            font_family: "Arial".to_string(),
        }
    }
}

/// Configuration for the editor controller and element factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Where new nodes are placed.
    pub spawn_position: Position,
    /// Content of a new text node.
    pub placeholder_text: String,
    /// Source of a new image node.
    pub placeholder_image: String,
    /// Size of a new shape.
    pub shape_size: Size,
    /// Fill of a new shape.
    pub shape_fill: String,
    /// Choices offered by the font-family field.
    pub font_families: Vec<String>,
    /// `KeyboardEvent.key` value that deletes the selection.
    pub delete_key: String,
    /// Panel fallbacks for unset properties.
    pub panel: PanelDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            spawn_position: Position::new(10.0, 10.0),
            placeholder_text: "Double-click to edit".to_string(),
            placeholder_image: "https://via.placeholder.com/150".to_string(),
            shape_size: Size {
                width: 100.0,
                height: 100.0,
            },
            shape_fill: "#007bff".to_string(),
            font_families: ["Arial", "Verdana", "Times New Roman", "Courier"]
                .into_iter()
                .map(String::from)
                .collect(),
            delete_key: "Delete".to_string(),
            panel: PanelDefaults::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the configuration is invalid.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the editor cannot work with.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    pub fn validate(&self) -> EditorResult<()> {
        if self.font_families.is_empty() {
            return Err(EditorError::InvalidConfig(
                "font_families must not be empty".to_string(),
            ));
        }
        if self.delete_key.is_empty() {
            return Err(EditorError::InvalidConfig(
                "delete_key must not be empty".to_string(),
            ));
        }
        if self.shape_size.width <= 0.0 || self.shape_size.height <= 0.0 {
            return Err(EditorError::InvalidConfig(
                "shape_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
