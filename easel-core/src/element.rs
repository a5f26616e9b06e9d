//! Canvas nodes - the elements users place on the canvas.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::{EditorError, EditorResult};

/// Prefix shared by every generated node identifier.
const ID_PREFIX: &str = "element-";

/// Number of random characters after the prefix.
const ID_RANDOM_LEN: usize = 9;

/// Unique identifier for a node.
///
/// Always a valid CSS identifier, so it can key `#id:hover` rules directly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Generate a new identifier of the form `element-xxxxxxxxx`.
    #[must_use]
    pub fn generate() -> Self {
        let random = Uuid::new_v4().simple().to_string();
        Self(format!("{ID_PREFIX}{}", &random[..ID_RANDOM_LEN]))
    }

    /// Parse an externally supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a usable CSS identifier.
    pub fn parse(raw: &str) -> EditorResult<Self> {
        let mut chars = raw.chars();
        let starts_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if starts_ok && rest_ok {
            Ok(Self(raw.to_string()))
        } else {
            Err(EditorError::InvalidNodeId(raw.to_string()))
        }
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NodeId {
    type Error = EditorError;

    fn try_from(value: String) -> EditorResult<Self> {
        Self::parse(&value)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// The kind of element a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Editable text block.
    Text,
    /// Image, either a placeholder or an uploaded file.
    Image,
    /// Filled rectangle.
    Shape,
}

impl NodeKind {
    /// All kinds, in toolbar order.
    pub const ALL: [NodeKind; 3] = [NodeKind::Text, NodeKind::Image, NodeKind::Shape];

    /// Lowercase name, also used as the DOM class of the node.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Shape => "shape",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = EditorError;

    fn from_str(s: &str) -> EditorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EditorError::UnknownKind(s.to_string()))
    }
}

/// A point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Pixels from the left edge.
    pub x: f32,
    /// Pixels from the top edge.
    pub y: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// Kind-specific content of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum NodeContent {
    /// A text block.
    Text {
        /// Text shown in the block.
        text: String,
    },
    /// An image.
    Image {
        /// Image source URL or `data:` URL.
        src: String,
    },
    /// A shape has no content beyond its style.
    Shape,
}

impl NodeContent {
    /// Kind of node this content belongs to.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Text { .. } => NodeKind::Text,
            Self::Image { .. } => NodeKind::Image,
            Self::Shape => NodeKind::Shape,
        }
    }
}

/// Shorthand properties and the longhands a write to them resets.
const SHORTHAND_RESETS: &[(&str, &[&str])] = &[(
    "background",
    &[
        "background-color",
        "background-image",
        "background-position",
        "background-size",
        "background-repeat",
    ],
)];

/// Reject a style value that could end its declaration early.
///
/// # Errors
///
/// Returns an error if the value contains `{`, `}`, `;`, `<` or `>`.
pub fn check_style_value(value: &str) -> EditorResult<&str> {
    let value = value.trim();
    if value.contains(['{', '}', ';', '<', '>']) {
        return Err(EditorError::InvalidStyleValue(value.to_string()));
    }
    Ok(value)
}

/// Inline style of a node: CSS property name to value, in write order.
///
/// Rewriting a property moves it to the end, and writing a shorthand drops
/// the longhands it resets, so the last write wins when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleMap(Vec<(String, String)>);

impl StyleMap {
    /// Create an empty style map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a property, if set.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property, returning the previous value.
    pub fn set(&mut self, property: &str, value: impl Into<String>) -> Option<String> {
        let previous = self.remove(property);
        if let Some((_, longhands)) = SHORTHAND_RESETS.iter().find(|(s, _)| *s == property) {
            self.0.retain(|(k, _)| !longhands.contains(&k.as_str()));
        }
        self.0.push((property.to_string(), value.into()));
        previous
    }

    /// Remove a property, returning its value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let index = self.0.iter().position(|(k, _)| k == property)?;
        Some(self.0.remove(index).1)
    }

    /// Iterate over `(property, value)` pairs in write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of properties set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a CSS declaration list (`a: 1; b: 2`).
    #[must_use]
    pub fn css_text(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleVisitor;

        impl<'de> Visitor<'de> for StyleVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of CSS properties to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleMap, A::Error> {
                let mut style = StyleMap::new();
                while let Some((property, value)) = access.next_entry::<String, String>()? {
                    style.set(&property, value);
                }
                Ok(style)
            }
        }

        deserializer.deserialize_map(StyleVisitor)
    }
}

/// Parse a CSS pixel length such as `100px` or `42`.
#[must_use]
pub fn parse_px(value: &str) -> Option<f32> {
    let value = value.trim();
    value.strip_suffix("px").unwrap_or(value).trim().parse().ok()
}

/// Format a pixel length for CSS.
#[must_use]
pub fn format_px(value: f32) -> String {
    format!("{value}px")
}

/// A placed visual element on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasNode {
    /// Unique identifier.
    pub id: NodeId,
    /// Kind-specific content.
    pub content: NodeContent,
    /// Top-left corner in canvas pixels.
    pub position: Position,
    /// Inline style properties.
    pub style: StyleMap,
}

impl CanvasNode {
    /// Create a node at the origin with no style.
    #[must_use]
    pub fn new(id: NodeId, content: NodeContent) -> Self {
        Self {
            id,
            content,
            position: Position::default(),
            style: StyleMap::new(),
        }
    }

    /// Set the position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set one style property.
    #[must_use]
    pub fn with_style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    /// Kind of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.content.kind()
    }

    /// Size from the `width` and `height` style entries, when both are pixel lengths.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        let width = parse_px(self.style.get("width")?)?;
        let height = parse_px(self.style.get("height")?)?;
        Some(Size { width, height })
    }

    /// Full inline style including the position.
    #[must_use]
    pub fn inline_style(&self) -> String {
        let mut css = format!(
            "left: {}; top: {}",
            format_px(self.position.x),
            format_px(self.position.y)
        );
        if !self.style.is_empty() {
            css.push_str("; ");
            css.push_str(&self.style.css_text());
        }
        css
    }
}
