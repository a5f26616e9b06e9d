//! Hover rule registry.
//!
//! Hover styling cannot live in an inline style, so each node that has been
//! given a hover property owns one rule container keyed by its identifier.
//! A container holds at most one declaration: setting a second hover
//! property on the same node replaces the first rather than merging with it.
//! That matches the sidebar's single-rule behaviour and is a known limitation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{check_style_value, EditorResult, NodeId};

/// Properties that can be styled on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverProperty {
    /// Text color on hover.
    Color,
    /// Background color on hover.
    BackgroundColor,
}

impl HoverProperty {
    /// Both hover properties, in sidebar order.
    pub const ALL: [HoverProperty; 2] = [HoverProperty::Color, HoverProperty::BackgroundColor];

    /// CSS property name.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Color => "Hover color",
            Self::BackgroundColor => "Hover background",
        }
    }
}

/// The single declaration inside a hover rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverDeclaration {
    /// Property applied on hover.
    pub property: HoverProperty,
    /// CSS value applied on hover.
    pub value: String,
}

impl fmt::Display for HoverDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property.css_name(), self.value)
    }
}

/// Hover rule containers, one per configured node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoverRuleRegistry {
    rules: BTreeMap<NodeId, Option<HoverDeclaration>>,
}

impl HoverRuleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `node` has a container. Returns `true` if one was created.
    pub fn ensure_container(&mut self, node: &NodeId) -> bool {
        if self.rules.contains_key(node) {
            return false;
        }
        self.rules.insert(node.clone(), None);
        true
    }

    /// Rewrite the rule of `node` to exactly one declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could escape its declaration.
    pub fn set(
        &mut self,
        node: &NodeId,
        property: HoverProperty,
        value: &str,
    ) -> EditorResult<()> {
        let value = check_style_value(value)?;
        self.ensure_container(node);
        self.rules.insert(
            node.clone(),
            Some(HoverDeclaration {
                property,
                value: value.to_string(),
            }),
        );
        Ok(())
    }

    /// Current declaration of `node`, if any.
    #[must_use]
    pub fn declaration(&self, node: &NodeId) -> Option<&HoverDeclaration> {
        self.rules.get(node).and_then(Option::as_ref)
    }

    /// Whether `node` has a container, empty or not.
    #[must_use]
    pub fn has_container(&self, node: &NodeId) -> bool {
        self.rules.contains_key(node)
    }

    /// Drop the container of `node`. Returns `true` if there was one.
    pub fn remove(&mut self, node: &NodeId) -> bool {
        self.rules.remove(node).is_some()
    }

    /// Text of the container of `node`: empty for a fresh container,
    /// `None` when there is no container.
    #[must_use]
    pub fn css_text(&self, node: &NodeId) -> Option<String> {
        self.rules.get(node).map(|decl| match decl {
            Some(decl) => format!("#{node}:hover {{ {decl} }}"),
            None => String::new(),
        })
    }

    /// All non-empty rules, one per line, ordered by node identifier.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        self.rules
            .keys()
            .filter_map(|node| self.css_text(node))
            .filter(|css| !css.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no containers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
