//! # Easel Core
//!
//! Headless editor model for the Easel canvas editor. The browser shell in
//! `easel-app` turns DOM events into [`EditorEvent`]s, hands them to the
//! [`Editor`], and applies the returned [`Change`]s back to the page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   Editor                    │
//! ├─────────────────────────────────────────────┤
//! │  EditorState        │  ElementFactory       │
//! │  - Scene (nodes)    │  - text/image/shape   │
//! │  - Selection        │    defaults           │
//! │  - Preview flag     ├───────────────────────┤
//! │  - DragSession      │  PanelView            │
//! │  - Hover rules      │  - sidebar fields     │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod drag;
pub mod editor;
pub mod element;
pub mod error;
pub mod event;
pub mod factory;
pub mod hover;
pub mod media;
pub mod panel;
pub mod scene;
pub mod state;

pub use config::{EditorConfig, PanelDefaults};
pub use drag::DragSession;
pub use editor::{Editor, EditorSnapshot};
pub use element::{
    check_style_value, format_px, parse_px, CanvasNode, NodeContent, NodeId, NodeKind, Position,
    Size, StyleMap,
};
pub use error::{EditorError, EditorResult};
pub use event::{Change, EditorEvent};
pub use factory::ElementFactory;
pub use hover::{HoverDeclaration, HoverProperty, HoverRuleRegistry};
pub use media::{image_data_url, is_data_url};
pub use panel::{AdditionalField, AdditionalView, FieldView, HoverView, InputType, PanelView, StyleField};
pub use scene::Scene;
pub use state::EditorState;

/// Easel core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
