//! The Figma file document model.
//!
//! This module mirrors the part of the Figma REST API file schema that the
//! converter reads. Everything here is read-only data deserialized from the
//! JSON body of `GET /v1/files/:key`; unknown fields are ignored and missing
//! optional fields fall back to their defaults.
//!
//! # Overview
//!
//! - [`FileResponse`] - The top-level API response with the document root.
//! - [`Node`] - A node of the document tree (frames, shapes, text, ...).
//! - [`Paint`] / [`Effect`] - Fills, strokes and visual effects.
//! - [`TypeStyle`] - Text styling of `TEXT` nodes.
//! - [`LayoutMode`], [`PrimaryAxisAlign`], [`CounterAxisAlign`], [`LayoutConstraint`] -
//!   auto layout and constraint settings.
//!
//! # Example
//!
//! ```
//! # use figweave_core::document::{FileResponse, NodeType};
//! let json = r#"{
//!     "name": "Landing",
//!     "document": {
//!         "id": "0:0",
//!         "type": "DOCUMENT",
//!         "children": [{ "id": "0:1", "type": "CANVAS", "children": [] }]
//!     }
//! }"#;
//!
//! let file = FileResponse::from_json(json).unwrap();
//! assert_eq!(file.name(), "Landing");
//! assert_eq!(file.document().children()[0].kind(), &NodeType::Canvas);
//! ```

mod layout;
mod node;
mod paint;
mod text;

pub use layout::{
    CounterAxisAlign, HorizontalConstraint, LayoutConstraint, LayoutMode, PrimaryAxisAlign,
    VerticalConstraint,
};
pub use node::{Node, NodeType};
pub use paint::{ColorStop, Effect, EffectType, Paint, PaintType};
pub use text::{TextAlign, TextDecoration, TypeStyle};

use serde::Deserialize;

/// The body of a Figma `GET /v1/files/:key` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    #[serde(default)]
    name: String,

    #[serde(default)]
    last_modified: Option<String>,

    #[serde(default)]
    version: Option<String>,

    document: Node,
}

impl FileResponse {
    /// Parses a raw API response body.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] when the body is not valid JSON or
    /// has no `document` root.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Creates a response around an existing document root.
    pub fn new(name: impl Into<String>, document: Node) -> Self {
        Self {
            name: name.into(),
            last_modified: None,
            version: None,
            document,
        }
    }

    /// Returns the file name shown in the Figma UI.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the last modification timestamp, if the API sent one.
    pub fn last_modified(&self) -> Option<&str> {
        self.last_modified.as_deref()
    }

    /// Returns the file version identifier, if the API sent one.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the root `DOCUMENT` node.
    pub fn document(&self) -> &Node {
        &self.document
    }
}
