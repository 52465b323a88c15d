//! Document tree nodes.

use std::fmt;

use serde::Deserialize;

use super::{
    Effect, LayoutConstraint, Paint, TypeStyle,
    layout::{CounterAxisAlign, LayoutMode, PrimaryAxisAlign},
};
use crate::geometry::Rect;

/// The Figma node type.
///
/// Types the converter does not special-case keep their raw name in
/// [`NodeType::Other`], so the generated class names still carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum NodeType {
    Document,
    Canvas,
    #[default]
    Frame,
    Group,
    Section,
    Rectangle,
    Ellipse,
    Line,
    Vector,
    BooleanOperation,
    Text,
    Component,
    ComponentSet,
    Instance,
    Other(String),
}

impl NodeType {
    /// Returns the type name as spelled by the Figma API.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Canvas => "CANVAS",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Section => "SECTION",
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Line => "LINE",
            Self::Vector => "VECTOR",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Text => "TEXT",
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Instance => "INSTANCE",
            Self::Other(name) => name,
        }
    }

    /// Returns `true` for `TEXT` nodes.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }
}

impl From<String> for NodeType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "DOCUMENT" => Self::Document,
            "CANVAS" => Self::Canvas,
            "FRAME" => Self::Frame,
            "GROUP" => Self::Group,
            "SECTION" => Self::Section,
            "RECTANGLE" => Self::Rectangle,
            "ELLIPSE" => Self::Ellipse,
            "LINE" => Self::Line,
            "VECTOR" => Self::Vector,
            "BOOLEAN_OPERATION" => Self::BooleanOperation,
            "TEXT" => Self::Text,
            "COMPONENT" => Self::Component,
            "COMPONENT_SET" => Self::ComponentSet,
            "INSTANCE" => Self::Instance,
            _ => Self::Other(name),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the Figma document tree.
///
/// Only the properties the converter reads are modelled. Collections default
/// to empty and scalar properties to `None`, so partial documents (or nodes of
/// types that lack a property) deserialize without errors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default = "unknown_id")]
    id: String,

    #[serde(default)]
    name: String,

    #[serde(rename = "type", default)]
    kind: NodeType,

    #[serde(default = "visible")]
    visible: bool,

    #[serde(default)]
    children: Vec<Node>,

    #[serde(default)]
    absolute_bounding_box: Option<Rect>,

    // Auto layout
    #[serde(default)]
    layout_mode: Option<LayoutMode>,
    #[serde(default)]
    primary_axis_align_items: Option<PrimaryAxisAlign>,
    #[serde(default)]
    counter_axis_align_items: Option<CounterAxisAlign>,
    #[serde(default)]
    padding_left: Option<f64>,
    #[serde(default)]
    padding_right: Option<f64>,
    #[serde(default)]
    padding_top: Option<f64>,
    #[serde(default)]
    padding_bottom: Option<f64>,
    #[serde(default)]
    item_spacing: Option<f64>,

    #[serde(default)]
    corner_radius: Option<f64>,

    #[serde(default)]
    constraints: Option<LayoutConstraint>,

    // Appearance
    #[serde(default)]
    fills: Vec<Paint>,
    #[serde(default)]
    strokes: Vec<Paint>,
    #[serde(default)]
    stroke_weight: Option<f64>,
    #[serde(default)]
    effects: Vec<Effect>,
    #[serde(default)]
    opacity: Option<f64>,

    // Text
    #[serde(default)]
    characters: Option<String>,
    #[serde(default)]
    style: Option<TypeStyle>,
}

fn unknown_id() -> String {
    "unknown".to_string()
}

fn visible() -> bool {
    true
}

impl Node {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeType {
        &self.kind
    }

    /// Returns `false` for nodes hidden in the Figma editor.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the node's bounding box in absolute canvas coordinates.
    ///
    /// `DOCUMENT` and `CANVAS` nodes have no bounding box.
    pub fn bounding_box(&self) -> Option<&Rect> {
        self.absolute_bounding_box.as_ref()
    }

    /// Returns the auto layout direction, if the node declares one.
    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.layout_mode
    }

    pub fn primary_axis_align(&self) -> Option<PrimaryAxisAlign> {
        self.primary_axis_align_items
    }

    pub fn counter_axis_align(&self) -> Option<CounterAxisAlign> {
        self.counter_axis_align_items
    }

    pub fn padding_left(&self) -> Option<f64> {
        self.padding_left
    }

    pub fn padding_right(&self) -> Option<f64> {
        self.padding_right
    }

    pub fn padding_top(&self) -> Option<f64> {
        self.padding_top
    }

    pub fn padding_bottom(&self) -> Option<f64> {
        self.padding_bottom
    }

    /// Returns the spacing between auto layout children.
    pub fn item_spacing(&self) -> Option<f64> {
        self.item_spacing
    }

    pub fn corner_radius(&self) -> Option<f64> {
        self.corner_radius
    }

    pub fn constraints(&self) -> Option<&LayoutConstraint> {
        self.constraints.as_ref()
    }

    pub fn fills(&self) -> &[Paint] {
        &self.fills
    }

    pub fn strokes(&self) -> &[Paint] {
        &self.strokes
    }

    pub fn stroke_weight(&self) -> Option<f64> {
        self.stroke_weight
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Returns the layer opacity, if set.
    pub fn opacity(&self) -> Option<f64> {
        self.opacity
    }

    /// Returns the text content of `TEXT` nodes.
    pub fn characters(&self) -> Option<&str> {
        self.characters.as_deref()
    }

    pub fn style(&self) -> Option<&TypeStyle> {
        self.style.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::document::PaintType;

    #[test]
    fn test_node_type_known_names() {
        assert_eq!(NodeType::from("TEXT".to_string()), NodeType::Text);
        assert_eq!(
            NodeType::from("BOOLEAN_OPERATION".to_string()),
            NodeType::BooleanOperation
        );
    }

    #[test]
    fn test_node_type_keeps_unknown_name() {
        let kind = NodeType::from("STICKY".to_string());
        assert_eq!(kind, NodeType::Other("STICKY".to_string()));
        assert_eq!(kind.as_str(), "STICKY");
    }

    #[test]
    fn test_minimal_node_defaults() {
        let node: Node = serde_json::from_value(json!({})).unwrap();

        assert_eq!(node.id(), "unknown");
        assert_eq!(node.kind(), &NodeType::Frame);
        assert!(node.is_visible());
        assert!(node.children().is_empty());
        assert!(node.bounding_box().is_none());
        assert!(node.fills().is_empty());
    }

    #[test]
    fn test_full_frame_node() {
        let node: Node = serde_json::from_value(json!({
            "id": "1:2",
            "name": "Card",
            "type": "FRAME",
            "visible": false,
            "absoluteBoundingBox": { "x": 10, "y": 20, "width": 300, "height": 200 },
            "layoutMode": "VERTICAL",
            "primaryAxisAlignItems": "SPACE_BETWEEN",
            "counterAxisAlignItems": "CENTER",
            "paddingLeft": 16,
            "itemSpacing": 8,
            "cornerRadius": 4,
            "constraints": { "vertical": "TOP", "horizontal": "CENTER" },
            "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1, "a": 1 } }],
            "strokeWeight": 2,
            "opacity": 0.5,
            "children": [{ "id": "1:3", "type": "TEXT", "characters": "Hi" }]
        }))
        .unwrap();

        assert_eq!(node.name(), "Card");
        assert!(!node.is_visible());
        assert_eq!(node.layout_mode(), Some(LayoutMode::Vertical));
        assert_eq!(
            node.primary_axis_align(),
            Some(PrimaryAxisAlign::SpaceBetween)
        );
        assert_eq!(node.counter_axis_align(), Some(CounterAxisAlign::Center));
        assert_eq!(node.padding_left(), Some(16.0));
        assert_eq!(node.padding_right(), None);
        assert_eq!(node.item_spacing(), Some(8.0));
        assert_eq!(node.fills()[0].kind(), &PaintType::Solid);
        assert_eq!(node.stroke_weight(), Some(2.0));
        assert_eq!(node.opacity(), Some(0.5));
        assert_eq!(node.children()[0].characters(), Some("Hi"));
        assert!(node.children()[0].kind().is_text());
    }
}
