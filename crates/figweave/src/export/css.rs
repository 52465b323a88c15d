//! Stylesheet generation.

use std::fmt;

use log::trace;

use figweave_core::{document::Node, geometry::Rect};

use super::class_name;
use crate::style::{Declarations, node_declarations};

/// A single class rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    class: String,
    declarations: Declarations,
}

impl Rule {
    /// Returns the class name, without the leading dot.
    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{} {{\n{}}}\n\n", self.class, self.declarations)
    }
}

/// The node rules of a document, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    /// Builds the stylesheet of the tree rooted at `root`.
    ///
    /// Nodes without any declaration get no rule.
    pub fn from_document(root: &Node) -> Self {
        let mut rules = Vec::new();
        collect_rules(root, None, &mut rules);
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Finds the rule of a class.
    pub fn rule(&self, class: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.class == class)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

fn collect_rules(node: &Node, parent_box: Option<&Rect>, rules: &mut Vec<Rule>) {
    if !node.is_visible() {
        trace!(id = node.id(); "Skipping hidden node");
        return;
    }

    let declarations = node_declarations(node, parent_box);
    if !declarations.is_empty() {
        let class = class_name(node);
        trace!(class = class.as_str(), declarations = declarations.len(); "Styled node");
        rules.push(Rule {
            class,
            declarations,
        });
    }

    // Children are placed relative to this node's box; without one they fall
    // back to canvas coordinates.
    let own_box = node.bounding_box();
    for child in node.children() {
        collect_rules(child, own_box, rules);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).expect("Invalid test node")
    }

    #[test]
    fn test_rule_format() {
        let root = node(json!({
            "id": "1:1",
            "type": "RECTANGLE",
            "absoluteBoundingBox": {"x": 0, "y": 0, "width": 10, "height": 5}
        }));

        let sheet = StyleSheet::from_document(&root);

        assert_eq!(
            sheet.to_string(),
            ".figma-rectangle-1-1 {\n  position: absolute;\n  left: 0px;\n  top: 0px;\n  width: 10px;\n  height: 5px;\n}\n\n"
        );
    }

    #[test]
    fn test_unstyled_nodes_have_no_rule() {
        let root = node(json!({
            "id": "0:0",
            "type": "DOCUMENT",
            "children": [{"id": "0:1", "type": "CANVAS"}]
        }));

        let sheet = StyleSheet::from_document(&root);

        assert!(sheet.is_empty());
        assert_eq!(sheet.to_string(), "");
    }

    #[test]
    fn test_children_are_relative_to_parent_box() {
        let root = node(json!({
            "id": "0:1",
            "type": "CANVAS",
            "children": [{
                "id": "1:1",
                "type": "FRAME",
                "absoluteBoundingBox": {"x": 100, "y": 200, "width": 400, "height": 300},
                "children": [{
                    "id": "1:2",
                    "type": "RECTANGLE",
                    "absoluteBoundingBox": {"x": 110, "y": 220, "width": 50, "height": 50}
                }]
            }]
        }));

        let sheet = StyleSheet::from_document(&root);
        assert_eq!(sheet.len(), 2);

        let frame = sheet.rule("figma-frame-1-1").unwrap();
        assert_eq!(frame.declarations().get("left"), Some("100px"));
        assert_eq!(frame.declarations().get("top"), Some("200px"));

        let rect = sheet.rule("figma-rectangle-1-2").unwrap();
        assert_eq!(rect.declarations().get("left"), Some("10px"));
        assert_eq!(rect.declarations().get("top"), Some("20px"));
    }

    #[test]
    fn test_group_without_box_resets_to_canvas_coordinates() {
        let root = node(json!({
            "id": "1:1",
            "type": "FRAME",
            "absoluteBoundingBox": {"x": 100, "y": 100, "width": 10, "height": 10},
            "children": [{
                "id": "1:2",
                "type": "GROUP",
                "children": [{
                    "id": "1:3",
                    "type": "ELLIPSE",
                    "absoluteBoundingBox": {"x": 150, "y": 160, "width": 1, "height": 1}
                }]
            }]
        }));

        let sheet = StyleSheet::from_document(&root);

        let ellipse = sheet.rule("figma-ellipse-1-3").unwrap();
        assert_eq!(ellipse.declarations().get("left"), Some("150px"));
    }

    #[test]
    fn test_hidden_subtree_is_skipped() {
        let root = node(json!({
            "id": "1:1",
            "type": "FRAME",
            "visible": false,
            "cornerRadius": 3,
            "children": [{"id": "1:2", "type": "RECTANGLE", "cornerRadius": 2}]
        }));

        assert!(StyleSheet::from_document(&root).is_empty());
    }

    #[test]
    fn test_rules_in_document_order() {
        let root = node(json!({
            "id": "1",
            "type": "FRAME",
            "cornerRadius": 1,
            "children": [
                {"id": "2", "type": "RECTANGLE", "cornerRadius": 2,
                 "children": [{"id": "3", "type": "RECTANGLE", "cornerRadius": 3}]},
                {"id": "4", "type": "RECTANGLE", "cornerRadius": 4}
            ]
        }));

        let classes: Vec<_> = StyleSheet::from_document(&root)
            .rules()
            .iter()
            .map(|rule| rule.class().to_string())
            .collect();

        assert_eq!(
            classes,
            vec![
                "figma-frame-1",
                "figma-rectangle-2",
                "figma-rectangle-3",
                "figma-rectangle-4"
            ]
        );
    }
}
