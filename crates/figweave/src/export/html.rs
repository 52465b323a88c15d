//! Markup generation.
//!
//! Every visible node becomes one element carrying its generated class:
//! `TEXT` nodes become `<p>` with their characters as content, everything
//! else a `<div>`. Leaves are printed on one line; elements with children
//! open and close on their own lines with the children indented between.

use super::class_name;
use figweave_core::document::Node;

const INDENT: &str = "  ";

/// Renders the tree rooted at `root`, indenting the root `depth` levels.
///
/// Every element line ends with a newline.
pub fn render_markup(root: &Node, depth: usize) -> String {
    let mut out = String::new();
    render_node(root, depth, &mut out);
    out
}

fn render_node(node: &Node, depth: usize, out: &mut String) {
    if !node.is_visible() {
        return;
    }

    let indent = INDENT.repeat(depth);
    let tag = tag_name(node);

    out.push_str(&indent);
    out.push_str(&format!("<{tag} class=\"{}\">", class_name(node)));

    if node.kind().is_text() {
        if let Some(characters) = node.characters() {
            out.push_str(&escape_text(characters));
        }
    }

    let visible_children = node.children().iter().any(Node::is_visible);
    if visible_children {
        out.push('\n');
        for child in node.children() {
            render_node(child, depth + 1, out);
        }
        out.push_str(&indent);
    }

    out.push_str(&format!("</{tag}>\n"));
}

fn tag_name(node: &Node) -> &'static str {
    if node.kind().is_text() { "p" } else { "div" }
}

/// Escapes text content for use between HTML tags.
pub(crate) fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
