//! Export of Figma documents to HTML and CSS.
//!
//! This module is the final stage of the figweave pipeline. It walks the
//! document tree once for the stylesheet and once for the markup, then wraps
//! both into a standalone page.
//!
//! # Pipeline Position
//!
//! ```text
//! Figma API / saved JSON
//!     ↓ fetch
//! Raw JSON
//!     ↓ parse
//! FileResponse (document tree)
//!     ↓ export (this module)
//! Site { index.html, styles.css }
//! ```
//!
//! Both walks are pre-order and skip hidden nodes together with their
//! subtrees, so every element in the markup has a matching class in the
//! stylesheet (unless the node has no styles at all).
//!
//! # Available Pieces
//!
//! - [`css`] - [`css::StyleSheet`], one rule per styled node
//! - [`html`] - [`html::render_markup`], the element tree
//! - [`page`] - [`page::PageTemplate`], the surrounding HTML document
//! - [`Site`] - the generated files and how to write them

pub mod css;
pub mod html;
pub mod page;

mod site;

pub use site::{INDEX_FILE, STYLESHEET_FILE, Site};

use figweave_core::document::Node;

/// Returns the CSS class generated for `node`.
///
/// The class is `figma-{type}-{id}` with the type lowercased and every
/// character of the id outside `[A-Za-z0-9_-]` replaced by `-`, since Figma
/// ids such as `12:34` are not valid in selectors.
///
/// The mapping is not injective: ids differing only in replaced characters,
/// such as `1:2` and `1-2`, give the same class and their rules share a
/// selector. Figma ids use `:` and `;` as separators and in practice carry no `-`,
/// so this does not happen for API documents.
///
/// # Examples
///
/// ```
/// # use figweave::export::class_name;
/// # use figweave_core::document::Node;
/// let node: Node = serde_json::from_str(r#"{"id": "12:34;5", "type": "TEXT"}"#).unwrap();
/// assert_eq!(class_name(&node), "figma-text-12-34-5");
/// ```
pub fn class_name(node: &Node) -> String {
    let safe_id: String = node
        .id()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect();

    format!(
        "figma-{}-{safe_id}",
        node.kind().as_str().to_ascii_lowercase()
    )
}
