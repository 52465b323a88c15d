//! Mapping of Figma node properties to CSS declarations.
//!
//! [`node_declarations`] collects every declaration of a single node in a
//! fixed order: position and size, auto layout, spacing, constraints, fills,
//! text style, border, effects and finally opacity. The result is an
//! insertion-ordered [`Declarations`] map; writing a property twice keeps its
//! first position and the last value.

mod effect;
mod layout;
mod paint;
mod text;

use std::fmt;

use indexmap::IndexMap;

use figweave_core::{document::Node, geometry::Rect};

/// An ordered set of CSS declarations for one selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: IndexMap<&'static str, String>,
}

impl Declarations {
    /// Creates an empty declaration set
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property` to `value`, replacing any earlier value in place.
    pub fn insert(&mut self, property: &'static str, value: impl Into<String>) {
        self.entries.insert(property, value.into());
    }

    /// Returns the value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }
}

/// Prints one `  property: value;` line per declaration.
impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, value) in self.iter() {
            writeln!(f, "  {property}: {value};")?;
        }
        Ok(())
    }
}

/// Computes the declarations of `node`.
///
/// `parent_box` is the bounding box of the parent node, if it has one;
/// positions are made relative to it.
pub fn node_declarations(node: &Node, parent_box: Option<&Rect>) -> Declarations {
    let mut declarations = Declarations::new();

    layout::position(node, parent_box, &mut declarations);
    layout::auto_layout(node, &mut declarations);
    layout::spacing(node, &mut declarations);
    layout::constraints(node, &mut declarations);
    paint::fills(node, &mut declarations);
    text::type_style(node, &mut declarations);
    paint::border(node, &mut declarations);
    effect::effects(node, &mut declarations);

    match node.opacity() {
        Some(opacity) if opacity < 1.0 => declarations.insert("opacity", number(opacity)),
        _ => {}
    }

    declarations
}

/// Formats a number with at most three decimals and no trailing zeros.
pub(crate) fn number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // Covers negative zero as well
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

/// Formats a pixel length.
pub(crate) fn px(value: f64) -> String {
    format!("{}px", number(value))
}
