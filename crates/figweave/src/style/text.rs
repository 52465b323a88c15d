//! Typography of `TEXT` nodes.

use figweave_core::document::{Node, TextAlign, TextDecoration};

use super::{Declarations, number, px};

pub(super) fn type_style(node: &Node, declarations: &mut Declarations) {
    if !node.kind().is_text() {
        return;
    }
    let Some(style) = node.style() else {
        return;
    };

    if let Some(family) = style.font_family() {
        declarations.insert(
            "font-family",
            format!("\"{}\", sans-serif", family.replace('"', "\\\"")),
        );
    }
    if let Some(size) = style.font_size() {
        declarations.insert("font-size", px(size));
    }
    if let Some(weight) = style.font_weight() {
        declarations.insert("font-weight", number(weight));
    }
    if style.is_italic() {
        declarations.insert("font-style", "italic");
    }
    if let Some(line_height) = style.line_height_px() {
        declarations.insert("line-height", px(line_height));
    }
    if let Some(spacing) = style.letter_spacing() {
        declarations.insert("letter-spacing", px(spacing));
    }
    if let Some(align) = style.text_align() {
        declarations.insert("text-align", text_align(align));
    }
    match style.text_decoration() {
        Some(TextDecoration::Underline) => declarations.insert("text-decoration", "underline"),
        Some(TextDecoration::Strikethrough) => {
            declarations.insert("text-decoration", "line-through")
        }
        _ => {}
    }
}

fn text_align(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Center => "center",
        TextAlign::Right => "right",
        TextAlign::Justified => "justify",
        TextAlign::Left | TextAlign::Other => "left",
    }
}
