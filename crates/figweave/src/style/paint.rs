//! Fills and borders.

use figweave_core::document::{Node, Paint, PaintType};

use super::{Declarations, number, px};

fn first_visible(paints: &[Paint]) -> Option<&Paint> {
    paints.iter().find(|paint| paint.is_visible())
}

/// Text nodes take a solid fill as their text color; every other fill becomes the background.
pub(super) fn fills(node: &Node, declarations: &mut Declarations) {
    let Some(fill) = first_visible(node.fills()) else {
        return;
    };

    if node.kind().is_text() && fill.kind() == &PaintType::Solid {
        if let Some(color) = fill.color() {
            declarations.insert("color", color.to_string());
        }
        return;
    }

    if let Some(background) = background(fill) {
        declarations.insert("background", background);
    }
}

/// Converts a paint into a CSS background value.
///
/// Returns `None` for paints without a CSS equivalent (images, angular and
/// diamond gradients) and for gradients without stops.
pub(crate) fn background(paint: &Paint) -> Option<String> {
    match paint.kind() {
        PaintType::Solid => paint.color().map(|color| color.to_string()),
        PaintType::GradientLinear => {
            gradient_stops(paint).map(|stops| format!("linear-gradient({stops})"))
        }
        PaintType::GradientRadial => {
            gradient_stops(paint).map(|stops| format!("radial-gradient(circle, {stops})"))
        }
        _ => None,
    }
}

fn gradient_stops(paint: &Paint) -> Option<String> {
    let stops: Vec<String> = paint
        .gradient_stops()
        .map(|(color, position)| format!("{color} {}%", number(f64::from(position) * 100.0)))
        .collect();

    if stops.is_empty() {
        None
    } else {
        Some(stops.join(", "))
    }
}

/// A solid border from the first visible stroke, `strokeWeight` wide (1px when unset).
pub(super) fn border(node: &Node, declarations: &mut Declarations) {
    let Some(stroke) = first_visible(node.strokes()) else {
        return;
    };
    if stroke.kind() != &PaintType::Solid {
        return;
    }
    let Some(color) = stroke.color() else {
        return;
    };

    let weight = node.stroke_weight().unwrap_or(1.0);
    declarations.insert("border", format!("{} solid {color}", px(weight)));
}
