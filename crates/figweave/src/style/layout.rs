//! Position, auto layout, spacing and constraints.

use figweave_core::{
    document::{CounterAxisAlign, HorizontalConstraint, LayoutMode, Node, PrimaryAxisAlign},
    geometry::Rect,
};

use super::{Declarations, px};

/// Absolute placement from the bounding box, relative to the parent's box when there is one.
pub(super) fn position(node: &Node, parent_box: Option<&Rect>, declarations: &mut Declarations) {
    let Some(bounds) = node.bounding_box() else {
        return;
    };

    let origin = match parent_box {
        Some(parent) => bounds.offset_from(parent),
        None => bounds.origin(),
    };

    declarations.insert("position", "absolute");
    declarations.insert("left", px(origin.x()));
    declarations.insert("top", px(origin.y()));
    declarations.insert("width", px(bounds.width()));
    declarations.insert("height", px(bounds.height()));
}

/// Flexbox from auto layout. Alignment is only read when the node declares a layout mode.
pub(super) fn auto_layout(node: &Node, declarations: &mut Declarations) {
    let Some(mode) = node.layout_mode() else {
        return;
    };

    match mode {
        LayoutMode::Horizontal => {
            declarations.insert("display", "flex");
            declarations.insert("flex-direction", "row");
        }
        LayoutMode::Vertical => {
            declarations.insert("display", "flex");
            declarations.insert("flex-direction", "column");
        }
        LayoutMode::None | LayoutMode::Other => {}
    }

    if let Some(align) = node.primary_axis_align() {
        declarations.insert("justify-content", justify_content(align));
    }
    if let Some(align) = node.counter_axis_align() {
        declarations.insert("align-items", align_items(align));
    }
}

fn justify_content(align: PrimaryAxisAlign) -> &'static str {
    match align {
        PrimaryAxisAlign::Center => "center",
        PrimaryAxisAlign::Max => "flex-end",
        PrimaryAxisAlign::SpaceBetween => "space-between",
        PrimaryAxisAlign::SpaceAround => "space-around",
        PrimaryAxisAlign::Min | PrimaryAxisAlign::Other => "flex-start",
    }
}

fn align_items(align: CounterAxisAlign) -> &'static str {
    match align {
        CounterAxisAlign::Center => "center",
        CounterAxisAlign::Max => "flex-end",
        CounterAxisAlign::Baseline => "baseline",
        CounterAxisAlign::Min | CounterAxisAlign::Other => "flex-start",
    }
}

pub(super) fn spacing(node: &Node, declarations: &mut Declarations) {
    let lengths = [
        ("padding-left", node.padding_left()),
        ("padding-right", node.padding_right()),
        ("padding-top", node.padding_top()),
        ("padding-bottom", node.padding_bottom()),
        ("gap", node.item_spacing()),
        ("border-radius", node.corner_radius()),
    ];

    for (property, value) in lengths {
        if let Some(value) = value {
            declarations.insert(property, px(value));
        }
    }
}

pub(super) fn constraints(node: &Node, declarations: &mut Declarations) {
    match node.constraints().and_then(|c| c.horizontal()) {
        Some(HorizontalConstraint::Center) => {
            declarations.insert("margin-left", "auto");
            declarations.insert("margin-right", "auto");
        }
        Some(HorizontalConstraint::Right) => {
            declarations.insert("margin-left", "auto");
        }
        _ => {}
    }
}
