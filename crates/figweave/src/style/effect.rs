//! Shadows and blurs.

use figweave_core::document::{Effect, EffectType, Node};

use super::{Declarations, px};

/// Drop and inner shadows share one `box-shadow` list; blurs map to filters.
pub(super) fn effects(node: &Node, declarations: &mut Declarations) {
    let mut shadows = Vec::new();

    for effect in node.effects().iter().filter(|effect| effect.is_visible()) {
        match effect.kind() {
            EffectType::DropShadow => shadows.push(shadow(effect, false)),
            EffectType::InnerShadow => shadows.push(shadow(effect, true)),
            EffectType::LayerBlur => {
                declarations.insert("filter", format!("blur({})", px(effect.radius())));
            }
            EffectType::BackgroundBlur => {
                declarations.insert("backdrop-filter", format!("blur({})", px(effect.radius())));
            }
            EffectType::Other => {}
        }
    }

    if !shadows.is_empty() {
        declarations.insert("box-shadow", shadows.join(", "));
    }
}

fn shadow(effect: &Effect, inset: bool) -> String {
    let offset = effect.offset();
    let mut parts = Vec::with_capacity(6);

    if inset {
        parts.push("inset".to_string());
    }
    parts.push(px(offset.x()));
    parts.push(px(offset.y()));
    parts.push(px(effect.radius()));
    if let Some(spread) = effect.spread().filter(|spread| *spread != 0.0) {
        parts.push(px(spread));
    }
    parts.push(effect.color().to_string());

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn node(value: serde_json::Value) -> Node {
        serde_json::from_value(value).expect("Invalid test node")
    }

    #[test]
    fn test_drop_shadow() {
        let node = node(json!({
            "effects": [{
                "type": "DROP_SHADOW",
                "radius": 4,
                "offset": {"x": 0, "y": 2},
                "color": {"r": 0, "g": 0, "b": 0, "a": 0.25}
            }]
        }));
        let mut declarations = Declarations::new();

        effects(&node, &mut declarations);

        assert_eq!(
            declarations.get("box-shadow"),
            Some("0px 2px 4px rgba(0, 0, 0, 0.25)")
        );
    }

    #[test]
    fn test_shadows_are_combined() {
        let node = node(json!({
            "effects": [
                {"type": "DROP_SHADOW", "radius": 1, "offset": {"x": 1, "y": 1}},
                {"type": "INNER_SHADOW", "radius": 2, "spread": 3, "offset": {"x": 0, "y": 0},
                 "color": {"r": 1, "g": 1, "b": 1, "a": 1}},
                {"type": "DROP_SHADOW", "visible": false, "radius": 9}
            ]
        }));
        let mut declarations = Declarations::new();

        effects(&node, &mut declarations);

        assert_eq!(
            declarations.get("box-shadow"),
            Some("1px 1px 1px rgb(0, 0, 0), inset 0px 0px 2px 3px rgb(255, 255, 255)")
        );
    }

    #[test]
    fn test_blurs() {
        let node = node(json!({
            "effects": [
                {"type": "LAYER_BLUR", "radius": 8},
                {"type": "BACKGROUND_BLUR", "radius": 12.5}
            ]
        }));
        let mut declarations = Declarations::new();

        effects(&node, &mut declarations);

        assert_eq!(declarations.get("filter"), Some("blur(8px)"));
        assert_eq!(declarations.get("backdrop-filter"), Some("blur(12.5px)"));
        assert_eq!(declarations.get("box-shadow"), None);
    }
}
