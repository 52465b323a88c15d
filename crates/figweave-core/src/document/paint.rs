//! Fills, strokes and effects.

use serde::Deserialize;

use crate::{
    color::{Color, Rgba},
    geometry::Vector,
};

/// The kind of a [`Paint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    #[serde(other)]
    Other,
}

/// A single fill or stroke paint.
///
/// Figma stacks paints bottom to top; only the first visible paint of a list
/// is converted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    kind: PaintType,

    #[serde(default = "visible")]
    visible: bool,

    #[serde(default)]
    opacity: Option<f32>,

    #[serde(default)]
    color: Option<Rgba>,

    #[serde(default)]
    gradient_stops: Vec<ColorStop>,
}

fn visible() -> bool {
    true
}

impl Paint {
    pub fn kind(&self) -> &PaintType {
        &self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the paint color with the paint opacity applied.
    ///
    /// Paints without a color (gradients, images) yield `None`.
    pub fn color(&self) -> Option<Color> {
        self.color.map(|rgba| self.apply_opacity(Color::from(rgba)))
    }

    /// Returns the gradient stops with the paint opacity applied to each color.
    pub fn gradient_stops(&self) -> impl Iterator<Item = (Color, f32)> + '_ {
        self.gradient_stops
            .iter()
            .map(|stop| (self.apply_opacity(Color::from(stop.color)), stop.position))
    }

    fn apply_opacity(&self, color: Color) -> Color {
        match self.opacity {
            Some(opacity) if opacity < 1.0 => color.multiply_alpha(opacity),
            _ => color,
        }
    }
}

/// A color position inside a gradient, `position` in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ColorStop {
    #[serde(default)]
    color: Rgba,
    #[serde(default)]
    position: f32,
}

/// The kind of an [`Effect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    Other,
}

/// A visual effect such as a shadow or blur.
#[derive(Debug, Clone, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    kind: EffectType,

    #[serde(default = "visible")]
    visible: bool,

    #[serde(default)]
    radius: f64,

    #[serde(default)]
    color: Option<Rgba>,

    #[serde(default)]
    offset: Vector,

    #[serde(default)]
    spread: Option<f64>,
}

impl Effect {
    pub fn kind(&self) -> &EffectType {
        &self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the blur radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the shadow color, opaque black when absent.
    pub fn color(&self) -> Color {
        self.color.map(Color::from).unwrap_or_default()
    }

    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Returns the shadow spread, if any.
    pub fn spread(&self) -> Option<f64> {
        self.spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_opacity_multiplies_alpha() {
        let paint: Paint = serde_json::from_str(
            r#"{"type": "SOLID", "opacity": 0.5, "color": {"r": 1, "g": 0, "b": 0, "a": 1}}"#,
        )
        .unwrap();

        assert_eq!(
            paint.color().map(|c| c.to_string()),
            Some("rgba(255, 0, 0, 0.5)".to_string())
        );
    }

    #[test]
    fn test_gradient_paint_has_no_color() {
        let paint: Paint = serde_json::from_str(
            r#"{
                "type": "GRADIENT_LINEAR",
                "gradientStops": [
                    {"color": {"r": 0, "g": 0, "b": 0, "a": 1}, "position": 0},
                    {"color": {"r": 1, "g": 1, "b": 1, "a": 1}, "position": 1}
                ]
            }"#,
        )
        .unwrap();

        assert!(paint.color().is_none());
        let stops: Vec<_> = paint.gradient_stops().collect();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].1, 1.0);
    }

    #[test]
    fn test_unknown_paint_type() {
        let paint: Paint = serde_json::from_str(r#"{"type": "VIDEO"}"#).unwrap();
        assert_eq!(paint.kind(), &PaintType::Other);
        assert!(paint.is_visible());
    }

    #[test]
    fn test_effect_defaults() {
        let effect: Effect = serde_json::from_str(r#"{"type": "DROP_SHADOW"}"#).unwrap();

        assert_eq!(effect.kind(), &EffectType::DropShadow);
        assert_eq!(effect.radius(), 0.0);
        assert_eq!(effect.offset(), Vector::default());
        assert_eq!(effect.color().to_string(), "rgb(0, 0, 0)");
        assert_eq!(effect.spread(), None);
    }
}
