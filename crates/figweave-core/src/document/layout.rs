//! Auto layout and constraint settings.
//!
//! Values the API may add in the future deserialize to the `Other` variant of
//! each enum instead of failing the whole document.

use serde::Deserialize;

/// Direction of an auto layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
    #[serde(other)]
    Other,
}

/// Alignment of auto layout children along the layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    Min,
    Center,
    Max,
    SpaceBetween,
    SpaceAround,
    #[serde(other)]
    Other,
}

/// Alignment of auto layout children across the layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    Min,
    Center,
    Max,
    Baseline,
    #[serde(other)]
    Other,
}

/// How a node is pinned horizontally when its parent resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalConstraint {
    Left,
    Right,
    Center,
    LeftRight,
    Scale,
    #[serde(other)]
    Other,
}

/// How a node is pinned vertically when its parent resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalConstraint {
    Top,
    Bottom,
    Center,
    TopBottom,
    Scale,
    #[serde(other)]
    Other,
}

/// Resizing constraints of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LayoutConstraint {
    #[serde(default)]
    vertical: Option<VerticalConstraint>,
    #[serde(default)]
    horizontal: Option<HorizontalConstraint>,
}

impl LayoutConstraint {
    pub fn vertical(&self) -> Option<VerticalConstraint> {
        self.vertical
    }

    pub fn horizontal(&self) -> Option<HorizontalConstraint> {
        self.horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_values_map_to_other() {
        let mode: LayoutMode = serde_json::from_str(r#""GRID""#).unwrap();
        assert_eq!(mode, LayoutMode::Other);

        let align: PrimaryAxisAlign = serde_json::from_str(r#""SPACE_EVENLY""#).unwrap();
        assert_eq!(align, PrimaryAxisAlign::Other);
    }

    #[test]
    fn test_constraint_deserialize() {
        let constraint: LayoutConstraint =
            serde_json::from_str(r#"{"vertical": "TOP_BOTTOM", "horizontal": "RIGHT"}"#).unwrap();

        assert_eq!(constraint.vertical(), Some(VerticalConstraint::TopBottom));
        assert_eq!(constraint.horizontal(), Some(HorizontalConstraint::Right));
    }
}
