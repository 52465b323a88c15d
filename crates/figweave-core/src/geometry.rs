//! Geometric primitives found in Figma documents.
//!
//! - [`Rect`] - an axis-aligned box, used for `absoluteBoundingBox`
//! - [`Vector`] - a 2D offset, used for shadow offsets
//!
//! # Coordinate System
//!
//! Figma uses a canvas coordinate system consistent with CSS:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Bounding boxes are absolute canvas coordinates, so placing a child inside
//! its parent means subtracting the parent's origin (see [`Rect::offset_from`]).

use serde::Deserialize;

/// A 2D offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Vector {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

impl Vector {
    /// Creates a new vector with the specified components
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal component
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the vertical component
    pub fn y(self) -> f64 {
        self.y
    }
}

/// An axis-aligned rectangle in absolute canvas coordinates.
///
/// # Examples
///
/// ```
/// # use figweave_core::geometry::{Rect, Vector};
/// let parent = Rect::new(100.0, 50.0, 400.0, 300.0);
/// let child = Rect::new(120.0, 80.0, 40.0, 20.0);
///
/// assert_eq!(child.offset_from(&parent), Vector::new(20.0, 30.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Rect {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the top-left corner as a vector from the canvas origin
    pub fn origin(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    /// Returns the position of this rectangle relative to `parent`'s top-left corner.
    pub fn offset_from(&self, parent: &Rect) -> Vector {
        Vector::new(self.x - parent.x, self.y - parent.y)
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -10000.0f64..10000.0,
            -10000.0f64..10000.0,
            0.0f64..2000.0,
            0.0f64..2000.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    /// Offsetting from itself is always the zero vector.
    fn check_offset_from_self_is_zero(rect: Rect) -> Result<(), TestCaseError> {
        let offset = rect.offset_from(&rect);

        prop_assert!(approx_eq!(f64, offset.x(), 0.0));
        prop_assert!(approx_eq!(f64, offset.y(), 0.0));
        Ok(())
    }

    /// Parent origin plus relative offset gives back the absolute origin.
    fn check_offset_roundtrip(child: Rect, parent: Rect) -> Result<(), TestCaseError> {
        let offset = child.offset_from(&parent);

        prop_assert!(approx_eq!(
            f64,
            parent.x() + offset.x(),
            child.x(),
            epsilon = 1e-6
        ));
        prop_assert!(approx_eq!(
            f64,
            parent.y() + offset.y(),
            child.y(),
            epsilon = 1e-6
        ));
        Ok(())
    }

    proptest! {
        #[test]
        fn offset_from_self_is_zero(rect in rect_strategy()) {
            check_offset_from_self_is_zero(rect)?;
        }

        #[test]
        fn offset_roundtrip(child in rect_strategy(), parent in rect_strategy()) {
            check_offset_roundtrip(child, parent)?;
        }
    }
}
