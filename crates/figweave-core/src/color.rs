//! Color handling for figweave documents
//!
//! This module provides two color types:
//!
//! - [`Rgba`] - the raw color object found in Figma documents, with channels in `0.0..=1.0`
//! - [`Color`] - a wrapper around the `AlphaColor<Srgb>` type from the color crate,
//!   which knows how to print itself as a CSS color value

use std::{fmt, str::FromStr};

use color::{AlphaColor, DynamicColor, Srgb};
use serde::Deserialize;

/// A color as it appears in a Figma document.
///
/// Every channel is a float in `0.0..=1.0`. Missing color channels default to
/// `0.0` and a missing alpha defaults to fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    #[serde(default)]
    pub r: f32,
    #[serde(default)]
    pub g: f32,
    #[serde(default)]
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Rgba {
    /// Creates a new color from its channels.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Wrapper around the `AlphaColor<Srgb>` type from the color crate
///
/// `Display` produces a CSS color: `rgb(r, g, b)` for opaque colors and
/// `rgba(r, g, b, a)` otherwise. Channels are scaled to `0..=255` and
/// truncated, the alpha is printed with at most three decimals.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: AlphaColor<Srgb>,
}

impl Color {
    /// Create a new `Color` from a CSS color string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use figweave_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.to_string(), "rgb(255, 0, 0)");
    ///
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self {
                color: color.to_alpha_color::<Srgb>(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Scales the alpha of this color by `factor`, used for paint and layer opacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use figweave_core::color::{Color, Rgba};
    ///
    /// let color = Color::from(Rgba::new(1.0, 1.0, 1.0, 0.5)).multiply_alpha(0.5);
    /// assert_eq!(color.alpha(), 0.25);
    /// ```
    pub fn multiply_alpha(self, factor: f32) -> Self {
        self.with_alpha(self.alpha() * factor)
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns `true` when the color prints as fully opaque, that is when its
    /// alpha rounds to `1` at three decimals.
    pub fn is_opaque(&self) -> bool {
        self.css_alpha() >= 1.0
    }

    fn css_alpha(&self) -> f64 {
        (f64::from(self.alpha()) * 1000.0).round() / 1000.0
    }

    fn channel8(&self, index: usize) -> u8 {
        (self.color.components[index].clamp(0.0, 1.0) * 255.0) as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from(Rgba::default())
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Self {
            color: AlphaColor::new([rgba.r, rgba.g, rgba.b, rgba.a.clamp(0.0, 1.0)]),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = (self.channel8(0), self.channel8(1), self.channel8(2));
        if self.is_opaque() {
            write!(f, "rgb({r}, {g}, {b})")
        } else {
            write!(f, "rgba({r}, {g}, {b}, {})", self.css_alpha())
        }
    }
}
