//! Text styling.

use serde::Deserialize;

/// Horizontal alignment of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justified,
    #[serde(other)]
    Other,
}

/// Line decoration of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    None,
    Underline,
    Strikethrough,
    #[serde(other)]
    Other,
}

/// The style of a `TEXT` node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default)]
    font_family: Option<String>,
    #[serde(default)]
    font_size: Option<f64>,
    #[serde(default)]
    font_weight: Option<f64>,
    #[serde(default)]
    italic: Option<bool>,
    #[serde(default)]
    line_height_px: Option<f64>,
    #[serde(default)]
    letter_spacing: Option<f64>,
    #[serde(default)]
    text_align_horizontal: Option<TextAlign>,
    #[serde(default)]
    text_decoration: Option<TextDecoration>,
}

impl TypeStyle {
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    pub fn font_size(&self) -> Option<f64> {
        self.font_size
    }

    /// Returns the numeric font weight (100 to 900).
    pub fn font_weight(&self) -> Option<f64> {
        self.font_weight
    }

    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }

    /// Returns the line height in pixels.
    pub fn line_height_px(&self) -> Option<f64> {
        self.line_height_px
    }

    /// Returns the letter spacing in pixels.
    pub fn letter_spacing(&self) -> Option<f64> {
        self.letter_spacing
    }

    pub fn text_align(&self) -> Option<TextAlign> {
        self.text_align_horizontal
    }

    pub fn text_decoration(&self) -> Option<TextDecoration> {
        self.text_decoration
    }
}
