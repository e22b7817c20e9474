//! Colours, background descriptors and the default palette.
//!
//! Element constructors receive a [`Theme`] explicitly instead of sharing
//! process-wide default materials.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB colour stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color(0xFFFFFF);
    /// Opaque black.
    pub const BLACK: Color = Color(0x000000);

    /// Build from 8-bit channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Convert to normalized RGBA with full opacity.
    pub fn to_rgba(self) -> [f32; 4] {
        let r = ((self.0 >> 16) & 0xFF) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xFF) as f32 / 255.0;
        let b = (self.0 & 0xFF) as f32 / 255.0;
        [r, g, b, 1.0]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFFFFFF)
    }
}

/// Error returned when parsing a `#RRGGBB` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour {0:?}, expected #RRGGBB or 0xRRGGBB")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let hex = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| ParseColorError(input.to_string()))?;
        if hex.len() != 6 {
            return Err(ParseColorError(input.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Color)
            .map_err(|_| ParseColorError(input.to_string()))
    }
}

/// Opaque handle to a texture owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextureId(pub u32);

/// Opaque handle to a material owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u32);

/// What to paint behind (or as) an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// Flat colour.
    Color(Color),
    /// Texture handle, tinted by the element's current tint.
    Texture(TextureId),
    /// Renderer material used as-is.
    Material(MaterialId),
}

impl Background {
    /// True for backgrounds that carry an image (texture or material).
    pub fn is_image(&self) -> bool {
        matches!(self, Background::Texture(_) | Background::Material(_))
    }
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Background::Color(color)
    }
}

/// Palette used by views for their surfaces and hover feedback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Tint applied to view surfaces when not hovered.
    pub base: Color,
    /// Tint applied to view surfaces while hovered.
    pub highlight: Color,
    /// Checkbox tick mark.
    pub checkbox_mark: Color,
    /// Checkbox box.
    pub checkbox_back: Color,
    /// Slider track.
    pub slider_back: Color,
    /// Slider handle.
    pub slider_handle: Color,
    /// Text colour.
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::WHITE,
            highlight: Color(0xF5A623),
            checkbox_mark: Color(0x4CAF50),
            checkbox_back: Color(0xE0E0E0),
            slider_back: Color(0xBDBDBD),
            slider_handle: Color(0x1E88E5),
            text: Color::WHITE,
        }
    }
}
