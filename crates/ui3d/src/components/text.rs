//! Text view

use vrui_core::{Color, Theme};

/// Horizontal text alignment inside the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    /// Left-aligned text
    Left,
    /// Center-aligned text
    #[default]
    Center,
    /// Right-aligned text
    Right,
}

/// Static text block. Glyph layout belongs to the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    text: String,
    /// Glyph colour.
    pub color: Color,
    /// Horizontal alignment.
    pub alignment: TextAlignment,
}

impl TextView {
    /// Centre-aligned text in the theme's text colour.
    pub fn new(text: impl Into<String>, theme: &Theme) -> Self {
        Self {
            text: text.into(),
            color: theme.text,
            alignment: TextAlignment::default(),
        }
    }

    /// Builder: set alignment
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. Returns whether it changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        true
    }
}
