//! Image button view

use vrui_core::{Background, ConfigError};

/// Button whose face is a texture or material.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageButton {
    image: Background,
}

impl ImageButton {
    /// Flat colours are rejected; use a plain element with a background for those.
    pub fn new(image: Background) -> Result<Self, ConfigError> {
        if !image.is_image() {
            return Err(ConfigError::InvalidImage);
        }
        Ok(Self { image })
    }

    pub fn image(&self) -> &Background {
        &self.image
    }

    /// Swap the face image.
    pub fn set_image(&mut self, image: Background) -> Result<(), ConfigError> {
        *self = Self::new(image)?;
        Ok(())
    }
}
