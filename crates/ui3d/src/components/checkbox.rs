//! Checkbox view

use vrui_core::{Background, Theme};

/// Two-state toggle. The state flips when a press is released over it.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkbox {
    checked: bool,
    /// Surface shown while checked.
    pub check: Background,
    /// Surface shown while unchecked.
    pub empty: Background,
}

impl Checkbox {
    /// Unchecked box using the theme's checkbox colours.
    pub fn new(theme: &Theme) -> Self {
        Self::with_images(theme.checkbox_mark.into(), theme.checkbox_back.into())
    }

    /// Unchecked box with explicit surfaces.
    pub fn with_images(check: Background, empty: Background) -> Self {
        Self {
            checked: false,
            check,
            empty,
        }
    }

    /// Builder: initial state.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    /// Surface matching the current state.
    pub fn current_image(&self) -> &Background {
        if self.checked {
            &self.check
        } else {
            &self.empty
        }
    }
}
