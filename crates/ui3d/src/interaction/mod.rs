//! Pointer interaction: quad raycasting and per-tick pointer state.

pub mod raycaster;

pub use raycaster::{raycast_quad, Rect, UIRaycastHit};

/// Pointer snapshot handed to every `intersect` call of one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Whether the pointer button is held during this tick.
    pub pressed: bool,
    /// Whether it was held during the previous tick.
    pub previously_pressed: bool,
}

impl PointerState {
    /// Create a snapshot.
    pub fn new(pressed: bool, previously_pressed: bool) -> Self {
        Self {
            pressed,
            previously_pressed,
        }
    }

    /// Button went down since the previous tick.
    pub fn just_pressed(&self) -> bool {
        self.pressed && !self.previously_pressed
    }

    /// Button went up since the previous tick.
    pub fn just_released(&self) -> bool {
        !self.pressed && self.previously_pressed
    }

    /// State for the tick after this one if the button stays `pressed`.
    pub fn next(&self, pressed: bool) -> Self {
        Self {
            pressed,
            previously_pressed: self.pressed,
        }
    }
}
