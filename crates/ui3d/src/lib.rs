//! 3D UI system for head-mounted and desktop pointers
//!
//! UI pages are flat trees of styled boxes laid out on world-space planes.
//! Pointer rays (a mouse through a camera, or a tracked controller) are
//! intersected with the tree every tick to drive hover, press and value
//! changes on interactive views.
//!
//! # Features
//!
//! - **Box model**: width/height/margin/padding as fractions of the parent's content box
//! - **Containers**: horizontal and vertical flows, fixed grids
//! - **Views**: checkbox, slider, image button, text
//! - **Raycasting**: two-sided quad hits with surface UVs
//! - **Pages**: world-space transforms and page switching
//!
//! Drawing is left to the host through the [`Visual`] trait.
//!
//! # Example
//!
//! ```rust,no_run
//! use vrui_ui3d::{Element, PointerState, UIManager};
//! use vrui_core::{PartialStyle, Theme};
//! use vrui_camera::Ray;
//! use glam::Vec3;
//!
//! let theme = Theme::default();
//! let mut root = Element::vertical(PartialStyle::new());
//! root.add(Element::checkbox(&theme, PartialStyle::new().with_height(0.2)))?;
//!
//! let mut ui = UIManager::new(1.0, 1.0)?;
//! ui.add_page(root)?;
//!
//! // Every tick:
//! let ray = Ray::new(Vec3::new(0.0, 0.4, 1.0), Vec3::NEG_Z);
//! ui.intersect(&ray, &PointerState::new(true, false));
//! # Ok::<(), vrui_core::ConfigError>(())
//! ```

pub mod components;
pub mod element;
pub mod event;
pub mod interaction;
pub mod layout;
pub mod manager;
pub mod page;
pub mod surface;

pub use components::{
    Checkbox, HoverTint, ImageButton, Slider, TextView, Transform3D, View, VIEW_SURFACE_Z,
};
pub use element::{Element, ElementFlags, ElementKind, ElementSnapshot};
pub use event::{Callback, ChangeEvent, ChangeValue, EventSlot, UiEvent};
pub use interaction::{raycast_quad, PointerState, Rect, UIRaycastHit};
pub use layout::{Arrangement, GridSpec, Layout};
pub use manager::UIManager;
pub use page::Page;
pub use surface::{QuadVertex, Visual, QUAD_INDICES};

/// UI system version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
