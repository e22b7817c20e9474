//! Interactive leaf views and page placement.
//!
//! A view is a leaf element whose hit surface is its padded content area,
//! lifted slightly off the page so it wins over the background behind it.

pub mod button;
pub mod checkbox;
pub mod slider;
pub mod text;

pub use button::ImageButton;
pub use checkbox::Checkbox;
pub use slider::Slider;
pub use text::TextView;

use glam::{Mat4, Quat, Vec3};
use vrui_core::{Color, Theme};

use crate::event::ChangeValue;
use crate::interaction::{Rect, UIRaycastHit};

/// Depth of view surfaces above their parent's plane.
pub const VIEW_SURFACE_Z: f32 = 0.001;

/// Concrete view behaviour carried by a leaf element.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Textured button.
    ImageButton(ImageButton),
    /// Two-state toggle.
    Checkbox(Checkbox),
    /// Horizontal value slider.
    Slider(Slider),
    /// Static text block.
    Text(TextView),
}

impl View {
    /// Stable lowercase name used in snapshots and event logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            View::ImageButton(_) => "image_button",
            View::Checkbox(_) => "checkbox",
            View::Slider(_) => "slider",
            View::Text(_) => "text",
        }
    }

    /// Sliders keep their own colours; every other view tints on hover.
    pub fn tints_on_hover(&self) -> bool {
        !matches!(self, View::Slider(_))
    }

    /// Hit surface of the view given its padded content rectangle.
    pub fn surface(&self, content: Rect) -> Rect {
        match self {
            View::Slider(slider) => slider.track_rect(content),
            _ => content,
        }
    }

    /// Value reported by change events right now.
    pub fn current_value(&self) -> ChangeValue {
        match self {
            View::Checkbox(checkbox) => ChangeValue::Checked(checkbox.is_checked()),
            View::Slider(slider) => ChangeValue::Slider(slider.value()),
            View::ImageButton(_) | View::Text(_) => ChangeValue::None,
        }
    }

    pub(crate) fn press(&mut self, hit: &UIRaycastHit) -> ChangeValue {
        if let View::Slider(slider) = self {
            slider.set_from_track(hit.uv.0);
        }
        self.current_value()
    }

    /// `over` tells whether the pointer was still on the view at release.
    pub(crate) fn release(&mut self, over: bool) -> ChangeValue {
        if let View::Checkbox(checkbox) = self {
            if over {
                checkbox.toggle();
            }
        }
        self.current_value()
    }

    /// Returns the new value when dragging moved it.
    pub(crate) fn drag(&mut self, hit: &UIRaycastHit) -> Option<ChangeValue> {
        match self {
            View::Slider(slider) => slider
                .set_from_track(hit.uv.0)
                .then(|| ChangeValue::Slider(slider.value())),
            _ => None,
        }
    }
}

/// Surface tints a view alternates between on hover edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTint {
    /// Tint while not hovered.
    pub base: Color,
    /// Tint while hovered.
    pub highlight: Color,
}

impl HoverTint {
    /// Take both tints from a theme.
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            base: theme.base,
            highlight: theme.highlight,
        }
    }

    /// Tint for the given hover state.
    pub fn for_hover(&self, hovered: bool) -> Color {
        if hovered {
            self.highlight
        } else {
            self.base
        }
    }
}

/// Transform in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    /// World position of the page centre.
    pub position: Vec3,
    /// World orientation; the page faces +Z when identity.
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform3D {
    /// Identity rotation and scale at `position`.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Replace the scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Replace the rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Local-to-world matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// World-to-local matrix.
    pub fn inverse_matrix(&self) -> Mat4 {
        self.matrix().inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn transform_round_trips_points() {
        let transform = Transform3D::new(Vec3::new(1.0, 2.0, -3.0))
            .with_rotation(Quat::from_rotation_y(0.5))
            .with_scale(Vec3::splat(2.0));
        let p = Vec3::new(0.25, -0.5, 0.0);
        let back = transform
            .inverse_matrix()
            .transform_point3(transform.matrix().transform_point3(p));
        assert!((back - p).length() < 1e-4);
    }

    #[test]
    fn slider_surface_is_half_height_track() {
        let view = View::Slider(Slider::new(&Theme::default()));
        let content = Rect::from_top_left(Vec2::new(0.0, 1.0), 1.0, 0.4);
        let track = view.surface(content);
        assert!((track.height() - 0.2).abs() < 1e-6);
        assert!((track.center() - content.center()).length() < 1e-6);
        assert!(!view.tints_on_hover());
    }

    #[test]
    fn checkbox_toggles_only_when_released_over() {
        let mut view = View::Checkbox(Checkbox::new(&Theme::default()));
        assert_eq!(view.release(false), ChangeValue::Checked(false));
        assert_eq!(view.release(true), ChangeValue::Checked(true));
        assert_eq!(view.release(true), ChangeValue::Checked(false));
    }

    #[test]
    fn slider_drag_reports_only_moves() {
        let mut view = View::Slider(Slider::new(&Theme::default()));
        let at = |u: f32| UIRaycastHit {
            position: Vec3::ZERO,
            distance: 1.0,
            uv: (u, 0.5),
        };
        assert_eq!(view.drag(&at(0.25)), Some(ChangeValue::Slider(0.25)));
        assert_eq!(view.drag(&at(0.25)), None);

        let mut checkbox = View::Checkbox(Checkbox::new(&Theme::default()));
        assert_eq!(checkbox.drag(&at(0.9)), None);
    }

    #[test]
    fn hover_tint_picks_colour() {
        let tint = HoverTint::from_theme(&Theme::default());
        assert_eq!(tint.for_hover(false), Theme::default().base);
        assert_eq!(tint.for_hover(true), Theme::default().highlight);
    }
}
