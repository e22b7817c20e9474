//! Renderer boundary.
//!
//! The layout tree never draws. Each element may own a [`Visual`] that the
//! host renderer implements; the tree pushes size, position, background,
//! visibility and tint changes into it as they happen.

use bytemuck::{Pod, Zeroable};
use vrui_core::{Background, BoxModel, Color};

use crate::components::View;
use crate::interaction::Rect;

/// Host-side representation of one element. Every hook defaults to a no-op.
pub trait Visual {
    /// Called after the element's box has been recomputed.
    fn resize(&mut self, _dimensions: &BoxModel) {}

    /// Called when the parent layout places the element (top-left offset,
    /// +y down, relative to the parent's top-left).
    fn move_to(&mut self, _offset: glam::Vec2) {}

    /// Called when the background style key changes.
    fn set_background(&mut self, _background: Option<&Background>) {}

    /// Called when the element is shown or hidden.
    fn set_visible(&mut self, _visible: bool) {}

    /// Called on hover edges of views that tint on hover.
    fn set_tint(&mut self, _tint: Color) {}

    /// Called after a view's own state changed (checked, slider value, text).
    fn view_changed(&mut self, _view: &View) {}
}

/// Vertex layout for flat UI quads, ready for a GPU vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    /// Page-local position.
    pub position: [f32; 3],
    /// Texture coordinates, v grows downward.
    pub uv: [f32; 2],
    /// Linear RGBA colour.
    pub color: [f32; 4],
}

/// Two counter-clockwise triangles over the vertices of [`QuadVertex::quad`].
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

impl QuadVertex {
    /// Four corners of `rect` at depth `z`: bottom-left, bottom-right,
    /// top-right, top-left.
    pub fn quad(rect: &Rect, z: f32, color: Color) -> [QuadVertex; 4] {
        let color = color.to_rgba();
        let corner = |x: f32, y: f32, u: f32, v: f32| QuadVertex {
            position: [x, y, z],
            uv: [u, v],
            color,
        };
        [
            corner(rect.min.x, rect.min.y, 0.0, 1.0),
            corner(rect.max.x, rect.min.y, 1.0, 1.0),
            corner(rect.max.x, rect.max.y, 1.0, 0.0),
            corner(rect.min.x, rect.max.y, 0.0, 0.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn quad_casts_to_bytes() {
        let rect = Rect::from_top_left(Vec2::new(-1.0, 1.0), 2.0, 1.0);
        let quad = QuadVertex::quad(&rect, 0.001, Color::WHITE);
        let bytes: &[u8] = bytemuck::cast_slice(&quad);
        assert_eq!(bytes.len(), 4 * std::mem::size_of::<QuadVertex>());
        assert_eq!(std::mem::size_of::<QuadVertex>(), 36);
    }

    #[test]
    fn quad_corners_are_counter_clockwise() {
        let rect = Rect::from_top_left(Vec2::new(0.0, 1.0), 1.0, 1.0);
        let quad = QuadVertex::quad(&rect, 0.0, Color::BLACK);
        assert_eq!(quad[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(quad[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(quad[2].position, [1.0, 1.0, 0.0]);
        assert_eq!(quad[3].position, [0.0, 1.0, 0.0]);
        assert_eq!(quad[0].color, [0.0, 0.0, 0.0, 1.0]);
    }
}
