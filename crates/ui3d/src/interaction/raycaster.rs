//! UI Raycasting - Detect pointer interaction with UI surfaces

use glam::{Vec2, Vec3};
use vrui_camera::Ray;

/// Result of a UI raycast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UIRaycastHit {
    /// Position where ray hit the UI surface
    pub position: Vec3,
    /// Ray parameter at the hit point (distance for unit-length rays)
    pub distance: f32,
    /// UV coordinates on the surface (0-1 range, v grows upward)
    pub uv: (f32, f32),
}

/// Axis-aligned rectangle in the page plane (x right, y up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Bottom-left corner
    pub min: Vec2,
    /// Top-right corner
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from its corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle hanging down-right from `top_left`
    pub fn from_top_left(top_left: Vec2, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(top_left.x, top_left.y - height),
            max: Vec2::new(top_left.x + width, top_left.y),
        }
    }

    /// Create a rectangle from center position and size
    pub fn from_center_size(center: Vec2, width: f32, height: f32) -> Self {
        let half = Vec2::new(width, height) * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Width of the rectangle
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if a point lies inside (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Raycast against a flat rectangle lying in the plane `z = depth`.
///
/// Both faces are hittable. Degenerate (zero-area) rectangles never hit.
pub fn raycast_quad(ray: &Ray, rect: &Rect, depth: f32) -> Option<UIRaycastHit> {
    let width = rect.width();
    let height = rect.height();
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    // Ray parallel to plane
    let denom = ray.direction.z;
    if denom.abs() < 1e-6 {
        return None;
    }

    let t = (depth - ray.origin.z) / denom;

    // Intersection behind ray origin
    if t < 0.0 {
        return None;
    }

    let hit_pos = ray.at(t);
    let point = hit_pos.truncate();
    if !rect.contains(point) {
        return None;
    }

    Some(UIRaycastHit {
        position: hit_pos,
        distance: t,
        uv: (
            (point.x - rect.min.x) / width,
            (point.y - rect.min.y) / height,
        ),
    })
}
