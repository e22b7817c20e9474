//! A page: one root element occupying a fixed world-space rectangle.

use glam::Vec2;
use tracing::debug;
use vrui_camera::Ray;
use vrui_core::ConfigError;

use crate::components::Transform3D;
use crate::element::{Element, ElementSnapshot};
use crate::interaction::{PointerState, UIRaycastHit};

/// Finite and positive, or non-negative when `allow_zero` is set.
pub(crate) fn check_extent(
    axis: &'static str,
    value: f32,
    allow_zero: bool,
) -> Result<f32, ConfigError> {
    let lower_ok = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if value.is_finite() && lower_ok {
        Ok(value)
    } else {
        Err(ConfigError::InvalidPageDimension { axis, value })
    }
}

/// Root element plus the world rectangle it is laid out in.
///
/// The page plane is centred on the transform's origin with x right, y up
/// and its front facing +Z.
#[derive(Debug)]
pub struct Page {
    root: Element,
    width: f32,
    height: f32,
    depth: f32,
    transform: Transform3D,
    visible: bool,
}

impl Page {
    /// Wrap `root` on a `width × height` page. The page starts visible
    /// exactly when `root` is.
    pub fn new(root: Element, width: f32, height: f32) -> Result<Self, ConfigError> {
        let visible = root.is_visible();
        Ok(Self {
            root,
            width: check_extent("width", width, false)?,
            height: check_extent("height", height, false)?,
            depth: 0.0,
            transform: Transform3D::default(),
            visible,
        })
    }

    /// Builder: thickness budget handed to hosts.
    pub fn with_depth(mut self, depth: f32) -> Result<Self, ConfigError> {
        self.depth = check_extent("depth", depth, true)?;
        Ok(self)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Unwrap the root element.
    pub fn into_root(self) -> Element {
        self.root
    }

    pub fn transform(&self) -> &Transform3D {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform3D) {
        self.transform = transform;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide. Hiding clears hover and press state in the tree.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.root.set_visible(visible);
        if !visible {
            self.root.force_exit();
        }
    }

    /// Append a child to the root.
    pub fn add(&mut self, child: Element) -> Result<(), ConfigError> {
        self.root.add(child).map(|_| ())
    }

    /// Look up an element by name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.root.find(name)
    }

    /// Mutable lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.root.find_mut(name)
    }

    /// Page-plane position of the root's top-left corner.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(-self.width * 0.5, self.height * 0.5)
    }

    /// Lay the whole tree out against the page size.
    pub fn refresh(&mut self) {
        self.root.refresh(self.width, self.height);
        self.root.place(Vec2::ZERO);
        debug!(
            width = self.width,
            height = self.height,
            root = self.root.kind_name(),
            "page refreshed"
        );
    }

    /// Dispatch a world-space pointer ray. The returned hit is the root's,
    /// with its position mapped back to world space.
    pub fn intersect(&mut self, ray: &Ray, state: &PointerState) -> Option<UIRaycastHit> {
        let local = ray.transformed(&self.transform.inverse_matrix());
        let top_left = self.top_left();
        let hit = self.root.intersect(&local, top_left, state)?;
        Some(UIRaycastHit {
            position: self.transform.matrix().transform_point3(hit.position),
            ..hit
        })
    }

    /// Serializable snapshot of the tree.
    pub fn snapshot(&self) -> ElementSnapshot {
        self.root.snapshot()
    }
}
