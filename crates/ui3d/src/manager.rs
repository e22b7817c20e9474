//! UI Manager - switches between pages and routes pointer rays to the current one

use tracing::{debug, info};
use vrui_camera::Ray;
use vrui_core::{ConfigError, Theme};

use crate::components::Transform3D;
use crate::element::Element;
use crate::interaction::{PointerState, UIRaycastHit};
use crate::page::{check_extent, Page};

/// Owns every page of one UI. Exactly one page is current and visible.
#[derive(Debug)]
pub struct UIManager {
    width: f32,
    height: f32,
    depth: f32,
    theme: Theme,
    transform: Transform3D,
    pages: Vec<Page>,
    current: usize,
    enabled: bool,
}

impl UIManager {
    /// Create a manager whose pages are all `width × height`.
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            width: check_extent("width", width, false)?,
            height: check_extent("height", height, false)?,
            depth: 0.0,
            theme: Theme::default(),
            transform: Transform3D::default(),
            pages: Vec::new(),
            current: 0,
            enabled: true,
        })
    }

    /// Builder: page depth.
    pub fn with_depth(mut self, depth: f32) -> Result<Self, ConfigError> {
        self.depth = check_extent("depth", depth, true)?;
        Ok(self)
    }

    /// Builder: theme handed to view constructors by callers.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
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

    /// Add a page holding `root`. The first page becomes current and keeps
    /// the root's own visibility; later ones start hidden until shown.
    /// Returns the page index.
    pub fn add_page(&mut self, root: Element) -> Result<usize, ConfigError> {
        let mut page = Page::new(root, self.width, self.height)?.with_depth(self.depth)?;
        page.set_transform(self.transform);
        let index = self.pages.len();
        if index > 0 {
            page.set_visible(false);
        }
        page.refresh();
        self.pages.push(page);
        debug!(index, "page added");
        Ok(index)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_mut(&mut self, index: usize) -> Option<&mut Page> {
        self.pages.get_mut(index)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.get_mut(self.current)
    }

    /// Advance to the next page, wrapping around. Returns the new index.
    pub fn next_page(&mut self) -> Option<usize> {
        let count = self.pages.len();
        if count == 0 {
            return None;
        }
        self.show_page((self.current + 1) % count)
    }

    /// Go back to the previous page, wrapping around. Returns the new index.
    pub fn prev_page(&mut self) -> Option<usize> {
        let count = self.pages.len();
        if count == 0 {
            return None;
        }
        self.show_page((self.current + count - 1) % count)
    }

    /// Make `index` the current page. The page left behind is hidden, which
    /// clears its hover and press state.
    pub fn show_page(&mut self, index: usize) -> Option<usize> {
        if index >= self.pages.len() {
            return None;
        }
        if index != self.current {
            if let Some(previous) = self.pages.get_mut(self.current) {
                previous.set_visible(false);
            }
            self.current = index;
        }
        self.pages[index].set_visible(true);
        info!(page = index, of = self.pages.len(), "switched UI page");
        Some(index)
    }

    /// Re-layout every page.
    pub fn refresh(&mut self) {
        for page in &mut self.pages {
            page.refresh();
        }
    }

    /// Whether pointer rays are dispatched at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling clears hover and press state on the current page.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            if let Some(page) = self.current_page_mut() {
                page.root_mut().force_exit();
            }
        }
    }

    pub fn transform(&self) -> &Transform3D {
        &self.transform
    }

    /// Move every page, present and future, to `transform`.
    pub fn set_transform(&mut self, transform: Transform3D) {
        self.transform = transform;
        for page in &mut self.pages {
            page.set_transform(transform);
        }
    }

    /// Dispatch a world-space pointer ray to the current page.
    pub fn intersect(&mut self, ray: &Ray, state: &PointerState) -> Option<UIRaycastHit> {
        if !self.enabled {
            return None;
        }
        self.current_page_mut()?.intersect(ray, state)
    }
}
