//! Layout containers.
//!
//! A container owns its children and, on every refresh, gives each child
//! its padded content box as the allotted box and then places it. Offsets
//! are top-left corners relative to the container's top-left, +y down.

pub mod grid;
pub mod horizontal;
pub mod vertical;

pub use grid::GridSpec;

use tracing::debug;
use vrui_core::{Align, BoxModel, Position};

use crate::element::Element;

/// Sizes summing to at least this close to 1 count as filling the container.
pub const FULL_TOLERANCE: f32 = 1e-4;

/// How a container places its children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arrangement {
    /// Children flow along x, top-aligned by default.
    Horizontal,
    /// Children flow along y, left-aligned by default.
    Vertical,
    /// Children fill a fixed grid row-major.
    Grid(GridSpec),
}

impl Arrangement {
    /// Stable lowercase name used in snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Arrangement::Horizontal => "horizontal",
            Arrangement::Vertical => "vertical",
            Arrangement::Grid(_) => "grid",
        }
    }
}

/// Ordered children plus the arrangement that places them.
#[derive(Debug)]
pub struct Layout {
    arrangement: Arrangement,
    children: Vec<Element>,
}

impl Layout {
    /// Empty container.
    pub fn new(arrangement: Arrangement) -> Self {
        Self {
            arrangement,
            children: Vec::new(),
        }
    }

    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child. It is laid out on the next refresh.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Remove and return the child at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Element> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Remove and return the first child named `name`.
    pub fn remove_named(&mut self, name: &str) -> Option<Element> {
        let index = self
            .children
            .iter()
            .position(|child| child.name() == Some(name))?;
        Some(self.children.remove(index))
    }

    /// Drop every child.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Whether the children already claim all the space.
    ///
    /// Grids are full at exactly `rows * columns` children. Flow layouts are
    /// full once the styled size fractions along the flow axis reach 1.
    pub fn is_full(&self) -> bool {
        match self.arrangement {
            Arrangement::Grid(spec) => self.children.len() == spec.capacity(),
            Arrangement::Horizontal => {
                let used: f32 = self.children.iter().map(|c| c.style().width).sum();
                used + FULL_TOLERANCE >= 1.0
            }
            Arrangement::Vertical => {
                let used: f32 = self.children.iter().map(|c| c.style().height).sum();
                used + FULL_TOLERANCE >= 1.0
            }
        }
    }

    pub(crate) fn arrange(&mut self, dimensions: &BoxModel) {
        debug!(
            arrangement = self.arrangement.kind_name(),
            children = self.children.len(),
            width = dimensions.width,
            height = dimensions.height,
            "arranging container"
        );
        match self.arrangement {
            Arrangement::Horizontal => horizontal::arrange(dimensions, &mut self.children),
            Arrangement::Vertical => vertical::arrange(dimensions, &mut self.children),
            Arrangement::Grid(spec) => grid::arrange(&spec, dimensions, &mut self.children),
        }
    }
}

/// Side of an axis a child sticks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    Start,
    End,
    Center,
}

impl From<Position> for Anchor {
    fn from(position: Position) -> Self {
        match position {
            Position::Left => Anchor::Start,
            Position::Right => Anchor::End,
            Position::Center => Anchor::Center,
        }
    }
}

impl From<Align> for Anchor {
    fn from(align: Align) -> Self {
        match align {
            Align::Top => Anchor::Start,
            Align::Bottom => Anchor::End,
            Align::Center => Anchor::Center,
        }
    }
}

/// Offset of a single child of `size` inside the span `[start, start + extent]`.
/// Margins apply at the anchored edge only; centring ignores them.
pub(crate) fn anchored(
    anchor: Anchor,
    start: f32,
    extent: f32,
    size: f32,
    lead_margin: f32,
    trail_margin: f32,
) -> f32 {
    match anchor {
        Anchor::Start => start + lead_margin,
        Anchor::End => start + extent - size - trail_margin,
        Anchor::Center => start + (extent - size) * 0.5,
    }
}

/// Start of a centred group of `extent`: centred at `ideal` where it fits,
/// otherwise pushed clear of the leading stack ending at `lead_end` and the
/// trailing stack starting at `trail_start`. The leading stack wins when the
/// gap is too small.
pub(crate) fn centred_start(ideal: f32, extent: f32, lead_end: f32, trail_start: f32) -> f32 {
    ideal.min(trail_start - extent).max(lead_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrui_core::PartialStyle;

    #[test]
    fn centred_group_stays_between_stacks() {
        // Room to centre
        assert_eq!(centred_start(0.3, 0.4, 0.2, 0.9), 0.3);
        // Pushed right by the leading stack
        assert_eq!(centred_start(0.3, 0.4, 0.6, 1.0), 0.6);
        // Pushed left by the trailing stack
        assert!((centred_start(0.3, 0.4, 0.0, 0.5) - 0.1).abs() < 1e-6);
        // No room: abut the leading stack
        assert_eq!(centred_start(0.3, 0.4, 0.5, 0.6), 0.5);
    }

    #[test]
    fn anchored_offsets() {
        assert_eq!(anchored(Anchor::Start, 1.0, 10.0, 2.0, 0.5, 0.25), 1.5);
        assert_eq!(anchored(Anchor::End, 1.0, 10.0, 2.0, 0.5, 0.25), 8.75);
        assert_eq!(anchored(Anchor::Center, 1.0, 10.0, 2.0, 0.5, 0.25), 5.0);
    }

    #[test]
    fn flow_fullness_uses_style_fractions() {
        let mut layout = Layout::new(Arrangement::Horizontal);
        layout.push(Element::new(PartialStyle::new().with_width(0.5)));
        assert!(!layout.is_full());
        layout.push(Element::new(PartialStyle::new().with_width(0.49995)));
        assert!(layout.is_full());

        // Vertical ignores widths
        let mut column = Layout::new(Arrangement::Vertical);
        column.push(Element::new(PartialStyle::new().with_size(0.5, 0.3)));
        assert!(!column.is_full());
    }

    #[test]
    fn remove_by_index_and_name() {
        let mut layout = Layout::new(Arrangement::Vertical);
        layout.push(Element::new(PartialStyle::new()).with_name("a"));
        layout.push(Element::new(PartialStyle::new()).with_name("b"));
        assert!(layout.remove(5).is_none());
        let removed = layout.remove_named("b").unwrap();
        assert_eq!(removed.name(), Some("b"));
        assert!(layout.remove_named("b").is_none());
        assert!(layout.remove(0).is_some());
        assert!(layout.is_empty());
    }
}
