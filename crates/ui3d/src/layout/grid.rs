//! Grid layout: equal cells filled row-major, with fractional gutters.

use glam::Vec2;
use serde::Serialize;
use tracing::debug;
use vrui_core::{BoxModel, ConfigError};

use super::anchored;
use crate::element::Element;

/// Validated grid dimensions and gutters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridSpec {
    rows: u32,
    columns: u32,
    h_space: f32,
    v_space: f32,
}

impl GridSpec {
    /// Grid without gutters. Both counts must be non-zero.
    pub fn new(rows: u32, columns: u32) -> Result<Self, ConfigError> {
        if rows == 0 || columns == 0 {
            return Err(ConfigError::MissingGridDimension { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            h_space: 0.0,
            v_space: 0.0,
        })
    }

    /// Gutters as fractions of the content width and height, each in `[0, 1)`.
    pub fn with_spacing(mut self, h_space: f32, v_space: f32) -> Result<Self, ConfigError> {
        for value in [h_space, v_space] {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::InvalidGridSpacing { value });
            }
        }
        self.h_space = h_space;
        self.v_space = v_space;
        Ok(self)
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn h_space(&self) -> f32 {
        self.h_space
    }

    pub fn v_space(&self) -> f32 {
        self.v_space
    }

    /// `rows * columns`
    pub fn capacity(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

pub(crate) fn arrange(spec: &GridSpec, dimensions: &BoxModel, children: &mut [Element]) {
    let content_width = dimensions.content_width();
    let content_height = dimensions.content_height();
    let cell_width = content_width / spec.columns as f32;
    let cell_height = content_height / spec.rows as f32;
    let h_gap = spec.h_space * content_width;
    let v_gap = spec.v_space * content_height;
    let slot_width = (cell_width - h_gap).max(0.0);
    let slot_height = (cell_height - v_gap).max(0.0);

    if children.len() > spec.capacity() {
        debug!(
            children = children.len(),
            capacity = spec.capacity(),
            "grid overflow; extra children continue in additional rows"
        );
    }

    let padding = dimensions.padding;
    let columns = spec.columns as usize;
    for (index, child) in children.iter_mut().enumerate() {
        child.refresh(slot_width, slot_height);

        let column = (index % columns) as f32;
        let row = (index / columns) as f32;
        let cell_x = padding.left + column * cell_width + h_gap * 0.5;
        let cell_y = padding.top + row * cell_height + v_gap * 0.5;

        let child_dims = *child.dimensions();
        let margin = child_dims.margin;
        let x = anchored(
            child.style().position.into(),
            cell_x,
            slot_width,
            child_dims.width,
            margin.left,
            margin.right,
        );
        let y = anchored(
            child.style().align.into(),
            cell_y,
            slot_height,
            child_dims.height,
            margin.top,
            margin.bottom,
        );
        child.place(Vec2::new(x, y));
    }
}
