//! Horizontal flow: left-positioned children stack from the left edge,
//! right-positioned ones from the right edge, centred ones as one group.

use glam::Vec2;
use vrui_core::{BoxModel, Position};

use super::{anchored, centred_start};
use crate::element::Element;

pub(crate) fn arrange(dimensions: &BoxModel, children: &mut [Element]) {
    let content_width = dimensions.content_width();
    let content_height = dimensions.content_height();
    for child in children.iter_mut() {
        child.refresh(content_width, content_height);
    }

    let padding = dimensions.padding;
    let group = |anchor: Position| -> f32 {
        children
            .iter()
            .filter(|child| child.style().position == anchor)
            .map(|child| child.dimensions().outer_width())
            .sum()
    };
    let centered = group(Position::Center);
    let lead_end = padding.left + group(Position::Left);
    let trail_start = dimensions.width - padding.right - group(Position::Right);

    let mut left = padding.left;
    let mut right = padding.right;
    let ideal = padding.left + (content_width - centered) * 0.5;
    let mut center = centred_start(ideal, centered, lead_end, trail_start);

    for child in children.iter_mut() {
        let child_dims = *child.dimensions();
        let margin = child_dims.margin;
        let x = match child.style().position {
            Position::Left => {
                left += margin.left;
                let x = left;
                left += child_dims.width + margin.right;
                x
            }
            Position::Right => {
                right += margin.right + child_dims.width;
                let x = dimensions.width - right;
                right += margin.left;
                x
            }
            Position::Center => {
                center += margin.left;
                let x = center;
                center += child_dims.width + margin.right;
                x
            }
        };
        let y = anchored(
            child.style().align.into(),
            padding.top,
            content_height,
            child_dims.height,
            margin.top,
            margin.bottom,
        );
        child.place(Vec2::new(x, y));
    }
}
