//! Vertical flow: top-aligned children stack downward from the top edge,
//! bottom-aligned ones upward from the bottom edge, centred ones as one group.

use glam::Vec2;
use vrui_core::{Align, BoxModel};

use super::{anchored, centred_start};
use crate::element::Element;

pub(crate) fn arrange(dimensions: &BoxModel, children: &mut [Element]) {
    let content_width = dimensions.content_width();
    let content_height = dimensions.content_height();
    for child in children.iter_mut() {
        child.refresh(content_width, content_height);
    }

    let padding = dimensions.padding;
    let group = |anchor: Align| -> f32 {
        children
            .iter()
            .filter(|child| child.style().align == anchor)
            .map(|child| child.dimensions().outer_height())
            .sum()
    };
    let centered = group(Align::Center);
    let lead_end = padding.top + group(Align::Top);
    let trail_start = dimensions.height - padding.bottom - group(Align::Bottom);

    let mut top = padding.top;
    let mut bottom = padding.bottom;
    let ideal = padding.top + (content_height - centered) * 0.5;
    let mut center = centred_start(ideal, centered, lead_end, trail_start);

    for child in children.iter_mut() {
        let child_dims = *child.dimensions();
        let margin = child_dims.margin;
        let y = match child.style().align {
            Align::Top => {
                top += margin.top;
                let y = top;
                top += child_dims.height + margin.bottom;
                y
            }
            Align::Bottom => {
                bottom += margin.bottom + child_dims.height;
                let y = dimensions.height - bottom;
                bottom += margin.top;
                y
            }
            Align::Center => {
                center += margin.top;
                let y = center;
                center += child_dims.height + margin.bottom;
                y
            }
        };
        let x = anchored(
            child.style().position.into(),
            padding.left,
            content_width,
            child_dims.width,
            margin.left,
            margin.right,
        );
        child.place(Vec2::new(x, y));
    }
}
