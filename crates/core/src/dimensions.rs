//! Per-element box model computed by every layout pass.

use serde::Serialize;

use crate::style::{Sides, Style};

/// Absolute box of an element, in the units of its parent's allotted box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BoxModel {
    /// Width allotted by the parent on the last pass.
    pub max_width: f32,
    /// Height allotted by the parent on the last pass.
    pub max_height: f32,
    /// Resolved width.
    pub width: f32,
    /// Resolved height.
    pub height: f32,
    /// `width / 2`.
    pub half_width: f32,
    /// `height / 2`.
    pub half_height: f32,
    /// Absolute margins.
    pub margin: Sides,
    /// Absolute padding.
    pub padding: Sides,
}

impl BoxModel {
    /// Resolve `style` against an allotted box of `max_width × max_height`.
    ///
    /// With an aspect ratio and exactly one explicit dimension, the other is
    /// derived as `height = ratio * width`. An aspect ratio with both or
    /// neither dimension falls back to the full allotted box.
    pub fn resolve(style: &Style, max_width: f32, max_height: f32) -> Self {
        let (width, height) = match style.aspect_ratio {
            Some(ratio) if style.derives_from_aspect() => {
                if style.is_explicit(crate::StyleKey::Width) {
                    let width = style.width * max_width;
                    (width, ratio * width)
                } else {
                    let height = style.height * max_height;
                    (height / ratio, height)
                }
            }
            Some(_) => (max_width, max_height),
            None => (style.width * max_width, style.height * max_height),
        };

        Self {
            max_width,
            max_height,
            width,
            height,
            half_width: width / 2.0,
            half_height: height / 2.0,
            margin: style.margin.scaled(max_width, max_height),
            padding: style.padding.scaled(max_width, max_height),
        }
    }

    /// Width left for content once horizontal padding is removed.
    pub fn content_width(&self) -> f32 {
        (self.width - self.padding.horizontal()).max(0.0)
    }

    /// Height left for content once vertical padding is removed.
    pub fn content_height(&self) -> f32 {
        (self.height - self.padding.vertical()).max(0.0)
    }

    /// Width including horizontal margins.
    pub fn outer_width(&self) -> f32 {
        self.width + self.margin.horizontal()
    }

    /// Height including vertical margins.
    pub fn outer_height(&self) -> f32 {
        self.height + self.margin.vertical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{PartialSides, PartialStyle, StyleResolver};

    #[test]
    fn default_style_fills_allotted_box() {
        let dims = BoxModel::resolve(&Style::default(), 0.5, 0.5);
        assert_eq!(dims.width, 0.5);
        assert_eq!(dims.height, 0.5);
        assert_eq!(dims.half_width, 0.25);
        assert_eq!(dims.margin, Sides::ZERO);
        assert_eq!(dims.padding, Sides::ZERO);
    }

    #[test]
    fn fractions_scale_by_matching_axis() {
        let style = StyleResolver::resolve_default(
            &PartialStyle::new()
                .with_size(0.5, 0.25)
                .with_padding(PartialSides::all(0.1))
                .with_margin(PartialSides {
                    top: Some(0.2),
                    left: Some(0.2),
                    ..Default::default()
                }),
        );
        let dims = BoxModel::resolve(&style, 2.0, 4.0);
        assert_eq!(dims.width, 1.0);
        assert_eq!(dims.height, 1.0);
        assert!((dims.padding.top - 0.4).abs() < 1e-6);
        assert!((dims.padding.left - 0.2).abs() < 1e-6);
        assert!((dims.margin.top - 0.8).abs() < 1e-6);
        assert!((dims.margin.left - 0.4).abs() < 1e-6);
        assert!((dims.content_width() - 0.6).abs() < 1e-6);
        assert!((dims.content_height() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn aspect_ratio_derives_missing_height() {
        let style = StyleResolver::resolve_default(
            &PartialStyle::new().with_width(0.5).with_aspect_ratio(0.5),
        );
        let dims = BoxModel::resolve(&style, 2.0, 10.0);
        assert_eq!(dims.width, 1.0);
        assert_eq!(dims.height, 0.5);
    }

    #[test]
    fn aspect_ratio_derives_missing_width() {
        let style = StyleResolver::resolve_default(
            &PartialStyle::new().with_height(0.5).with_aspect_ratio(2.0),
        );
        let dims = BoxModel::resolve(&style, 2.0, 4.0);
        assert_eq!(dims.height, 2.0);
        assert_eq!(dims.width, 1.0);
    }

    #[test]
    fn ambiguous_aspect_ratio_uses_full_box() {
        let style = StyleResolver::resolve_default(
            &PartialStyle::new().with_size(0.2, 0.2).with_aspect_ratio(3.0),
        );
        let dims = BoxModel::resolve(&style, 2.0, 3.0);
        assert_eq!((dims.width, dims.height), (2.0, 3.0));
    }
}
