//! Style schema: recognized keys and their validators.

use bitflags::bitflags;
use std::fmt;

use crate::error::StyleError;
use crate::style::{Align, Position};
use crate::theme::Background;

/// Every style property the resolver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// Fraction of the allotted width.
    Width,
    /// Fraction of the allotted height.
    Height,
    /// Depth fraction (carried for hosts that extrude surfaces).
    Depth,
    /// `height / width` ratio used to derive a missing dimension.
    AspectRatio,
    /// `padding.top`
    PaddingTop,
    /// `padding.bottom`
    PaddingBottom,
    /// `padding.left`
    PaddingLeft,
    /// `padding.right`
    PaddingRight,
    /// `margin.top`
    MarginTop,
    /// `margin.bottom`
    MarginBottom,
    /// `margin.left`
    MarginLeft,
    /// `margin.right`
    MarginRight,
    /// Horizontal placement inside the parent.
    Position,
    /// Vertical placement inside the parent.
    Align,
    /// Background visual.
    Background,
}

/// Range shared by every padding and margin side.
pub const SIDE_RANGE: (f32, f32) = (0.0, 0.49);

const POSITION_NAMES: &[&str] = &["left", "right", "center"];
const ALIGN_NAMES: &[&str] = &["top", "bottom", "center"];

impl StyleKey {
    /// All keys in schema order.
    pub const ALL: [StyleKey; 15] = [
        StyleKey::Width,
        StyleKey::Height,
        StyleKey::Depth,
        StyleKey::AspectRatio,
        StyleKey::PaddingTop,
        StyleKey::PaddingBottom,
        StyleKey::PaddingLeft,
        StyleKey::PaddingRight,
        StyleKey::MarginTop,
        StyleKey::MarginBottom,
        StyleKey::MarginLeft,
        StyleKey::MarginRight,
        StyleKey::Position,
        StyleKey::Align,
        StyleKey::Background,
    ];

    /// Dotted property path, e.g. `padding.left`.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::Width => "width",
            StyleKey::Height => "height",
            StyleKey::Depth => "depth",
            StyleKey::AspectRatio => "aspectRatio",
            StyleKey::PaddingTop => "padding.top",
            StyleKey::PaddingBottom => "padding.bottom",
            StyleKey::PaddingLeft => "padding.left",
            StyleKey::PaddingRight => "padding.right",
            StyleKey::MarginTop => "margin.top",
            StyleKey::MarginBottom => "margin.bottom",
            StyleKey::MarginLeft => "margin.left",
            StyleKey::MarginRight => "margin.right",
            StyleKey::Position => "position",
            StyleKey::Align => "align",
            StyleKey::Background => "background",
        }
    }

    /// Look up a top-level (non-grouped) key. Accepts `aspect_ratio` as well
    /// as `aspectRatio`.
    pub fn from_name(name: &str) -> Option<StyleKey> {
        match name {
            "width" => Some(StyleKey::Width),
            "height" => Some(StyleKey::Height),
            "depth" => Some(StyleKey::Depth),
            "aspectRatio" | "aspect_ratio" => Some(StyleKey::AspectRatio),
            "position" => Some(StyleKey::Position),
            "align" => Some(StyleKey::Align),
            "background" => Some(StyleKey::Background),
            _ => None,
        }
    }

    /// Look up a side inside the `padding` or `margin` group.
    pub fn from_group(group: SideGroup, side: &str) -> Option<StyleKey> {
        let key = match (group, side) {
            (SideGroup::Padding, "top") => StyleKey::PaddingTop,
            (SideGroup::Padding, "bottom") => StyleKey::PaddingBottom,
            (SideGroup::Padding, "left") => StyleKey::PaddingLeft,
            (SideGroup::Padding, "right") => StyleKey::PaddingRight,
            (SideGroup::Margin, "top") => StyleKey::MarginTop,
            (SideGroup::Margin, "bottom") => StyleKey::MarginBottom,
            (SideGroup::Margin, "left") => StyleKey::MarginLeft,
            (SideGroup::Margin, "right") => StyleKey::MarginRight,
            _ => return None,
        };
        Some(key)
    }

    /// Validator attached to this key.
    pub fn validator(self) -> Validator {
        match self {
            StyleKey::Width | StyleKey::Height | StyleKey::AspectRatio => Validator::Range {
                min: 0.0,
                max: 100.0,
                min_inclusive: false,
            },
            StyleKey::Depth => Validator::Range {
                min: 0.0,
                max: 100.0,
                min_inclusive: true,
            },
            StyleKey::PaddingTop
            | StyleKey::PaddingBottom
            | StyleKey::PaddingLeft
            | StyleKey::PaddingRight
            | StyleKey::MarginTop
            | StyleKey::MarginBottom
            | StyleKey::MarginLeft
            | StyleKey::MarginRight => Validator::Range {
                min: SIDE_RANGE.0,
                max: SIDE_RANGE.1,
                min_inclusive: true,
            },
            StyleKey::Position => Validator::OneOf(POSITION_NAMES),
            StyleKey::Align => Validator::OneOf(ALIGN_NAMES),
            StyleKey::Background => Validator::Background,
        }
    }

    /// Bit used to record that the key was explicitly supplied.
    pub fn bit(self) -> StyleKeys {
        match self {
            StyleKey::Width => StyleKeys::WIDTH,
            StyleKey::Height => StyleKeys::HEIGHT,
            StyleKey::Depth => StyleKeys::DEPTH,
            StyleKey::AspectRatio => StyleKeys::ASPECT_RATIO,
            StyleKey::PaddingTop => StyleKeys::PADDING_TOP,
            StyleKey::PaddingBottom => StyleKeys::PADDING_BOTTOM,
            StyleKey::PaddingLeft => StyleKeys::PADDING_LEFT,
            StyleKey::PaddingRight => StyleKeys::PADDING_RIGHT,
            StyleKey::MarginTop => StyleKeys::MARGIN_TOP,
            StyleKey::MarginBottom => StyleKeys::MARGIN_BOTTOM,
            StyleKey::MarginLeft => StyleKeys::MARGIN_LEFT,
            StyleKey::MarginRight => StyleKeys::MARGIN_RIGHT,
            StyleKey::Position => StyleKeys::POSITION,
            StyleKey::Align => StyleKeys::ALIGN,
            StyleKey::Background => StyleKeys::BACKGROUND,
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested side groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideGroup {
    /// `padding.*`
    Padding,
    /// `margin.*`
    Margin,
}

impl SideGroup {
    /// Look up a group by its property name.
    pub fn from_name(name: &str) -> Option<SideGroup> {
        match name {
            "padding" => Some(SideGroup::Padding),
            "margin" => Some(SideGroup::Margin),
            _ => None,
        }
    }
}

bitflags! {
    /// Set of style keys, used to track which ones a caller supplied.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleKeys: u32 {
        /// `width`
        const WIDTH = 1 << 0;
        /// `height`
        const HEIGHT = 1 << 1;
        /// `depth`
        const DEPTH = 1 << 2;
        /// `aspectRatio`
        const ASPECT_RATIO = 1 << 3;
        /// `padding.top`
        const PADDING_TOP = 1 << 4;
        /// `padding.bottom`
        const PADDING_BOTTOM = 1 << 5;
        /// `padding.left`
        const PADDING_LEFT = 1 << 6;
        /// `padding.right`
        const PADDING_RIGHT = 1 << 7;
        /// `margin.top`
        const MARGIN_TOP = 1 << 8;
        /// `margin.bottom`
        const MARGIN_BOTTOM = 1 << 9;
        /// `margin.left`
        const MARGIN_LEFT = 1 << 10;
        /// `margin.right`
        const MARGIN_RIGHT = 1 << 11;
        /// `position`
        const POSITION = 1 << 12;
        /// `align`
        const ALIGN = 1 << 13;
        /// `background`
        const BACKGROUND = 1 << 14;
    }
}

/// Per-key validation rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validator {
    /// Number in `[min, max]`, or `(min, max]` when `min_inclusive` is false.
    Range {
        /// Lower bound.
        min: f32,
        /// Upper bound (inclusive).
        max: f32,
        /// Whether `min` itself is accepted.
        min_inclusive: bool,
    },
    /// One of a fixed set of names.
    OneOf(&'static [&'static str]),
    /// A background descriptor or none.
    Background,
}

impl Validator {
    fn range_label(min: f32, max: f32, min_inclusive: bool) -> String {
        let open = if min_inclusive { '[' } else { '(' };
        format!("{open}{min}, {max}]")
    }
}

/// A single property value, already converted to the key's Rust type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    /// Numeric property.
    Number(f32),
    /// `position` value.
    Position(Position),
    /// `align` value.
    Align(Align),
    /// `background` value; `None` removes the background.
    Background(Option<Background>),
}

/// Run the validator of `key` on `value`.
pub fn validate(key: StyleKey, value: &StyleValue) -> Result<(), StyleError> {
    match (key.validator(), value) {
        (
            Validator::Range {
                min,
                max,
                min_inclusive,
            },
            StyleValue::Number(v),
        ) => {
            let above_min = if min_inclusive { *v >= min } else { *v > min };
            // NaN fails both comparisons.
            if above_min && *v <= max {
                Ok(())
            } else {
                Err(StyleError::OutOfRange {
                    key,
                    range: Validator::range_label(min, max, min_inclusive),
                    value: *v,
                })
            }
        }
        (Validator::Range { .. }, _) => Err(StyleError::WrongType {
            key,
            expected: "number",
        }),
        (Validator::OneOf(_), StyleValue::Position(_)) if key == StyleKey::Position => Ok(()),
        (Validator::OneOf(_), StyleValue::Align(_)) if key == StyleKey::Align => Ok(()),
        (Validator::OneOf(_), _) => Err(StyleError::WrongType {
            key,
            expected: "string",
        }),
        (Validator::Background, StyleValue::Background(_)) => Ok(()),
        (Validator::Background, _) => Err(StyleError::WrongType {
            key,
            expected: "colour, texture or material",
        }),
    }
}

/// Convert a raw name to the typed value of an enumerated key.
pub fn parse_named(key: StyleKey, name: &str) -> Result<StyleValue, StyleError> {
    let not_in_list = |allowed: &[&str]| StyleError::NotInList {
        key,
        allowed: allowed.join(", "),
        value: name.to_string(),
    };
    match key {
        StyleKey::Position => Position::from_name(name)
            .map(StyleValue::Position)
            .ok_or_else(|| not_in_list(POSITION_NAMES)),
        StyleKey::Align => Align::from_name(name)
            .map(StyleValue::Align)
            .ok_or_else(|| not_in_list(ALIGN_NAMES)),
        _ => Err(StyleError::WrongType {
            key,
            expected: "number",
        }),
    }
}
