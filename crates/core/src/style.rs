//! Element styles and the resolver that validates and merges them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::StyleError;
use crate::schema::{self, SideGroup, StyleKey, StyleKeys, StyleValue};
use crate::theme::{Background, Color};

/// Horizontal placement of a child inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Flow from the left edge.
    #[default]
    Left,
    /// Flow from the right edge.
    Right,
    /// Centred group.
    Center,
}

impl Position {
    /// Parse a schema name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "center" => Some(Self::Center),
            _ => None,
        }
    }
}

/// Vertical placement of a child inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Stack from the top edge.
    #[default]
    Top,
    /// Stack from the bottom edge.
    Bottom,
    /// Centred group.
    Center,
}

impl Align {
    /// Parse a schema name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "center" => Some(Self::Center),
            _ => None,
        }
    }
}

/// Four-sided quantity: style fractions or absolute box-model units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sides {
    /// Top side.
    pub top: f32,
    /// Bottom side.
    pub bottom: f32,
    /// Left side.
    pub left: f32,
    /// Right side.
    pub right: f32,
}

impl Sides {
    /// All sides set to zero.
    pub const ZERO: Sides = Sides {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    /// All four sides equal.
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    /// Scale fractions into absolute units: top/bottom by `height`,
    /// left/right by `width`.
    pub fn scaled(&self, width: f32, height: f32) -> Sides {
        Sides {
            top: self.top * height,
            bottom: self.bottom * height,
            left: self.left * width,
            right: self.right * width,
        }
    }

    /// `left + right`.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Optional per-side overrides used inside [`PartialStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialSides {
    /// Top side.
    pub top: Option<f32>,
    /// Bottom side.
    pub bottom: Option<f32>,
    /// Left side.
    pub left: Option<f32>,
    /// Right side.
    pub right: Option<f32>,
}

impl PartialSides {
    /// Set every side.
    pub fn all(value: f32) -> Self {
        Self {
            top: Some(value),
            bottom: Some(value),
            left: Some(value),
            right: Some(value),
        }
    }

    fn set(&mut self, key: StyleKey, value: f32) {
        match key {
            StyleKey::PaddingTop | StyleKey::MarginTop => self.top = Some(value),
            StyleKey::PaddingBottom | StyleKey::MarginBottom => self.bottom = Some(value),
            StyleKey::PaddingLeft | StyleKey::MarginLeft => self.left = Some(value),
            StyleKey::PaddingRight | StyleKey::MarginRight => self.right = Some(value),
            _ => {}
        }
    }
}

impl From<Sides> for PartialSides {
    fn from(sides: Sides) -> Self {
        Self {
            top: Some(sides.top),
            bottom: Some(sides.bottom),
            left: Some(sides.left),
            right: Some(sides.right),
        }
    }
}

/// Caller-supplied style where every property is optional.
///
/// Values are checked by [`StyleResolver::resolve`], not by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PartialStyle {
    /// Width fraction.
    pub width: Option<f32>,
    /// Height fraction.
    pub height: Option<f32>,
    /// Depth fraction.
    pub depth: Option<f32>,
    /// `height / width` ratio.
    pub aspect_ratio: Option<f32>,
    /// Padding fractions.
    pub padding: PartialSides,
    /// Margin fractions.
    pub margin: PartialSides,
    /// Horizontal placement.
    pub position: Option<Position>,
    /// Vertical placement.
    pub align: Option<Align>,
    /// `Some(None)` explicitly removes the background.
    pub background: Option<Option<Background>>,
}

impl PartialStyle {
    /// Empty style: everything falls back to the base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: width fraction.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Builder: height fraction.
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Builder: width and height fractions.
    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(width).with_height(height)
    }

    /// Builder: depth fraction.
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Builder: `height / width` ratio.
    pub fn with_aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Builder: padding on all four sides.
    pub fn with_padding(mut self, padding: impl Into<PartialSides>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Builder: margin on all four sides.
    pub fn with_margin(mut self, margin: impl Into<PartialSides>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Builder: horizontal placement.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Builder: vertical placement.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Builder: background.
    pub fn with_background(mut self, background: impl Into<Background>) -> Self {
        self.background = Some(Some(background.into()));
        self
    }

    /// Builder: remove any background.
    pub fn without_background(mut self) -> Self {
        self.background = Some(None);
        self
    }

    /// True when the style would modify `key`.
    pub fn touches(&self, key: StyleKey) -> bool {
        self.entries().iter().any(|(k, _)| *k == key)
    }

    /// Every supplied property, in schema order.
    pub fn entries(&self) -> Vec<(StyleKey, StyleValue)> {
        let number = |key, v: Option<f32>| v.map(|v| (key, StyleValue::Number(v)));
        let mut out: Vec<(StyleKey, StyleValue)> = [
            number(StyleKey::Width, self.width),
            number(StyleKey::Height, self.height),
            number(StyleKey::Depth, self.depth),
            number(StyleKey::AspectRatio, self.aspect_ratio),
            number(StyleKey::PaddingTop, self.padding.top),
            number(StyleKey::PaddingBottom, self.padding.bottom),
            number(StyleKey::PaddingLeft, self.padding.left),
            number(StyleKey::PaddingRight, self.padding.right),
            number(StyleKey::MarginTop, self.margin.top),
            number(StyleKey::MarginBottom, self.margin.bottom),
            number(StyleKey::MarginLeft, self.margin.left),
            number(StyleKey::MarginRight, self.margin.right),
        ]
        .into_iter()
        .flatten()
        .collect();
        if let Some(position) = self.position {
            out.push((StyleKey::Position, StyleValue::Position(position)));
        }
        if let Some(align) = self.align {
            out.push((StyleKey::Align, StyleValue::Align(align)));
        }
        if let Some(background) = self.background {
            out.push((StyleKey::Background, StyleValue::Background(background)));
        }
        out
    }

    /// Store an already-typed value. Range checks still happen at resolve time.
    pub fn insert(&mut self, key: StyleKey, value: StyleValue) {
        match (key, value) {
            (StyleKey::Width, StyleValue::Number(v)) => self.width = Some(v),
            (StyleKey::Height, StyleValue::Number(v)) => self.height = Some(v),
            (StyleKey::Depth, StyleValue::Number(v)) => self.depth = Some(v),
            (StyleKey::AspectRatio, StyleValue::Number(v)) => self.aspect_ratio = Some(v),
            (
                StyleKey::PaddingTop
                | StyleKey::PaddingBottom
                | StyleKey::PaddingLeft
                | StyleKey::PaddingRight,
                StyleValue::Number(v),
            ) => self.padding.set(key, v),
            (
                StyleKey::MarginTop
                | StyleKey::MarginBottom
                | StyleKey::MarginLeft
                | StyleKey::MarginRight,
                StyleValue::Number(v),
            ) => self.margin.set(key, v),
            (StyleKey::Position, StyleValue::Position(p)) => self.position = Some(p),
            (StyleKey::Align, StyleValue::Align(a)) => self.align = Some(a),
            (StyleKey::Background, StyleValue::Background(b)) => self.background = Some(b),
            (key, _) => warn!(
                "{}",
                StyleError::WrongType {
                    key,
                    expected: "matching value kind"
                }
            ),
        }
    }

    /// Parse a free-form style map (JSON, or TOML converted through serde).
    ///
    /// Unknown keys and values of the wrong type are logged and skipped; this
    /// never fails.
    pub fn from_json(value: &Value) -> Self {
        let mut style = PartialStyle::default();
        let Some(map) = value.as_object() else {
            if !value.is_null() {
                warn!("style must be an object, ignoring {value}");
            }
            return style;
        };

        for (name, raw) in map {
            if let Some(group) = SideGroup::from_name(name) {
                let Some(sides) = raw.as_object() else {
                    warn!("style group {name} must be an object of sides");
                    continue;
                };
                for (side, raw) in sides {
                    match StyleKey::from_group(group, side) {
                        Some(key) => style.insert_raw(key, raw),
                        None => warn!("{}", StyleError::Unknown(format!("{name}.{side}"))),
                    }
                }
                continue;
            }

            match StyleKey::from_name(name) {
                Some(key) => style.insert_raw(key, raw),
                None => warn!(
                    "{}. Please take a look at the documentation to see the complete set.",
                    StyleError::Unknown(name.clone())
                ),
            }
        }
        style
    }

    fn insert_raw(&mut self, key: StyleKey, raw: &Value) {
        match parse_raw(key, raw) {
            Ok(value) => self.insert(key, value),
            Err(err) => warn!("{err}"),
        }
    }
}

fn parse_raw(key: StyleKey, raw: &Value) -> Result<StyleValue, StyleError> {
    match key {
        StyleKey::Position | StyleKey::Align => match raw.as_str() {
            Some(name) => schema::parse_named(key, name),
            None => Err(StyleError::WrongType {
                key,
                expected: "string",
            }),
        },
        StyleKey::Background => parse_background(key, raw).map(StyleValue::Background),
        _ => raw
            .as_f64()
            .map(|v| StyleValue::Number(v as f32))
            .ok_or(StyleError::WrongType {
                key,
                expected: "number",
            }),
    }
}

fn parse_background(key: StyleKey, raw: &Value) -> Result<Option<Background>, StyleError> {
    let wrong_type = || StyleError::WrongType {
        key,
        expected: "colour, texture or material",
    };
    match raw {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .map(|v| Some(Background::Color(Color(v))))
            .ok_or_else(wrong_type),
        Value::String(s) => s
            .parse::<Color>()
            .map(|c| Some(Background::Color(c)))
            .map_err(|_| wrong_type()),
        Value::Object(_) => serde_json::from_value::<Background>(raw.clone())
            .map(Some)
            .map_err(|_| wrong_type()),
        _ => Err(wrong_type()),
    }
}

/// Complete, validated style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Style {
    /// Width fraction of the allotted box.
    pub width: f32,
    /// Height fraction of the allotted box.
    pub height: f32,
    /// Depth fraction.
    pub depth: f32,
    /// `height / width` ratio.
    pub aspect_ratio: Option<f32>,
    /// Padding fractions.
    pub padding: Sides,
    /// Margin fractions.
    pub margin: Sides,
    /// Horizontal placement.
    pub position: Position,
    /// Vertical placement.
    pub align: Align,
    /// Background visual, if any.
    pub background: Option<Background>,
    #[serde(skip)]
    explicit: StyleKeys,
}

impl Default for Style {
    /// Schema defaults: full box, no padding or margin, top-left placement.
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 0.0,
            aspect_ratio: None,
            padding: Sides::ZERO,
            margin: Sides::ZERO,
            position: Position::Left,
            align: Align::Top,
            background: None,
            explicit: StyleKeys::empty(),
        }
    }
}

impl Style {
    /// Keys that were explicitly supplied and accepted.
    pub fn explicit(&self) -> StyleKeys {
        self.explicit
    }

    /// Whether `key` was explicitly supplied (as opposed to defaulted).
    pub fn is_explicit(&self, key: StyleKey) -> bool {
        self.explicit.contains(key.bit())
    }

    /// True when exactly one of width/height was supplied alongside an
    /// aspect ratio, so the other can be derived.
    pub fn derives_from_aspect(&self) -> bool {
        self.aspect_ratio.is_some()
            && self.is_explicit(StyleKey::Width) != self.is_explicit(StyleKey::Height)
    }

    fn apply(&mut self, key: StyleKey, value: StyleValue) {
        match (key, value) {
            (StyleKey::Width, StyleValue::Number(v)) => self.width = v,
            (StyleKey::Height, StyleValue::Number(v)) => self.height = v,
            (StyleKey::Depth, StyleValue::Number(v)) => self.depth = v,
            (StyleKey::AspectRatio, StyleValue::Number(v)) => self.aspect_ratio = Some(v),
            (StyleKey::PaddingTop, StyleValue::Number(v)) => self.padding.top = v,
            (StyleKey::PaddingBottom, StyleValue::Number(v)) => self.padding.bottom = v,
            (StyleKey::PaddingLeft, StyleValue::Number(v)) => self.padding.left = v,
            (StyleKey::PaddingRight, StyleValue::Number(v)) => self.padding.right = v,
            (StyleKey::MarginTop, StyleValue::Number(v)) => self.margin.top = v,
            (StyleKey::MarginBottom, StyleValue::Number(v)) => self.margin.bottom = v,
            (StyleKey::MarginLeft, StyleValue::Number(v)) => self.margin.left = v,
            (StyleKey::MarginRight, StyleValue::Number(v)) => self.margin.right = v,
            (StyleKey::Position, StyleValue::Position(p)) => self.position = p,
            (StyleKey::Align, StyleValue::Align(a)) => self.align = a,
            (StyleKey::Background, StyleValue::Background(b)) => self.background = b,
            // validate() already rejected mismatched kinds
            _ => return,
        }
        self.explicit |= key.bit();
    }
}

/// Validates partial styles field by field and merges them into a base.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleResolver;

impl StyleResolver {
    /// Merge `partial` into `base`.
    ///
    /// Each key runs its schema validator; a rejected key is logged and keeps
    /// the value it has in `base`. Passing `Style::default()` as the base
    /// fills every absent key with its schema default.
    pub fn resolve(partial: &PartialStyle, base: &Style) -> Style {
        let mut style = *base;
        for (key, value) in partial.entries() {
            match schema::validate(key, &value) {
                Ok(()) => style.apply(key, value),
                Err(err) => warn!("{err}"),
            }
        }

        if aspect_ambiguous(partial, &style) {
            warn!(
                "aspectRatio needs exactly one of width/height; falling back to the full allotted box"
            );
        }
        style
    }

    /// Resolve against the schema defaults.
    pub fn resolve_default(partial: &PartialStyle) -> Style {
        Self::resolve(partial, &Style::default())
    }
}

/// Whether `partial` touched a sizing key and left `style` with an aspect
/// ratio it cannot derive from.
fn aspect_ambiguous(partial: &PartialStyle, style: &Style) -> bool {
    let sizing =
        partial.width.is_some() || partial.height.is_some() || partial.aspect_ratio.is_some();
    sizing && style.aspect_ratio.is_some() && !style.derives_from_aspect()
}
