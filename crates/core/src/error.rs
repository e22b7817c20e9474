//! Configuration and style errors.

use thiserror::Error;

use crate::schema::StyleKey;

/// Fatal configuration errors, returned by the call that caused them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A grid layout was built without a row or column count.
    #[error("grid layout requires non-zero rows and columns (got {rows}x{columns})")]
    MissingGridDimension {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        columns: u32,
    },
    /// Grid gutter fraction outside `[0, 1)`.
    #[error("grid spacing {value} must be a fraction in [0, 1)")]
    InvalidGridSpacing {
        /// Offending spacing value.
        value: f32,
    },
    /// Page or UI budget that is not a positive, finite number of world units.
    #[error("page {axis} must be a positive number of world units (got {value})")]
    InvalidPageDimension {
        /// `"width"`, `"height"` or `"depth"`.
        axis: &'static str,
        /// Offending value.
        value: f32,
    },
    /// `add` was called on an element that cannot own children.
    #[error("element does not accept children")]
    NotAContainer,
    /// Image buttons need a texture or a material, not a flat colour.
    #[error("image button requires a texture or a material")]
    InvalidImage,
    /// Slider bounds where `min >= max`.
    #[error("slider bounds must satisfy min < max (got [{min}, {max}])")]
    InvalidSliderBounds {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
}

/// Non-fatal style rejection. Logged and recovered locally by keeping the
/// previous value of the key.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// Numeric value outside the key's range.
    #[error("element property {key} should be in the range {range} (got {value})")]
    OutOfRange {
        /// Rejected key.
        key: StyleKey,
        /// Human-readable range, e.g. `[0, 0.49]`.
        range: String,
        /// Rejected value.
        value: f32,
    },
    /// Enumerated value not in the allowed list.
    #[error("element property {key} should have one of the following values: {allowed} (got {value:?})")]
    NotInList {
        /// Rejected key.
        key: StyleKey,
        /// Comma-separated allowed values.
        allowed: String,
        /// Rejected value.
        value: String,
    },
    /// Value of the wrong type for the key.
    #[error("element property {key} does not have the right type (expected {expected})")]
    WrongType {
        /// Rejected key.
        key: StyleKey,
        /// Expected type name.
        expected: &'static str,
    },
    /// Property name not present in the schema.
    #[error("property {0} is not recognized")]
    Unknown(String),
}
