#![warn(missing_docs)]
//! Style resolution, box model and theme primitives shared across the workspace.

pub mod dimensions;
pub mod error;
pub mod schema;
pub mod style;
pub mod theme;

// Re-export commonly used types
pub use dimensions::BoxModel;
pub use error::{ConfigError, StyleError};
pub use schema::{validate, SideGroup, StyleKey, StyleKeys, StyleValue, Validator};
pub use style::{Align, PartialSides, PartialStyle, Position, Sides, Style, StyleResolver};
pub use theme::{Background, Color, MaterialId, Theme, TextureId};
