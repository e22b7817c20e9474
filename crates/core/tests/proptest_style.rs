//! Property-based tests for style resolution
//!
//! Validates resolver invariants:
//! - Padding and margin sides outside [0, 0.49] are rejected and stay at 0.0
//! - Accepted sides are stored verbatim
//! - Resolution never panics for arbitrary numeric input

use proptest::prelude::*;
use vrui_core::{PartialSides, PartialStyle, Style, StyleKey, StyleResolver};

fn side_value() -> impl Strategy<Value = f32> {
    prop_oneof![
        -10.0f32..10.0,
        0.0f32..=0.49,
        Just(f32::NAN),
        Just(f32::INFINITY),
        Just(0.49),
        Just(0.5),
    ]
}

proptest! {
    /// Property: each padding/margin side is either accepted as-is or reverts to 0.0
    #[test]
    fn sides_outside_range_revert_to_zero(
        top in side_value(),
        bottom in side_value(),
        left in side_value(),
        right in side_value(),
    ) {
        let sides = PartialSides {
            top: Some(top),
            bottom: Some(bottom),
            left: Some(left),
            right: Some(right),
        };
        let style = StyleResolver::resolve_default(
            &PartialStyle::new().with_padding(sides).with_margin(sides),
        );

        let expect = |v: f32| if (0.0..=0.49).contains(&v) { v } else { 0.0 };
        for (actual, input) in [
            (style.padding.top, top),
            (style.padding.bottom, bottom),
            (style.padding.left, left),
            (style.padding.right, right),
            (style.margin.top, top),
            (style.margin.bottom, bottom),
            (style.margin.left, left),
            (style.margin.right, right),
        ] {
            prop_assert_eq!(actual, expect(input));
        }
    }

    /// Property: width/height keep the base value when rejected
    #[test]
    fn rejected_dimensions_keep_base(width in -200.0f32..200.0, height in -200.0f32..200.0) {
        let style = StyleResolver::resolve_default(&PartialStyle::new().with_size(width, height));
        let accepted = |v: f32| v > 0.0 && v <= 100.0;

        prop_assert_eq!(style.width, if accepted(width) { width } else { 1.0 });
        prop_assert_eq!(style.height, if accepted(height) { height } else { 1.0 });
        prop_assert_eq!(style.is_explicit(StyleKey::Width), accepted(width));
        prop_assert_eq!(style.is_explicit(StyleKey::Height), accepted(height));
    }
}

#[test]
fn default_style_matches_schema_defaults() {
    let style = Style::default();
    assert_eq!(style.width, 1.0);
    assert_eq!(style.height, 1.0);
    assert_eq!(style.depth, 0.0);
    assert_eq!(style.padding.vertical(), 0.0);
    assert_eq!(style.margin.horizontal(), 0.0);
}
