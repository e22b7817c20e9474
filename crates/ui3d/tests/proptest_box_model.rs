//! Property-based tests for box resolution and pointer state
//!
//! Validates tree invariants:
//! - Resolved width and height are the style fractions of the allotted box
//! - Grid fullness follows the child count through adds and removals
//! - A miss after any pointer sequence leaves nothing hovered or pressed
//! - At most one leaf is pressed at a time

use proptest::prelude::*;
use vrui_camera::Ray;
use vrui_core::PartialStyle;
use vrui_ui3d::{Element, GridSpec, PointerState, UIManager};

fn tree() -> Element {
    let mut row = Element::horizontal(PartialStyle::new().with_height(0.5)).with_name("row");
    for name in ["a", "b"] {
        row.add(Element::new(PartialStyle::new().with_width(0.5)).with_name(name))
            .unwrap();
    }
    let mut root = Element::vertical(PartialStyle::new()).with_name("root");
    root.add(row).unwrap();
    root.add(Element::new(PartialStyle::new().with_height(0.5)).with_name("footer"))
        .unwrap();
    root
}

fn walk<'a>(root: &'a Element, visit: &mut dyn FnMut(&'a Element)) {
    visit(root);
    for child in root.children() {
        walk(child, visit);
    }
}

fn ray_at(x: f32, y: f32) -> Ray {
    Ray::new(glam::Vec3::new(x, y, 1.0), glam::Vec3::NEG_Z)
}

/// Cell centres on a 0.1 lattice, so no target lands on a shared edge.
fn coordinate() -> impl Strategy<Value = f32> {
    (-8i32..8).prop_map(|i| i as f32 * 0.1 + 0.05)
}

fn pointer_step() -> impl Strategy<Value = (f32, f32, bool)> {
    (coordinate(), coordinate(), any::<bool>())
}

#[derive(Debug, Clone)]
enum GridOp {
    Add,
    Remove(usize),
    Clear,
}

fn grid_op() -> impl Strategy<Value = GridOp> {
    prop_oneof![
        4 => Just(GridOp::Add),
        2 => (0usize..20).prop_map(GridOp::Remove),
        1 => Just(GridOp::Clear),
    ]
}

proptest! {
    /// Property: resolved size is the style fraction of the allotted box
    #[test]
    fn size_is_fraction_of_allotted_box(
        width in 0.01f32..=1.0,
        height in 0.01f32..=1.0,
        max_width in 0.1f32..100.0,
        max_height in 0.1f32..100.0,
    ) {
        let mut element = Element::new(PartialStyle::new().with_size(width, height));
        element.refresh(max_width, max_height);

        let dims = element.dimensions();
        prop_assert!((dims.width - width * max_width).abs() <= 1e-4 * max_width);
        prop_assert!((dims.height - height * max_height).abs() <= 1e-4 * max_height);
        prop_assert_eq!(dims.half_width, dims.width / 2.0);
        prop_assert_eq!(dims.max_width, max_width);
    }

    /// Property: a grid is full exactly when it holds rows × columns children
    #[test]
    fn grid_full_iff_at_capacity(
        rows in 1u32..5,
        columns in 1u32..5,
        ops in prop::collection::vec(grid_op(), 0..40),
    ) {
        let spec = GridSpec::new(rows, columns).unwrap();
        let mut grid = Element::grid(spec, PartialStyle::new());
        let layout = grid.layout_mut().unwrap();

        for op in ops {
            match op {
                GridOp::Add => layout.push(Element::new(PartialStyle::new())),
                GridOp::Remove(index) => {
                    let had = index < layout.len();
                    prop_assert_eq!(layout.remove(index).is_some(), had);
                }
                GridOp::Clear => layout.clear(),
            }
            prop_assert_eq!(layout.is_full(), layout.len() == (rows * columns) as usize);
        }
    }

    /// Property: after any pointer sequence, a miss clears every flag
    #[test]
    fn miss_clears_hover_and_press(steps in prop::collection::vec(pointer_step(), 1..30)) {
        let mut manager = UIManager::new(1.0, 1.0).unwrap();
        manager.add_page(tree()).unwrap();

        let mut previously_pressed = false;
        for (x, y, pressed) in steps {
            let state = PointerState::new(pressed, previously_pressed);
            previously_pressed = pressed;
            manager.intersect(&ray_at(x, y), &state);
        }
        let state = PointerState::new(false, previously_pressed);
        prop_assert!(manager.intersect(&ray_at(5.0, 5.0), &state).is_none());

        let mut dirty = Vec::new();
        walk(manager.pages()[0].root(), &mut |element| {
            if element.is_hovered() || element.is_pressed() {
                dirty.push(element.name().map(str::to_owned));
            }
        });
        prop_assert!(dirty.is_empty(), "still flagged: {:?}", dirty);
    }

    /// Property: no two leaves are ever pressed together
    #[test]
    fn at_most_one_pressed_leaf(steps in prop::collection::vec(pointer_step(), 1..30)) {
        let mut manager = UIManager::new(1.0, 1.0).unwrap();
        manager.add_page(tree()).unwrap();

        let mut previously_pressed = false;
        for (x, y, pressed) in steps {
            let state = PointerState::new(pressed, previously_pressed);
            previously_pressed = pressed;
            manager.intersect(&ray_at(x, y), &state);

            let mut pressed_leaves = 0;
            walk(manager.pages()[0].root(), &mut |element| {
                if !element.is_container() && element.is_pressed() {
                    pressed_leaves += 1;
                }
            });
            prop_assert!(pressed_leaves <= 1);
        }
    }
}
