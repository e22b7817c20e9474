//! End-to-end pointer scenarios on a 1×1 page centred at the origin.
//!
//! Page-plane coordinates: x in [-0.5, 0.5] left to right, y in
//! [-0.5, 0.5] bottom to top.

use vrui_core::{PartialStyle, Theme};
use vrui_testkit::{run_script, EventLog, PointerStep};
use vrui_ui3d::{Element, GridSpec, UIManager};

fn manager_with(root: Element) -> (UIManager, EventLog) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut manager = UIManager::new(1.0, 1.0).expect("valid page size");
    manager.add_page(root).expect("page added");
    let log = EventLog::new();
    if let Some(page) = manager.current_page_mut() {
        log.attach_page(page);
    }
    (manager, log)
}

/// root (vertical)
/// ├── row (horizontal, top half)
/// │   ├── a (left)
/// │   └── b (right)
/// └── footer (bottom half)
fn nested_tree() -> Element {
    let mut row = Element::horizontal(PartialStyle::new().with_height(0.5)).with_name("row");
    row.add(Element::new(PartialStyle::new().with_width(0.5)).with_name("a"))
        .unwrap();
    row.add(Element::new(PartialStyle::new().with_width(0.5)).with_name("b"))
        .unwrap();

    let mut root = Element::vertical(PartialStyle::new()).with_name("root");
    root.add(row).unwrap();
    root.add(Element::new(PartialStyle::new().with_height(0.5)).with_name("footer"))
        .unwrap();
    root
}

fn pairs(names: &[(&str, &'static str)]) -> Vec<(String, &'static str)> {
    names
        .iter()
        .map(|(name, event)| (name.to_string(), *event))
        .collect()
}

#[test]
fn nested_hover_walks_the_tree() {
    let (mut manager, log) = manager_with(nested_tree());
    let frames = run_script(
        &mut manager,
        &log,
        &[
            PointerStep::hover(-0.25, 0.25),
            PointerStep::hover(0.25, 0.25),
            PointerStep::hover(0.25, -0.25),
            PointerStep::hover(2.0, 0.0),
        ],
    );

    let sequence = |tick: usize| -> Vec<(String, &'static str)> {
        frames[tick]
            .events
            .iter()
            .map(|record| (record.element.clone(), record.event))
            .collect()
    };

    assert_eq!(
        sequence(0),
        pairs(&[
            ("root", "hover_enter"),
            ("row", "hover_enter"),
            ("a", "hover_enter"),
        ])
    );
    assert_eq!(sequence(1), pairs(&[("a", "hover_exit"), ("b", "hover_enter")]));
    // Leaving the row clears its leaves silently before the row's own exit.
    assert_eq!(sequence(2), pairs(&[("row", "hover_exit"), ("footer", "hover_enter")]));
    assert_eq!(sequence(3), pairs(&[("root", "hover_exit")]));

    let root = manager.pages()[0].root();
    let mut stack = vec![root];
    while let Some(element) = stack.pop() {
        assert!(!element.is_hovered(), "{:?} still hovered", element.name());
        stack.extend(element.children());
    }
}

#[test]
fn identical_rays_enter_once() {
    let (mut manager, log) = manager_with(nested_tree());
    run_script(
        &mut manager,
        &log,
        &[PointerStep::hover(-0.25, 0.25), PointerStep::hover(-0.25, 0.25)],
    );
    let enters = log
        .for_element("a")
        .into_iter()
        .filter(|record| record.event == "hover_enter")
        .count();
    assert_eq!(enters, 1);
}

#[test]
fn force_exit_announces_hovered_child_containers() {
    let (mut manager, log) = manager_with(nested_tree());
    run_script(&mut manager, &log, &[PointerStep::hover(-0.25, 0.25)]);
    log.take();

    let page = manager.current_page_mut().unwrap();
    page.root_mut().force_exit();
    assert_eq!(log.sequence(), pairs(&[("row", "hover_exit")]));
    assert!(!page.root().is_hovered());
    assert!(page.find("a").map(|a| !a.is_hovered()).unwrap_or(false));
}

#[test]
fn checkbox_toggles_on_release_over_it() {
    let theme = Theme::default();
    let mut root = Element::vertical(PartialStyle::new()).with_name("root");
    root.add(Element::checkbox(&theme, PartialStyle::new().with_height(0.5)).with_name("check"))
        .unwrap();
    let (mut manager, log) = manager_with(root);

    run_script(
        &mut manager,
        &log,
        &[
            PointerStep::press(0.0, 0.25),
            PointerStep::press(0.0, 0.25),
            PointerStep::hover(0.0, 0.25),
        ],
    );

    let changes: Vec<_> = log
        .records()
        .into_iter()
        .filter(|record| record.element == "check" && record.event == "change")
        .map(|record| (record.pressed, record.checked))
        .collect();
    assert_eq!(
        changes,
        vec![(Some(true), Some(false)), (Some(false), Some(true))]
    );
}

#[test]
fn slider_follows_drag_and_drops_press_off_track() {
    let theme = Theme::default();
    let mut root = Element::vertical(PartialStyle::new());
    root.add(Element::slider(&theme, PartialStyle::new()).with_name("volume"))
        .unwrap();
    let (mut manager, log) = manager_with(root);

    run_script(
        &mut manager,
        &log,
        &[
            PointerStep::press(-0.25, 0.0),
            PointerStep::press(0.25, 0.0),
            // Above the track but still on the page: the parent clears the press
            PointerStep::press(0.4, 0.4),
            PointerStep::hover(0.4, 0.4),
        ],
    );

    let changes: Vec<_> = log
        .for_element("volume")
        .into_iter()
        .filter(|record| record.event == "change")
        .collect();
    assert_eq!(changes.len(), 2);
    assert!((changes[0].value.unwrap() - 0.25).abs() < 1e-5);
    assert!((changes[1].value.unwrap() - 0.75).abs() < 1e-5);

    let slider = manager.pages()[0].find("volume").unwrap();
    assert!(!slider.is_pressed());
    assert!(!slider.is_hovered());
}

#[test]
fn release_off_a_leaf_page_still_reports() {
    let (mut manager, log) = manager_with(Element::new(PartialStyle::new()).with_name("root"));
    run_script(
        &mut manager,
        &log,
        &[PointerStep::press(0.0, 0.0), PointerStep::hover(3.0, 0.0)],
    );
    let release = log
        .for_element("root")
        .into_iter()
        .find(|record| record.event == "change" && record.pressed == Some(false))
        .expect("release reported");
    // Reported with the last hit seen on the element
    assert_eq!(release.uv, Some([0.5, 0.5]));
}

#[test]
fn switching_pages_clears_the_page_left_behind() {
    let mut manager = UIManager::new(1.0, 1.0).unwrap();
    manager.add_page(nested_tree()).unwrap();
    manager
        .add_page(Element::new(PartialStyle::new()).with_name("second"))
        .unwrap();
    let log = EventLog::new();
    for index in 0..manager.page_count() {
        if let Some(page) = manager.page_mut(index) {
            log.attach_page(page);
        }
    }

    run_script(&mut manager, &log, &[PointerStep::hover(-0.25, 0.25)]);
    assert!(manager.pages()[0].root().is_hovered());
    log.take();

    assert_eq!(manager.next_page(), Some(1));
    assert!(!manager.pages()[0].root().is_hovered());
    assert_eq!(log.sequence(), pairs(&[("row", "hover_exit")]));
    log.take();

    let frames = run_script(&mut manager, &log, &[PointerStep::hover(-0.25, 0.25)]);
    assert_eq!(frames[0].events.len(), 1);
    assert_eq!(frames[0].events[0].element, "second");
}

#[test]
fn half_page_element_box() {
    let mut manager = UIManager::new(0.5, 0.5).unwrap();
    let mut root = Element::vertical(PartialStyle::new());
    root.add(Element::new(PartialStyle::new().with_size(0.5, 0.25)).with_name("box"))
        .unwrap();
    manager.add_page(root).unwrap();

    let element = manager.pages()[0].find("box").unwrap();
    assert!((element.dimensions().width - 0.25).abs() < 1e-6);
    assert!((element.dimensions().height - 0.125).abs() < 1e-6);
}

#[test]
fn five_fifths_fill_a_row() {
    let mut row = Element::horizontal(PartialStyle::new());
    for _ in 0..5 {
        row.add(Element::new(PartialStyle::new().with_width(0.2))).unwrap();
    }
    row.refresh(2.0, 1.0);

    assert!(row.layout().unwrap().is_full());
    let total: f32 = row.children().iter().map(|c| c.dimensions().width).sum();
    assert!((total - row.dimensions().width).abs() < 1e-5);
    let last = row.children().last().unwrap();
    assert!((last.offset().x + last.dimensions().width - 2.0).abs() < 1e-5);
}

#[test]
fn grid_fullness_tracks_removal() {
    let mut grid = Element::grid(GridSpec::new(3, 5).unwrap(), PartialStyle::new());
    for i in 0..15 {
        grid.add(Element::new(PartialStyle::new()).with_name(format!("cell{i}")))
            .unwrap();
    }
    assert!(grid.layout().unwrap().is_full());

    let layout = grid.layout_mut().unwrap();
    assert!(layout.remove_named("cell7").is_some());
    assert!(!layout.is_full());
    layout.push(Element::new(PartialStyle::new()));
    assert!(layout.is_full());
    layout.clear();
    assert!(!layout.is_full());
}
