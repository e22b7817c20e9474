//! Shared in-memory event log that element callbacks append to.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use vrui_ui3d::{Element, EventSlot, Page, UiEvent};

use crate::EventRecord;

/// Records every event fired by the named elements it is attached to.
///
/// Clones share the same storage, so a log can be attached to several
/// trees and read from the test afterwards.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Rc<RefCell<Vec<EventRecord>>>,
    tick: Rc<Cell<u64>>,
}

impl EventLog {
    /// Empty log at tick 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register recording callbacks on every named element in the subtree.
    /// Existing callbacks on those elements are replaced.
    pub fn attach(&self, root: &mut Element) {
        root.for_each_mut(&mut |element: &mut Element| {
            if element.name().is_none() {
                return;
            }
            for slot in [EventSlot::HoverEnter, EventSlot::HoverExit, EventSlot::Change] {
                let records = Rc::clone(&self.records);
                let tick = Rc::clone(&self.tick);
                element.set_callback(
                    slot,
                    Box::new(move |element: &Element, event: &UiEvent| {
                        records
                            .borrow_mut()
                            .push(EventRecord::from_event(tick.get(), element, event));
                    }),
                );
            }
        });
    }

    /// Attach to the root of `page`.
    pub fn attach_page(&self, page: &mut Page) {
        self.attach(page.root_mut());
    }

    /// Tick stamped onto subsequent records.
    pub fn set_tick(&self, tick: u64) {
        self.tick.set(tick);
    }

    /// Current tick.
    pub fn tick(&self) -> u64 {
        self.tick.get()
    }

    /// Copy of everything recorded so far.
    pub fn records(&self) -> Vec<EventRecord> {
        self.records.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<EventRecord> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// `(element, event)` pairs in firing order, for compact assertions.
    pub fn sequence(&self) -> Vec<(String, &'static str)> {
        self.records
            .borrow()
            .iter()
            .map(|record| (record.element.clone(), record.event))
            .collect()
    }

    /// Records fired by the element called `name`.
    pub fn for_element(&self, name: &str) -> Vec<EventRecord> {
        self.records
            .borrow()
            .iter()
            .filter(|record| record.element == name)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrui_core::PartialStyle;

    #[test]
    fn attaches_only_to_named_elements() {
        let mut root = Element::vertical(PartialStyle::new()).with_name("root");
        root.add(Element::new(PartialStyle::new())).unwrap();
        root.add(Element::new(PartialStyle::new()).with_name("leaf")).unwrap();

        let log = EventLog::new();
        log.attach(&mut root);
        assert!(root.has_callback(EventSlot::Change));
        assert!(!root.children()[0].has_callback(EventSlot::HoverEnter));
        assert!(root.children()[1].has_callback(EventSlot::HoverExit));
        assert!(log.is_empty());
        assert_eq!(log.tick(), 0);
    }
}
