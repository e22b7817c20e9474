//! Events fired at element callbacks during pointer dispatch.

use crate::element::Element;
use crate::interaction::UIRaycastHit;

/// Value carried by a change event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeValue {
    /// Plain press/release with no view state.
    None,
    /// Checkbox state after the event.
    Checked(bool),
    /// Slider value after the event.
    Slider(f32),
}

/// Press, release or value change of a leaf element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeEvent {
    /// `true` for press and drag events, `false` for the release.
    pub pressed: bool,
    /// Hit that caused the event. A release away from the element reports
    /// the last hit seen on it.
    pub hit: Option<UIRaycastHit>,
    /// View state after the event.
    pub value: ChangeValue,
}

/// Event delivered to element callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// The pointer started hitting the element.
    HoverEnter {
        /// First hit on the element.
        hit: UIRaycastHit,
    },
    /// The pointer stopped hitting the element.
    HoverExit {
        /// Last hit seen on the element, if any.
        last_hit: Option<UIRaycastHit>,
    },
    /// Press state or value changed.
    Change(ChangeEvent),
}

impl UiEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::HoverEnter { .. } => "hover_enter",
            UiEvent::HoverExit { .. } => "hover_exit",
            UiEvent::Change(_) => "change",
        }
    }
}

/// Callback invoked with the element that fired and the event.
///
/// The element is borrowed immutably, so a callback can read the tree
/// state of the firing element but cannot restructure it mid-dispatch.
pub type Callback = Box<dyn FnMut(&Element, &UiEvent)>;

/// Callback slot on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSlot {
    /// `on_hover_enter`
    HoverEnter,
    /// `on_hover_exit`
    HoverExit,
    /// `on_change`
    Change,
}

#[derive(Default)]
pub(crate) struct Callbacks {
    hover_enter: Option<Callback>,
    hover_exit: Option<Callback>,
    change: Option<Callback>,
}

impl Callbacks {
    fn slot(&mut self, slot: EventSlot) -> &mut Option<Callback> {
        match slot {
            EventSlot::HoverEnter => &mut self.hover_enter,
            EventSlot::HoverExit => &mut self.hover_exit,
            EventSlot::Change => &mut self.change,
        }
    }

    pub(crate) fn set(&mut self, slot: EventSlot, callback: Callback) {
        *self.slot(slot) = Some(callback);
    }

    pub(crate) fn take(&mut self, slot: EventSlot) -> Option<Callback> {
        self.slot(slot).take()
    }

    /// Put a callback back unless the slot was refilled meanwhile.
    pub(crate) fn restore(&mut self, slot: EventSlot, callback: Callback) {
        let entry = self.slot(slot);
        if entry.is_none() {
            *entry = Some(callback);
        }
    }

    pub(crate) fn is_set(&self, slot: EventSlot) -> bool {
        match slot {
            EventSlot::HoverEnter => self.hover_enter.is_some(),
            EventSlot::HoverExit => self.hover_exit.is_some(),
            EventSlot::Change => self.change.is_some(),
        }
    }
}
