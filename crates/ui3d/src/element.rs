//! Element tree: styled boxes, views and containers.
//!
//! Every node is an [`Element`]. What it does is carried by [`ElementKind`]:
//! a plain leaf, an interactive [`View`] or a [`Layout`] container that owns
//! its children. Layout flows top-down through [`Element::refresh`];
//! pointer interaction flows top-down through [`Element::intersect`].

use std::fmt;

use bitflags::bitflags;
use glam::Vec2;
use serde::Serialize;
use tracing::trace;
use vrui_camera::Ray;
use vrui_core::{
    Background, BoxModel, Color, ConfigError, PartialStyle, Style, StyleKey, StyleResolver, Theme,
};

use crate::components::{
    Checkbox, HoverTint, ImageButton, Slider, TextView, View, VIEW_SURFACE_Z,
};
use crate::event::{Callback, Callbacks, ChangeEvent, ChangeValue, EventSlot, UiEvent};
use crate::interaction::{raycast_quad, PointerState, Rect, UIRaycastHit};
use crate::layout::{Arrangement, GridSpec, Layout};
use crate::surface::Visual;

bitflags! {
    /// Interaction and visibility state of an element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ElementFlags: u8 {
        /// The pointer currently hits the element.
        const HOVERED = 1 << 0;
        /// A press started on the element and has not been released.
        const PRESSED = 1 << 1;
        /// The element takes part in hit-testing.
        const VISIBLE = 1 << 2;
    }
}

/// What an element is.
#[derive(Debug)]
pub enum ElementKind {
    /// Plain styled box.
    Leaf,
    /// Interactive view.
    View(View),
    /// Container owning and placing children.
    Container(Layout),
}

/// Node of the UI tree.
pub struct Element {
    name: Option<String>,
    style: Style,
    dimensions: BoxModel,
    offset: Vec2,
    flags: ElementFlags,
    tint: Option<HoverTint>,
    last_hit: Option<UIRaycastHit>,
    callbacks: Callbacks,
    visual: Option<Box<dyn Visual>>,
    kind: ElementKind,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("style", &self.style)
            .field("dimensions", &self.dimensions)
            .field("offset", &self.offset)
            .field("flags", &self.flags)
            .field("visual", &self.visual.is_some())
            .field("kind", &self.kind)
            .finish()
    }
}

impl Element {
    fn with_kind(kind: ElementKind, style: &PartialStyle) -> Self {
        Self {
            name: None,
            style: StyleResolver::resolve_default(style),
            dimensions: BoxModel::default(),
            offset: Vec2::ZERO,
            flags: ElementFlags::VISIBLE,
            tint: None,
            last_hit: None,
            callbacks: Callbacks::default(),
            visual: None,
            kind,
        }
    }

    fn view(view: View, theme: &Theme, style: &PartialStyle) -> Self {
        let mut element = Self::with_kind(ElementKind::View(view), style);
        if let ElementKind::View(view) = &element.kind {
            if view.tints_on_hover() {
                element.tint = Some(HoverTint::from_theme(theme));
            }
        }
        element
    }

    /// Plain styled leaf.
    pub fn new(style: PartialStyle) -> Self {
        Self::with_kind(ElementKind::Leaf, &style)
    }

    /// Container flowing children left to right.
    pub fn horizontal(style: PartialStyle) -> Self {
        Self::with_kind(
            ElementKind::Container(Layout::new(Arrangement::Horizontal)),
            &style,
        )
    }

    /// Container flowing children top to bottom.
    pub fn vertical(style: PartialStyle) -> Self {
        Self::with_kind(
            ElementKind::Container(Layout::new(Arrangement::Vertical)),
            &style,
        )
    }

    /// Grid container.
    pub fn grid(spec: GridSpec, style: PartialStyle) -> Self {
        Self::with_kind(
            ElementKind::Container(Layout::new(Arrangement::Grid(spec))),
            &style,
        )
    }

    /// Unchecked checkbox.
    pub fn checkbox(theme: &Theme, style: PartialStyle) -> Self {
        Self::view(View::Checkbox(Checkbox::new(theme)), theme, &style)
    }

    /// Slider over `[0, 1]` starting at 0.5.
    pub fn slider(theme: &Theme, style: PartialStyle) -> Self {
        Self::view(View::Slider(Slider::new(theme)), theme, &style)
    }

    /// Image button. `image` must be a texture or a material.
    pub fn image_button(
        image: Background,
        theme: &Theme,
        style: PartialStyle,
    ) -> Result<Self, ConfigError> {
        let button = ImageButton::new(image)?;
        Ok(Self::view(View::ImageButton(button), theme, &style))
    }

    /// Text block.
    pub fn text(text: impl Into<String>, theme: &Theme, style: PartialStyle) -> Self {
        Self::view(View::Text(TextView::new(text, theme)), theme, &style)
    }

    /// Any view with the theme's hover tints.
    pub fn from_view(view: View, theme: &Theme, style: PartialStyle) -> Self {
        Self::view(view, theme, &style)
    }

    /// Builder: name used by lookups and event logs.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: attach the host-side visual. It immediately receives the
    /// current background, visibility and tint.
    pub fn with_visual(mut self, visual: Box<dyn Visual>) -> Self {
        self.set_visual(visual);
        self
    }

    /// Builder: append a child (containers only).
    pub fn with_child(mut self, child: Element) -> Result<Self, ConfigError> {
        self.add(child)?;
        Ok(self)
    }

    /// Attach or replace the host-side visual.
    pub fn set_visual(&mut self, mut visual: Box<dyn Visual>) {
        visual.set_background(self.style.background.as_ref());
        visual.set_visible(self.is_visible());
        if let Some(tint) = self.current_tint() {
            visual.set_tint(tint);
        }
        self.visual = Some(visual);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Box computed by the last refresh.
    pub fn dimensions(&self) -> &BoxModel {
        &self.dimensions
    }

    /// Top-left corner relative to the parent's top-left, +y down.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn flags(&self) -> ElementFlags {
        self.flags
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn is_hovered(&self) -> bool {
        self.flags.contains(ElementFlags::HOVERED)
    }

    pub fn is_pressed(&self) -> bool {
        self.flags.contains(ElementFlags::PRESSED)
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(ElementFlags::VISIBLE)
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, ElementKind::Container(_))
    }

    /// Most recent hit on the element.
    pub fn last_hit(&self) -> Option<UIRaycastHit> {
        self.last_hit
    }

    /// Tint the element's surface should show right now, for views that tint.
    pub fn current_tint(&self) -> Option<Color> {
        self.tint.map(|tint| tint.for_hover(self.is_hovered()))
    }

    /// Lowercase kind name used in snapshots and event logs.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            ElementKind::Leaf => "element",
            ElementKind::View(view) => view.kind_name(),
            ElementKind::Container(layout) => layout.arrangement().kind_name(),
        }
    }

    pub fn as_view(&self) -> Option<&View> {
        match &self.kind {
            ElementKind::View(view) => Some(view),
            _ => None,
        }
    }

    /// Mutable view access. Call [`Element::view_changed`] afterwards so the
    /// visual can catch up.
    pub fn as_view_mut(&mut self) -> Option<&mut View> {
        match &mut self.kind {
            ElementKind::View(view) => Some(view),
            _ => None,
        }
    }

    pub fn layout(&self) -> Option<&Layout> {
        match &self.kind {
            ElementKind::Container(layout) => Some(layout),
            _ => None,
        }
    }

    pub fn layout_mut(&mut self) -> Option<&mut Layout> {
        match &mut self.kind {
            ElementKind::Container(layout) => Some(layout),
            _ => None,
        }
    }

    /// Children in order; empty for leaves and views.
    pub fn children(&self) -> &[Element] {
        self.layout().map(Layout::children).unwrap_or(&[])
    }

    /// Depth-first search by name, including `self`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name() == Some(name) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(name))
    }

    /// Mutable depth-first search by name, including `self`.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Element> {
        if self.name() == Some(name) {
            return Some(self);
        }
        match &mut self.kind {
            ElementKind::Container(layout) => layout
                .children_mut()
                .iter_mut()
                .find_map(|child| child.find_mut(name)),
            _ => None,
        }
    }

    /// Visit `self` and every descendant, parents first.
    pub fn for_each_mut(&mut self, visit: &mut dyn FnMut(&mut Element)) {
        visit(self);
        if let ElementKind::Container(layout) = &mut self.kind {
            for child in layout.children_mut() {
                child.for_each_mut(visit);
            }
        }
    }

    /// Register the hover-enter callback.
    pub fn on_hover_enter(&mut self, callback: impl FnMut(&Element, &UiEvent) + 'static) -> &mut Self {
        self.callbacks.set(EventSlot::HoverEnter, Box::new(callback));
        self
    }

    /// Register the hover-exit callback.
    pub fn on_hover_exit(&mut self, callback: impl FnMut(&Element, &UiEvent) + 'static) -> &mut Self {
        self.callbacks.set(EventSlot::HoverExit, Box::new(callback));
        self
    }

    /// Register the change callback.
    pub fn on_change(&mut self, callback: impl FnMut(&Element, &UiEvent) + 'static) -> &mut Self {
        self.callbacks.set(EventSlot::Change, Box::new(callback));
        self
    }

    /// Register an already boxed callback.
    pub fn set_callback(&mut self, slot: EventSlot, callback: Callback) {
        self.callbacks.set(slot, callback);
    }

    pub fn has_callback(&self, slot: EventSlot) -> bool {
        self.callbacks.is_set(slot)
    }

    /// Merge a partial style. Rejected keys are logged and keep their value.
    /// A background change reaches the visual immediately; sizes apply on
    /// the next refresh.
    pub fn set(&mut self, style: &PartialStyle) {
        self.style = StyleResolver::resolve(style, &self.style);
        if style.touches(StyleKey::Background) {
            if let Some(visual) = self.visual.as_mut() {
                visual.set_background(self.style.background.as_ref());
            }
        }
    }

    /// Show or hide. Hidden elements and their subtrees never hit, so a
    /// hovered element that is hidden exits on the next intersection.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(ElementFlags::VISIBLE, visible);
        if let Some(visual) = self.visual.as_mut() {
            visual.set_visible(visible);
        }
    }

    /// Append a child (containers only). It is laid out on the next refresh.
    pub fn add(&mut self, child: Element) -> Result<&mut Self, ConfigError> {
        match &mut self.kind {
            ElementKind::Container(layout) => {
                layout.push(child);
                Ok(self)
            }
            _ => Err(ConfigError::NotAContainer),
        }
    }

    /// Append several children.
    pub fn add_all(
        &mut self,
        children: impl IntoIterator<Item = Element>,
    ) -> Result<&mut Self, ConfigError> {
        let layout = self.layout_mut().ok_or(ConfigError::NotAContainer)?;
        for child in children {
            layout.push(child);
        }
        Ok(self)
    }

    /// Tell the visual the view state changed outside of dispatch.
    pub fn view_changed(&mut self) {
        if let (Some(visual), ElementKind::View(view)) = (self.visual.as_mut(), &self.kind) {
            visual.view_changed(view);
        }
    }

    /// Recompute this subtree against an allotted box of
    /// `max_width × max_height`. Containers lay out their children.
    pub fn refresh(&mut self, max_width: f32, max_height: f32) {
        self.dimensions = BoxModel::resolve(&self.style, max_width, max_height);
        if let ElementKind::Container(layout) = &mut self.kind {
            layout.arrange(&self.dimensions);
        }
        if let Some(visual) = self.visual.as_mut() {
            visual.resize(&self.dimensions);
        }
    }

    /// Refresh against the box allotted on the last pass. The element's own
    /// offset is left alone.
    pub fn relayout(&mut self) {
        let BoxModel {
            max_width,
            max_height,
            ..
        } = self.dimensions;
        self.refresh(max_width, max_height);
    }

    pub(crate) fn place(&mut self, offset: Vec2) {
        self.offset = offset;
        if let Some(visual) = self.visual.as_mut() {
            visual.move_to(offset);
        }
    }

    /// Page-plane top-left of this element given its parent's.
    pub fn top_left(&self, parent_top_left: Vec2) -> Vec2 {
        parent_top_left + Vec2::new(self.offset.x, -self.offset.y)
    }

    /// Padded content rectangle in page-plane coordinates.
    pub fn content_rect(&self, top_left: Vec2) -> Rect {
        let padding = self.dimensions.padding;
        Rect::from_top_left(
            top_left + Vec2::new(padding.left, -padding.top),
            self.dimensions.content_width(),
            self.dimensions.content_height(),
        )
    }

    /// Hit surface and its depth in page-plane coordinates.
    pub fn surface(&self, top_left: Vec2) -> (Rect, f32) {
        match &self.kind {
            ElementKind::View(view) => (view.surface(self.content_rect(top_left)), VIEW_SURFACE_Z),
            _ => (
                Rect::from_top_left(top_left, self.dimensions.width, self.dimensions.height),
                0.0,
            ),
        }
    }

    /// Hit-test `ray` (page-local) against this subtree and update hover,
    /// press and view state, firing callbacks on the way.
    ///
    /// `parent_top_left` is the parent's top-left in page-plane
    /// coordinates. Returns the hit on this element's own surface.
    pub fn intersect(
        &mut self,
        ray: &Ray,
        parent_top_left: Vec2,
        state: &PointerState,
    ) -> Option<UIRaycastHit> {
        let top_left = self.top_left(parent_top_left);
        let hit = if self.is_visible() {
            let (rect, depth) = self.surface(top_left);
            raycast_quad(ray, &rect, depth)
        } else {
            None
        };

        if self.is_container() {
            self.update_hover(hit);
            if hit.is_some() {
                if let ElementKind::Container(layout) = &mut self.kind {
                    for child in layout.children_mut() {
                        if child.intersect(ray, top_left, state).is_none() {
                            child.force_exit();
                        }
                    }
                }
            }
        } else {
            self.update_leaf(hit, state);
        }
        hit
    }

    /// Clear hover and press without firing the element's own callbacks.
    ///
    /// A hovered container clears its subtree first; hovered child
    /// containers announce their exit, leaves are cleared silently.
    pub fn force_exit(&mut self) {
        if self.is_container() {
            if !self.is_hovered() {
                return;
            }
            self.exit_children();
            self.flags.remove(ElementFlags::HOVERED);
        } else {
            let was_hovered = self.is_hovered();
            self.flags.remove(ElementFlags::HOVERED | ElementFlags::PRESSED);
            if was_hovered {
                self.apply_tint();
            }
        }
    }

    fn exit_children(&mut self) {
        if let ElementKind::Container(layout) = &mut self.kind {
            for child in layout.children_mut() {
                let announce = child.is_container() && child.is_hovered();
                child.force_exit();
                if announce {
                    let last_hit = child.last_hit;
                    child.emit(EventSlot::HoverExit, UiEvent::HoverExit { last_hit });
                }
            }
        }
    }

    fn update_hover(&mut self, hit: Option<UIRaycastHit>) {
        match (hit, self.is_hovered()) {
            (Some(hit), false) => {
                self.flags.insert(ElementFlags::HOVERED);
                self.last_hit = Some(hit);
                self.apply_tint();
                self.emit(EventSlot::HoverEnter, UiEvent::HoverEnter { hit });
            }
            (None, true) => {
                if self.is_container() {
                    self.exit_children();
                }
                self.flags.remove(ElementFlags::HOVERED);
                self.apply_tint();
                let last_hit = self.last_hit;
                self.emit(EventSlot::HoverExit, UiEvent::HoverExit { last_hit });
            }
            (Some(hit), true) => self.last_hit = Some(hit),
            (None, false) => {}
        }
    }

    fn update_leaf(&mut self, hit: Option<UIRaycastHit>, state: &PointerState) {
        // Release applies wherever the pointer is now.
        if self.is_pressed() && !state.pressed {
            self.flags.remove(ElementFlags::PRESSED);
            let value = match &mut self.kind {
                ElementKind::View(view) => view.release(hit.is_some()),
                _ => ChangeValue::None,
            };
            self.view_changed();
            let event = ChangeEvent {
                pressed: false,
                hit: hit.or(self.last_hit),
                value,
            };
            self.emit(EventSlot::Change, UiEvent::Change(event));
        }

        self.update_hover(hit);

        let Some(hit) = hit else {
            return;
        };
        if state.just_pressed() && !self.is_pressed() {
            self.flags.insert(ElementFlags::PRESSED);
            let value = match &mut self.kind {
                ElementKind::View(view) => view.press(&hit),
                _ => ChangeValue::None,
            };
            self.view_changed();
            let event = ChangeEvent {
                pressed: true,
                hit: Some(hit),
                value,
            };
            self.emit(EventSlot::Change, UiEvent::Change(event));
        } else if self.is_pressed() && state.pressed {
            let moved = match &mut self.kind {
                ElementKind::View(view) => view.drag(&hit),
                _ => None,
            };
            if let Some(value) = moved {
                self.view_changed();
                let event = ChangeEvent {
                    pressed: true,
                    hit: Some(hit),
                    value,
                };
                self.emit(EventSlot::Change, UiEvent::Change(event));
            }
        }
    }

    fn apply_tint(&mut self) {
        let Some(tint) = self.current_tint() else {
            return;
        };
        if let Some(visual) = self.visual.as_mut() {
            visual.set_tint(tint);
        }
    }

    fn emit(&mut self, slot: EventSlot, event: UiEvent) {
        trace!(element = ?self.name, event = event.name(), "ui event");
        let Some(mut callback) = self.callbacks.take(slot) else {
            return;
        };
        callback(&*self, &event);
        self.callbacks.restore(slot, callback);
    }

    /// Serializable view of the subtree's layout and interaction state.
    pub fn snapshot(&self) -> ElementSnapshot {
        ElementSnapshot {
            name: self.name.clone(),
            kind: self.kind_name(),
            offset: [self.offset.x, self.offset.y],
            width: self.dimensions.width,
            height: self.dimensions.height,
            hovered: self.is_hovered(),
            pressed: self.is_pressed(),
            visible: self.is_visible(),
            value: self.as_view().map(View::current_value).and_then(|value| match value {
                ChangeValue::None => None,
                ChangeValue::Checked(checked) => Some(f32::from(u8::from(checked))),
                ChangeValue::Slider(value) => Some(value),
            }),
            children: self.children().iter().map(Element::snapshot).collect(),
        }
    }
}

/// Layout and interaction state of one element, for inspection tools.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: &'static str,
    pub offset: [f32; 2],
    pub width: f32,
    pub height: f32,
    pub hovered: bool,
    pub pressed: bool,
    pub visible: bool,
    /// Checkbox state as 0/1 or slider value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
}
