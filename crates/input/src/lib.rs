#![warn(missing_docs)]
//! Pointer input: turns mouse or tracked-controller state into one UI ray
//! and one [`PointerState`] per tick.

use glam::Vec2;
use tracing::debug;
use vrui_camera::{ndc_from_pixels, Camera, ControllerPose, Ray};
use vrui_ui3d::{PointerState, UIManager, UIRaycastHit};
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Supplies the current pose of a tracked controller.
pub trait PoseSource {
    /// Latest pose, or `None` while tracking is lost.
    fn pose(&self) -> Option<ControllerPose>;
}

impl<F> PoseSource for F
where
    F: Fn() -> Option<ControllerPose>,
{
    fn pose(&self) -> Option<ControllerPose> {
        self()
    }
}

/// Which device produced the ray of the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// Mouse cursor through the camera.
    Mouse,
    /// Tracked controller.
    Controller,
    /// Nothing could produce a ray.
    None,
}

/// Collects pointer input between ticks and dispatches it to a [`UIManager`].
///
/// Both sources start inactive. The mouse wins whenever it is enabled; with
/// the mouse disabled the controller pose is used instead.
pub struct PointerDispatcher {
    camera: Camera,
    viewport: (u32, u32),
    cursor_ndc: Vec2,
    mouse_enabled: bool,
    controller: Option<Box<dyn PoseSource>>,
    pressed: bool,
    previously_pressed: bool,
    last_source: PointerSource,
}

impl std::fmt::Debug for PointerDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerDispatcher")
            .field("viewport", &self.viewport)
            .field("cursor_ndc", &self.cursor_ndc)
            .field("mouse_enabled", &self.mouse_enabled)
            .field("controller", &self.controller.is_some())
            .field("pressed", &self.pressed)
            .field("last_source", &self.last_source)
            .finish()
    }
}

impl PointerDispatcher {
    /// Dispatcher with no active source. The cursor starts in the bottom-left
    /// corner.
    pub fn new(camera: Camera, viewport: (u32, u32)) -> Self {
        let mut dispatcher = Self {
            camera,
            viewport,
            cursor_ndc: Vec2::new(-1.0, -1.0),
            mouse_enabled: false,
            controller: None,
            pressed: false,
            previously_pressed: false,
            last_source: PointerSource::None,
        };
        dispatcher.set_viewport(viewport.0, viewport.1);
        dispatcher
    }

    /// Builder: attach a controller pose source.
    pub fn with_controller(mut self, source: impl PoseSource + 'static) -> Self {
        self.set_controller(source);
        self
    }

    /// Attach or replace the controller pose source.
    pub fn set_controller(&mut self, source: impl PoseSource + 'static) {
        self.controller = Some(Box::new(source));
    }

    /// Attach `source` and make it drive the pointer. A later
    /// [`enable_mouse`](Self::enable_mouse) supersedes it again.
    pub fn enable_controller(&mut self, source: impl PoseSource + 'static) {
        self.set_controller(source);
        self.mouse_enabled = false;
        debug!("controller enabled");
    }

    /// Detach the controller.
    pub fn clear_controller(&mut self) {
        self.controller = None;
    }

    /// Let the mouse drive the pointer again.
    pub fn enable_mouse(&mut self) {
        self.mouse_enabled = true;
    }

    /// Stop using the mouse; the controller takes over if present.
    pub fn disable_mouse(&mut self) {
        self.mouse_enabled = false;
    }

    /// Whether the mouse currently drives the pointer.
    pub fn is_mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    /// Camera used for mouse rays.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access, e.g. to follow the head pose.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Replace the camera, keeping the viewport aspect.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
        self.camera.set_aspect(self.viewport.0, self.viewport.1);
    }

    /// Window size in physical pixels.
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Track a window resize.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.camera.set_aspect(width, height);
    }

    /// Cursor in normalized device coordinates.
    pub fn cursor_ndc(&self) -> Vec2 {
        self.cursor_ndc
    }

    /// Place the cursor directly in normalized device coordinates.
    pub fn set_cursor_ndc(&mut self, ndc: Vec2) {
        self.cursor_ndc = ndc;
    }

    /// Track a cursor move given in window pixels.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_ndc = ndc_from_pixels((x as f32, y as f32), self.viewport);
    }

    /// Track a mouse button. Only the left button drives the pointer.
    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.pressed = state == ElementState::Pressed;
        }
    }

    /// Force the button state, e.g. from a controller trigger.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Whether the button is currently held.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Source of the last dispatched ray.
    pub fn last_source(&self) -> PointerSource {
        self.last_source
    }

    /// Process a window event. Returns whether the dispatcher used it.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x, position.y);
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.on_mouse_button(*button, *state);
                *button == MouseButton::Left
            }
            WindowEvent::Resized(size) => {
                self.set_viewport(size.width, size.height);
                true
            }
            _ => false,
        }
    }

    /// Ray the next tick would dispatch, with the device producing it.
    pub fn current_ray(&self) -> Option<(PointerSource, Ray)> {
        if self.mouse_enabled {
            return Some((PointerSource::Mouse, self.camera.ray_from_ndc(self.cursor_ndc)));
        }
        let pose = self.controller.as_ref()?.pose()?;
        Some((PointerSource::Controller, pose.ray()))
    }

    /// Dispatch one tick to `ui`.
    ///
    /// Without any ray source the current page loses hover and press state.
    pub fn update(&mut self, ui: &mut UIManager) -> Option<UIRaycastHit> {
        let state = PointerState::new(self.pressed, self.previously_pressed);
        self.previously_pressed = self.pressed;

        let Some((source, ray)) = self.current_ray() else {
            if self.last_source != PointerSource::None {
                debug!("pointer lost; clearing hover state");
                if let Some(page) = ui.current_page_mut() {
                    page.root_mut().force_exit();
                }
            }
            self.last_source = PointerSource::None;
            return None;
        };

        if source != self.last_source {
            debug!(?source, "pointer source changed");
        }
        self.last_source = source;
        ui.intersect(&ray, &state)
    }
}
