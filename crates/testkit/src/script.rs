//! Scripted pointer runs for deterministic, tick-based UI tests.
//!
//! A script is a list of steps, one per tick: where on the page plane the
//! pointer aims and whether the button is held. Running it drives a
//! [`UIManager`] exactly like a pointer dispatcher would and collects the
//! events each tick produced.

use glam::{Vec2, Vec3};
use serde::Serialize;
use tracing::trace;
use vrui_camera::Ray;
use vrui_ui3d::{PointerState, UIManager, UIRaycastHit};

use crate::{EventLog, EventRecord};

/// Ray starting one unit in front of an untransformed page plane and
/// pointing straight at `point`.
pub fn ray_toward(point: Vec2) -> Ray {
    Ray::new(point.extend(1.0), Vec3::NEG_Z)
}

/// Ray from `origin` through `target`.
pub fn ray_from(origin: Vec3, target: Vec3) -> Ray {
    Ray::new(origin, target - origin)
}

/// One tick of a pointer script.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointerStep {
    /// Page-plane point the pointer aims at.
    pub target: [f32; 2],
    /// Whether the button is held on this tick.
    pub pressed: bool,
}

impl PointerStep {
    /// Aim at `(x, y)` with the button up.
    pub fn hover(x: f32, y: f32) -> Self {
        Self {
            target: [x, y],
            pressed: false,
        }
    }

    /// Aim at `(x, y)` with the button held.
    pub fn press(x: f32, y: f32) -> Self {
        Self {
            target: [x, y],
            pressed: true,
        }
    }
}

/// Outcome of one script tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptFrame {
    /// Tick number, starting at 0.
    pub tick: u64,
    /// Hit on the current page's root.
    pub hit: Option<UIRaycastHit>,
    /// Events fired during the tick.
    pub events: Vec<EventRecord>,
}

/// Run `steps` against `manager`, one tick per step.
///
/// Targets are page-plane points; the manager's transform is applied so the
/// ray always meets the page face-on. `log` must already be attached to
/// the trees whose events should be collected.
pub fn run_script(manager: &mut UIManager, log: &EventLog, steps: &[PointerStep]) -> Vec<ScriptFrame> {
    let to_world = manager.transform().matrix();
    let mut previously_pressed = false;
    let mut frames = Vec::with_capacity(steps.len());

    for (tick, step) in steps.iter().enumerate() {
        let tick = tick as u64;
        log.set_tick(tick);
        let target = Vec2::from(step.target);
        let local = ray_toward(target);
        let ray = Ray {
            origin: to_world.transform_point3(local.origin),
            direction: to_world.transform_vector3(local.direction),
        };

        let state = PointerState::new(step.pressed, previously_pressed);
        previously_pressed = step.pressed;
        let hit = manager.intersect(&ray, &state);
        trace!(tick, pressed = step.pressed, hit = hit.is_some(), "script tick");
        frames.push(ScriptFrame {
            tick,
            hit,
            events: log.take(),
        });
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrui_core::PartialStyle;
    use vrui_ui3d::Element;

    #[test]
    fn script_runs_one_frame_per_step() {
        let mut manager = UIManager::new(1.0, 1.0).unwrap();
        manager
            .add_page(Element::new(PartialStyle::new()).with_name("root"))
            .unwrap();
        let log = EventLog::new();
        if let Some(page) = manager.current_page_mut() {
            log.attach_page(page);
        }

        let frames = run_script(
            &mut manager,
            &log,
            &[
                PointerStep::hover(0.0, 0.0),
                PointerStep::press(0.0, 0.0),
                PointerStep::hover(2.0, 0.0),
            ],
        );
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].events[0].event, "hover_enter");
        assert_eq!(frames[1].events[0].pressed, Some(true));
        assert_eq!(frames[2].tick, 2);
        assert!(frames[2].hit.is_none());
        let kinds: Vec<_> = frames[2].events.iter().map(|e| e.event).collect();
        assert_eq!(kinds, vec!["change", "hover_exit"]);
    }

    #[test]
    fn oblique_ray_hits_where_it_crosses_the_plane() {
        let mut manager = UIManager::new(1.0, 1.0).unwrap();
        manager
            .add_page(Element::new(PartialStyle::new()).with_name("root"))
            .unwrap();

        let ray = ray_from(Vec3::new(0.4, 0.0, 1.0), Vec3::new(-0.2, 0.0, 0.0));
        let hit = manager
            .intersect(&ray, &PointerState::new(false, false))
            .expect("ray crosses the page");
        assert!((hit.position.x + 0.2).abs() < 1e-5);
        assert!((hit.distance - 1.36f32.sqrt()).abs() < 1e-5);
    }
}
