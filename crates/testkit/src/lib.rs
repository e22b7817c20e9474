#![warn(missing_docs)]
//! Headless testing surfaces: recorded UI events, JSONL logs, scripted
//! pointer runs and canonical JSON snapshots.

mod event_log;
mod script;
mod snapshot;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use vrui_ui3d::{ChangeValue, Element, UiEvent};

pub use event_log::*;
pub use script::*;
pub use snapshot::*;

/// One UI event as captured by headless tests and the inspector CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    /// Tick the event fired on.
    pub tick: u64,
    /// Name of the element that fired.
    pub element: String,
    /// Kind of the element (`checkbox`, `vertical`, ...).
    pub element_kind: &'static str,
    /// `hover_enter`, `hover_exit` or `change`.
    pub event: &'static str,
    /// Press state carried by change events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressed: Option<bool>,
    /// Checkbox state carried by change events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    /// Slider value carried by change events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    /// Surface UV of the hit that caused the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv: Option<[f32; 2]>,
}

impl EventRecord {
    /// Capture `event` fired by `element` on `tick`.
    pub fn from_event(tick: u64, element: &Element, event: &UiEvent) -> Self {
        let mut record = Self {
            tick,
            element: element.name().unwrap_or_default().to_owned(),
            element_kind: element.kind_name(),
            event: event.name(),
            pressed: None,
            checked: None,
            value: None,
            uv: None,
        };
        let hit = match event {
            UiEvent::HoverEnter { hit } => Some(*hit),
            UiEvent::HoverExit { last_hit } => *last_hit,
            UiEvent::Change(change) => {
                record.pressed = Some(change.pressed);
                match change.value {
                    ChangeValue::None => {}
                    ChangeValue::Checked(checked) => record.checked = Some(checked),
                    ChangeValue::Slider(value) => record.value = Some(value),
                }
                change.hit
            }
        };
        record.uv = hit.map(|hit| [hit.uv.0, hit.uv.1]);
        record
    }
}

/// A sink that writes newline-delimited JSON.
pub struct JsonlSink {
    out: Box<dyn Write>,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create event log {}", path.display()))?;
        Ok(Self::from_writer(file))
    }

    /// Sink writing to standard output.
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Sink writing to any writer.
    pub fn from_writer(out: impl Write + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    /// Append an event to the log.
    pub fn write(&mut self, event: &EventRecord) -> Result<()> {
        let line = serde_json::to_string(event)?;
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Append several events and flush.
    pub fn write_all<'a>(&mut self, events: impl IntoIterator<Item = &'a EventRecord>) -> Result<()> {
        for event in events {
            self.write(event)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
