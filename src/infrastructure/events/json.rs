//! JSON Event Sink
//!
//! Outputs tree events as NDJSON for scripting/automation consumption.

use crate::domain::ports::{TreeEvent, TreeEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    /// Command name stamped on every event
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl TreeEventSink for JsonEventSink {
    fn on_event(&self, event: TreeEvent) {
        let json = match event {
            TreeEvent::Expand(change) => serde_json::json!({
                "event": "expand",
                "command": self.command,
                "key": change.node.key,
                "expanded": change.expanded,
                "expanded_keys": change.expanded_keys,
            }),

            TreeEvent::Select(change) => serde_json::json!({
                "event": "select",
                "command": self.command,
                "key": change.node.key,
                "selected": change.selected,
                "selected_keys": change.selected_keys,
                "interaction": change.event,
            }),

            TreeEvent::Check(change) => serde_json::json!({
                "event": "check",
                "command": self.command,
                "key": change.node.key,
                "checked": change.checked,
                "checked_keys": change.checked_keys,
                "half_checked_keys": change.half_checked_keys,
            }),
        };

        self.write_event(json);
    }
}
