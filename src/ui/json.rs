//! Shared JSON event types for consistent CLI output.
//!
//! Engine change events (`expand`, `select`, `check`) come from
//! [`treeselect::JsonEventSink`]; the command lifecycle events live here.

use std::io::{self, Write};

use serde::Serialize;

use treeselect::HierarchicalSelectionEngine;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

/// Snapshot of the engine's key-sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub expanded_keys: Vec<String>,
    pub selected_keys: Vec<String>,
    pub checked_keys: Vec<String>,
    pub half_checked_keys: Vec<String>,
}

impl<'a> StateEvent<'a> {
    pub fn capture(command: &'a str, engine: &HierarchicalSelectionEngine) -> Self {
        Self {
            event: "state",
            command,
            expanded_keys: engine.expanded_keys(),
            selected_keys: engine.selected_keys(),
            checked_keys: engine.checked_keys(),
            half_checked_keys: engine.half_checked_keys(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treeselect::{EngineOptions, TreeNode};

    fn to_line(event: &impl Serialize) -> String {
        let mut out = Vec::new();
        write_event(&mut out, event).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn events_are_single_lines() {
        let line = to_line(&StartEvent::new("show").with_file("tree.json"));
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["event"], "start");
        assert_eq!(value["command"], "show");
        assert_eq!(value["file"], "tree.json");
    }

    #[test]
    fn start_event_omits_missing_file() {
        let value = serde_json::to_value(StartEvent::new("pick")).unwrap();
        assert!(value.get("file").is_none());
    }

    #[test]
    fn complete_and_error_events() {
        let value = serde_json::to_value(CompleteEvent::failure("apply")).unwrap();
        assert_eq!(value["success"], false);

        let value = serde_json::to_value(ErrorEvent::new("apply", "boom")).unwrap();
        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "boom");
    }

    #[test]
    fn state_event_captures_key_sets() {
        let tree = vec![TreeNode::keyed("p")
            .with_child(TreeNode::keyed("a"))
            .with_child(TreeNode::keyed("b"))];
        let engine = HierarchicalSelectionEngine::new(
            tree,
            EngineOptions::new()
                .with_default_expanded_keys(["p"])
                .with_default_checked_keys(["a"]),
        );

        let state = StateEvent::capture("apply", &engine);
        assert_eq!(state.expanded_keys, vec!["p"]);
        assert_eq!(state.checked_keys, vec!["a"]);
        assert_eq!(state.half_checked_keys, vec!["p"]);
        assert!(state.selected_keys.is_empty());
    }
}
