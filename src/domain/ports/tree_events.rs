//! Tree Event Port
//!
//! Change notifications emitted by the selection engine. Every operation
//! that changes (or, in controlled mode, would change) state fires exactly
//! one event, synchronously, before returning.
//!
//! Payload nodes are [`NodeSnapshot`]s: the node's own fields without its
//! subtree, so building an event never copies the tree.

use serde::Serialize;

use crate::domain::entities::NodeSnapshot;
use crate::domain::value_objects::Interaction;

/// Result of an expand/collapse toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandChange {
    /// Full new expanded-key list
    pub expanded_keys: Vec<String>,
    /// True for expand, false for collapse
    pub expanded: bool,
    /// Node that triggered the change
    pub node: NodeSnapshot,
}

/// Result of a select toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectChange {
    /// Full new selected-key list
    pub selected_keys: Vec<String>,
    /// Whether the triggering node is now selected
    pub selected: bool,
    /// Every selected node, in tree order
    pub selected_nodes: Vec<NodeSnapshot>,
    /// Node that triggered the change
    pub node: NodeSnapshot,
    /// What triggered the change
    pub event: Interaction,
}

/// Result of a check/uncheck
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckChange {
    /// Full new checked-key list
    pub checked_keys: Vec<String>,
    /// Whether the triggering node was checked or unchecked
    pub checked: bool,
    /// Every checked node, in tree order
    pub checked_nodes: Vec<NodeSnapshot>,
    /// Node that triggered the change
    pub node: NodeSnapshot,
    /// Derived half-checked keys after the change
    pub half_checked_keys: Vec<String>,
}

/// Event emitted by the selection engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    Expand(ExpandChange),
    Select(SelectChange),
    Check(CheckChange),
}

impl TreeEvent {
    /// Short event name used in NDJSON output
    pub fn name(&self) -> &'static str {
        match self {
            TreeEvent::Expand(_) => "expand",
            TreeEvent::Select(_) => "select",
            TreeEvent::Check(_) => "check",
        }
    }

    /// Key of the node that triggered the event
    pub fn node_key(&self) -> &str {
        match self {
            TreeEvent::Expand(change) => &change.node.key,
            TreeEvent::Select(change) => &change.node.key,
            TreeEvent::Check(change) => &change.node.key,
        }
    }
}

/// Trait for receiving tree events
///
/// Implementations can be:
/// - closures (`Fn(TreeEvent)`), for in-process callers
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait TreeEventSink: Send + Sync {
    /// Handle a tree event
    fn on_event(&self, event: TreeEvent);
}

impl<F> TreeEventSink for F
where
    F: Fn(TreeEvent) + Send + Sync,
{
    fn on_event(&self, event: TreeEvent) {
        self(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl TreeEventSink for NoopEventSink {
    fn on_event(&self, _event: TreeEvent) {}
}
