//! Event Sink Implementations
//!
//! Provides concrete implementations of TreeEventSink:
//! - JsonEventSink: NDJSON output for scripting/automation

mod json;

pub use json::JsonEventSink;
