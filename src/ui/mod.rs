//! Terminal UI: theme, capability detection, NDJSON events and the
//! interactive tree widget.

pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod widgets;
