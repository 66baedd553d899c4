//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Callers and the infrastructure layer provide concrete implementations.

pub mod title_renderer;
pub mod tree_events;

pub use title_renderer::{PlainTitle, TitleRenderer};
pub use tree_events::{
    CheckChange, ExpandChange, NoopEventSink, SelectChange, TreeEvent, TreeEventSink,
};
