//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sink implementations (NDJSON)
//! - `tree_file` - Tree data loading (JSON, YAML, TOML)

pub mod events;
pub mod tree_file;

// Re-export for convenience
pub use events::JsonEventSink;
pub use tree_file::{load_tree_file, parse_tree, TreeFormat};
