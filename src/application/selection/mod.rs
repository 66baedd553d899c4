//! Selection Use Case
//!
//! The hierarchical selection engine and its construction options.

mod engine;
mod options;
mod rows;

pub use engine::HierarchicalSelectionEngine;
pub use options::{EngineOptions, TreeFlags};
pub use rows::VisibleRow;
