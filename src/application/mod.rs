//! Application Layer
//!
//! Use cases that orchestrate the domain services.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT perform I/O (tree files and config live in Infrastructure)
//!
//! ## Use Cases
//!
//! - `HierarchicalSelectionEngine` - Expansion, selection and check state over a tree

pub mod selection;

pub use selection::{EngineOptions, HierarchicalSelectionEngine, TreeFlags, VisibleRow};
