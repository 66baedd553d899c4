//! treeselect - hierarchical tree selection engine
//!
//! Keeps expansion, selection and tri-state check state over a
//! caller-supplied tree of nodes, reports every change through an event
//! sink, and ships a terminal picker on top of it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{EngineOptions, HierarchicalSelectionEngine, TreeFlags, VisibleRow};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{NodeSnapshot, TreeNode};
pub use domain::ports::{
    CheckChange, ExpandChange, NoopEventSink, PlainTitle, SelectChange, TitleRenderer, TreeEvent,
    TreeEventSink,
};
pub use domain::services::traversal::{all_keys, descendant_keys, find_node, parent_keys};
pub use domain::services::TreeIndex;
pub use domain::value_objects::{CheckState, ConcernMode, Interaction};
pub use error::{TreeSelectError, TreeSelectResult};
pub use infrastructure::{load_tree_file, JsonEventSink};
