//! Domain Layer
//!
//! The pure core of treeselect: tree structure, key-sets and the
//! derivations over them. No I/O happens here.
//!
//! ## Structure
//!
//! - `entities/` - The caller-owned `TreeNode`
//! - `value_objects/` - Small immutable types (CheckState, KeySet, ConcernMode)
//! - `services/` - Traversal helpers, the flattened index, check derivation
//! - `ports/` - Event sink interface implemented by callers and infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
