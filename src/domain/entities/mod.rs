//! Domain Entities
//!
//! - `TreeNode` - A node of the caller-supplied tree
//! - `NodeSnapshot` - A node's own fields, as carried by change events

mod node;
mod snapshot;

pub use node::TreeNode;
pub use snapshot::NodeSnapshot;
