//! NodeSnapshot Value
//!
//! The per-node data carried by change events. Copying a whole `TreeNode`
//! into every payload would clone its subtree, so events carry this flat
//! view instead; look the full node up with `engine.node(&snapshot.key)`.

use serde::Serialize;

use super::TreeNode;

/// A node's own fields, without its children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub key: String,
    pub title: String,
    pub disabled: bool,
    pub disable_checkbox: bool,
    /// Result of [`TreeNode::is_leaf`]
    pub is_leaf: bool,
    /// Number of direct children
    pub child_count: usize,
}

impl From<&TreeNode> for NodeSnapshot {
    fn from(node: &TreeNode) -> Self {
        Self {
            key: node.key.clone(),
            title: node.title.clone(),
            disabled: node.disabled,
            disable_checkbox: node.disable_checkbox,
            is_leaf: node.is_leaf(),
            child_count: node.children.len(),
        }
    }
}
