//! TreeNode Entity
//!
//! The immutable node structure supplied by callers. The engine never
//! mutates nodes; it only keeps key-sets that refer to them.

use serde::{Deserialize, Serialize};

/// A node in a selection tree
///
/// Keys are expected to be unique across the whole tree. When they are not,
/// every lookup resolves to the first match in depth-first order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Unique, stable identifier
    pub key: String,

    /// Display label (opaque to the engine)
    #[serde(default)]
    pub title: String,

    /// Ordered children; empty means leaf
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,

    /// Node can not be selected or checked
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,

    /// Checkbox is not toggleable, independent of `disabled`
    #[serde(default, alias = "disable_checkbox", skip_serializing_if = "is_false")]
    pub disable_checkbox: bool,

    /// Explicit leaf override for presentation
    #[serde(
        default,
        rename = "isLeaf",
        alias = "is_leaf",
        skip_serializing_if = "is_false"
    )]
    pub leaf: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TreeNode {
    /// Create a new node with no children
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            children: Vec::new(),
            disabled: false,
            disable_checkbox: false,
            leaf: false,
        }
    }

    /// Create a node whose title is its key
    pub fn keyed(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::new(key.clone(), key)
    }

    /// Replace the children
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Append a single child
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Mark the node as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Hide/lock the checkbox of this node
    pub fn checkbox_disabled(mut self) -> Self {
        self.disable_checkbox = true;
        self
    }

    /// Force the node to count as a leaf
    pub fn forced_leaf(mut self) -> Self {
        self.leaf = true;
        self
    }

    /// Whether the node counts as a leaf
    ///
    /// A forced leaf shows no expander, and its own checked key alone decides
    /// its check state. Checking or unchecking it still covers the
    /// structural subtree, and traversal always follows `children`.
    pub fn is_leaf(&self) -> bool {
        self.leaf || self.children.is_empty()
    }

    /// Whether the checkbox of this node accepts toggles
    pub fn is_checkable(&self) -> bool {
        !self.disabled && !self.disable_checkbox
    }

    /// Fill empty titles with the key, recursively
    pub(crate) fn normalize(&mut self) {
        if self.title.is_empty() {
            self.title = self.key.clone();
        }
        for child in &mut self.children {
            child.normalize();
        }
    }
}
