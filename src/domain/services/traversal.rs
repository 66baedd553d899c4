//! Depth-first traversal helpers over a forest of `TreeNode`s.
//!
//! All outputs are in pre-order (node before its children, children in
//! order). Lookups return the first match in that order.

use crate::domain::entities::TreeNode;

/// Find the first node with `key` in depth-first order
pub fn find_node<'a>(tree: &'a [TreeNode], key: &str) -> Option<&'a TreeNode> {
    for node in tree {
        if node.key == key {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, key) {
            return Some(found);
        }
    }
    None
}

/// Every key in the forest, pre-order
pub fn all_keys(tree: &[TreeNode]) -> Vec<String> {
    let mut keys = Vec::new();
    walk(tree, &mut |node, _| keys.push(node.key.clone()));
    keys
}

/// Ancestor keys of `target`, root first, excluding the target itself
///
/// Returns `None` when the key is not in the tree; a root node yields
/// `Some(vec![])`.
pub fn parent_keys(target: &str, tree: &[TreeNode]) -> Option<Vec<String>> {
    fn search(nodes: &[TreeNode], target: &str, path: &mut Vec<String>) -> bool {
        for node in nodes {
            if node.key == target {
                return true;
            }
            path.push(node.key.clone());
            if search(&node.children, target, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    if search(tree, target, &mut path) {
        Some(path)
    } else {
        None
    }
}

/// The node's own key followed by all descendant keys, pre-order
pub fn descendant_keys(node: &TreeNode) -> Vec<String> {
    let mut keys = Vec::new();
    walk(std::slice::from_ref(node), &mut |n, _| keys.push(n.key.clone()));
    keys
}

/// Nodes satisfying `predicate`, in tree order
pub fn collect_nodes<'a>(
    tree: &'a [TreeNode],
    predicate: impl Fn(&TreeNode) -> bool,
) -> Vec<&'a TreeNode> {
    fn visit<'a>(
        nodes: &'a [TreeNode],
        predicate: &dyn Fn(&TreeNode) -> bool,
        out: &mut Vec<&'a TreeNode>,
    ) {
        for node in nodes {
            if predicate(node) {
                out.push(node);
            }
            visit(&node.children, predicate, out);
        }
    }

    let mut out = Vec::new();
    visit(tree, &predicate, &mut out);
    out
}

/// Pre-order visitor with depth (roots are depth 0)
pub fn walk(tree: &[TreeNode], visitor: &mut dyn FnMut(&TreeNode, usize)) {
    fn visit(nodes: &[TreeNode], depth: usize, visitor: &mut dyn FnMut(&TreeNode, usize)) {
        for node in nodes {
            visitor(node, depth);
            visit(&node.children, depth + 1, visitor);
        }
    }
    visit(tree, 0, visitor);
}
