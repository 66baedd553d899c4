//! Flattened tree index
//!
//! Flattens a forest once into a pre-order arena with parent/child indices
//! so that lookups are O(1) and ancestor paths are O(depth). Rebuilt
//! whenever the tree data changes.
//!
//! Because the arena is pre-order, every subtree occupies a contiguous range
//! `pos..subtree_end`, and iterating the arena backwards visits children
//! before their parents.

use std::collections::HashMap;
use std::ops::Range;

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::KeySet;

/// One node's position in the arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Node key
    pub key: String,
    /// Depth level (0 = root)
    pub depth: usize,
    /// Arena position of the parent
    pub parent: Option<usize>,
    /// Arena positions of the children, in order
    pub children: Vec<usize>,
    /// Whether this is the last of its siblings
    pub is_last: bool,
    /// Exclusive end of this node's subtree range
    pub subtree_end: usize,
    /// Whether the node counts as a leaf (no children, or `isLeaf` set)
    pub leaf: bool,
    /// Index among its siblings (for node lookups)
    slot: usize,
}

/// Pre-order arena over a forest
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    entries: Vec<IndexEntry>,
    positions: HashMap<String, usize>,
    duplicates: Vec<String>,
}

impl TreeIndex {
    /// Build the index for a forest
    pub fn build(tree: &[TreeNode]) -> Self {
        let mut index = TreeIndex::default();
        index.push_level(tree, 0, None);
        index
    }

    fn push_level(
        &mut self,
        nodes: &[TreeNode],
        depth: usize,
        parent: Option<usize>,
    ) {
        for (i, node) in nodes.iter().enumerate() {
            let pos = self.entries.len();

            self.entries.push(IndexEntry {
                key: node.key.clone(),
                depth,
                parent,
                children: Vec::new(),
                is_last: i + 1 == nodes.len(),
                subtree_end: pos + 1,
                leaf: node.is_leaf(),
                slot: i,
            });

            if let Some(parent) = parent {
                self.entries[parent].children.push(pos);
            }

            if self.positions.contains_key(&node.key) {
                if !self.duplicates.contains(&node.key) {
                    self.duplicates.push(node.key.clone());
                }
            } else {
                self.positions.insert(node.key.clone(), pos);
            }

            self.push_level(&node.children, depth + 1, Some(pos));
            self.entries[pos].subtree_end = self.entries.len();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, pre-order
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn entry(&self, pos: usize) -> Option<&IndexEntry> {
        self.entries.get(pos)
    }

    /// Arena position of the first node with `key`
    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Keys that appear more than once, in first-duplicate order
    pub fn duplicate_keys(&self) -> &[String] {
        &self.duplicates
    }

    /// Deepest depth level, `None` for an empty forest
    pub fn max_depth(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.depth).max()
    }

    /// Resolve an arena position back to its node, in O(depth)
    pub fn node<'a>(&self, tree: &'a [TreeNode], pos: usize) -> Option<&'a TreeNode> {
        self.entries.get(pos)?;
        let mut chain = self.ancestors(pos);
        chain.push(pos);

        let (first, rest) = chain.split_first()?;
        let mut node = tree.get(self.entries[*first].slot)?;
        for &p in rest {
            node = node.children.get(self.entries[p].slot)?;
        }
        Some(node)
    }

    /// Ancestor positions, root first, excluding `pos`
    pub fn ancestors(&self, pos: usize) -> Vec<usize> {
        let mut chain = Vec::new();
        let mut current = self.entries.get(pos).and_then(|e| e.parent);
        while let Some(p) = current {
            chain.push(p);
            current = self.entries[p].parent;
        }
        chain.reverse();
        chain
    }

    /// Positions of `pos` and all its descendants
    pub fn subtree(&self, pos: usize) -> Range<usize> {
        match self.entries.get(pos) {
            Some(entry) => pos..entry.subtree_end,
            None => 0..0,
        }
    }

    /// Positions of leaves in tree order
    ///
    /// Nodes below a forced leaf are hidden by it and skipped.
    pub fn leaves(&self) -> Vec<usize> {
        let mut out = Vec::new();
        let mut pos = 0;
        while let Some(entry) = self.entries.get(pos) {
            if entry.leaf {
                out.push(pos);
                pos = entry.subtree_end;
            } else {
                pos += 1;
            }
        }
        out
    }

    /// Keys of `set` in tree order, followed by keys the tree no longer has
    pub fn ordered_keys(&self, set: &KeySet) -> Vec<String> {
        let mut out = Vec::with_capacity(set.len());
        for (pos, entry) in self.entries.iter().enumerate() {
            // Duplicates are reported once, at their first occurrence.
            if set.contains(&entry.key) && self.positions.get(&entry.key) == Some(&pos) {
                out.push(entry.key.clone());
            }
        }
        if out.len() < set.len() {
            out.extend(
                set.ordered(|k| !self.positions.contains_key(k))
                    .into_iter()
                    .map(str::to_string),
            );
        }
        out
    }

    /// Every node whose key is in `set`, in tree order
    ///
    /// One pre-order walk over `tree`; duplicates of a member key are all
    /// included.
    pub fn nodes_in<'a>(&self, tree: &'a [TreeNode], set: &KeySet) -> Vec<&'a TreeNode> {
        let mut out = Vec::with_capacity(set.len());
        if set.is_empty() {
            return out;
        }
        let mut stack: Vec<&'a TreeNode> = tree.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if set.contains(&node.key) {
                out.push(node);
            }
            stack.extend(node.children.iter().rev());
        }
        out
    }
}
