//! Half-checked (indeterminate) derivation.
//!
//! Bottom-up over the whole forest:
//! - a leaf (no children, or `isLeaf` set) is fully checked iff its key is
//!   checked, and is never half-checked; children of a forced leaf do not
//!   contribute to it
//! - an internal node is half-checked iff some child is checked or partially
//!   checked, not every child is fully checked, and the node itself is not
//!   explicitly checked
//! - an internal node counts as fully checked for its parent iff it is
//!   explicitly checked or every child is fully checked
//!
//! The derivation is a pure function of the checked set and the tree shape.

use std::collections::HashSet;

use crate::domain::services::TreeIndex;
use crate::domain::value_objects::{CheckState, KeySet};

/// Result of one derivation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckDerivation {
    /// Display state per arena position
    states: Vec<CheckState>,
    /// Half-checked keys in tree order
    half_checked: Vec<String>,
}

impl CheckDerivation {
    /// Run the derivation over an index
    pub fn derive(index: &TreeIndex, checked: &KeySet) -> Self {
        let entries = index.entries();
        let mut fully = vec![false; entries.len()];
        let mut any = vec![false; entries.len()];
        let mut half = vec![false; entries.len()];

        // Children come after their parent in pre-order, so walking backwards
        // sees every child before its parent.
        for pos in (0..entries.len()).rev() {
            let entry = &entries[pos];
            let explicit = checked.contains(&entry.key);

            if entry.leaf {
                fully[pos] = explicit;
                any[pos] = explicit;
                continue;
            }

            let all_children = entry.children.iter().all(|&c| fully[c]);
            let any_child = entry.children.iter().any(|&c| any[c]);

            half[pos] = any_child && !all_children && !explicit;
            fully[pos] = explicit || all_children;
            any[pos] = explicit || any_child;
        }

        let states = (0..entries.len())
            .map(|pos| {
                if fully[pos] {
                    CheckState::Checked
                } else if half[pos] {
                    CheckState::Indeterminate
                } else {
                    CheckState::Unchecked
                }
            })
            .collect();

        let mut seen = HashSet::new();
        let half_checked = entries
            .iter()
            .enumerate()
            .filter(|(pos, entry)| half[*pos] && seen.insert(entry.key.as_str()))
            .map(|(_, entry)| entry.key.clone())
            .collect();

        Self {
            states,
            half_checked,
        }
    }

    /// Half-checked keys in tree order
    pub fn half_checked_keys(&self) -> &[String] {
        &self.half_checked
    }

    /// Display state at an arena position
    pub fn state_at(&self, pos: usize) -> Option<CheckState> {
        self.states.get(pos).copied()
    }

    /// Number of positions displaying as fully checked
    pub fn checked_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_checked()).count()
    }
}
