//! Visible row flattening.
//!
//! Turns the engine state into the ordered list of rows a presentation layer
//! draws: every node whose ancestors are all expanded, in pre-order.

use crate::domain::value_objects::CheckState;

use super::engine::HierarchicalSelectionEngine;

/// A flattened, visible tree row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// Arena position (resolve the node with `engine.node_at`)
    pub pos: usize,
    pub key: String,
    /// Depth level (0 = root)
    pub depth: usize,
    /// Whether an expander is shown
    pub has_children: bool,
    pub expanded: bool,
    /// Last of its siblings (connector lines)
    pub is_last: bool,
    /// `is_last` of each ancestor, root first (connector lines)
    pub ancestors_last: Vec<bool>,
    pub check_state: CheckState,
    pub selected: bool,
    pub disabled: bool,
    /// Whether a checkbox is shown for this row
    pub checkbox: bool,
}

impl HierarchicalSelectionEngine {
    /// Rows currently visible, in tree order
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let index = self.index();
        let entries = index.entries();
        let checkable = self.flags().checkable;
        let mut rows = Vec::new();

        let mut pos = 0;
        while pos < entries.len() {
            let entry = &entries[pos];
            let Some(node) = self.node_at(pos) else {
                pos += 1;
                continue;
            };

            let has_children = !node.is_leaf();
            let expanded = has_children && self.is_expanded(&entry.key);

            rows.push(VisibleRow {
                pos,
                key: entry.key.clone(),
                depth: entry.depth,
                has_children,
                expanded,
                is_last: entry.is_last,
                ancestors_last: index
                    .ancestors(pos)
                    .into_iter()
                    .map(|a| entries[a].is_last)
                    .collect(),
                check_state: self.check_state_at(pos).unwrap_or(CheckState::Unchecked),
                selected: self.is_selected(&entry.key),
                disabled: node.disabled,
                checkbox: checkable && !node.disable_checkbox,
            });

            // Collapsed (or forced-leaf) nodes hide their whole subtree.
            pos = if expanded { pos + 1 } else { entry.subtree_end };
        }

        rows
    }
}
