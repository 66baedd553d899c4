//! Hierarchical Selection Engine
//!
//! Owns expansion, selection and checked state over a caller-supplied tree
//! and reports every change through a [`TreeEventSink`].
//!
//! Expansion and selection can each be controlled (the caller owns the
//! value and feeds it back in with `set_*_keys`) or uncontrolled (the engine
//! mutates its own copy). Checked state is always engine-owned.
//!
//! Operations referencing unknown keys are silent no-ops: the tree may have
//! been swapped out between an interaction and its handling.

use std::cell::RefCell;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::domain::entities::{NodeSnapshot, TreeNode};
use crate::domain::ports::{
    CheckChange, ExpandChange, NoopEventSink, SelectChange, TreeEvent, TreeEventSink,
};
use crate::domain::services::{traversal, CheckDerivation, TreeIndex};
use crate::domain::value_objects::{CheckState, ConcernMode, Interaction, KeySet};

use super::options::{EngineOptions, TreeFlags};

struct CachedDerivation {
    generation: u64,
    version: u64,
    derivation: Arc<CheckDerivation>,
}

/// Selection/expansion/check state machine over a tree
pub struct HierarchicalSelectionEngine {
    tree: Vec<TreeNode>,
    index: TreeIndex,
    /// Bumped on every tree swap
    generation: u64,
    flags: TreeFlags,
    auto_expand_parent: bool,
    expanded: KeySet,
    expansion_mode: ConcernMode,
    selected: KeySet,
    selection_mode: ConcernMode,
    checked: KeySet,
    /// Bumped on every checked-set mutation
    checked_version: u64,
    derivation: RefCell<Option<CachedDerivation>>,
    sink: Box<dyn TreeEventSink>,
}

impl HierarchicalSelectionEngine {
    /// Create an engine over `tree`
    pub fn new(tree: Vec<TreeNode>, options: EngineOptions) -> Self {
        let index = TreeIndex::build(&tree);
        warn_duplicates(&index);

        let EngineOptions {
            flags,
            expanded_keys,
            selected_keys,
            default_expanded_keys,
            default_selected_keys,
            default_checked_keys,
            auto_expand_parent,
        } = options;

        let expansion_mode = ConcernMode::from_supplied(&expanded_keys);
        let expanded: KeySet = match expanded_keys {
            Some(keys) => keys.into_iter().collect(),
            None if !default_expanded_keys.is_empty() => {
                default_expanded_keys.into_iter().collect()
            }
            None if flags.expand_all => traversal::all_keys(&tree).into_iter().collect(),
            None => KeySet::new(),
        };

        let selection_mode = ConcernMode::from_supplied(&selected_keys);
        let selected = match selected_keys {
            Some(keys) => normalize_selection(keys, flags.multiple),
            None => normalize_selection(default_selected_keys, flags.multiple),
        };

        let checked: KeySet = default_checked_keys.into_iter().collect();

        debug!(
            nodes = index.len(),
            expansion = ?expansion_mode,
            selection = ?selection_mode,
            "selection engine created"
        );

        Self {
            tree,
            index,
            generation: 0,
            flags,
            auto_expand_parent,
            expanded,
            expansion_mode,
            selected,
            selection_mode,
            checked,
            checked_version: 0,
            derivation: RefCell::new(None),
            sink: Box::new(NoopEventSink),
        }
    }

    /// Attach an event sink
    pub fn with_sink(mut self, sink: impl TreeEventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the event sink
    pub fn set_sink(&mut self, sink: Box<dyn TreeEventSink>) {
        self.sink = sink;
    }

    pub fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn flags(&self) -> TreeFlags {
        self.flags
    }

    pub fn auto_expand_parent(&self) -> bool {
        self.auto_expand_parent
    }

    pub fn expansion_mode(&self) -> ConcernMode {
        self.expansion_mode
    }

    pub fn selection_mode(&self) -> ConcernMode {
        self.selection_mode
    }

    /// Look up a node by key (first match in depth-first order)
    pub fn node(&self, key: &str) -> Option<&TreeNode> {
        let pos = self.index.position(key)?;
        self.index.node(&self.tree, pos)
    }

    /// Look up a node by arena position
    pub fn node_at(&self, pos: usize) -> Option<&TreeNode> {
        self.index.node(&self.tree, pos)
    }

    /// Swap in new tree data; key-sets are kept as-is
    pub fn set_tree_data(&mut self, tree: Vec<TreeNode>) {
        self.index = TreeIndex::build(&tree);
        warn_duplicates(&self.index);
        self.tree = tree;
        self.generation += 1;
        debug!(
            nodes = self.index.len(),
            generation = self.generation,
            "tree data replaced"
        );
    }

    /// Feed the caller-owned expanded keys back in (controlled mode only)
    pub fn set_expanded_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.expansion_mode.is_controlled() {
            debug!("set_expanded_keys ignored: expansion is uncontrolled");
            return;
        }
        self.expanded = keys.into_iter().collect();
    }

    /// Feed the caller-owned selected keys back in (controlled mode only)
    pub fn set_selected_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !self.selection_mode.is_controlled() {
            debug!("set_selected_keys ignored: selection is uncontrolled");
            return;
        }
        let keys = keys.into_iter().map(Into::into).collect();
        self.selected = normalize_selection(keys, self.flags.multiple);
    }

    /// Flip the expansion of `key`
    ///
    /// Newly expanded nodes pull in their ancestors when
    /// `auto_expand_parent` is set. In controlled mode the stored keys are
    /// left untouched and the change is only reported.
    pub fn toggle_expand(&mut self, key: &str) -> Option<ExpandChange> {
        let Some(pos) = self.index.position(key) else {
            debug!(key, "expand ignored: unknown key");
            return None;
        };
        let node = NodeSnapshot::from(self.index.node(&self.tree, pos)?);

        let mut next = self.expanded.clone();
        let expanded = !next.contains(key);
        if expanded {
            next.insert(key);
            if self.auto_expand_parent {
                for ancestor in self.index.ancestors(pos) {
                    next.insert(self.index.entries()[ancestor].key.clone());
                }
            }
        } else {
            next.remove(key);
        }

        let change = ExpandChange {
            expanded_keys: self.index.ordered_keys(&next),
            expanded,
            node,
        };

        if !self.expansion_mode.is_controlled() {
            self.expanded = next;
        }

        self.sink.on_event(TreeEvent::Expand(change.clone()));
        Some(change)
    }

    /// Expand `key` if it is collapsed
    pub fn expand(&mut self, key: &str) -> Option<ExpandChange> {
        if self.is_expanded(key) {
            return None;
        }
        self.toggle_expand(key)
    }

    /// Collapse `key` if it is expanded
    pub fn collapse(&mut self, key: &str) -> Option<ExpandChange> {
        if !self.is_expanded(key) {
            return None;
        }
        self.toggle_expand(key)
    }

    /// Select `key`
    ///
    /// Single-select replaces the selection with `{key}`; multi-select
    /// toggles membership. Disabled nodes can not be selected.
    pub fn select(&mut self, key: &str, event: Interaction) -> Option<SelectChange> {
        let Some(pos) = self.index.position(key) else {
            debug!(key, "select ignored: unknown key");
            return None;
        };
        let node = NodeSnapshot::from(self.index.node(&self.tree, pos)?);
        if node.disabled {
            debug!(key, "select ignored: node is disabled");
            return None;
        }

        let (next, selected) = if self.flags.multiple {
            let mut next = self.selected.clone();
            let selected = next.toggle(key);
            (next, selected)
        } else {
            let next: KeySet = std::iter::once(key).collect();
            (next, true)
        };

        let change = SelectChange {
            selected_keys: self.index.ordered_keys(&next),
            selected,
            selected_nodes: self
                .index
                .nodes_in(&self.tree, &next)
                .into_iter()
                .map(NodeSnapshot::from)
                .collect(),
            node,
            event,
        };

        if !self.selection_mode.is_controlled() {
            self.selected = next;
        }

        self.sink.on_event(TreeEvent::Select(change.clone()));
        Some(change)
    }

    /// Check or uncheck `key` and its whole subtree
    ///
    /// Unchecking also drops every ancestor from the checked set, since an
    /// ancestor can no longer be fully checked. Ancestors are never added on
    /// check; their state is derived.
    pub fn check(&mut self, key: &str, checked: bool) -> Option<CheckChange> {
        let Some(pos) = self.index.position(key) else {
            debug!(key, "check ignored: unknown key");
            return None;
        };
        let target = self.index.node(&self.tree, pos)?;
        if !target.is_checkable() {
            debug!(key, "check ignored: checkbox is disabled");
            return None;
        }
        let node = NodeSnapshot::from(target);

        for p in self.index.subtree(pos) {
            let k = &self.index.entries()[p].key;
            if checked {
                self.checked.insert(k.clone());
            } else {
                self.checked.remove(k);
            }
        }
        if !checked {
            for ancestor in self.index.ancestors(pos) {
                self.checked.remove(&self.index.entries()[ancestor].key);
            }
        }
        self.checked_version += 1;

        let derivation = self.derivation();
        let change = CheckChange {
            checked_keys: self.index.ordered_keys(&self.checked),
            checked,
            checked_nodes: self
                .checked_nodes()
                .into_iter()
                .map(NodeSnapshot::from)
                .collect(),
            node,
            half_checked_keys: derivation.half_checked_keys().to_vec(),
        };

        self.sink.on_event(TreeEvent::Check(change.clone()));
        Some(change)
    }

    /// Empty the checked set
    ///
    /// Unlike unchecking node by node, this also drops keys the tree no
    /// longer has and seeds on nodes whose checkbox is locked. No `Check`
    /// event fires since no node triggered the change. Returns the removed
    /// keys in tree order.
    pub fn clear_checked(&mut self) -> Vec<String> {
        let removed = self.index.ordered_keys(&self.checked);
        if removed.is_empty() {
            return removed;
        }
        self.checked.clear();
        self.checked_version += 1;
        debug!(count = removed.len(), "checked set cleared");
        removed
    }

    /// Check `key` unless it displays as fully checked, in which case uncheck
    pub fn toggle_check(&mut self, key: &str) -> Option<CheckChange> {
        let state = self.check_state(key)?;
        self.check(key, !state.is_checked())
    }

    /// Expanded keys in tree order
    pub fn expanded_keys(&self) -> Vec<String> {
        self.index.ordered_keys(&self.expanded)
    }

    /// Selected keys in tree order
    pub fn selected_keys(&self) -> Vec<String> {
        self.index.ordered_keys(&self.selected)
    }

    /// Explicitly checked keys in tree order
    pub fn checked_keys(&self) -> Vec<String> {
        self.index.ordered_keys(&self.checked)
    }

    /// Derived half-checked keys in tree order
    pub fn half_checked_keys(&self) -> Vec<String> {
        self.derivation().half_checked_keys().to_vec()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    /// Whether `key` is explicitly in the checked set
    pub fn is_checked(&self, key: &str) -> bool {
        self.checked.contains(key)
    }

    /// Display state of `key`; `None` for unknown keys
    pub fn check_state(&self, key: &str) -> Option<CheckState> {
        let pos = self.index.position(key)?;
        self.check_state_at(pos)
    }

    /// Display state at an arena position
    pub fn check_state_at(&self, pos: usize) -> Option<CheckState> {
        self.derivation().state_at(pos)
    }

    /// Every node in the checked set, in tree order
    pub fn checked_nodes(&self) -> Vec<&TreeNode> {
        self.index.nodes_in(&self.tree, &self.checked)
    }

    /// Every node in the selected set, in tree order
    pub fn selected_nodes(&self) -> Vec<&TreeNode> {
        self.index.nodes_in(&self.tree, &self.selected)
    }

    /// Number of leaves that display as checked
    pub fn checked_leaf_count(&self) -> usize {
        let derivation = self.derivation();
        self.index
            .leaves()
            .into_iter()
            .filter(|&pos| derivation.state_at(pos) == Some(CheckState::Checked))
            .count()
    }

    /// Number of leaves; a forced leaf counts once, its subtree not at all
    pub fn leaf_count(&self) -> usize {
        self.index.leaves().len()
    }

    /// Memoized half-checked derivation for the current tree and checked set
    fn derivation(&self) -> Arc<CheckDerivation> {
        let mut cache = self.derivation.borrow_mut();
        if let Some(cached) = cache.as_ref() {
            if cached.generation == self.generation && cached.version == self.checked_version {
                return cached.derivation.clone();
            }
        }

        trace!(
            generation = self.generation,
            version = self.checked_version,
            "deriving check states"
        );
        let derivation = Arc::new(CheckDerivation::derive(&self.index, &self.checked));
        *cache = Some(CachedDerivation {
            generation: self.generation,
            version: self.checked_version,
            derivation: derivation.clone(),
        });
        derivation
    }
}

/// Apply the single-select contract: with `multiple` off, the last key wins
fn normalize_selection(keys: Vec<String>, multiple: bool) -> KeySet {
    if !multiple && keys.len() > 1 {
        warn!(
            count = keys.len(),
            "multiple selected keys supplied to a single-select tree; keeping the last"
        );
        return keys.into_iter().last().into_iter().collect();
    }
    keys.into_iter().collect()
}

fn warn_duplicates(index: &TreeIndex) {
    for key in index.duplicate_keys() {
        warn!(key = %key, "duplicate tree key; lookups resolve to the first occurrence");
    }
}
