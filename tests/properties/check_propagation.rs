//! Property tests for tri-state check propagation.

use proptest::prelude::*;

use treeselect::{
    descendant_keys, find_node, parent_keys, CheckState, EngineOptions,
    HierarchicalSelectionEngine, Interaction,
};

use crate::strategies::{forest, ops, Op};

fn run(engine: &mut HierarchicalSelectionEngine, op: &Op, n: usize) {
    let key = op.key(n);
    match op {
        Op::ToggleExpand(_) | Op::Unknown => {
            engine.toggle_expand(&key);
        }
        Op::Select(_) => {
            engine.select(&key, Interaction::Programmatic);
        }
        Op::Check(_, checked) => {
            engine.check(&key, *checked);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Checking a node puts its whole subtree in the checked set.
    #[test]
    fn property_check_covers_subtree(
        (tree, n) in forest(),
        history in ops(),
        target in any::<prop::sample::Index>(),
    ) {
        let mut engine = HierarchicalSelectionEngine::new(tree.clone(), EngineOptions::new().checkable(true));
        for op in &history {
            run(&mut engine, op, n);
        }

        let key = format!("n{}", target.index(n));
        let change = engine.check(&key, true).expect("every generated node is checkable");

        let node = find_node(&tree, &key).expect("key exists");
        for k in descendant_keys(node) {
            prop_assert!(change.checked_keys.contains(&k), "{k} missing after checking {key}");
            prop_assert_eq!(engine.check_state(&k), Some(CheckState::Checked));
        }
    }

    /// PROPERTY: Unchecking a node clears its subtree and every ancestor.
    #[test]
    fn property_uncheck_clears_subtree_and_ancestors(
        (tree, n) in forest(),
        history in ops(),
        target in any::<prop::sample::Index>(),
    ) {
        let mut engine = HierarchicalSelectionEngine::new(tree.clone(), EngineOptions::new().checkable(true));
        for op in &history {
            run(&mut engine, op, n);
        }

        let key = format!("n{}", target.index(n));
        engine.check(&key, false);

        let node = find_node(&tree, &key).expect("key exists");
        for k in descendant_keys(node) {
            prop_assert!(!engine.is_checked(&k));
        }
        for k in parent_keys(&key, &tree).expect("key exists") {
            prop_assert!(!engine.is_checked(&k), "ancestor {k} still checked");
            prop_assert_ne!(engine.check_state(&k), Some(CheckState::Checked));
        }
    }

    /// PROPERTY: Half-checked keys are internal, never explicitly checked,
    /// and stable across repeated derivation.
    #[test]
    fn property_half_checked_is_consistent((tree, n) in forest(), history in ops()) {
        let mut engine = HierarchicalSelectionEngine::new(tree.clone(), EngineOptions::new().checkable(true));
        for op in &history {
            run(&mut engine, op, n);
        }

        let half = engine.half_checked_keys();
        prop_assert_eq!(&half, &engine.half_checked_keys());

        for key in &half {
            let node = find_node(&tree, key).expect("half-checked key exists");
            prop_assert!(!node.children.is_empty(), "leaf {key} reported half-checked");
            prop_assert!(!engine.is_checked(key));
            prop_assert_eq!(engine.check_state(key), Some(CheckState::Indeterminate));
        }

        // A fresh engine seeded with the same checked set derives the same answer.
        let replay = HierarchicalSelectionEngine::new(
            tree,
            EngineOptions::new().with_default_checked_keys(engine.checked_keys()),
        );
        prop_assert_eq!(replay.half_checked_keys(), half);
    }

    /// PROPERTY: Operations on unknown keys change nothing.
    #[test]
    fn property_unknown_keys_are_noops((tree, n) in forest(), history in ops()) {
        let mut engine = HierarchicalSelectionEngine::new(tree, EngineOptions::new().multiple(true));
        for op in &history {
            run(&mut engine, op, n);
        }

        let before = (
            engine.expanded_keys(),
            engine.selected_keys(),
            engine.checked_keys(),
        );
        prop_assert!(engine.toggle_expand("missing").is_none());
        prop_assert!(engine.select("missing", Interaction::Keyboard).is_none());
        prop_assert!(engine.check("missing", true).is_none());
        prop_assert!(engine.check_state("missing").is_none());

        let after = (
            engine.expanded_keys(),
            engine.selected_keys(),
            engine.checked_keys(),
        );
        prop_assert_eq!(before, after);
    }
}
