//! Property tests for selection and expansion.

use proptest::prelude::*;

use treeselect::{parent_keys, EngineOptions, HierarchicalSelectionEngine, Interaction};

use crate::strategies::{forest, op, Op};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Single-select never holds more than one key.
    #[test]
    fn property_single_select_is_exclusive(
        (tree, n) in forest(),
        history in prop::collection::vec(op(), 0..40),
    ) {
        let mut engine = HierarchicalSelectionEngine::new(tree, EngineOptions::new());
        for op in &history {
            if let Op::Select(_) = op {
                let key = op.key(n);
                let change = engine.select(&key, Interaction::Keyboard).expect("known key");
                prop_assert_eq!(change.selected_keys, vec![key]);
            }
            prop_assert!(engine.selected_keys().len() <= 1);
        }
    }

    /// PROPERTY: Selecting twice in multi-select mode restores the selection.
    #[test]
    fn property_multi_select_toggle_is_involution(
        (tree, n) in forest(),
        seed in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
        target in any::<prop::sample::Index>(),
    ) {
        let seeded: Vec<String> = seed.iter().map(|i| format!("n{}", i.index(n))).collect();
        let mut engine = HierarchicalSelectionEngine::new(
            tree,
            EngineOptions::new().multiple(true).with_default_selected_keys(seeded),
        );
        let before = engine.selected_keys();

        let key = format!("n{}", target.index(n));
        engine.select(&key, Interaction::Programmatic);
        engine.select(&key, Interaction::Programmatic);

        prop_assert_eq!(engine.selected_keys(), before);
    }

    /// PROPERTY: With auto-expand-parent, expanding a node expands its whole
    /// ancestor chain and the node becomes reachable in the visible rows.
    #[test]
    fn property_auto_expand_parent_reveals_node(
        (tree, n) in forest(),
        target in any::<prop::sample::Index>(),
    ) {
        let mut engine = HierarchicalSelectionEngine::new(
            tree.clone(),
            EngineOptions::new().with_auto_expand_parent(true),
        );

        let key = format!("n{}", target.index(n));
        let change = engine.toggle_expand(&key).expect("known key");
        prop_assert!(change.expanded);

        let ancestors = parent_keys(&key, &tree).expect("key exists");
        for ancestor in &ancestors {
            prop_assert!(engine.is_expanded(ancestor));
        }
        let visible: Vec<String> = engine.visible_rows().into_iter().map(|r| r.key).collect();
        prop_assert!(visible.contains(&key));
    }

    /// PROPERTY: Every visible non-root row sits under an expanded parent.
    #[test]
    fn property_visible_rows_follow_expansion(
        (tree, n) in forest(),
        expanded in prop::collection::vec(any::<prop::sample::Index>(), 0..12),
    ) {
        let keys: Vec<String> = expanded.iter().map(|i| format!("n{}", i.index(n))).collect();
        let engine = HierarchicalSelectionEngine::new(
            tree.clone(),
            EngineOptions::new().with_default_expanded_keys(keys),
        );

        for row in engine.visible_rows() {
            let ancestors = parent_keys(&row.key, &tree).expect("row key exists");
            prop_assert_eq!(ancestors.len(), row.depth);
            for ancestor in ancestors {
                prop_assert!(engine.is_expanded(&ancestor), "{} visible under collapsed {ancestor}", row.key);
            }
        }
    }
}
