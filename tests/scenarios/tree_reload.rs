//! Scenario: Tree Data Reload
//!
//! Journey: A host refreshes its tree from a backend while the user has
//! state in flight. Some keys survive the reload, some disappear.
//!
//! Success Criteria:
//! - Key-sets survive the swap untouched
//! - Operations on vanished keys are silent no-ops
//! - Derived check state follows the new shape

use treeselect::{CheckState, EngineOptions, HierarchicalSelectionEngine, TreeNode};

#[test]
fn scenario_reload_keeps_state_and_rederives() {
    let before = vec![TreeNode::keyed("docs")
        .with_child(TreeNode::keyed("guide"))
        .with_child(TreeNode::keyed("api"))];
    let mut engine = HierarchicalSelectionEngine::new(
        before,
        EngineOptions::new()
            .checkable(true)
            .with_default_expanded_keys(["docs"]),
    );
    engine.check("guide", true);
    assert_eq!(engine.half_checked_keys(), vec!["docs"]);

    // Backend drops "api" and adds "changelog".
    let after = vec![TreeNode::keyed("docs")
        .with_child(TreeNode::keyed("guide"))
        .with_child(TreeNode::keyed("changelog"))];
    engine.set_tree_data(after);

    assert_eq!(engine.expanded_keys(), vec!["docs"]);
    assert_eq!(engine.checked_keys(), vec!["guide"]);
    assert_eq!(engine.check_state("docs"), Some(CheckState::Indeterminate));

    // A click on the vanished node arrives late.
    assert!(engine.check("api", true).is_none());
    assert!(engine.toggle_expand("api").is_none());

    // Only "guide" remains a child, so checking it alone now fills "docs".
    engine.set_tree_data(vec![
        TreeNode::keyed("docs").with_child(TreeNode::keyed("guide"))
    ]);
    assert_eq!(engine.check_state("docs"), Some(CheckState::Checked));
    assert!(engine.half_checked_keys().is_empty());
}
