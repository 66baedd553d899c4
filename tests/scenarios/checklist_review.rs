//! Scenario: Reviewing a Checklist
//!
//! Journey: A host shows a checkable tree A{A1, A2}, B and the user
//! ticks a whole section, then changes their mind about one item.
//!
//! Steps:
//! 1. Engine starts with nothing checked
//! 2. User checks A - the whole subtree is checked
//! 3. User unchecks A1 - A drops out and becomes half-checked
//! 4. User unchecks A2 - A is no longer half-checked
//!
//! Success Criteria:
//! - Every step emits exactly one check event
//! - Event payloads match the engine's state after the step

use std::sync::{Arc, Mutex};

use treeselect::{
    CheckState, EngineOptions, HierarchicalSelectionEngine, TreeEvent, TreeNode,
};

fn checklist() -> Vec<TreeNode> {
    vec![
        TreeNode::new("A", "Alpha")
            .with_child(TreeNode::new("A1", "Alpha one"))
            .with_child(TreeNode::new("A2", "Alpha two")),
        TreeNode::new("B", "Beta"),
    ]
}

#[test]
fn scenario_check_section_then_uncheck_items() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink_events = events.clone();
    let mut engine = HierarchicalSelectionEngine::new(
        checklist(),
        EngineOptions::new().checkable(true),
    )
    .with_sink(move |event: TreeEvent| sink_events.lock().unwrap().push(event));

    // Step 1
    assert!(engine.checked_keys().is_empty());
    assert!(engine.half_checked_keys().is_empty());

    // Step 2
    let change = engine.check("A", true).expect("A is checkable");
    assert_eq!(change.checked_keys, vec!["A", "A1", "A2"]);
    assert!(change.half_checked_keys.is_empty());
    assert_eq!(engine.check_state("A"), Some(CheckState::Checked));

    // Step 3
    let change = engine.check("A1", false).expect("A1 is checkable");
    assert_eq!(change.checked_keys, vec!["A2"]);
    assert_eq!(change.half_checked_keys, vec!["A"]);
    assert!(!change.checked);
    assert_eq!(change.node.key, "A1");
    assert_eq!(engine.check_state("A"), Some(CheckState::Indeterminate));

    // Step 4
    let change = engine.check("A2", false).expect("A2 is checkable");
    assert!(change.checked_keys.is_empty());
    assert!(change.half_checked_keys.is_empty());
    assert_eq!(engine.check_state("A"), Some(CheckState::Unchecked));

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.name() == "check"));
    assert_eq!(
        events.iter().map(|e| e.node_key()).collect::<Vec<_>>(),
        vec!["A", "A1", "A2"]
    );
}

#[test]
fn scenario_checking_every_leaf_reads_as_checked_parent() {
    let mut engine =
        HierarchicalSelectionEngine::new(checklist(), EngineOptions::new().checkable(true));

    engine.check("A1", true);
    assert_eq!(engine.half_checked_keys(), vec!["A"]);

    engine.check("A2", true);
    assert!(engine.half_checked_keys().is_empty());
    assert_eq!(engine.check_state("A"), Some(CheckState::Checked));
    // A reads as checked without being in the explicit set
    assert!(!engine.is_checked("A"));
    assert_eq!(engine.checked_leaf_count(), 2);
    assert_eq!(engine.leaf_count(), 3);
}
