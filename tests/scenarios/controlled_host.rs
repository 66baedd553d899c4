//! Scenario: Host-Controlled Expansion and Selection
//!
//! Journey: A host owns expanded and selected keys itself. It forwards
//! user interactions to the engine, inspects the reported change, and
//! decides whether to feed the new value back.
//!
//! Success Criteria:
//! - The engine never changes controlled state on its own
//! - Fed-back values are adopted verbatim

use treeselect::{
    ConcernMode, EngineOptions, HierarchicalSelectionEngine, Interaction, TreeNode,
};

fn org() -> Vec<TreeNode> {
    vec![
        TreeNode::keyed("eng")
            .with_child(TreeNode::keyed("platform").with_child(TreeNode::keyed("infra")))
            .with_child(TreeNode::keyed("apps")),
        TreeNode::keyed("ops"),
    ]
}

#[test]
fn scenario_host_accepts_expansion_change() {
    let mut engine = HierarchicalSelectionEngine::new(
        org(),
        EngineOptions::new()
            .with_expanded_keys(Vec::<String>::new())
            .with_auto_expand_parent(true),
    );
    assert_eq!(engine.expansion_mode(), ConcernMode::Controlled);

    // User expands a nested node; the engine reports the would-be value.
    let change = engine.toggle_expand("platform").expect("known key");
    assert_eq!(change.expanded_keys, vec!["eng", "platform"]);
    assert!(engine.expanded_keys().is_empty());

    // Host accepts the proposal.
    engine.set_expanded_keys(change.expanded_keys);
    assert_eq!(engine.expanded_keys(), vec!["eng", "platform"]);

    let visible: Vec<String> = engine.visible_rows().into_iter().map(|r| r.key).collect();
    assert_eq!(visible, vec!["eng", "platform", "infra", "apps", "ops"]);
}

#[test]
fn scenario_host_rejects_selection_change() {
    let mut engine = HierarchicalSelectionEngine::new(
        org(),
        EngineOptions::new().with_selected_keys(["ops"]),
    );

    let change = engine
        .select("apps", Interaction::Pointer)
        .expect("apps is enabled");
    assert_eq!(change.selected_keys, vec!["apps"]);
    assert_eq!(change.event, Interaction::Pointer);

    // Host ignores the proposal; the old selection stands.
    assert_eq!(engine.selected_keys(), vec!["ops"]);
    assert!(engine.is_selected("ops"));
}

#[test]
fn scenario_uncontrolled_concerns_ignore_feedback() {
    let mut engine = HierarchicalSelectionEngine::new(
        org(),
        EngineOptions::new().multiple(true).with_default_selected_keys(["eng"]),
    );
    assert_eq!(engine.selection_mode(), ConcernMode::Uncontrolled);

    engine.set_selected_keys(["ops"]);
    assert_eq!(engine.selected_keys(), vec!["eng"]);

    engine.select("ops", Interaction::Keyboard);
    assert_eq!(engine.selected_keys(), vec!["eng", "ops"]);
}
