//! Scenario: Scripting the CLI
//!
//! Journey: A shell script keeps defaults in a project config, applies a
//! batch of operations and consumes the NDJSON result.
//!
//! Steps:
//! 1. Project config turns on checkboxes and multi-select
//! 2. `validate` confirms the tree file is sound
//! 3. `apply --json` runs the batch
//! 4. The script reads the final state event

use crate::common::*;

#[test]
fn scenario_scripted_batch_with_project_defaults() {
    let env = TestEnv::new();
    env.write("org.toml", ORG_TREE_TOML);
    env.write(
        "treeselect.toml",
        "[tree]\ncheckable = true\nmultiple = true\n",
    );

    // Step 2
    let result = env.run(&["validate", "org.toml"]);
    assert!(result.success, "validate failed: {}", result.combined_output());

    // Step 3
    let result = env.run(&[
        "apply",
        "org.toml",
        "--json",
        "--op",
        "check:platform",
        "--op",
        "select:eng",
        "--op",
        "select:ops",
    ]);
    assert!(result.success, "apply failed: {}", result.combined_output());

    // Step 4
    let events = result.json_events();
    let state = events
        .iter()
        .find(|e| e["event"] == "state")
        .expect("state event");
    // sre has its checkbox disabled but still sits in the checked subtree
    assert_eq!(
        state["checked_keys"],
        serde_json::json!(["platform", "infra", "sre"])
    );
    assert_eq!(state["half_checked_keys"], serde_json::json!(["eng"]));
    assert_eq!(state["selected_keys"], serde_json::json!(["eng", "ops"]));
}
