#![no_main]

use libfuzzer_sys::fuzz_target;
use treeselect::{EngineOptions, HierarchicalSelectionEngine, Interaction, TreeNode};

fn tree() -> Vec<TreeNode> {
    vec![
        TreeNode::keyed("k0")
            .with_child(TreeNode::keyed("k1").with_child(TreeNode::keyed("k2")))
            .with_child(TreeNode::keyed("k3").checkbox_disabled()),
        TreeNode::keyed("k4").disabled(),
        TreeNode::keyed("k5").with_child(TreeNode::keyed("k6")),
    ]
}

fuzz_target!(|data: &[u8]| {
    let Some((&flags, ops)) = data.split_first() else {
        return;
    };
    let mut engine = HierarchicalSelectionEngine::new(
        tree(),
        EngineOptions::new()
            .checkable(true)
            .multiple(flags & 1 != 0)
            .with_auto_expand_parent(flags & 2 != 0),
    );

    for &byte in ops {
        // Keys k0..k7; k7 is unknown
        let key = format!("k{}", byte & 7);
        match (byte >> 3) & 3 {
            0 => {
                engine.toggle_expand(&key);
            }
            1 => {
                engine.select(&key, Interaction::Keyboard);
            }
            2 => {
                engine.check(&key, true);
            }
            _ => {
                engine.check(&key, false);
            }
        }

        for half in engine.half_checked_keys() {
            assert!(!engine.is_checked(&half));
        }
        if flags & 1 == 0 {
            assert!(engine.selected_keys().len() <= 1);
        }
    }
});
