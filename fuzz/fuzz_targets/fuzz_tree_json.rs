#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use treeselect::infrastructure::{parse_tree, TreeFormat};
use treeselect::{EngineOptions, HierarchicalSelectionEngine};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Whatever parses must also index and derive without panicking
        if let Ok(tree) = parse_tree(content, TreeFormat::Json, Path::new("fuzz.json")) {
            let keys = treeselect::all_keys(&tree);
            let engine = HierarchicalSelectionEngine::new(
                tree,
                EngineOptions::new()
                    .checkable(true)
                    .expand_all(true)
                    .with_default_checked_keys(keys.into_iter().step_by(2)),
            );
            let _ = engine.visible_rows();
            let _ = engine.half_checked_keys();
        }
    }
});
