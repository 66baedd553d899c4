//! Property tests for tree file parsing.

use std::path::Path;

use proptest::prelude::*;

use treeselect::infrastructure::{parse_tree, TreeFormat};
use treeselect::all_keys;

use crate::strategies::forest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics in any format.
    #[test]
    fn property_parse_never_panics(content in ".{0,200}") {
        let origin = Path::new("fuzz");
        let _ = parse_tree(&content, TreeFormat::Json, origin);
        let _ = parse_tree(&content, TreeFormat::Yaml, origin);
        let _ = parse_tree(&content, TreeFormat::Toml, origin);
    }

    /// PROPERTY: A serialized forest parses back with the same keys and titles.
    #[test]
    fn property_json_forest_reloads((tree, _n) in forest()) {
        let json = serde_json::to_string(&tree).expect("serialize forest");
        let parsed = parse_tree(&json, TreeFormat::Json, Path::new("tree.json"))
            .expect("serialized forest parses");
        prop_assert_eq!(all_keys(&parsed), all_keys(&tree));
        prop_assert_eq!(parsed, tree);
    }
}
