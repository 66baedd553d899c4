//! Reusable tree file content.

/// A{A1, A2}, B
pub const SMALL_TREE_JSON: &str = r#"[
  {
    "key": "A",
    "title": "Alpha",
    "children": [
      { "key": "A1", "title": "Alpha one" },
      { "key": "A2", "title": "Alpha two" }
    ]
  },
  { "key": "B", "title": "Beta" }
]"#;

/// Same shape as `SMALL_TREE_JSON`, wrapped and in YAML
pub const SMALL_TREE_YAML: &str = r#"treeData:
  - key: A
    title: Alpha
    children:
      - key: A1
        title: Alpha one
      - key: A2
        title: Alpha two
  - key: B
    title: Beta
"#;

/// Org chart with a disabled node and a locked checkbox
pub const ORG_TREE_TOML: &str = r#"
[[tree_data]]
key = "eng"
title = "Engineering"

[[tree_data.children]]
key = "platform"
title = "Platform"

[[tree_data.children.children]]
key = "infra"
title = "Infra"

[[tree_data.children.children]]
key = "sre"
title = "SRE"
disableCheckbox = true

[[tree_data.children]]
key = "apps"
title = "Apps"
disabled = true

[[tree_data]]
key = "ops"
title = "Operations"
"#;

/// Two nodes sharing a key
pub const DUPLICATE_TREE_JSON: &str = r#"[
  { "key": "x", "children": [ { "key": "x" } ] },
  { "key": "y" }
]"#;
