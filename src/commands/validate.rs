use std::path::Path;

use anyhow::Result;
use serde_json::json;

use treeselect::{load_tree_file, TreeIndex};

use crate::commands::CommandContext;
use crate::ui::json::{emit, CompleteEvent, StartEvent};

/// Structural summary of a tree file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeReport {
    pub nodes: usize,
    pub roots: usize,
    pub leaves: usize,
    /// Number of levels (0 for an empty tree)
    pub depth: usize,
    pub duplicate_keys: Vec<String>,
    pub empty_keys: usize,
}

impl TreeReport {
    pub fn from_index(index: &TreeIndex) -> Self {
        let entries = index.entries();
        Self {
            nodes: entries.len(),
            roots: entries.iter().filter(|e| e.depth == 0).count(),
            leaves: index.leaves().len(),
            depth: index.max_depth().map_or(0, |d| d + 1),
            duplicate_keys: index.duplicate_keys().to_vec(),
            empty_keys: entries.iter().filter(|e| e.key.is_empty()).count(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.duplicate_keys.is_empty() && self.empty_keys == 0
    }
}

/// Validate a tree file; returns whether it is structurally sound
pub fn cmd_validate(ctx: &CommandContext, file: &Path) -> Result<bool> {
    if ctx.json {
        emit(&StartEvent::new("validate").with_file(file.display().to_string()))?;
    }

    let tree = load_tree_file(file)?;
    let report = TreeReport::from_index(&TreeIndex::build(&tree));

    if ctx.json {
        emit(&json!({
            "event": "report",
            "command": "validate",
            "nodes": report.nodes,
            "roots": report.roots,
            "leaves": report.leaves,
            "depth": report.depth,
            "duplicate_keys": report.duplicate_keys,
            "empty_keys": report.empty_keys,
            "valid": report.is_valid(),
        }))?;
        let complete = if report.is_valid() {
            CompleteEvent::success("validate")
        } else {
            CompleteEvent::failure("validate")
        };
        emit(&complete)?;
        return Ok(report.is_valid());
    }

    println!("{}", file.display());
    println!("  nodes:  {}", report.nodes);
    println!("  roots:  {}", report.roots);
    println!("  leaves: {}", report.leaves);
    println!("  depth:  {}", report.depth);

    for key in &report.duplicate_keys {
        println!("  duplicate key: {key}");
    }
    if report.empty_keys > 0 {
        println!("  empty keys: {}", report.empty_keys);
    }

    if report.is_valid() {
        println!("OK");
    } else {
        println!("INVALID");
    }
    Ok(report.is_valid())
}
