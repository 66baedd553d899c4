//! Engine Factory
//!
//! Wires config, command-line flags and seed keys into a ready engine.
//! This is the dependency injection point for the commands.

use std::path::Path;

use treeselect::config::{TreeConfig, UnicodeMode};
use treeselect::{load_tree_file, EngineOptions, HierarchicalSelectionEngine, TreeSelectResult};

use crate::presentation::cli::SeedArgs;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::Glyphs;

/// Engine options for the resolved tree config and seed keys
///
/// Seeds are uncontrolled defaults; the CLI never runs a controlled engine.
pub fn engine_options(tree: &TreeConfig, seeds: &SeedArgs) -> EngineOptions {
    tree.engine_options()
        .with_default_expanded_keys(seeds.expanded.iter().cloned())
        .with_default_selected_keys(seeds.selected.iter().cloned())
        .with_default_checked_keys(seeds.checked.iter().cloned())
}

/// Load `file` and build an engine over it
pub fn create_engine(
    file: &Path,
    tree: &TreeConfig,
    seeds: &SeedArgs,
) -> TreeSelectResult<HierarchicalSelectionEngine> {
    let nodes = load_tree_file(file)?;
    Ok(HierarchicalSelectionEngine::new(
        nodes,
        engine_options(tree, seeds),
    ))
}

/// Glyph set for the `--ascii` flag, configured mode and terminal
pub fn create_glyphs(ascii: bool, mode: UnicodeMode, caps: &TerminalCapabilities) -> Glyphs {
    if ascii {
        return Glyphs::ascii();
    }
    Glyphs::new(caps.use_unicode(mode))
}
