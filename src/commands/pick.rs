use std::path::Path;

use anyhow::{bail, Result};
use serde_json::json;

use crate::commands::CommandContext;
use crate::presentation::cli::SeedArgs;
use crate::presentation::factory::create_engine;
use crate::ui::json::{emit, CompleteEvent, StartEvent, StateEvent};
use crate::ui::widgets::tree_menu::{run_interactive, TreeMenu};

/// Run the interactive picker
///
/// Returns false when the user quit without confirming.
pub fn cmd_pick(ctx: &CommandContext, file: &Path, seeds: &SeedArgs) -> Result<bool> {
    if !ctx.caps.is_tty {
        bail!("pick needs an interactive terminal; use `treeselect apply` for scripted runs");
    }

    let engine = create_engine(file, &ctx.tree, seeds)?;
    let mut menu = TreeMenu::new(engine).with_renderer(ctx.title_renderer());
    let header = format!("treeselect: {}", file.display());

    let confirmed = run_interactive(&mut menu, &ctx.glyphs, &header)?;

    if ctx.json {
        emit(&StartEvent::new("pick").with_file(file.display().to_string()))?;
        emit(&StateEvent::capture("pick", menu.engine()))?;
        if let Some(keys) = &confirmed {
            emit(&json!({
                "event": "confirm",
                "command": "pick",
                "keys": keys,
            }))?;
        }
        let complete = if confirmed.is_some() {
            CompleteEvent::success("pick")
        } else {
            CompleteEvent::failure("pick")
        };
        emit(&complete)?;
        return Ok(confirmed.is_some());
    }

    match confirmed {
        Some(keys) => {
            for key in keys {
                println!("{key}");
            }
            Ok(true)
        }
        None => Ok(false),
    }
}
