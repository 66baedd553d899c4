use std::path::Path;

use anyhow::Result;

use crate::commands::CommandContext;
use crate::presentation::cli::SeedArgs;
use crate::presentation::factory::create_engine;
use crate::ui::json::{emit, CompleteEvent, StartEvent, StateEvent};
use crate::ui::widgets::tree_menu::render_tree;

pub fn cmd_show(ctx: &CommandContext, file: &Path, seeds: &SeedArgs) -> Result<()> {
    if ctx.json {
        emit(&StartEvent::new("show").with_file(file.display().to_string()))?;
    }

    let engine = create_engine(file, &ctx.tree, seeds)?;

    if ctx.json {
        emit(&StateEvent::capture("show", &engine))?;
        emit(&CompleteEvent::success("show"))?;
        return Ok(());
    }

    let rendered = render_tree(
        &engine,
        ctx.title_renderer().as_ref(),
        &ctx.glyphs,
        None,
        ctx.render_width(),
    );
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
