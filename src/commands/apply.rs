use std::path::Path;

use anyhow::Result;
use tracing::info;

use treeselect::{HierarchicalSelectionEngine, Interaction, JsonEventSink, TreeEvent};

use crate::commands::{format_keys, CommandContext};
use crate::presentation::cli::{Operation, SeedArgs};
use crate::presentation::factory::create_engine;
use crate::ui::json::{emit, CompleteEvent, StartEvent, StateEvent};
use crate::ui::widgets::tree_menu::render_tree;

pub fn cmd_apply(
    ctx: &CommandContext,
    file: &Path,
    ops: &[Operation],
    seeds: &SeedArgs,
) -> Result<()> {
    if ctx.json {
        emit(&StartEvent::new("apply").with_file(file.display().to_string()))?;
    }

    let mut engine = create_engine(file, &ctx.tree, seeds)?;
    if ctx.json {
        engine.set_sink(Box::new(JsonEventSink::stdout("apply")));
    }

    for op in ops {
        let event = run_operation(&mut engine, op);
        info!(op = %op, changed = event.is_some(), "applied operation");
        if !ctx.json {
            match event {
                Some(event) => println!("{op}: {}", describe_event(&event)),
                None => println!("{op}: no change"),
            }
        }
    }

    if ctx.json {
        emit(&StateEvent::capture("apply", &engine))?;
        emit(&CompleteEvent::success("apply"))?;
        return Ok(());
    }

    if !ops.is_empty() {
        println!();
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
        println!();
    }
    print_state(&engine);
    Ok(())
}

/// Run one operation, returning the event it emitted
fn run_operation(engine: &mut HierarchicalSelectionEngine, op: &Operation) -> Option<TreeEvent> {
    match op {
        Operation::Expand(key) => engine.expand(key).map(TreeEvent::Expand),
        Operation::Collapse(key) => engine.collapse(key).map(TreeEvent::Expand),
        Operation::ToggleExpand(key) => engine.toggle_expand(key).map(TreeEvent::Expand),
        Operation::Select(key) => engine
            .select(key, Interaction::Programmatic)
            .map(TreeEvent::Select),
        Operation::Check(key) => engine.check(key, true).map(TreeEvent::Check),
        Operation::Uncheck(key) => engine.check(key, false).map(TreeEvent::Check),
    }
}

fn describe_event(event: &TreeEvent) -> String {
    match event {
        TreeEvent::Expand(change) => format!(
            "{} -> expanded: {}",
            if change.expanded {
                "expanded"
            } else {
                "collapsed"
            },
            format_keys(&change.expanded_keys)
        ),
        TreeEvent::Select(change) => format!(
            "{} -> selected: {}",
            if change.selected {
                "selected"
            } else {
                "deselected"
            },
            format_keys(&change.selected_keys)
        ),
        TreeEvent::Check(change) => format!(
            "{} -> checked: {}; half-checked: {}",
            if change.checked {
                "checked"
            } else {
                "unchecked"
            },
            format_keys(&change.checked_keys),
            format_keys(&change.half_checked_keys)
        ),
    }
}

fn print_state(engine: &HierarchicalSelectionEngine) {
    println!("expanded:     {}", format_keys(&engine.expanded_keys()));
    println!("selected:     {}", format_keys(&engine.selected_keys()));
    println!("checked:      {}", format_keys(&engine.checked_keys()));
    println!("half-checked: {}", format_keys(&engine.half_checked_keys()));
}
