//! treeselect CLI - hierarchical tree selection
//!
//! Usage: treeselect <COMMAND> <FILE>
//!
//! Commands:
//!   show      Render a tree once
//!   apply     Apply operations and print the resulting state
//!   pick      Pick nodes interactively
//!   validate  Check a tree file for structural problems

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use treeselect::config::{Config, Verbosity};

mod commands;
mod logging;
mod presentation;
mod ui;

use commands::CommandContext;
use presentation::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            if json {
                let _ = ui::json::emit(&ui::json::ErrorEvent::new("treeselect", err.to_string()));
            } else {
                let color = ui::terminal::detect_capabilities().supports_color;
                eprintln!("{}", ui::output::error_line(&format!("{err:#}"), color));
            }
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::discover(cli.config.as_deref(), &cwd)?;

    logging::init_subscriber(logging::level_for(cli.verbose, config.output.verbosity));
    debug!(?config, "configuration resolved");

    let tree = cli.tree.apply_to(config.tree);
    let ctx = CommandContext::new(
        cli.json,
        cli.ascii,
        cli.show_keys,
        tree,
        config.output,
    );

    if !cli.json && config.output.verbosity != Verbosity::Quiet {
        for warning in &warnings {
            let line = ui::output::warning_line(&warning.to_string(), ctx.caps.supports_color);
            eprintln!("{line}");
        }
    }

    let ok = match &cli.command {
        Commands::Show { file, seeds } => {
            commands::show::cmd_show(&ctx, file, seeds)?;
            true
        }
        Commands::Apply { file, ops, seeds } => {
            commands::apply::cmd_apply(&ctx, file, ops, seeds)?;
            true
        }
        Commands::Pick { file, seeds } => commands::pick::cmd_pick(&ctx, file, seeds)?,
        Commands::Validate { file } => commands::validate::cmd_validate(&ctx, file)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
