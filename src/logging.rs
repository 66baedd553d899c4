//! Tracing subscriber initialization for the treeselect binary.
//!
//! Logs go to stderr so stdout stays clean for rendered trees and NDJSON.
//!
//! # Priority (highest to lowest)
//!
//! 1. `TREESELECT_LOG` env var (directives, e.g. `treeselect=trace`)
//! 2. `-v` count on the command line
//! 3. `[output] verbosity` from config
//! 4. Default level: `warn`

use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use treeselect::config::Verbosity;

pub const LOG_ENV: &str = "TREESELECT_LOG";

/// Map a `-v` count (or configured verbosity) to a level
pub fn level_for(verbose: u8, configured: Verbosity) -> Level {
    if verbose == 0 && configured == Verbosity::Quiet {
        return Level::ERROR;
    }
    match verbose.max(configured.level()) {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init_subscriber(level: Level) {
    let filter = build_env_filter(std::env::var(LOG_ENV).ok(), level);

    let stderr_is_tty = std::io::stderr().is_terminal();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(stderr_is_tty)
        .with_target(level >= Level::DEBUG)
        .without_time()
        .compact();

    // try_init: tests and embedders may already have a subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn build_env_filter(directives: Option<String>, level: Level) -> EnvFilter {
    if let Some(directives) = directives {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }
    EnvFilter::new(level.as_str())
}
