//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config, tree flags) are inherited by all subcommands
//! - Tree flags given on the command line win over environment and config file

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

use treeselect::config::TreeConfig;

/// treeselect - hierarchical tree selection with tri-state checkboxes
#[derive(Parser, Debug)]
#[command(name = "treeselect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./treeselect.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use ASCII glyphs instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Show node keys next to titles
    #[arg(long, global = true)]
    pub show_keys: bool,

    #[command(flatten)]
    pub tree: TreeArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Tree behaviour flags
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeArgs {
    /// Show checkboxes
    #[arg(long, global = true)]
    pub checkable: bool,

    /// Allow selecting several nodes
    #[arg(long, global = true)]
    pub multiple: bool,

    /// Start with every node expanded
    #[arg(long, global = true)]
    pub expand_all: bool,

    /// Draw connector lines
    #[arg(long, global = true)]
    pub show_line: bool,

    /// Draw node icons
    #[arg(long, global = true)]
    pub show_icon: bool,

    /// Expanding a node also expands its ancestors
    #[arg(long, global = true)]
    pub auto_expand_parent: bool,
}

impl TreeArgs {
    /// Layer the command-line flags over the configured ones
    pub fn apply_to(&self, mut tree: TreeConfig) -> TreeConfig {
        tree.checkable |= self.checkable;
        tree.multiple |= self.multiple;
        tree.expand_all |= self.expand_all;
        tree.show_line |= self.show_line;
        tree.show_icon |= self.show_icon;
        tree.auto_expand_parent |= self.auto_expand_parent;
        tree
    }
}

/// Initial key-sets for a run
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedArgs {
    /// Initially expanded keys
    #[arg(long, value_name = "KEY", value_delimiter = ',')]
    pub expanded: Vec<String>,

    /// Initially selected keys
    #[arg(long, value_name = "KEY", value_delimiter = ',')]
    pub selected: Vec<String>,

    /// Initially checked keys
    #[arg(long, value_name = "KEY", value_delimiter = ',')]
    pub checked: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a tree once
    Show {
        /// Tree file (.json, .yaml, .yml, .toml)
        file: PathBuf,

        #[command(flatten)]
        seeds: SeedArgs,
    },

    /// Apply operations in order and print the resulting state
    Apply {
        /// Tree file (.json, .yaml, .yml, .toml)
        file: PathBuf,

        /// Operation: expand:KEY, collapse:KEY, toggle:KEY, select:KEY, check:KEY, uncheck:KEY
        #[arg(long = "op", value_name = "OP")]
        ops: Vec<Operation>,

        #[command(flatten)]
        seeds: SeedArgs,
    },

    /// Pick nodes interactively
    Pick {
        /// Tree file (.json, .yaml, .yml, .toml)
        file: PathBuf,

        #[command(flatten)]
        seeds: SeedArgs,
    },

    /// Check a tree file for structural problems
    Validate {
        /// Tree file (.json, .yaml, .yml, .toml)
        file: PathBuf,
    },
}

/// One engine operation from `--op`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Expand(String),
    Collapse(String),
    ToggleExpand(String),
    Select(String),
    Check(String),
    Uncheck(String),
}

impl Operation {
    pub fn key(&self) -> &str {
        match self {
            Operation::Expand(key)
            | Operation::Collapse(key)
            | Operation::ToggleExpand(key)
            | Operation::Select(key)
            | Operation::Check(key)
            | Operation::Uncheck(key) => key,
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((verb, key)) = s.split_once(':') else {
            return Err(format!("expected VERB:KEY, got '{s}'"));
        };
        if key.is_empty() {
            return Err(format!("missing key in '{s}'"));
        }
        let key = key.to_string();
        match verb {
            "expand" => Ok(Operation::Expand(key)),
            "collapse" => Ok(Operation::Collapse(key)),
            "toggle" => Ok(Operation::ToggleExpand(key)),
            "select" => Ok(Operation::Select(key)),
            "check" => Ok(Operation::Check(key)),
            "uncheck" => Ok(Operation::Uncheck(key)),
            other => Err(format!(
                "unknown operation '{other}' (expected expand, collapse, toggle, select, check or uncheck)"
            )),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::Expand(_) => "expand",
            Operation::Collapse(_) => "collapse",
            Operation::ToggleExpand(_) => "toggle",
            Operation::Select(_) => "select",
            Operation::Check(_) => "check",
            Operation::Uncheck(_) => "uncheck",
        };
        write!(f, "{}:{}", verb, self.key())
    }
}
