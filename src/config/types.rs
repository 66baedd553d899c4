//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::selection::{EngineOptions, TreeFlags};
use crate::domain::value_objects::ConfigWarning;
use crate::error::TreeSelectResult;

use super::loader;

/// Tree behaviour configuration (`[tree]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TreeConfig {
    #[serde(default)]
    pub checkable: bool,

    #[serde(default)]
    pub expand_all: bool,

    #[serde(default)]
    pub multiple: bool,

    #[serde(default)]
    pub show_icon: bool,

    #[serde(default)]
    pub show_line: bool,

    #[serde(default)]
    pub auto_expand_parent: bool,
}

impl TreeConfig {
    /// Presentation/behaviour flags for the engine
    pub fn flags(&self) -> TreeFlags {
        TreeFlags {
            checkable: self.checkable,
            expand_all: self.expand_all,
            multiple: self.multiple,
            show_icon: self.show_icon,
            show_line: self.show_line,
        }
    }

    /// Engine options seeded from this config
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions::new()
            .with_flags(self.flags())
            .with_auto_expand_parent(self.auto_expand_parent)
    }
}

/// Output configuration (`[output]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub unicode: UnicodeMode,
}

/// Glyph set selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnicodeMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Equivalent `-v` count
    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TreeSelectResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TreeSelectResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, project config, user config, or defaults
    pub fn discover(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> TreeSelectResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, project_root)
    }

    /// Apply environment variable overrides (TREESELECT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
