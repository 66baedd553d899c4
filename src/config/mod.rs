//! Configuration module for treeselect
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREESELECT_*)
//! 3. Explicit `--config` file, else project config (./treeselect.toml)
//! 4. User config (~/.config/treeselect/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{with_env_overrides_from, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, TreeConfig, UnicodeMode, Verbosity};
