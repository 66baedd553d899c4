//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{TreeSelectError, TreeSelectResult};

use super::types::{Config, UnicodeMode, Verbosity};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "treeselect.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreeSelectResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreeSelectError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file to use and load it
///
/// An explicit path must exist and parse. Discovered project/user files are
/// loaded when present. Environment overrides are applied on top.
pub fn discover(
    explicit: Option<&Path>,
    project_root: &Path,
) -> TreeSelectResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = [
        Some(project_root.join(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];

    for candidate in candidates.into_iter().flatten() {
        if candidate.exists() {
            debug!(path = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (TREESELECT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary environment lookup
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    let flag = |key: &str, current: bool| -> bool {
        match get_env(key) {
            Some(val) => {
                let v = val.trim().to_lowercase();
                !(v == "false" || v == "0" || v == "no" || v.is_empty())
            }
            None => current,
        }
    };

    config.tree.checkable = flag("TREESELECT_CHECKABLE", config.tree.checkable);
    config.tree.multiple = flag("TREESELECT_MULTIPLE", config.tree.multiple);
    config.tree.expand_all = flag("TREESELECT_EXPAND_ALL", config.tree.expand_all);
    config.tree.show_line = flag("TREESELECT_SHOW_LINE", config.tree.show_line);
    config.tree.show_icon = flag("TREESELECT_SHOW_ICON", config.tree.show_icon);
    config.tree.auto_expand_parent = flag(
        "TREESELECT_AUTO_EXPAND_PARENT",
        config.tree.auto_expand_parent,
    );

    // TREESELECT_VERBOSITY
    if let Some(verbosity) = get_env("TREESELECT_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // TREESELECT_UNICODE
    if let Some(unicode) = get_env("TREESELECT_UNICODE") {
        config.output.unicode = match unicode.to_lowercase().as_str() {
            "always" | "true" | "1" => UnicodeMode::Always,
            "never" | "false" | "0" => UnicodeMode::Never,
            _ => UnicodeMode::Auto,
        };
    }

    config
}

/// `<config dir>/treeselect/config.toml`
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("treeselect").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tree",
        "checkable",
        "expand_all",
        "multiple",
        "show_icon",
        "show_line",
        "auto_expand_parent",
        "output",
        "verbosity",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
