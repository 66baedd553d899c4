//! Error types for treeselect
//!
//! Engine operations never fail; errors only come from the I/O edges
//! (tree files and config files).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treeselect operations
pub type TreeSelectResult<T> = Result<T, TreeSelectError>;

/// Main error type for treeselect operations
#[derive(Error, Debug)]
pub enum TreeSelectError {
    /// Tree file does not exist
    #[error("tree file not found: {path}")]
    TreeFileNotFound { path: PathBuf },

    /// Tree file extension is not one of json, yaml, yml, toml
    #[error("unsupported tree file format '{extension}' for {path} (expected json, yaml or toml)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Tree file could not be parsed
    #[error("invalid tree data in {file}: {message}")]
    InvalidTreeData { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error outside of a specific file (event output)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
