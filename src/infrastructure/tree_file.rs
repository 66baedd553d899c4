//! Tree data files
//!
//! Loads caller-supplied trees from JSON, YAML or TOML. A file holds either
//! a bare array of nodes or an object with a `treeData` / `tree_data`
//! array (TOML only supports the object form).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::TreeNode;
use crate::error::{TreeSelectError, TreeSelectResult};

/// Supported tree file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Json,
    Yaml,
    Toml,
}

impl TreeFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> TreeSelectResult<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(TreeFormat::Json),
            "yaml" | "yml" => Ok(TreeFormat::Yaml),
            "toml" => Ok(TreeFormat::Toml),
            _ => Err(TreeSelectError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TreeDocument {
    Nodes(Vec<TreeNode>),
    Wrapped {
        #[serde(rename = "treeData", alias = "tree_data")]
        tree_data: Vec<TreeNode>,
    },
}

impl TreeDocument {
    fn into_nodes(self) -> Vec<TreeNode> {
        match self {
            TreeDocument::Nodes(nodes) => nodes,
            TreeDocument::Wrapped { tree_data } => tree_data,
        }
    }
}

/// Load a tree file, detecting the format from its extension
pub fn load_tree_file(path: &Path) -> TreeSelectResult<Vec<TreeNode>> {
    if !path.exists() {
        return Err(TreeSelectError::TreeFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = TreeFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_tree(&content, format, path)
}

/// Parse tree content in a given format
///
/// `origin` is only used for error messages.
pub fn parse_tree(
    content: &str,
    format: TreeFormat,
    origin: &Path,
) -> TreeSelectResult<Vec<TreeNode>> {
    let invalid = |message: String| TreeSelectError::InvalidTreeData {
        file: PathBuf::from(origin),
        message,
    };

    let document: TreeDocument = match format {
        TreeFormat::Json => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
        TreeFormat::Yaml => {
            serde_yaml_ng::from_str(content).map_err(|e| invalid(e.to_string()))?
        }
        TreeFormat::Toml => toml::from_str(content).map_err(|e| invalid(e.to_string()))?,
    };

    let mut nodes = document.into_nodes();
    for node in &mut nodes {
        node.normalize();
    }
    Ok(nodes)
}
