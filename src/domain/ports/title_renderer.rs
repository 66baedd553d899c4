//! Title Rendering Port
//!
//! Presentation layers turn nodes into display text through an injected
//! strategy; the engine never looks at titles itself.

use crate::domain::entities::TreeNode;

/// Formats a node for display
pub trait TitleRenderer: Send + Sync {
    fn render_title(&self, node: &TreeNode) -> String;
}

impl<F> TitleRenderer for F
where
    F: Fn(&TreeNode) -> String + Send + Sync,
{
    fn render_title(&self, node: &TreeNode) -> String {
        self(node)
    }
}

/// Renders the node title as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTitle;

impl TitleRenderer for PlainTitle {
    fn render_title(&self, node: &TreeNode) -> String {
        node.title.clone()
    }
}
