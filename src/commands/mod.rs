//! Subcommand implementations

pub mod apply;
pub mod pick;
pub mod show;
pub mod validate;

use treeselect::config::{OutputConfig, TreeConfig};
use treeselect::{PlainTitle, TitleRenderer, TreeNode};

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::Glyphs;

use crate::presentation::factory::create_glyphs;

/// Settings shared by every subcommand, resolved once in `main`
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub json: bool,
    pub show_keys: bool,
    pub tree: TreeConfig,
    pub caps: TerminalCapabilities,
    pub glyphs: Glyphs,
}

impl CommandContext {
    pub fn new(
        json: bool,
        ascii: bool,
        show_keys: bool,
        tree: TreeConfig,
        output: OutputConfig,
    ) -> Self {
        let caps = detect_capabilities();
        let glyphs = create_glyphs(ascii, output.unicode, &caps);
        Self {
            json,
            show_keys,
            tree,
            caps,
            glyphs,
        }
    }

    /// Title formatting for rendered rows
    pub fn title_renderer(&self) -> Box<dyn TitleRenderer> {
        if self.show_keys {
            Box::new(title_with_key)
        } else {
            Box::new(PlainTitle)
        }
    }

    /// Width to truncate rendered rows to; unbounded when piped
    pub fn render_width(&self) -> Option<usize> {
        self.caps.is_tty.then_some(self.caps.width as usize)
    }
}

fn title_with_key(node: &TreeNode) -> String {
    if node.title == node.key {
        node.title.clone()
    } else {
        format!("{} [{}]", node.title, node.key)
    }
}

/// Comma-joined keys, or `(none)`
pub(crate) fn format_keys(keys: &[String]) -> String {
    if keys.is_empty() {
        "(none)".to_string()
    } else {
        keys.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_with_key_skips_redundant_keys() {
        assert_eq!(title_with_key(&TreeNode::new("a", "Alpha")), "Alpha [a]");
        assert_eq!(title_with_key(&TreeNode::new("b", "b")), "b");
    }

    #[test]
    fn format_keys_handles_empty() {
        assert_eq!(format_keys(&[]), "(none)");
        assert_eq!(format_keys(&["a".to_string(), "b".to_string()]), "a, b");
    }
}
