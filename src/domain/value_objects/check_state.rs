//! Tri-state checkbox value object.

use serde::Serialize;

/// Display state of a node's checkbox
///
/// `Indeterminate` is always derived from the subtree and can never be
/// toggled into directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// Node is explicitly checked or its whole subtree is (●)
    Checked,
    /// Nothing in the subtree is checked (○)
    Unchecked,
    /// Some but not all of the subtree is checked (◐)
    Indeterminate,
}

impl CheckState {
    /// Whether the node counts as fully checked
    pub fn is_checked(self) -> bool {
        matches!(self, CheckState::Checked)
    }

    /// Whether the node shows the partial marker
    pub fn is_indeterminate(self) -> bool {
        matches!(self, CheckState::Indeterminate)
    }
}
