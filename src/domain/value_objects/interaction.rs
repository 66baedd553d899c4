//! Origin of a selection interaction.

use serde::Serialize;

/// What triggered a select operation
///
/// Stands in for the originating UI event in select notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Interaction {
    /// Mouse or touch activation
    Pointer,
    /// Keyboard activation
    Keyboard,
    /// Called from code (scripts, `apply`)
    #[default]
    Programmatic,
}
