//! Controlled / uncontrolled ownership of a state concern.

use serde::Serialize;

/// Who owns a piece of engine state
///
/// Decided once at construction, independently for expansion and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcernMode {
    /// The caller owns the value and feeds it back in; the engine only
    /// reports intended changes.
    Controlled,
    /// The engine owns and mutates its own copy.
    #[default]
    Uncontrolled,
}

impl ConcernMode {
    /// Mode implied by whether the caller supplied a live value
    pub fn from_supplied<T>(value: &Option<T>) -> Self {
        if value.is_some() {
            ConcernMode::Controlled
        } else {
            ConcernMode::Uncontrolled
        }
    }

    pub fn is_controlled(self) -> bool {
        self == ConcernMode::Controlled
    }
}
