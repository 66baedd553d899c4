//! Selection Engine Options
//!
//! Construction inputs for the selection engine: presentation flags, live
//! (controlled) values and one-shot (uncontrolled) seeds.

use serde::{Deserialize, Serialize};

/// Recognized tree flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeFlags {
    /// Render checkboxes
    #[serde(default)]
    pub checkable: bool,
    /// Seed expansion with every node when nothing else is supplied
    #[serde(default)]
    pub expand_all: bool,
    /// Multi-select (toggle) instead of single-select (replace)
    #[serde(default)]
    pub multiple: bool,
    /// Render node icons
    #[serde(default)]
    pub show_icon: bool,
    /// Render connector lines
    #[serde(default)]
    pub show_line: bool,
}

/// Options for constructing a selection engine
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub flags: TreeFlags,
    /// Live expanded keys; presence makes expansion controlled
    pub expanded_keys: Option<Vec<String>>,
    /// Live selected keys; presence makes selection controlled
    pub selected_keys: Option<Vec<String>>,
    pub default_expanded_keys: Vec<String>,
    pub default_selected_keys: Vec<String>,
    pub default_checked_keys: Vec<String>,
    /// Expanding a node also expands all of its ancestors
    pub auto_expand_parent: bool,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(mut self, flags: TreeFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn checkable(mut self, checkable: bool) -> Self {
        self.flags.checkable = checkable;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.flags.multiple = multiple;
        self
    }

    pub fn expand_all(mut self, expand_all: bool) -> Self {
        self.flags.expand_all = expand_all;
        self
    }

    /// Put expansion under caller control
    pub fn with_expanded_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Put selection under caller control
    pub fn with_selected_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_default_expanded_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_expanded_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default_selected_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_selected_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default_checked_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_checked_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_auto_expand_parent(mut self, auto_expand_parent: bool) -> Self {
        self.auto_expand_parent = auto_expand_parent;
        self
    }
}
