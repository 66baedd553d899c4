//! TreeMenu state management and action handling.
//!
//! The menu owns a [`HierarchicalSelectionEngine`] and a cursor over its
//! visible rows. Every action goes through the engine, so the event sink
//! sees exactly what a programmatic caller would.

use std::ops::Range;

use treeselect::{
    CheckState, HierarchicalSelectionEngine, Interaction, PlainTitle, TitleRenderer, VisibleRow,
};

use crate::ui::theme::Glyphs;

use super::render::{render_help_bar, render_rows, render_status_bar};

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Expand node
    Expand,
    /// Collapse node, or jump to the parent when already collapsed
    Collapse,
    /// Flip expansion
    ToggleExpand,
    /// Toggle the checkbox (falls back to Select when checkboxes are off)
    Check,
    /// Select the node
    Select,
    /// Check everything
    CheckAll,
    /// Uncheck everything
    CheckNone,
    /// Invert leaf check states
    Invert,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// Interactive tree menu over a selection engine
pub struct TreeMenu {
    engine: HierarchicalSelectionEngine,
    /// Current cursor position in the visible rows
    cursor: usize,
    /// Cached visible rows for rendering
    rows: Vec<VisibleRow>,
    renderer: Box<dyn TitleRenderer>,
}

impl TreeMenu {
    pub fn new(engine: HierarchicalSelectionEngine) -> Self {
        let mut menu = Self {
            engine,
            cursor: 0,
            rows: Vec::new(),
            renderer: Box::new(PlainTitle),
        };
        menu.rebuild_rows();
        menu
    }

    pub fn with_renderer(mut self, renderer: Box<dyn TitleRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn engine(&self) -> &HierarchicalSelectionEngine {
        &self.engine
    }

    /// Rebuild the visible row list, keeping the cursor on the same key
    pub fn rebuild_rows(&mut self) {
        let current = self.rows.get(self.cursor).map(|row| row.key.clone());
        self.rows = self.engine.visible_rows();

        if let Some(key) = current {
            if let Some(i) = self.rows.iter().position(|row| row.key == key) {
                self.cursor = i;
                return;
            }
        }
        // Ensure cursor is within bounds
        if !self.rows.is_empty() && self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    pub fn rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn current_row(&self) -> Option<&VisibleRow> {
        self.rows.get(self.cursor)
    }

    /// Handle a tree action
    ///
    /// Returns true when the menu should close (confirm or quit).
    pub fn handle_action(&mut self, action: TreeAction) -> bool {
        match action {
            TreeAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                false
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
                false
            }
            TreeAction::Expand => {
                if let Some(row) = self.current_row() {
                    if row.has_children && !row.expanded {
                        let key = row.key.clone();
                        self.engine.expand(&key);
                    }
                }
                self.rebuild_rows();
                false
            }
            TreeAction::Collapse => {
                if let Some(row) = self.current_row() {
                    if row.expanded {
                        let key = row.key.clone();
                        self.engine.collapse(&key);
                    } else {
                        self.move_to_parent();
                    }
                }
                self.rebuild_rows();
                false
            }
            TreeAction::ToggleExpand => {
                if let Some(row) = self.current_row() {
                    let key = row.key.clone();
                    self.engine.toggle_expand(&key);
                }
                self.rebuild_rows();
                false
            }
            TreeAction::Check => {
                if let Some(row) = self.current_row() {
                    let key = row.key.clone();
                    if self.engine.flags().checkable {
                        self.engine.toggle_check(&key);
                    } else {
                        self.engine.select(&key, Interaction::Keyboard);
                    }
                }
                self.rebuild_rows();
                false
            }
            TreeAction::Select => {
                if let Some(row) = self.current_row() {
                    let key = row.key.clone();
                    self.engine.select(&key, Interaction::Keyboard);
                }
                self.rebuild_rows();
                false
            }
            TreeAction::CheckAll => {
                self.check_all();
                self.rebuild_rows();
                false
            }
            TreeAction::CheckNone => {
                self.check_none();
                self.rebuild_rows();
                false
            }
            TreeAction::Invert => {
                self.invert();
                self.rebuild_rows();
                false
            }
            TreeAction::Confirm => true,
            TreeAction::Quit => true,
        }
    }

    /// Keys handed back on confirm: checked keys with checkboxes, selected otherwise
    pub fn confirmed_keys(&self) -> Vec<String> {
        if self.engine.flags().checkable {
            self.engine.checked_keys()
        } else {
            self.engine.selected_keys()
        }
    }

    fn move_to_parent(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        let Some(parent) = self
            .engine
            .index()
            .entry(row.pos)
            .and_then(|entry| entry.parent)
        else {
            return;
        };
        if let Some(i) = self.rows.iter().position(|r| r.pos == parent) {
            self.cursor = i;
        }
    }

    fn check_all(&mut self) {
        let index = self.engine.index();
        let targets: Vec<(usize, String)> = index
            .entries()
            .iter()
            .enumerate()
            .map(|(pos, entry)| (pos, entry.key.clone()))
            .collect();

        // Checking a node covers its subtree, so later descendants are
        // already checked and skipped.
        for (pos, key) in targets {
            let checkable = self
                .engine
                .node_at(pos)
                .is_some_and(|node| node.is_checkable());
            if checkable && self.engine.check_state_at(pos) != Some(CheckState::Checked) {
                self.engine.check(&key, true);
            }
        }
    }

    fn check_none(&mut self) {
        self.engine.clear_checked();
    }

    fn invert(&mut self) {
        let index = self.engine.index();
        let leaves: Vec<(String, bool)> = index
            .leaves()
            .into_iter()
            .filter_map(|pos| {
                let entry = index.entry(pos)?;
                let checked = self.engine.check_state_at(pos) == Some(CheckState::Checked);
                Some((entry.key.clone(), checked))
            })
            .collect();

        for (key, was_checked) in leaves {
            self.engine.check(&key, !was_checked);
        }
    }

    /// Rows that fit in `height` lines, scrolled to keep the cursor visible
    pub fn window(&self, height: usize) -> Range<usize> {
        let len = self.rows.len();
        if height == 0 || len <= height {
            return 0..len;
        }
        let start = (self.cursor + 1).saturating_sub(height);
        start..(start + height).min(len)
    }

    pub fn render_window(
        &self,
        glyphs: &Glyphs,
        width: Option<usize>,
        window: Range<usize>,
    ) -> String {
        let start = window.start;
        let rows = self.rows.get(window).unwrap_or_default();
        render_rows(
            &self.engine,
            rows,
            self.renderer.as_ref(),
            glyphs,
            self.cursor.checked_sub(start),
            width,
        )
    }

    pub fn render_status_bar(&self, glyphs: &Glyphs) -> String {
        render_status_bar(&self.engine, glyphs)
    }

    pub fn render_help_bar(&self) -> String {
        render_help_bar(self.engine.flags().checkable)
    }
}
