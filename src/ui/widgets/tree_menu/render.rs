//! Terminal rendering functions for tree menu.
//!
//! This module provides functions to render visible rows, status bars,
//! and help text to strings for terminal output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use treeselect::{CheckState, HierarchicalSelectionEngine, TitleRenderer, TreeFlags, VisibleRow};

use crate::ui::theme::Glyphs;

/// Render a single visible row to a string
///
/// `cursor` is `None` for static output (no cursor column), otherwise
/// whether this row is the active one.
pub fn render_tree_row(
    row: &VisibleRow,
    title: &str,
    cursor: Option<bool>,
    flags: TreeFlags,
    glyphs: &Glyphs,
) -> String {
    let mut line = String::new();

    match cursor {
        Some(true) => line.push_str("> "),
        Some(false) => line.push_str("  "),
        None => {}
    }

    if flags.show_line {
        if row.depth > 0 {
            for ancestor_last in row.ancestors_last.iter().skip(1) {
                line.push_str(if *ancestor_last {
                    "   "
                } else {
                    glyphs.line_pipe
                });
            }
            line.push_str(if row.is_last {
                glyphs.line_elbow
            } else {
                glyphs.line_tee
            });
        }
    } else {
        line.push_str(&"  ".repeat(row.depth));
    }

    if row.has_children {
        line.push_str(if row.expanded {
            glyphs.expand
        } else {
            glyphs.collapse
        });
        line.push(' ');
    } else {
        line.push_str("  ");
    }

    if row.checkbox {
        line.push_str(match row.check_state {
            CheckState::Checked => glyphs.checked,
            CheckState::Indeterminate => glyphs.partial,
            CheckState::Unchecked => glyphs.unchecked,
        });
        line.push(' ');
    }

    if flags.show_icon {
        line.push_str(if row.has_children {
            glyphs.branch
        } else {
            glyphs.leaf
        });
        line.push(' ');
    }

    if row.selected {
        line.push_str(glyphs.selected);
        line.push(' ');
    }

    line.push_str(title);

    if row.disabled {
        line.push_str(" (disabled)");
    }

    line
}

/// Render the engine's visible rows, one per line
pub fn render_tree(
    engine: &HierarchicalSelectionEngine,
    renderer: &dyn TitleRenderer,
    glyphs: &Glyphs,
    cursor: Option<usize>,
    width: Option<usize>,
) -> String {
    let rows = engine.visible_rows();
    render_rows(engine, &rows, renderer, glyphs, cursor, width)
}

/// Render an already-flattened slice of rows
pub(crate) fn render_rows(
    engine: &HierarchicalSelectionEngine,
    rows: &[VisibleRow],
    renderer: &dyn TitleRenderer,
    glyphs: &Glyphs,
    cursor: Option<usize>,
    width: Option<usize>,
) -> String {
    let flags = engine.flags();
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let title = engine
                .node_at(row.pos)
                .map(|node| renderer.render_title(node))
                .unwrap_or_else(|| row.key.clone());
            let line = render_tree_row(row, &title, cursor.map(|c| c == i), flags, glyphs);
            match width {
                Some(max) => truncate_to_width(&line, max, glyphs.ellipsis),
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the status bar showing check/selection counts
pub fn render_status_bar(engine: &HierarchicalSelectionEngine, glyphs: &Glyphs) -> String {
    let selected = engine.selected_keys().len();

    if engine.flags().checkable {
        format!(
            "Checked: {}/{} leaves    Selected: {}\n\n{} = checked    {} = partial    {} = not checked",
            engine.checked_leaf_count(),
            engine.leaf_count(),
            selected,
            glyphs.checked,
            glyphs.partial,
            glyphs.unchecked
        )
    } else {
        format!("Selected: {}\n\n{} = selected", selected, glyphs.selected)
    }
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(checkable: bool) -> String {
    if checkable {
        String::from(
            "[Space] Check    [s] Select    [a] All    [n] None    [i] Invert    [Enter] Confirm    [q] Quit\n\
             (Use ↑↓ to navigate, →← to expand/collapse, Tab to toggle)",
        )
    } else {
        String::from(
            "[Space] Select    [Enter] Confirm    [q] Quit\n\
             (Use ↑↓ to navigate, →← to expand/collapse, Tab to toggle)",
        )
    }
}

/// Cut `line` to at most `max` display columns, ending with `ellipsis`
pub fn truncate_to_width(line: &str, max: usize, ellipsis: &str) -> String {
    if line.width() <= max {
        return line.to_string();
    }

    let budget = max.saturating_sub(ellipsis.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if ellipsis.width() <= max {
        out.push_str(ellipsis);
    }
    out
}
