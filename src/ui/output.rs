//! Styled stderr messages.

use crossterm::style::Stylize;

use crate::ui::theme::colors;

pub fn warning_line(message: &str, color: bool) -> String {
    if color {
        format!("{} {message}", "Warning:".with(colors::WARNING).bold())
    } else {
        format!("Warning: {message}")
    }
}

pub fn error_line(message: &str, color: bool) -> String {
    if color {
        format!("{} {message}", "Error:".with(colors::ERROR).bold())
    } else {
        format!("Error: {message}")
    }
}
