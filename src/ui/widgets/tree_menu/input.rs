//! Keyboard input handling and interactive loop.
//!
//! This module provides functions for mapping keyboard events to tree actions
//! and running the interactive terminal loop.

use crossterm::event::KeyEvent;

use crate::ui::theme::{colors, Glyphs};

use super::menu::{TreeAction, TreeMenu};

/// Lines taken by the header, separator, status and help bars
const CHROME_LINES: u16 = 8;

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Check),
        KeyCode::Char('s') => Some(TreeAction::Select),
        KeyCode::Tab => Some(TreeAction::ToggleExpand),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('a') => Some(TreeAction::CheckAll),
        KeyCode::Char('n') => Some(TreeAction::CheckNone),
        KeyCode::Char('i') => Some(TreeAction::Invert),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Run the tree menu interactively
/// Returns the confirmed keys, None if quit
pub fn run_interactive(
    menu: &mut TreeMenu,
    glyphs: &Glyphs,
    header: &str,
) -> std::io::Result<Option<Vec<String>>> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute, queue,
        style::{Print, ResetColor, SetForegroundColor},
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    let render_ui = |stdout: &mut std::io::Stdout, menu: &TreeMenu| -> std::io::Result<()> {
        let (width, height) = terminal::size().unwrap_or((80, 24));
        let window = menu.window(height.saturating_sub(CHROME_LINES) as usize);

        queue!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            SetForegroundColor(colors::INFO),
            Print(header),
            ResetColor,
            SetForegroundColor(colors::DIM),
            Print(format!(
                "  ({}/{})",
                (menu.cursor_position() + 1).min(menu.rows().len()),
                menu.rows().len()
            )),
            ResetColor,
            Print("\r\n\r\n")
        )?;

        let rendered = menu.render_window(glyphs, Some(width as usize), window);
        for line in rendered.lines() {
            queue!(stdout, Print(line), Print("\r\n"))?;
        }

        let separator = glyphs.separator.repeat((width as usize).min(64));
        queue!(
            stdout,
            SetForegroundColor(colors::DIM),
            Print(separator),
            ResetColor,
            Print("\r\n")
        )?;

        for line in menu.render_status_bar(glyphs).lines() {
            queue!(stdout, Print(line), Print("\r\n"))?;
        }
        queue!(stdout, Print("\r\n"), SetForegroundColor(colors::DIM))?;
        for line in menu.render_help_bar().lines() {
            queue!(stdout, Print(line), Print("\r\n"))?;
        }
        queue!(stdout, ResetColor)?;

        stdout.flush()
    };

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, cursor::Hide)?;

    let outcome = (|| -> std::io::Result<Option<Vec<String>>> {
        render_ui(&mut stdout, menu)?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key) {
                    match action {
                        TreeAction::Confirm => return Ok(Some(menu.confirmed_keys())),
                        TreeAction::Quit => return Ok(None),
                        _ => {
                            menu.handle_action(action);
                            render_ui(&mut stdout, menu)?;
                        }
                    }
                }
            } else {
                // Resize and friends
                render_ui(&mut stdout, menu)?;
            }
        }
    })();

    // Restore terminal even when the loop failed.
    let restore = execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    );
    terminal::disable_raw_mode()?;
    restore?;

    outcome
}
