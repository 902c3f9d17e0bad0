use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTodo => handle_adding_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Check off / uncheck the selected entry
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected()?;
            Ok(false)
        }

        // Delete the selected entry
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.remove_selected()?;
            Ok(false)
        }

        // Open the input bar
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the input bar is open
fn handle_adding_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit
        KeyCode::Enter => {
            app.submit_input()?;
            Ok(false)
        }

        // Cancel
        KeyCode::Esc => {
            app.cancel_add();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.input_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.input_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}
