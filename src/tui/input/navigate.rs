use crossterm::event::{KeyCode, KeyEvent};

use crate::model::FilterMode;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Add field
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.mode = Mode::Input;
            app.input_cursor = app.input_buffer.len();
        }

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible().len();
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible().len().saturating_sub(1);
        }

        // Task actions
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('C') => app.clear_completed(),

        // Filters
        KeyCode::Char('1') => app.set_filter(FilterMode::All),
        KeyCode::Char('2') => app.set_filter(FilterMode::Active),
        KeyCode::Char('3') => app.set_filter(FilterMode::Completed),
        KeyCode::Tab => {
            let next = app.session.filter().next();
            app.set_filter(next);
        }
        KeyCode::Char('m') => {
            let current = app.session.filter();
            app.menu = FilterMode::ALL.iter().position(|m| *m == current);
        }

        KeyCode::Char('t') => {
            app.session.toggle_theme();
        }
        _ => {}
    }
}
