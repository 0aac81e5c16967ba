use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Keys while the add field has focus
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.mode = Mode::Navigate,
        // Field keeps focus after submit so several tasks can be typed in a row
        (_, KeyCode::Enter) => app.submit_input(),

        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_cursor = next;
            }
        }
        (_, KeyCode::Home) => app.input_cursor = 0,
        (_, KeyCode::End) => app.input_cursor = app.input_buffer.len(),
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => app.input_cursor = 0,
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = app.input_buffer.len();
        }
        // Ctrl+U: clear to start of field
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_buffer.drain(..app.input_cursor);
            app.input_cursor = 0;
        }

        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_buffer.drain(prev..app.input_cursor);
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_buffer.drain(app.input_cursor..next);
            }
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            app.input_buffer.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }
        _ => {}
    }
}
