use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const PLACEHOLDER: &str = "Add a new todo...";

/// Page title and tagline
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let lines = vec![
        Line::from(Span::styled(
            "My Tasks",
            Style::default()
                .fg(palette.text_bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Stay organized and productive",
            Style::default().fg(palette.dim),
        )),
    ];
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette.background));
    frame.render_widget(header, area);
}

/// The add field. Shows the placeholder when empty; places the terminal
/// cursor while focused.
pub fn render_input_box(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let focused = app.mode == Mode::Input;
    let border_color = if focused { palette.highlight } else { palette.border };

    let hint = if focused { " Enter add " } else { " a add " };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(palette.surface))
        .title_bottom(
            Line::from(Span::styled(hint, Style::default().fg(palette.dim))).right_aligned(),
        )
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);

    // Leave one cell for the cursor past the last character
    let width = inner.width.saturating_sub(1) as usize;
    let visible = unicode::tail_to_width(&app.input_buffer, app.input_cursor, width);
    let start = app.input_buffer.len() - visible.len();

    let line = if app.input_buffer.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(palette.dim)))
    } else {
        Line::from(Span::styled(
            visible.to_string(),
            Style::default().fg(palette.text_bright),
        ))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let col = unicode::byte_offset_to_display_col(visible, app.input_cursor - start);
        frame.set_cursor_position(Position::new(inner.x + col as u16, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_lines() {
        let app = sample_app();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains("My Tasks"));
        assert!(output.contains("Stay organized and productive"));
    }

    #[test]
    fn placeholder_when_empty() {
        let app = sample_app();
        let output = render_to_string(40, 3, |frame, area| {
            render_input_box(frame, &app, area);
        });
        assert!(output.contains("Add a new todo..."));
    }

    #[test]
    fn shows_draft_text() {
        let mut app = sample_app();
        app.mode = Mode::Input;
        app.input_buffer = "buy milk".into();
        app.input_cursor = app.input_buffer.len();
        let output = render_to_string(40, 3, |frame, area| {
            render_input_box(frame, &app, area);
        });
        assert!(output.contains("buy milk"));
        assert!(!output.contains("Add a new todo..."));
        assert!(output.contains("Enter add"));
    }

    #[test]
    fn long_draft_scrolls_to_cursor() {
        let mut app = sample_app();
        app.mode = Mode::Input;
        app.input_buffer = format!("{}END", "x".repeat(60));
        app.input_cursor = app.input_buffer.len();
        let output = render_to_string(20, 3, |frame, area| {
            render_input_box(frame, &app, area);
        });
        assert!(output.lines().nth(1).unwrap().contains("END"));
    }
}
