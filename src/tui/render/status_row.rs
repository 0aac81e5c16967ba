use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

const NAVIGATE_HINTS: &str =
    "a add  \u{2423} toggle  d delete  1-3/Tab filter  C clear  t theme  ? help  q quit";
const INPUT_HINTS: &str = "Enter add  Esc done";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let bg = palette.background;

    let (label, hints) = match app.mode {
        Mode::Navigate => ("", NAVIGATE_HINTS),
        Mode::Input => ("-- ADD --", INPUT_HINTS),
    };

    let mut spans = vec![Span::styled(
        format!(" {label}"),
        Style::default().fg(palette.highlight).bg(bg),
    )];
    if app.show_key_hints {
        let width = area.width as usize;
        let content_width = label.chars().count() + 1;
        let hint_width = hints.chars().count() + 1;
        if content_width + hint_width <= width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                format!("{hints} "),
                Style::default().fg(palette.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn navigate_hints() {
        let app = sample_app();
        let output = render_to_string(120, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.ends_with("q quit"));
    }

    #[test]
    fn input_mode_label() {
        let mut app = sample_app();
        app.mode = Mode::Input;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.contains("-- ADD --"));
        assert!(output.ends_with("Esc done"));
    }

    #[test]
    fn hints_can_be_hidden() {
        let mut app = sample_app();
        app.show_key_hints = false;
        let output = render_to_string(120, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.is_empty());
    }

    #[test]
    fn hints_dropped_when_too_narrow() {
        let app = sample_app();
        let output = render_to_string(20, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(!output.contains("quit"));
    }
}
