use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// "<n> active   <n> completed   Clear completed (C)"
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let bg = palette.surface;
    let width = area.width as usize;
    let counts = app.session.counts();

    let left = format!(" {} active", counts.active);
    let middle = format!("{} completed", counts.completed);
    // Only offered when there is something to clear
    let right = if counts.completed > 0 {
        "Clear completed (C) ".to_string()
    } else {
        String::new()
    };

    let used = unicode::display_width(&left)
        + unicode::display_width(&middle)
        + unicode::display_width(&right);
    let gap = width.saturating_sub(used);
    let (gap_left, gap_right) = if right.is_empty() {
        (gap.saturating_sub(1).max(1), 0)
    } else {
        (gap / 2, gap - gap / 2)
    };

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(palette.dim).bg(bg)),
        Span::styled(" ".repeat(gap_left), Style::default().bg(bg)),
        Span::styled(middle, Style::default().fg(palette.dim).bg(bg)),
        Span::styled(" ".repeat(gap_right), Style::default().bg(bg)),
        Span::styled(right, Style::default().fg(palette.red).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_counts_and_clear_hint() {
        let app = sample_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_footer(frame, &app, area);
        });
        assert!(output.starts_with(" 3 active"));
        assert!(output.contains("1 completed"));
        assert!(output.ends_with("Clear completed (C)"));
    }

    #[test]
    fn no_clear_hint_without_completed() {
        let mut app = sample_app();
        app.clear_completed();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_footer(frame, &app, area);
        });
        assert!(output.contains("3 active"));
        assert!(output.ends_with("0 completed"));
        assert!(!output.contains("Clear completed"));
    }
}
