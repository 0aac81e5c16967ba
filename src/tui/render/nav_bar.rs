use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::ops::view;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the nav bar: title, filter tabs, theme indicator, with separator
/// line below
pub fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let palette = app.palette();
    let bg_style = Style::default().bg(palette.surface);
    let sep = Span::styled("\u{2502}", Style::default().fg(palette.border).bg(palette.surface));

    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();

    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "TodoApp",
        Style::default()
            .fg(palette.text_bright)
            .bg(palette.surface)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" ", bg_style));
    sep_cols.push(spans_width(&spans));
    spans.push(sep.clone());

    let counts = app.session.counts();
    let current = app.session.filter();
    for mode in FilterMode::ALL {
        spans.push(Span::styled(
            format!(" {} ", view::tab_label(mode, &counts)),
            tab_style(app, mode == current),
        ));
        sep_cols.push(spans_width(&spans));
        spans.push(sep.clone());
    }

    // Theme indicator, right-aligned: the icon names the theme a toggle switches to
    let icon = if app.session.is_dark() { "\u{2600}" } else { "\u{263E}" };
    let indicator = vec![
        Span::styled(icon, Style::default().fg(palette.yellow).bg(palette.surface)),
        Span::styled(
            format!(" {} ", app.session.theme()),
            Style::default().fg(palette.dim).bg(palette.surface),
        ),
    ];
    let used = spans_width(&spans);
    let indicator_width = spans_width(&indicator);
    let width = area.width as usize;
    if used + indicator_width < width {
        spans.push(Span::styled(" ".repeat(width - used - indicator_width), bg_style));
        spans.extend(indicator);
    }

    let tabs = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let palette = app.palette();
    let width = area.width as usize;
    let line: String = (0..width)
        .map(|col| if sep_cols.contains(&col) { '\u{2534}' } else { '\u{2500}' })
        .collect();
    let sep_widget =
        Paragraph::new(line).style(Style::default().fg(palette.border).bg(palette.background));
    frame.render_widget(sep_widget, area);
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    let palette = app.palette();
    if is_current {
        Style::default()
            .fg(palette.surface)
            .bg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text).bg(palette.surface)
    }
}

fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn tabs_show_counts() {
        let app = sample_app();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_nav_bar(frame, &app, area);
        });
        let first = output.lines().next().unwrap();
        assert!(first.contains("TodoApp"));
        assert!(first.contains("All (4)"));
        assert!(first.contains("Active (3)"));
        assert!(first.contains("Completed (1)"));
        assert!(first.ends_with("light"));
    }

    #[test]
    fn separator_marks_tab_edges() {
        let app = sample_app();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_nav_bar(frame, &app, area);
        });
        let sep = output.lines().nth(1).unwrap();
        assert_eq!(sep.matches('\u{2534}').count(), 4);
    }

    #[test]
    fn dark_theme_indicator() {
        let mut app = sample_app();
        app.session.toggle_theme();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_nav_bar(frame, &app, area);
        });
        assert!(output.lines().next().unwrap().ends_with("dark"));
    }
}
