use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// "Showing: <filter> tasks"
pub fn render_showing_line(frame: &mut Frame, app: &App, area: Rect) {
    let palette = app.palette();
    let filter = app.session.filter();
    let line = Line::from(vec![
        Span::styled("Showing: ", Style::default().fg(palette.dim)),
        Span::styled(
            filter.title(),
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" tasks", Style::default().fg(palette.dim)),
    ]);
    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette.background));
    frame.render_widget(widget, area);
}

/// The filtered task list, or the empty-state label
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = app.palette().clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border).bg(palette.surface))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = app.session.visible();
    if visible.is_empty() {
        let label = Paragraph::new(Span::styled(
            app.session.empty_label(),
            Style::default().fg(palette.dim),
        ))
        .alignment(Alignment::Center);
        let row = Rect {
            y: inner.y + inner.height / 2,
            height: inner.height.min(1),
            ..inner
        };
        frame.render_widget(label, row);
        return;
    }

    // Keep the cursor row on screen
    let height = inner.height as usize;
    let mut scroll = app.scroll_offset;
    if app.cursor < scroll {
        scroll = app.cursor;
    } else if height > 0 && app.cursor >= scroll + height {
        scroll = app.cursor + 1 - height;
    }
    scroll = scroll.min(visible.len().saturating_sub(height.max(1)));

    let show_cursor = app.mode == Mode::Navigate;
    let text_width = (inner.width as usize).saturating_sub(6);
    let mut lines: Vec<Line> = Vec::with_capacity(height);
    for (i, task) in visible.iter().enumerate().skip(scroll).take(height) {
        let selected = show_cursor && i == app.cursor;
        let row_bg = if selected { palette.selection_bg } else { palette.surface };

        let marker = if selected { "\u{25B8} " } else { "  " };
        let check_style = if task.completed {
            Style::default().fg(palette.green).bg(row_bg)
        } else {
            Style::default().fg(palette.dim).bg(row_bg)
        };
        let text_style = if task.completed {
            Style::default()
                .fg(palette.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(palette.text_bright).bg(row_bg)
        };

        let text = unicode::truncate_to_width(&task.text, text_width);
        let pad = text_width.saturating_sub(unicode::display_width(&text));
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.highlight).bg(row_bg)),
            Span::styled(format!("[{}] ", task.checkbox_char()), check_style),
            Span::styled(text, text_style),
            Span::styled(" ".repeat(pad), Style::default().bg(row_bg)),
        ]));
    }
    app.scroll_offset = scroll;

    frame.render_widget(Paragraph::new(lines), inner);
}
