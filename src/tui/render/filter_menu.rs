use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::FilterMode;
use crate::ops::view;
use crate::tui::app::App;

/// Compact filter picker opened with `m`
pub fn render_filter_menu(frame: &mut Frame, app: &App, area: Rect) {
    let Some(selected) = app.menu else {
        return;
    };
    let palette = app.palette();
    let bg = palette.surface;
    let counts = app.session.counts();
    let current = app.session.filter();

    let width = 24.min(area.width);
    let height = (FilterMode::ALL.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = FilterMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let marker = if *mode == current { "\u{2022}" } else { " " };
            let style = if i == selected {
                Style::default()
                    .fg(palette.text_bright)
                    .bg(palette.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text).bg(bg)
            };
            let label = format!("{marker} {}", view::tab_label(*mode, &counts));
            let pad = (width as usize).saturating_sub(label.chars().count() + 2);
            Line::from(Span::styled(format!("{label}{}", " ".repeat(pad)), style))
        })
        .collect();

    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
