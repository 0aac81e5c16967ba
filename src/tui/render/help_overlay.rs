use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::tui::app::App;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Tasks",
        &[
            ("a / i", "Focus the add field"),
            ("Enter", "Add task (in add field)"),
            ("Esc", "Leave the add field"),
            ("Space / x", "Toggle completed"),
            ("d / Del", "Delete task"),
            ("C", "Clear completed"),
        ],
    ),
    (
        "View",
        &[
            ("\u{2191}\u{2193} / jk", "Move cursor"),
            ("g / G", "Jump to top/bottom"),
            ("1 2 3", "All / Active / Completed"),
            ("Tab", "Next filter"),
            ("m", "Filter menu"),
            ("t", "Toggle light/dark theme"),
        ],
    ),
    ("General", &[("?", "Close this help"), ("q / Ctrl+C", "Quit")]),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let palette = app.palette();
    let bg = palette.surface;
    let key_style = Style::default()
        .fg(palette.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(palette.text).bg(bg);
    let header_style = Style::default()
        .fg(palette.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Key Bindings", header_style)),
        Line::from(""),
    ];
    for (section, bindings) in BINDINGS {
        lines.push(Line::from(Span::styled(format!(" {section}"), header_style)));
        for (key, desc) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", key), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}
