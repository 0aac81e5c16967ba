pub mod filter_menu;
pub mod footer;
pub mod help_overlay;
pub mod input_box;
pub mod nav_bar;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole page, then any open popup
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.palette().background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // nav bar + separator
            Constraint::Length(2), // page header
            Constraint::Length(3), // add field
            Constraint::Length(1), // "Showing: ..." line
            Constraint::Min(3),    // task list
            Constraint::Length(1), // counts footer
            Constraint::Length(1), // status row
        ])
        .split(area);

    nav_bar::render_nav_bar(frame, app, chunks[0]);
    input_box::render_header(frame, app, chunks[1]);
    input_box::render_input_box(frame, app, chunks[2]);
    task_list::render_showing_line(frame, app, chunks[3]);
    task_list::render_task_list(frame, app, chunks[4]);
    footer::render_footer(frame, app, chunks[5]);
    status_row::render_status_row(frame, app, chunks[6]);

    // Popups (rendered on top of everything)
    if app.menu.is_some() {
        filter_menu::render_filter_menu(frame, app, area);
    }
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;
    use crate::tui::app::Mode;

    #[test]
    fn full_page_shows_every_region() {
        let mut app = sample_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("TodoApp"));
        assert!(output.contains("All (4)"));
        assert!(output.contains("My Tasks"));
        assert!(output.contains("Add a new todo..."));
        assert!(output.contains("Showing: All tasks"));
        assert!(output.contains("Deploy the application"));
        assert!(output.contains("3 active"));
        assert!(output.contains("1 completed"));
    }

    #[test]
    fn full_page_with_menu_and_help() {
        let mut app = sample_app();
        app.menu = Some(0);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("Filter"));

        app.menu = None;
        app.show_help = true;
        app.mode = Mode::Navigate;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("Key Bindings"));
    }
}
