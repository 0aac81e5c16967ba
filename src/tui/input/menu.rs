use crossterm::event::{KeyCode, KeyEvent};

use crate::model::FilterMode;
use crate::tui::app::App;

/// Keys while the filter menu is open. Choosing an entry applies it and
/// closes the menu.
pub(super) fn handle_menu(app: &mut App, key: KeyEvent) {
    let Some(selected) = app.menu else {
        return;
    };
    let last = FilterMode::ALL.len() - 1;
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => app.menu = None,
        KeyCode::Char('j') | KeyCode::Down => app.menu = Some((selected + 1).min(last)),
        KeyCode::Char('k') | KeyCode::Up => app.menu = Some(selected.saturating_sub(1)),
        KeyCode::Enter | KeyCode::Char(' ') => choose(app, FilterMode::ALL[selected]),
        KeyCode::Char('1') => choose(app, FilterMode::All),
        KeyCode::Char('2') => choose(app, FilterMode::Active),
        KeyCode::Char('3') => choose(app, FilterMode::Completed),
        _ => {}
    }
}

fn choose(app: &mut App, mode: FilterMode) {
    app.set_filter(mode);
    app.menu = None;
}
