use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{AppConfig, FilterMode, Task, TaskId};
use crate::session::Session;

use super::input;
use super::render;
use super::theme::{Palette, Palettes};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list, single-key commands
    Navigate,
    /// Typing into the "Add a new todo..." field
    Input,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub palettes: Palettes,
    pub mode: Mode,
    pub should_quit: bool,
    /// Text typed into the add field
    pub input_buffer: String,
    /// Byte offset of the cursor in `input_buffer`
    pub input_cursor: usize,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Filter menu popup open, with the highlighted entry
    pub menu: Option<usize>,
    /// Help overlay visible
    pub show_help: bool,
    pub show_key_hints: bool,
}

impl App {
    pub fn new(session: Session, config: &AppConfig) -> Self {
        App {
            session,
            palettes: Palettes::from_config(&config.ui),
            mode: Mode::Navigate,
            should_quit: false,
            input_buffer: String::new(),
            input_cursor: 0,
            cursor: 0,
            scroll_offset: 0,
            menu: None,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
        }
    }

    /// Palette for the session's current theme
    pub fn palette(&self) -> &Palette {
        self.palettes.for_mode(self.session.theme())
    }

    pub fn visible(&self) -> Vec<&Task> {
        self.session.visible()
    }

    /// Id of the task under the cursor
    pub fn selected_id(&self) -> Option<TaskId> {
        self.visible().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor inside the visible list after it shrinks
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        if self.session.filter() != mode {
            self.session.set_filter(mode);
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    /// Submit the add field: a task is created only for non-blank text, and
    /// the field is cleared only when one was
    pub fn submit_input(&mut self) {
        if self.session.add(&self.input_buffer).is_some() {
            self.input_buffer.clear();
            self.input_cursor = 0;
            // Show the new task if the current filter hides it
            if self.session.filter() == FilterMode::Completed {
                self.set_filter(FilterMode::All);
            }
            self.cursor = self.visible().len().saturating_sub(1);
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.session.toggle(id);
            self.clamp_cursor();
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.session.remove(id);
            self.clamp_cursor();
        }
    }

    pub fn clear_completed(&mut self) {
        self.session.clear_completed();
        self.clamp_cursor();
    }
}

/// Run the TUI application
pub fn run(session: Session, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(session, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!(theme = %app.session.theme(), "tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
