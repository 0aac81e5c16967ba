//! The single context object a UI or command drives.
//!
//! A `Session` owns the task snapshot, the filter mode, and the theme flag.
//! Task mutations go through the pure functions in [`crate::ops::task_ops`]
//! and replace the snapshot wholesale; theme changes are written through to
//! the injected [`PreferenceStore`].

use tracing::{debug, warn};

use crate::io::color_scheme::ColorSchemeProbe;
use crate::io::prefs::PreferenceStore;
use crate::model::filter::FilterMode;
use crate::model::task::{Task, TaskId, sample_tasks};
use crate::model::theme::{THEME_KEY, ThemeMode};
use crate::ops::task_ops::{self, IdSource, SequentialIds};
use crate::ops::view::{self, TaskCounts};

/// Decide the starting theme: stored preference, then host signal, then light.
pub fn resolve_theme(prefs: &dyn PreferenceStore, probe: &dyn ColorSchemeProbe) -> ThemeMode {
    match prefs.get(THEME_KEY) {
        Ok(Some(value)) if !value.is_empty() => {
            return value.parse::<ThemeMode>().unwrap_or_else(|e| {
                debug!(error = %e, "unrecognized stored theme, using light");
                ThemeMode::Light
            });
        }
        Ok(_) => debug!("no stored theme, asking host"),
        Err(e) => warn!(error = %e, "could not read theme preference, asking host"),
    }
    ThemeMode::from_dark(probe.prefers_dark().unwrap_or(false))
}

pub struct Session {
    tasks: Vec<Task>,
    filter: FilterMode,
    theme: ThemeMode,
    ids: Box<dyn IdSource>,
    prefs: Box<dyn PreferenceStore>,
}

impl Session {
    /// Start a session over `tasks`, resolving the theme once.
    pub fn new(
        tasks: Vec<Task>,
        prefs: Box<dyn PreferenceStore>,
        probe: &dyn ColorSchemeProbe,
    ) -> Self {
        let theme = resolve_theme(prefs.as_ref(), probe);
        let ids = Box::new(SequentialIds::after(&tasks));
        debug!(tasks = tasks.len(), %theme, "session started");
        Session {
            tasks,
            filter: FilterMode::default(),
            theme,
            ids,
            prefs,
        }
    }

    /// Start a session with the sample tasks
    pub fn seeded(prefs: Box<dyn PreferenceStore>, probe: &dyn ColorSchemeProbe) -> Self {
        Self::new(sample_tasks(), prefs, probe)
    }

    /// Replace the id source
    pub fn with_ids(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    // --- Tasks ---

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Add a task. Returns the new id, or `None` when the text was blank.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let next = task_ops::create(&self.tasks, text, self.ids.as_mut());
        if next.len() == self.tasks.len() {
            return None;
        }
        let id = next.last().map(|t| t.id);
        self.tasks = next;
        id
    }

    pub fn toggle(&mut self, id: TaskId) {
        self.tasks = task_ops::toggle(&self.tasks, id);
    }

    pub fn remove(&mut self, id: TaskId) {
        self.tasks = task_ops::remove(&self.tasks, id);
    }

    pub fn clear_completed(&mut self) {
        self.tasks = task_ops::clear_completed(&self.tasks);
    }

    // --- Views ---

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    /// Tasks under the current filter
    pub fn visible(&self) -> Vec<&Task> {
        view::filtered(&self.tasks, self.filter)
    }

    pub fn counts(&self) -> TaskCounts {
        view::counts(&self.tasks)
    }

    pub fn empty_label(&self) -> &'static str {
        view::empty_state_label(self.filter)
    }

    // --- Theme ---

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Set and persist the theme. A failed write is logged, never surfaced.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
        if let Err(e) = self.prefs.set(THEME_KEY, theme.as_str()) {
            warn!(error = %e, %theme, "could not persist theme preference");
        }
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }
}
