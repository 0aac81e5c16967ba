use serde::Serialize;

use crate::model::{FilterMode, Task, ThemeMode};
use crate::ops::view::{self, TaskCounts};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson<'a> {
    pub filter: FilterMode,
    pub tasks: Vec<&'a Task>,
    pub counts: TaskCounts,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

impl From<TaskCounts> for StatsJson {
    fn from(counts: TaskCounts) -> Self {
        StatsJson {
            active: counts.active,
            completed: counts.completed,
            total: counts.total(),
        }
    }
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: ThemeMode,
    pub dark: bool,
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One task per line: `[x] 1 Learn React basics`
pub fn format_task_line(task: &Task) -> String {
    format!("[{}] {} {}", task.checkbox_char(), task.id, task.text)
}

/// The filtered view as text, or the empty-state label
pub fn format_list(tasks: &[&Task], mode: FilterMode) -> String {
    if tasks.is_empty() {
        return view::empty_state_label(mode).to_string();
    }
    tasks
        .iter()
        .map(|t| format_task_line(t))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_stats(counts: &TaskCounts) -> String {
    format!("{} active, {} completed", counts.active, counts.completed)
}
