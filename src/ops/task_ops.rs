//! Task store operations.
//!
//! Every operation takes the current snapshot by reference and returns the
//! next snapshot. Nothing here looks at the filter or the theme.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::model::task::{Task, TaskId};

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Source of fresh task ids
pub trait IdSource {
    fn next_id(&mut self) -> TaskId;
}

/// Monotonic counter. Past `u64::MAX` it wraps back to 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        SequentialIds { next: first }
    }

    /// Start one past the largest id in `tasks` (or at 1 for an empty list)
    pub fn after(tasks: &[Task]) -> Self {
        let max = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        Self::starting_at(max.checked_add(1).unwrap_or(1))
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.checked_add(1).unwrap_or(1);
        id
    }
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// Append a task with trimmed `text`. Whitespace-only text leaves the
/// snapshot unchanged.
///
/// Ids already in the snapshot are skipped. A source that only yields taken
/// ids is abandoned after `tasks.len() + 1` draws in favor of the lowest
/// free id.
pub fn create(tasks: &[Task], text: &str, ids: &mut dyn IdSource) -> Vec<Task> {
    let text = text.trim();
    if text.is_empty() {
        return tasks.to_vec();
    }

    let taken: HashSet<TaskId> = tasks.iter().map(|t| t.id).collect();
    let id = (0..=tasks.len())
        .map(|_| ids.next_id())
        .find(|id| !taken.contains(id))
        .unwrap_or_else(|| {
            let id = lowest_free_id(&taken);
            warn!(%id, "id source kept returning ids in use");
            id
        });

    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.extend_from_slice(tasks);
    next.push(Task::new(id, text));
    debug!(%id, len = next.len(), "task created");
    next
}

/// Flip `completed` on the task with `id`. Unknown ids are a no-op.
pub fn toggle(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| {
            if t.id == id {
                debug!(%id, completed = !t.completed, "task toggled");
                Task {
                    completed: !t.completed,
                    ..t.clone()
                }
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Drop the task with `id`. Unknown ids are a no-op.
pub fn remove(tasks: &[Task], id: TaskId) -> Vec<Task> {
    let next: Vec<Task> = tasks.iter().filter(|t| t.id != id).cloned().collect();
    if next.len() != tasks.len() {
        debug!(%id, len = next.len(), "task removed");
    }
    next
}

/// Keep only tasks that are not completed
pub fn clear_completed(tasks: &[Task]) -> Vec<Task> {
    let next: Vec<Task> = tasks.iter().filter(|t| !t.completed).cloned().collect();
    debug!(removed = tasks.len() - next.len(), "cleared completed tasks");
    next
}

/// Smallest id from 1 up that is not in `taken`. At most `taken.len() + 1`
/// candidates are checked.
fn lowest_free_id(taken: &HashSet<TaskId>) -> TaskId {
    (1..=u64::MAX)
        .map(TaskId)
        .find(|id| !taken.contains(id))
        .unwrap_or(TaskId(0))
}
