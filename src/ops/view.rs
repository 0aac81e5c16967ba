//! Derived views over a task snapshot. Recomputed on every read.

use serde::Serialize;

use crate::model::filter::FilterMode;
use crate::model::task::Task;

/// Active/completed split of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskCounts {
    pub active: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn total(&self) -> usize {
        self.active + self.completed
    }

    /// Number of tasks shown under `mode`
    pub fn for_mode(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.total(),
            FilterMode::Active => self.active,
            FilterMode::Completed => self.completed,
        }
    }
}

/// Tasks visible under `mode`, in snapshot order
pub fn filtered(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|t| mode.matches(t)).collect()
}

pub fn counts(tasks: &[Task]) -> TaskCounts {
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskCounts {
        active: tasks.len() - completed,
        completed,
    }
}

/// Placeholder text for an empty filtered list
pub fn empty_state_label(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::All => "No todos yet. Add one above!",
        FilterMode::Active => "No active todos!",
        FilterMode::Completed => "No completed todos!",
    }
}

/// Filter bar label, e.g. `Active (3)`
pub fn tab_label(mode: FilterMode, counts: &TaskCounts) -> String {
    format!("{} ({})", mode.title(), counts.for_mode(mode))
}

/// Banner naming the current filter, e.g. `Showing: Active tasks`
pub fn showing_label(mode: FilterMode) -> String {
    format!("Showing: {} tasks", mode.title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{TaskId, sample_tasks};
    use pretty_assertions::assert_eq;

    fn scenario() -> Vec<Task> {
        vec![
            Task::new(TaskId(1), "A").completed(true),
            Task::new(TaskId(2), "B"),
        ]
    }

    fn mixed() -> Vec<Task> {
        vec![
            Task::new(TaskId(1), "one"),
            Task::new(TaskId(2), "two").completed(true),
            Task::new(TaskId(3), "three"),
            Task::new(TaskId(4), "four").completed(true),
            Task::new(TaskId(5), "five"),
        ]
    }

    #[test]
    fn scenario_filters_and_counts() {
        let tasks = scenario();
        assert_eq!(
            filtered(&tasks, FilterMode::Active),
            vec![&Task::new(TaskId(2), "B")]
        );
        assert_eq!(
            filtered(&tasks, FilterMode::Completed),
            vec![&Task::new(TaskId(1), "A").completed(true)]
        );
        assert_eq!(
            counts(&tasks),
            TaskCounts {
                active: 1,
                completed: 1
            }
        );
    }

    #[test]
    fn all_passes_everything() {
        let tasks = mixed();
        let all: Vec<Task> = filtered(&tasks, FilterMode::All).into_iter().cloned().collect();
        assert_eq!(all, tasks);
    }

    #[test]
    fn filtered_satisfies_predicate_and_keeps_order() {
        let tasks = mixed();
        for mode in FilterMode::ALL {
            let view = filtered(&tasks, mode);
            assert!(view.iter().all(|t| mode.matches(t)));
            let positions: Vec<usize> = view
                .iter()
                .map(|v| tasks.iter().position(|t| t.id == v.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{mode} out of order");
        }
    }

    #[test]
    fn filtered_empty_is_not_an_error() {
        let tasks = vec![Task::new(TaskId(1), "open")];
        assert!(filtered(&tasks, FilterMode::Completed).is_empty());
        assert!(filtered(&[], FilterMode::All).is_empty());
    }

    #[test]
    fn counts_sum_to_length() {
        for tasks in [vec![], scenario(), mixed(), sample_tasks()] {
            let c = counts(&tasks);
            assert_eq!(c.active + c.completed, tasks.len());
            assert_eq!(c.total(), tasks.len());
        }
    }

    #[test]
    fn counts_match_filtered_lengths() {
        let tasks = mixed();
        let c = counts(&tasks);
        for mode in FilterMode::ALL {
            assert_eq!(c.for_mode(mode), filtered(&tasks, mode).len());
        }
    }

    #[test]
    fn empty_state_labels_are_distinct() {
        assert_eq!(empty_state_label(FilterMode::All), "No todos yet. Add one above!");
        assert_eq!(empty_state_label(FilterMode::Active), "No active todos!");
        assert_eq!(empty_state_label(FilterMode::Completed), "No completed todos!");
    }

    #[test]
    fn tab_and_showing_labels() {
        let c = counts(&sample_tasks());
        assert_eq!(tab_label(FilterMode::All, &c), "All (4)");
        assert_eq!(tab_label(FilterMode::Active, &c), "Active (3)");
        assert_eq!(tab_label(FilterMode::Completed, &c), "Completed (1)");
        assert_eq!(showing_label(FilterMode::Active), "Showing: Active tasks");
    }
}
