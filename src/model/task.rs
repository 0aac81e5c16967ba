use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque task identifier, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single user-entered item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Create an open task. Callers are responsible for trimming `text`.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Builder used by seed data and tests
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// The character shown inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

/// The fixed tasks a fresh session starts with
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(TaskId(1), "Learn React basics").completed(true),
        Task::new(TaskId(2), "Build a todo app"),
        Task::new(TaskId(3), "Add dark mode feature"),
        Task::new(TaskId(4), "Deploy the application"),
    ]
}
