use std::fmt;

/// Identifier a task is completed by.
///
/// Ids are assigned by the store from a per-store sequence and are never
/// rendered in the list/search JSON, so they stay opaque to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskId(String);

impl TaskId {
    pub fn from_seq(seq: u64) -> TaskId {
        TaskId(format!("task{}", seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task is a single unit of work on the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Task {
        Self { id, text }
    }
}
