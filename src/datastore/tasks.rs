use std::sync::Mutex;

use super::error::DataStoreError;
use crate::model::{Task, TaskId};

/// Capability handlers receive for reading and mutating the shared task list.
///
/// Operations are non-suspending; implementations guard the backing sequence
/// so add/complete are atomic with respect to concurrent items/search calls
/// on the same store.
pub trait TaskStore: Send + Sync + 'static {
    /// All tasks in insertion order. An empty store yields an empty vec.
    fn items(&self) -> Vec<Task>;
    /// Append a task with the given text, returning its assigned id.
    fn add(&self, text: String) -> TaskId;
    /// Tasks whose text contains the needle, insertion order preserved.
    /// Case-sensitive. An empty needle matches nothing.
    fn search(&self, needle: &str) -> Vec<Task>;
    /// Remove and return the first task with the given id.
    fn complete(&self, id: &str) -> Result<Task, DataStoreError>;
}

struct TaskList {
    tasks: Vec<Task>,
    next_seq: u64,
}

/// In-memory task store, transient for the process lifetime.
pub struct MemoryTaskStore {
    inner: Mutex<TaskList>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TaskList {
                tasks: Vec::new(),
                next_seq: 1,
            }),
        }
    }
}

impl TaskStore for MemoryTaskStore {
    fn items(&self) -> Vec<Task> {
        let inner = self.inner.lock().unwrap();
        inner.tasks.clone()
    }

    fn add(&self, text: String) -> TaskId {
        let mut inner = self.inner.lock().unwrap();
        let id = TaskId::from_seq(inner.next_seq);
        inner.next_seq += 1;
        inner.tasks.push(Task::new(id.clone(), text));
        id
    }

    fn search(&self, needle: &str) -> Vec<Task> {
        if needle.is_empty() {
            return Vec::new();
        }
        let inner = self.inner.lock().unwrap();
        inner
            .tasks
            .iter()
            .filter(|task| task.text.contains(needle))
            .cloned()
            .collect()
    }

    fn complete(&self, id: &str) -> Result<Task, DataStoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.tasks.iter().position(|task| task.id.as_str() == id) {
            Some(idx) => Ok(inner.tasks.remove(idx)),
            None => Err(DataStoreError::NotFound(id.to_string())),
        }
    }
}
