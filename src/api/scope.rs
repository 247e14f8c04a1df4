use std::sync::Arc;

use crate::datastore::TaskStore;

/// Per-request dependency container handed to each handler.
///
/// Replaces an untyped context lookup with an explicit, typed reference to
/// the shared task store. Handlers borrow the store for the duration of one
/// call and must not retain it. Logging is ambient through the tracing
/// subscriber, with a per-request span attached at dispatch.
pub struct RequestScope<S> {
    tasks: Arc<S>,
}

impl<S: TaskStore> RequestScope<S> {
    pub fn new(tasks: S) -> RequestScope<S> {
        return RequestScope {
            tasks: Arc::new(tasks),
        };
    }

    pub fn tasks(&self) -> &S {
        &self.tasks
    }
}

impl<S> Clone for RequestScope<S> {
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}
