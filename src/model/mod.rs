pub mod correlation_id;
pub mod task;

pub use correlation_id::CorrelationId;
pub use task::{Task, TaskId};
