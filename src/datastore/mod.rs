mod error;
mod tasks;

pub use error::DataStoreError;
pub use tasks::MemoryTaskStore;
pub use tasks::TaskStore;
