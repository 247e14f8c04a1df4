use thiserror::*;

#[derive(Debug, PartialEq, Error)]
pub enum DataStoreError {
    #[error("the task not found {0}")]
    NotFound(String),
}
