use thiserror::*;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unable to read request body: {0}")]
    Body(#[from] hyper::Error),
    #[error("unable to encode response body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("unable to build response: {0}")]
    Response(#[from] http::Error),
}
