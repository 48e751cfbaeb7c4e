use common::error::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Stock not found")]
    NotFound,
    /// Durable store unavailable or a write failed. Not recoverable here;
    /// the caller retries the whole request.
    #[error("storage fault: {0}")]
    Storage(#[from] sqlx::Error),
}
