use thiserror::Error;

pub type Result<T> = std::result::Result<T, TavolaError>;

#[derive(Debug, Error)]
pub enum TavolaError {
    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("Lane not found: {0}")]
    LaneNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
