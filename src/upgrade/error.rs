use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid upgrade list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid upgrade record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
