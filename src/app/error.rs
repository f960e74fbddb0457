use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Listing parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid source: {0}")]
    InvalidSource(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, VitrineError>;
