use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoBrowserError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("User not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, RepoBrowserError>;
