use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The backend answered with a non-success status; the message is the
    /// server-supplied error text (or a generic fallback).
    #[error("{0}")]
    Api(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export failed")]
    ExportFailed,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
