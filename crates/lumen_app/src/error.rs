//! Error types for the application shell

use thiserror::Error;

/// Errors that can occur bringing the app up or running it
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Data layer failure during setup
    #[error("data error: {0}")]
    Data(#[from] lumen_data::ApiError),

    /// Async runtime could not be created
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Other(err.to_string())
    }
}

/// Result type for app operations
pub type Result<T> = std::result::Result<T, AppError>;
