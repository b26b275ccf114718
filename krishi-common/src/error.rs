//! Common error types for KrishiMitra

use thiserror::Error;

/// Common result type for KrishiMitra operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the advisory backend
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upstream service (weather, TTS) failure
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}
