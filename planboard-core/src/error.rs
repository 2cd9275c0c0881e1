//! Error types for the planboard ecosystem.

use thiserror::Error;

/// Errors that can occur in planboard operations.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Remote request failed: {0}")]
    Remote(String),

    #[error("Backend request timed out after {0}s")]
    Timeout(u64),
}

/// Result type alias for planboard operations.
pub type BoardResult<T> = Result<T, BoardError>;
