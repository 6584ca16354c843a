//! Error types for courier-channels

use thiserror::Error;

/// Channel error type
#[derive(Debug, Error)]
pub enum Error {
    /// Telegram error
    #[error("telegram error: {0}")]
    Telegram(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
