//! Error types for courier-llm

use thiserror::Error;

/// Upstream AI provider error type
#[derive(Debug, Error)]
pub enum Error {
    /// Provider returned an error or the transport failed
    #[error("API error: {0}")]
    Api(String),

    /// Response body did not contain the expected fields
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Missing configuration
    #[error("not configured: {0}")]
    NotConfigured(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
