//! Error types for courier-audio

use thiserror::Error;

/// Audio pipeline error type
#[derive(Debug, Error)]
pub enum Error {
    /// Remote fetch returned a non-success status
    #[error("download failed with status {0}")]
    Download(u16),

    /// Network-level failure while fetching
    #[error("network error: {0}")]
    Network(String),

    /// Codec conversion failure
    #[error("transcode error: {0}")]
    Transcode(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
