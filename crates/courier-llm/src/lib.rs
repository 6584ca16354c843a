//! Courier LLM - OpenAI gateway
//!
//! Request/response façade over the OpenAI HTTP API: chat completions,
//! image generation and audio transcription.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod gateway;
pub mod util;

pub use config::OpenAiConfig;
pub use error::{Error, Result};
pub use gateway::OpenAiGateway;
