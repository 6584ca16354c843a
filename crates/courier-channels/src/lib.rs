//! Courier Channels - Telegram adapter
//!
//! Bridges Telegram chat events to the AI gateway: command routing,
//! access gating and reply dispatch.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod telegram;
pub mod util;

pub use error::{Error, Result};

// Re-export Telegram adapter types
pub use telegram::{
    AccessGate, BotCommand, ConversationKind, Guard, Principal, TelegramAdapter, TelegramConfig,
};
