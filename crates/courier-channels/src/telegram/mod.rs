//! Telegram - teloxide adapter
//!
//! Receives commands and voice/audio messages, gates them per principal,
//! and relays AI responses back to the originating chat.

mod access;
mod adapter;
mod commands;
mod config;
mod handler;

#[cfg(test)]
mod tests;

// Re-export all public types
pub use access::{AccessGate, ConversationKind, Guard, Principal};
pub use adapter::TelegramAdapter;
pub use commands::{BotCommand, HELP_TEXT, UNKNOWN_COMMAND_TEXT};
pub use config::TelegramConfig;
