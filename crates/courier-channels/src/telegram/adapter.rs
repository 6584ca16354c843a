//! Telegram adapter core

use super::access::AccessGate;
use super::config::TelegramConfig;
use crate::error::Result;
use teloxide::prelude::*;

/// Telegram bot adapter
pub struct TelegramAdapter {
    pub(crate) bot: Bot,
    pub(crate) config: TelegramConfig,
    pub(crate) gate: AccessGate,
}

impl TelegramAdapter {
    /// Create a new Telegram adapter
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        let bot = Bot::new(&config.bot_token);
        let gate = AccessGate::new(config.allowed_users.clone(), config.allowed_groups.clone());
        Self { bot, config, gate }
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TelegramConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Get the underlying bot
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Build the download URL for a file path returned by `get_file`
    pub(crate) fn file_url(&self, file_path: &str) -> String {
        format!(
            "https://api.telegram.org/file/bot{}/{}",
            self.config.bot_token, file_path
        )
    }
}
