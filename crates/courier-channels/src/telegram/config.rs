//! Telegram configuration types

use crate::error::{Error, Result};

/// Telegram bot configuration
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot token
    pub bot_token: String,
    /// User IDs allowed to use the bot in private chats
    pub allowed_users: Vec<i64>,
    /// Group/channel IDs where the bot may be used
    pub allowed_groups: Vec<i64>,
}

impl TelegramConfig {
    /// Create from environment variables
    ///
    /// # Errors
    /// Returns error if `TELEGRAM_BOT_TOKEN` is not set
    pub fn from_env() -> Result<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| Error::Config("TELEGRAM_BOT_TOKEN not set".to_string()))?;

        let allowed_users = parse_id_list(std::env::var("TELEGRAM_ALLOWED_USERS").ok());
        let allowed_groups = parse_id_list(std::env::var("TELEGRAM_ALLOWED_GROUPS").ok());

        Ok(Self {
            bot_token,
            allowed_users,
            allowed_groups,
        })
    }

    /// Create with a bot token and empty allow-lists (denies everyone)
    #[must_use]
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            allowed_users: Vec::new(),
            allowed_groups: Vec::new(),
        }
    }

    /// Set allowed users
    #[must_use]
    pub fn with_allowed_users(mut self, users: Vec<i64>) -> Self {
        self.allowed_users = users;
        self
    }

    /// Set allowed groups
    #[must_use]
    pub fn with_allowed_groups(mut self, groups: Vec<i64>) -> Self {
        self.allowed_groups = groups;
        self
    }
}

fn parse_id_list(raw: Option<String>) -> Vec<i64> {
    raw.map(|s| {
        s.split(',')
            .filter_map(|id| id.trim().parse().ok())
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list() {
        assert_eq!(
            parse_id_list(Some("123, 456,-789".to_string())),
            vec![123, 456, -789]
        );
        assert_eq!(parse_id_list(Some("123,junk,456".to_string())), vec![123, 456]);
        assert_eq!(parse_id_list(Some(String::new())), Vec::<i64>::new());
        assert_eq!(parse_id_list(None), Vec::<i64>::new());
    }
}
