//! Telegram command parsing

/// Help text sent in response to /start
pub const HELP_TEXT: &str = "Hello! You can /chat with me, or ask me to create a /pic. \
I can also transcribe voice messages for you (just forward one to me).";

/// Reply sent for commands the bot does not recognize
pub const UNKNOWN_COMMAND_TEXT: &str = "Sorry, I didn't understand that command.";

/// A recognized inbound command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// `/chat <prompt>` - single-turn chat completion
    Chat(String),
    /// `/pic <description>` - image generation
    Pic(String),
    /// `/start` - help text
    Start,
    /// Any other `/command`
    Unknown,
}

impl BotCommand {
    /// Parse a message text into a command.
    ///
    /// Returns `None` for plain text with no leading slash. A `@botname`
    /// suffix on the command token is stripped, so `/chat@mybot` and
    /// `/chat` are equivalent. The argument is the remainder with
    /// surrounding whitespace removed; it may be empty.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if !text.starts_with('/') {
            return None;
        }

        let mut parts = text.splitn(2, ' ');
        let token = parts.next().unwrap_or("");
        let token = token.split('@').next().unwrap_or(token);
        let args = parts.next().unwrap_or("").trim();

        match token {
            "/chat" => Some(Self::Chat(args.to_string())),
            "/pic" => Some(Self::Pic(args.to_string())),
            "/start" => Some(Self::Start),
            _ => Some(Self::Unknown),
        }
    }
}
