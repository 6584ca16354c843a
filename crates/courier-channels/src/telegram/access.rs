//! Access gate - per-principal authorization
//!
//! Every inbound event is checked before any handler body runs. Denials
//! are logged and dropped; no reply is ever sent for a denial.

use teloxide::types::Message;
use tracing::warn;

/// Conversation classification for authorization purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationKind {
    /// One-on-one chat with the bot
    Private,
    /// Basic group
    Group,
    /// Supergroup
    Supergroup,
    /// Broadcast channel
    Channel,
}

/// The (user, conversation) identity evaluated by the access gate
#[derive(Debug, Clone, Copy)]
pub struct Principal {
    /// Sender ID
    pub user_id: i64,
    /// Chat ID
    pub chat_id: i64,
    /// Conversation kind
    pub kind: ConversationKind,
}

impl Principal {
    /// Derive a principal from an inbound message.
    ///
    /// Returns `None` for chat kinds the bot does not serve and for
    /// private messages without a sender; such events are dropped.
    /// Channel posts and anonymous admins carry no sender - for public
    /// conversations the gate decides on the chat id alone, so the chat
    /// id stands in for the missing user id.
    pub fn from_message(msg: &Message) -> Option<Self> {
        let kind = if msg.chat.is_private() {
            ConversationKind::Private
        } else if msg.chat.is_group() {
            ConversationKind::Group
        } else if msg.chat.is_supergroup() {
            ConversationKind::Supergroup
        } else if msg.chat.is_channel() {
            ConversationKind::Channel
        } else {
            return None;
        };

        let user_id = match &msg.from {
            Some(user) => user.id.0 as i64,
            None if kind != ConversationKind::Private => msg.chat.id.0,
            None => return None,
        };

        Some(Self {
            user_id,
            chat_id: msg.chat.id.0,
            kind,
        })
    }
}

/// Composable authorization check run before any command handler
pub trait Guard: Send + Sync {
    /// Whether the principal may invoke commands
    fn check(&self, principal: &Principal) -> bool;
}

/// Allow-list gate: users for private chats, conversations for the rest.
///
/// Empty allow-lists deny everything (fail closed).
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    allowed_users: Vec<i64>,
    allowed_groups: Vec<i64>,
}

impl AccessGate {
    /// Create a gate from allow-lists
    #[must_use]
    pub fn new(allowed_users: Vec<i64>, allowed_groups: Vec<i64>) -> Self {
        Self {
            allowed_users,
            allowed_groups,
        }
    }
}

impl Guard for AccessGate {
    fn check(&self, principal: &Principal) -> bool {
        let allowed = match principal.kind {
            ConversationKind::Private => self.allowed_users.contains(&principal.user_id),
            ConversationKind::Group | ConversationKind::Supergroup | ConversationKind::Channel => {
                self.allowed_groups.contains(&principal.chat_id)
            }
        };

        if !allowed {
            warn!(
                user_id = principal.user_id,
                chat_id = principal.chat_id,
                kind = ?principal.kind,
                "Principal not authorized, dropping event"
            );
        }

        allowed
    }
}
