//! Tests for telegram module

use super::*;

fn principal(user_id: i64, chat_id: i64, kind: ConversationKind) -> Principal {
    Principal {
        user_id,
        chat_id,
        kind,
    }
}

#[test]
fn test_telegram_config() {
    let config = TelegramConfig::new("test_token")
        .with_allowed_users(vec![123, 456])
        .with_allowed_groups(vec![-1001]);

    assert_eq!(config.bot_token, "test_token");
    assert_eq!(config.allowed_users, vec![123, 456]);
    assert_eq!(config.allowed_groups, vec![-1001]);
}

#[test]
fn test_gate_allows_listed_private_user() {
    let gate = AccessGate::new(vec![123, 456], vec![]);

    assert!(gate.check(&principal(123, 123, ConversationKind::Private)));
    assert!(gate.check(&principal(456, 456, ConversationKind::Private)));
}

#[test]
fn test_gate_denies_unlisted_private_user() {
    let gate = AccessGate::new(vec![123], vec![]);

    assert!(!gate.check(&principal(789, 789, ConversationKind::Private)));
}

#[test]
fn test_gate_uses_chat_id_for_groups() {
    let gate = AccessGate::new(vec![], vec![-1001]);

    // The user list is irrelevant for group conversations
    assert!(gate.check(&principal(789, -1001, ConversationKind::Group)));
    assert!(gate.check(&principal(789, -1001, ConversationKind::Supergroup)));
    assert!(gate.check(&principal(789, -1001, ConversationKind::Channel)));
    assert!(!gate.check(&principal(789, -2002, ConversationKind::Group)));
}

#[test]
fn test_gate_group_membership_does_not_grant_private_access() {
    let gate = AccessGate::new(vec![], vec![-1001]);

    assert!(!gate.check(&principal(-1001, -1001, ConversationKind::Private)));
}

#[test]
fn test_empty_allowlists_deny_everything() {
    let gate = AccessGate::default();

    assert!(!gate.check(&principal(123, 123, ConversationKind::Private)));
    assert!(!gate.check(&principal(123, -1001, ConversationKind::Group)));
}

#[test]
fn test_parse_chat_command() {
    assert_eq!(
        BotCommand::parse("/chat Explain quantum computing"),
        Some(BotCommand::Chat("Explain quantum computing".to_string()))
    );
}

#[test]
fn test_parse_pic_command() {
    assert_eq!(
        BotCommand::parse("/pic a red bicycle"),
        Some(BotCommand::Pic("a red bicycle".to_string()))
    );
}

#[test]
fn test_parse_start_command() {
    assert_eq!(BotCommand::parse("/start"), Some(BotCommand::Start));
}

#[test]
fn test_parse_strips_bot_username_suffix() {
    assert_eq!(
        BotCommand::parse("/chat@courier_bot hello"),
        Some(BotCommand::Chat("hello".to_string()))
    );
    assert_eq!(BotCommand::parse("/start@courier_bot"), Some(BotCommand::Start));
}

#[test]
fn test_parse_empty_argument_is_preserved() {
    assert_eq!(BotCommand::parse("/chat"), Some(BotCommand::Chat(String::new())));
    assert_eq!(
        BotCommand::parse("/chat   "),
        Some(BotCommand::Chat(String::new()))
    );
}

#[test]
fn test_parse_trims_argument_whitespace() {
    assert_eq!(
        BotCommand::parse("/chat   spaced out   "),
        Some(BotCommand::Chat("spaced out".to_string()))
    );
}

#[test]
fn test_parse_unrecognized_command() {
    assert_eq!(BotCommand::parse("/frobnicate now"), Some(BotCommand::Unknown));
}

#[test]
fn test_plain_text_is_not_a_command() {
    assert_eq!(BotCommand::parse("hello there"), None);
    assert_eq!(BotCommand::parse(""), None);
}

#[test]
fn test_adapter_file_url() {
    let adapter = TelegramAdapter::new(TelegramConfig::new("123:abc"));

    assert_eq!(
        adapter.file_url("voice/file_7.oga"),
        "https://api.telegram.org/file/bot123:abc/voice/file_7.oga"
    );
}
