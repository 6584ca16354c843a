//! Shared channel utilities

/// Maximum text length echoed into logs
const MAX_LOG_TEXT_LENGTH: usize = 200;

/// Patterns treated as potentially sensitive in logged text
const SENSITIVE_PATTERNS: &[&str] = &[
    "password",
    "token",
    "api_key",
    "apikey",
    "secret",
    "credential",
];

/// Mask potentially sensitive content before logging
#[must_use]
pub fn mask_for_logging(text: &str) -> String {
    let lower = text.to_lowercase();

    for pattern in SENSITIVE_PATTERNS {
        if lower.contains(pattern) {
            return "[REDACTED - potentially sensitive content]".to_string();
        }
    }

    if text.len() > MAX_LOG_TEXT_LENGTH {
        let mut end = MAX_LOG_TEXT_LENGTH;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &text[..end])
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_sensitive_content() {
        let masked = mask_for_logging("my password is hunter2");
        assert!(!masked.contains("hunter2"));
        assert!(masked.contains("REDACTED"));
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(mask_for_logging("hello world"), "hello world");
    }

    #[test]
    fn test_long_text_is_truncated() {
        let long = "a".repeat(500);
        let masked = mask_for_logging(&long);
        assert!(masked.ends_with("...[truncated]"));
        assert!(masked.len() < 250);
    }
}
