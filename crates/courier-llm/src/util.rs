//! Shared helpers for API key handling and error display

/// Number of characters kept visible at each end of a masked key
const KEY_MASK_VISIBLE_CHARS: usize = 4;

/// Keys at or below this length are fully masked
const MIN_KEY_LENGTH_FOR_PARTIAL_DISPLAY: usize = 12;

/// Maximum length of an error message before truncation
const MAX_ERROR_LENGTH: usize = 300;

/// Mask an API key for logging, keeping only the first and last characters
#[must_use]
pub fn mask_api_key(key: &str) -> String {
    if key.len() <= MIN_KEY_LENGTH_FOR_PARTIAL_DISPLAY {
        return "****".to_string();
    }
    format!(
        "{}...{}",
        &key[..KEY_MASK_VISIBLE_CHARS],
        &key[key.len() - KEY_MASK_VISIBLE_CHARS..]
    )
}

/// Strip sensitive or noisy detail from provider error messages
#[must_use]
pub fn sanitize_api_error(error: &str) -> String {
    let lower = error.to_lowercase();

    if lower.contains("api key")
        || lower.contains("apikey")
        || lower.contains("invalid key")
        || lower.contains("unauthorized")
        || lower.contains("authentication")
    {
        return "API authentication error. Please check your API key configuration.".to_string();
    }

    if lower.contains("rate limit") || lower.contains("quota") {
        return "API rate limit exceeded. Please try again later.".to_string();
    }

    if error.len() > MAX_ERROR_LENGTH {
        let mut end = MAX_ERROR_LENGTH;
        while !error.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...(truncated)", &error[..end])
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_masking() {
        let masked = mask_api_key("sk-1234567890abcdefghijklmnop");
        assert!(masked.starts_with("sk-1"));
        assert!(masked.ends_with("mnop"));
        assert!(masked.contains("..."));
        assert!(!masked.contains("567890abcdefghijkl"));
    }

    #[test]
    fn test_short_key_masking() {
        assert_eq!(mask_api_key("short"), "****");
        assert_eq!(mask_api_key(""), "****");
    }

    #[test]
    fn test_sanitize_api_error() {
        let sanitized = sanitize_api_error("Invalid API key: sk-1234567890");
        assert!(!sanitized.contains("sk-"));
        assert!(sanitized.contains("authentication"));

        let sanitized = sanitize_api_error("Rate limit exceeded: 100 requests per minute");
        assert!(!sanitized.contains("100"));
        assert!(sanitized.contains("rate limit"));

        let sanitized = sanitize_api_error("Model not found");
        assert_eq!(sanitized, "Model not found");
    }

    #[test]
    fn test_sanitize_truncates_long_errors() {
        let long = "x".repeat(500);
        let sanitized = sanitize_api_error(&long);
        assert!(sanitized.ends_with("...(truncated)"));
        assert!(sanitized.len() < 400);
    }
}
