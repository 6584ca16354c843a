//! OpenAI gateway configuration

use crate::error::{Error, Result};
use crate::util::mask_api_key;
use std::fmt;
use std::time::Duration;

/// Default chat completion model
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

/// Default image generation model
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-2";

/// Default audio transcription model
pub const DEFAULT_AUDIO_MODEL: &str = "whisper-1";

/// Configuration for the OpenAI gateway
#[derive(Clone)]
pub struct OpenAiConfig {
    /// API key for authentication
    pub api_key: String,
    /// Optional custom base URL (for Azure OpenAI or proxies)
    pub base_url: Option<String>,
    /// Model used for chat completions
    pub chat_model: String,
    /// Model used for image generation
    pub image_model: String,
    /// Model used for audio transcription
    pub audio_model: String,
    /// Request timeout duration
    pub timeout: Duration,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("chat_model", &self.chat_model)
            .field("image_model", &self.image_model)
            .field("audio_model", &self.audio_model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OpenAiConfig {
    /// Creates a new configuration with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            audio_model: DEFAULT_AUDIO_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// # Errors
    /// Returns error if `OPENAI_API_KEY` is not set
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| Error::NotConfigured("OPENAI_API_KEY not set".to_string()))?;

        let mut config = Self::new(api_key);
        config.base_url = std::env::var("OPENAI_BASE_URL").ok();
        if let Ok(model) = std::env::var("OPENAI_CHAT_MODEL") {
            config.chat_model = model;
        }
        if let Ok(model) = std::env::var("OPENAI_IMAGE_MODEL") {
            config.image_model = model;
        }
        if let Ok(model) = std::env::var("OPENAI_AUDIO_MODEL") {
            config.audio_model = model;
        }

        Ok(config)
    }

    /// Sets a custom base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the chat completion model
    #[must_use]
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    /// Sets the image generation model
    #[must_use]
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Sets the audio transcription model
    #[must_use]
    pub fn with_audio_model(mut self, model: impl Into<String>) -> Self {
        self.audio_model = model.into();
        self
    }

    /// Sets the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = OpenAiConfig::new("test-key")
            .with_chat_model("gpt-4o")
            .with_audio_model("whisper-large")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.chat_model, "gpt-4o");
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.audio_model, "whisper-large");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_defaults() {
        let config = OpenAiConfig::new("test-key");
        assert_eq!(config.chat_model, DEFAULT_CHAT_MODEL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
        assert_eq!(config.audio_model, DEFAULT_AUDIO_MODEL);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_config_debug_masks_key() {
        let config = OpenAiConfig::new("sk-1234567890abcdefghijklmnop");
        let debug_str = format!("{:?}", config);

        assert!(!debug_str.contains("1234567890abcdefghijkl"));
        assert!(debug_str.contains("sk-1...mnop"));
    }
}
