//! OpenAI gateway - chat completion, image generation, audio transcription
//!
//! Stateless request/response façade over the OpenAI HTTP API. Chat and
//! transcription go through async-openai; image generation is a single
//! JSON POST via reqwest. No retries, no caching - every call is one
//! attempt bounded by the transport timeout.

use crate::config::OpenAiConfig;
use crate::error::{Error, Result};
use crate::util::sanitize_api_error;
use async_openai::{
    config::OpenAIConfig,
    types::audio::{AudioInput, AudioResponseFormat, CreateTranscriptionRequestArgs},
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessage,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
    },
    Client,
};
use courier_audio::NormalizedAudio;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Default OpenAI API base for endpoints called directly
const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Requested image resolution; one image per request
const IMAGE_SIZE: &str = "512x512";

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

/// Stateless façade over the OpenAI chat, image and transcription endpoints
pub struct OpenAiGateway {
    client: Client<OpenAIConfig>,
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiGateway {
    /// Creates a gateway from the given configuration
    #[must_use]
    pub fn new(config: OpenAiConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(&config.api_key);

        if let Some(base_url) = &config.base_url {
            openai_config = openai_config.with_api_base(base_url);
        }

        // The default async-openai client uses reqwest::Client::new()
        // which has NO timeout; build one explicitly.
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        // Cap async-openai's internal backoff at the request timeout;
        // retry policy is left to the operator.
        let backoff = backoff::ExponentialBackoff {
            max_elapsed_time: Some(config.timeout),
            ..Default::default()
        };

        let client = Client::build(http.clone(), openai_config, backoff);

        Self {
            client,
            http,
            config,
        }
    }

    /// Creates a gateway from environment variables
    ///
    /// # Errors
    /// Returns error if `OPENAI_API_KEY` is not set
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(OpenAiConfig::from_env()?))
    }

    fn api_base(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(OPENAI_API_BASE)
    }

    /// Single-turn chat completion; returns the first choice's content.
    ///
    /// The prompt is sent as one user-role message, empty or not.
    #[instrument(skip(self, prompt), fields(model = %self.config.chat_model))]
    pub async fn complete_text(&self, prompt: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![ChatCompletionRequestUserMessage {
            content: ChatCompletionRequestUserMessageContent::Text(prompt.to_string()),
            name: None,
        }
        .into()];

        let request = CreateChatCompletionRequest {
            model: self.config.chat_model.clone(),
            messages,
            ..Default::default()
        };

        debug!("Sending chat completion request");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| Error::Api(sanitize_api_error(&e.to_string())))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::InvalidResponse("no choices in response".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }

    /// Generate exactly one image at a fixed resolution; returns its URL
    #[instrument(skip(self, prompt), fields(model = %self.config.image_model))]
    pub async fn generate_image(&self, prompt: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.config.image_model,
            "prompt": prompt,
            "n": 1,
            "size": IMAGE_SIZE,
            "response_format": "url",
        });

        debug!("Sending image generation request");

        let response = self
            .http
            .post(format!("{}/images/generations", self.api_base()))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Api(sanitize_api_error(&e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(sanitize_api_error(&format!(
                "image generation failed ({}): {}",
                status, body
            ))));
        }

        let parsed: ImagesResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;

        parsed
            .data
            .into_iter()
            .next()
            .and_then(|image| image.url)
            .ok_or_else(|| Error::InvalidResponse("no image URL in response".to_string()))
    }

    /// Download a generated image so the caller can relay the photo bytes
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Api(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!(
                "image download failed with status {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Api(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    /// Upload normalized audio for transcription; returns the transcript.
    ///
    /// Takes ownership of the audio - the buffer is consumed by the upload
    /// and released when this call returns.
    #[instrument(skip(self, audio), fields(model = %self.config.audio_model, size = audio.bytes.len()))]
    pub async fn transcribe_audio(&self, audio: NormalizedAudio) -> Result<String> {
        let request = CreateTranscriptionRequestArgs::default()
            .file(AudioInput::from_vec_u8(audio.file_name(), audio.bytes))
            .model(&self.config.audio_model)
            .response_format(AudioResponseFormat::Text)
            .build()
            .map_err(|e| Error::Api(format!("failed to build transcription request: {e}")))?;

        let response = self
            .client
            .audio()
            .transcription()
            .create(request)
            .await
            .map_err(|e| Error::Api(sanitize_api_error(&e.to_string())))?;

        Ok(response.text.trim().to_string())
    }
}
