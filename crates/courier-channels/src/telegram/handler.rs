//! Telegram message handler and bot runner

use super::access::{Guard, Principal};
use super::adapter::TelegramAdapter;
use super::commands::{BotCommand, HELP_TEXT, UNKNOWN_COMMAND_TEXT};
use crate::error::Result;
use crate::util::mask_for_logging;
use courier_audio::{AudioNormalizer, Error as AudioError, MediaReference};
use courier_llm::OpenAiGateway;
use std::sync::Arc;
use teloxide::{
    payloads::{SendMessageSetters, SendPhotoSetters},
    prelude::*,
    types::{ChatAction, InputFile, Message as TelegramMessage, ReplyParameters},
};
use tracing::{debug, error, info, instrument, warn};

/// Fixed reply when an audio attachment cannot be downloaded
const DOWNLOAD_FAILED_TEXT: &str = "Sorry, I couldn't download that audio message.";

/// Fixed reply when transcoding fails
const CONVERSION_FAILED_TEXT: &str = "Conversion failed!";

/// Fixed reply when an AI request fails
const UPSTREAM_FAILED_TEXT: &str = "Sorry, the AI request failed. Please try again.";

impl TelegramAdapter {
    /// Start the bot, handling events until shutdown
    #[instrument(skip(self, gateway, normalizer))]
    pub async fn run(
        self: Arc<Self>,
        gateway: Arc<OpenAiGateway>,
        normalizer: Arc<AudioNormalizer>,
    ) -> Result<()> {
        info!("Starting Telegram bot");

        let bot = self.bot.clone();
        let adapter = self.clone();

        let handler = Update::filter_message().endpoint(move |bot: Bot, msg: TelegramMessage| {
            let adapter = adapter.clone();
            let gateway = gateway.clone();
            let normalizer = normalizer.clone();
            async move { Self::handle_message(adapter, gateway, normalizer, bot, msg).await }
        });

        // Default distribution: events from the same chat are handled
        // one at a time, distinct chats concurrently.
        Dispatcher::builder(bot, handler)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }

    /// Handle one inbound message, start-to-finish
    pub(crate) async fn handle_message(
        adapter: Arc<Self>,
        gateway: Arc<OpenAiGateway>,
        normalizer: Arc<AudioNormalizer>,
        bot: Bot,
        msg: TelegramMessage,
    ) -> ResponseResult<()> {
        let Some(principal) = Principal::from_message(&msg) else {
            debug!(chat_id = %msg.chat.id, "No principal for message, ignoring");
            return Ok(());
        };

        // The gate runs before any handler body; denied events are
        // dropped without a reply.
        if !adapter.gate.check(&principal) {
            return Ok(());
        }

        if msg.voice().is_some() || msg.audio().is_some() {
            Self::handle_audio_message(&adapter, &gateway, &normalizer, &bot, &msg).await;
            return Ok(());
        }

        let Some(text) = msg.text() else {
            return Ok(());
        };

        // Plain messages are not commands; nothing to do.
        let Some(command) = BotCommand::parse(text) else {
            return Ok(());
        };

        info!(
            chat_id = %msg.chat.id,
            user_id = principal.user_id,
            text = %mask_for_logging(text),
            "Dispatching command"
        );

        let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;

        match command {
            BotCommand::Chat(prompt) => match gateway.complete_text(&prompt).await {
                Ok(reply) => Self::reply_text(&bot, &msg, &reply).await,
                Err(e) => {
                    error!(error = %e, "Chat completion failed");
                    Self::reply_text(&bot, &msg, UPSTREAM_FAILED_TEXT).await;
                }
            },
            BotCommand::Pic(description) => match Self::generate_photo(&gateway, &description).await
            {
                Ok(image) => {
                    let photo = InputFile::memory(image).file_name("generated.png");
                    if let Err(e) = bot
                        .send_photo(msg.chat.id, photo)
                        .reply_parameters(ReplyParameters::new(msg.id))
                        .await
                    {
                        error!(chat_id = %msg.chat.id, error = %e, "Failed to send photo");
                    }
                }
                Err(e) => {
                    error!(error = %e, "Image generation failed");
                    Self::reply_text(&bot, &msg, UPSTREAM_FAILED_TEXT).await;
                }
            },
            BotCommand::Start => Self::reply_text(&bot, &msg, HELP_TEXT).await,
            BotCommand::Unknown => Self::reply_text(&bot, &msg, UNKNOWN_COMMAND_TEXT).await,
        }

        Ok(())
    }

    /// Generate an image and download its bytes for the photo reply
    async fn generate_photo(
        gateway: &OpenAiGateway,
        description: &str,
    ) -> courier_llm::Result<Vec<u8>> {
        let url = gateway.generate_image(description).await?;
        gateway.fetch_image(&url).await
    }

    /// Transcribe a voice or audio attachment and reply with the transcript
    async fn handle_audio_message(
        adapter: &Arc<Self>,
        gateway: &Arc<OpenAiGateway>,
        normalizer: &Arc<AudioNormalizer>,
        bot: &Bot,
        msg: &TelegramMessage,
    ) {
        let file_id = if let Some(voice) = msg.voice() {
            voice.file.id.clone()
        } else if let Some(audio) = msg.audio() {
            audio.file.id.clone()
        } else {
            return;
        };

        let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;

        let file = match bot.get_file(file_id).await {
            Ok(file) => file,
            Err(e) => {
                warn!(chat_id = %msg.chat.id, error = %e, "Failed to resolve audio file");
                Self::reply_text(bot, msg, DOWNLOAD_FAILED_TEXT).await;
                return;
            }
        };

        let media = MediaReference::new(adapter.file_url(&file.path));
        debug!(
            ext = %media.declared_extension,
            size = file.meta.size,
            "Resolved audio attachment"
        );

        let transcript = match normalizer.normalize(&media).await {
            Ok(audio) => gateway.transcribe_audio(audio).await,
            Err(e @ AudioError::Transcode(_)) => {
                warn!(chat_id = %msg.chat.id, error = %e, "Audio conversion failed");
                Self::reply_text(bot, msg, CONVERSION_FAILED_TEXT).await;
                return;
            }
            Err(e) => {
                warn!(chat_id = %msg.chat.id, error = %e, "Audio download failed");
                Self::reply_text(bot, msg, DOWNLOAD_FAILED_TEXT).await;
                return;
            }
        };

        match transcript {
            Ok(text) => Self::reply_text(bot, msg, &text).await,
            Err(e) => {
                error!(chat_id = %msg.chat.id, error = %e, "Transcription failed");
                Self::reply_text(bot, msg, UPSTREAM_FAILED_TEXT).await;
            }
        }
    }

    async fn reply_text(bot: &Bot, msg: &TelegramMessage, text: &str) {
        if let Err(e) = bot
            .send_message(msg.chat.id, text)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await
        {
            error!(chat_id = %msg.chat.id, error = %e, "Failed to send reply");
        }
    }
}
