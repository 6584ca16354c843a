//! Courier - Telegram to OpenAI relay bot
//!
//! Process entry point: loads configuration, wires the gateway, the
//! audio normalizer and the Telegram adapter, then runs the bot.

#![forbid(unsafe_code)]

use anyhow::Result;
use courier_audio::{is_ffmpeg_available, AudioNormalizer};
use courier_channels::TelegramAdapter;
use courier_llm::OpenAiGateway;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courier=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Courier v{}", env!("CARGO_PKG_VERSION"));

    if !is_ffmpeg_available() {
        warn!("ffmpeg not found in PATH; voice note transcoding will fail");
    }

    let gateway = Arc::new(OpenAiGateway::from_env()?);
    let normalizer = Arc::new(AudioNormalizer::new());
    let adapter = Arc::new(TelegramAdapter::from_env()?);

    adapter.run(gateway, normalizer).await?;

    Ok(())
}
