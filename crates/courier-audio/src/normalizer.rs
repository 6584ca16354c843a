//! Inbound media normalization
//!
//! Decides whether a remote audio attachment can be uploaded for
//! transcription as-is or must be re-encoded first, and fetches the bytes.

use crate::error::{Error, Result};
use crate::media::{MediaReference, NormalizedAudio, TARGET_EXTENSION};
use crate::transcode::convert_to_mp3;
use tracing::{debug, instrument};

/// Downloads remote audio and produces transcription-ready bytes
pub struct AudioNormalizer {
    http: reqwest::Client,
}

impl Default for AudioNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioNormalizer {
    /// Create a normalizer with its own HTTP client
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the referenced audio and return it in a supported encoding.
    ///
    /// Already-supported containers pass through untouched and keep their
    /// declared extension as the format tag; anything else is re-encoded
    /// to MP3. All buffers are scoped to this call, success or failure.
    ///
    /// # Errors
    /// [`Error::Download`]/[`Error::Network`] when the fetch fails,
    /// [`Error::Transcode`] when re-encoding fails.
    #[instrument(skip(self, media), fields(ext = %media.declared_extension))]
    pub async fn normalize(&self, media: &MediaReference) -> Result<NormalizedAudio> {
        let bytes = self.fetch(&media.remote_url).await?;

        if media.is_supported() {
            debug!(size = bytes.len(), "Extension supported, skipping transcode");
            return Ok(NormalizedAudio {
                bytes,
                extension: media.declared_extension.clone(),
            });
        }

        let bytes = convert_to_mp3(&bytes).await?;
        Ok(NormalizedAudio {
            bytes,
            extension: TARGET_EXTENSION.to_string(),
        })
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        debug!(size = bytes.len(), "Fetched remote audio");
        Ok(bytes.to_vec())
    }
}
