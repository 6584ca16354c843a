//! Media reference and normalized audio types

use url::Url;

/// Extensions the transcription endpoint accepts without prior transcoding
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "mp4", "mpeg", "m4a", "wav", "webm"];

/// Canonical target format for transcoded audio
pub const TARGET_EXTENSION: &str = "mp3";

/// A not-yet-fetched remote audio attachment
#[derive(Debug, Clone)]
pub struct MediaReference {
    /// Full download URL for the file
    pub remote_url: String,
    /// File extension declared by the remote path (lowercased)
    pub declared_extension: String,
}

impl MediaReference {
    /// Create a reference, deriving the extension from the URL path
    #[must_use]
    pub fn new(remote_url: impl Into<String>) -> Self {
        let remote_url = remote_url.into();
        let declared_extension = extension_from_url(&remote_url);
        Self {
            remote_url,
            declared_extension,
        }
    }

    /// Whether the declared extension is accepted without transcoding
    #[must_use]
    pub fn is_supported(&self) -> bool {
        SUPPORTED_EXTENSIONS.contains(&self.declared_extension.as_str())
    }
}

/// Extract the lowercased file extension from a URL path.
///
/// Query strings and fragments are not part of the extension. A path with
/// no `.` segment yields an empty string, which is never in the whitelist.
fn extension_from_url(raw: &str) -> String {
    let path = Url::parse(raw)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| {
            raw.split(['?', '#'])
                .next()
                .unwrap_or(raw)
                .to_string()
        });

    match path.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && !ext.contains('/') => ext.to_ascii_lowercase(),
        _ => String::new(),
    }
}

/// Transcription-ready audio bytes tagged with their format
#[derive(Debug, Clone)]
pub struct NormalizedAudio {
    /// Raw audio bytes
    pub bytes: Vec<u8>,
    /// Format tag, a member of [`SUPPORTED_EXTENSIONS`]
    pub extension: String,
}

impl NormalizedAudio {
    /// File name used for the multipart upload; carries the format tag
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("audio.{}", self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_from_telegram_voice_url() {
        let media =
            MediaReference::new("https://api.telegram.org/file/bot123:abc/voice/file_7.oga");
        assert_eq!(media.declared_extension, "oga");
        assert!(!media.is_supported());
    }

    #[test]
    fn test_supported_extension_passthrough() {
        let media = MediaReference::new("https://api.telegram.org/file/bot123:abc/music/track.mp3");
        assert_eq!(media.declared_extension, "mp3");
        assert!(media.is_supported());
    }

    #[test]
    fn test_extension_ignores_query_string() {
        let media = MediaReference::new("https://example.com/audio/clip.wav?session=1.2");
        assert_eq!(media.declared_extension, "wav");
        assert!(media.is_supported());
    }

    #[test]
    fn test_extension_is_lowercased() {
        let media = MediaReference::new("https://example.com/SHOUTY.WAV");
        assert_eq!(media.declared_extension, "wav");
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let media = MediaReference::new("https://example.com/voice/file_7");
        assert_eq!(media.declared_extension, "");
        assert!(!media.is_supported());
    }

    #[test]
    fn test_whitelist_contents() {
        for ext in ["mp3", "mp4", "mpeg", "m4a", "wav", "webm"] {
            assert!(SUPPORTED_EXTENSIONS.contains(&ext));
        }
        assert!(!SUPPORTED_EXTENSIONS.contains(&"ogg"));
        assert!(!SUPPORTED_EXTENSIONS.contains(&"oga"));
    }

    #[test]
    fn test_normalized_audio_file_name() {
        let audio = NormalizedAudio {
            bytes: vec![0u8; 16],
            extension: "wav".to_string(),
        };
        assert_eq!(audio.file_name(), "audio.wav");
    }
}
