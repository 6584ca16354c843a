//! Audio transcoding via ffmpeg
//!
//! Telegram voice notes arrive as OGG/Opus, which the transcription
//! endpoint does not accept. ffmpeg re-encodes them to MP3 through
//! stdin/stdout pipes, so no intermediate files are written and nothing
//! outlives the call.

use crate::error::{Error, Result};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Re-encode arbitrary audio bytes to MP3
///
/// # Errors
/// Returns [`Error::Transcode`] if ffmpeg is not available, exits with a
/// non-zero status (corrupt stream, unsupported codec) or produces no
/// output.
pub async fn convert_to_mp3(input: &[u8]) -> Result<Vec<u8>> {
    debug!(input_size = input.len(), "Transcoding audio to MP3");

    let mut child = Command::new("ffmpeg")
        .args([
            "-i", "pipe:0",          // Read from stdin
            "-f", "mp3",             // Output container
            "-codec:a", "libmp3lame",
            "-q:a", "4",             // VBR, plenty for speech
            "pipe:1",                // Write to stdout
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| {
            warn!(error = %e, "Failed to spawn ffmpeg");
            Error::Transcode(format!("ffmpeg not available: {}", e))
        })?;

    // Feed stdin from a separate task; ffmpeg may start emitting output
    // before the input is fully written.
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::Transcode("ffmpeg stdin unavailable".to_string()))?;
    let data = input.to_vec();
    let writer = tokio::spawn(async move {
        let result = stdin.write_all(&data).await;
        drop(stdin);
        result
    });

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| Error::Transcode(format!("ffmpeg execution failed: {}", e)))?;

    let write_result = writer.await;

    // A failed exit is the definitive signal; a broken-pipe write error
    // just means ffmpeg gave up on the input early.
    if !output.status.success() {
        return Err(Error::Transcode(format!(
            "ffmpeg exited with code {:?}",
            output.status.code()
        )));
    }

    if let Ok(Err(e)) = write_result {
        return Err(Error::Transcode(format!(
            "failed to write to ffmpeg stdin: {}",
            e
        )));
    }

    if output.stdout.is_empty() {
        return Err(Error::Transcode("ffmpeg produced no output".to_string()));
    }

    debug!(output_size = output.stdout.len(), "Transcode complete");
    Ok(output.stdout)
}

/// Check if ffmpeg is available on the system
#[must_use]
pub fn is_ffmpeg_available() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffmpeg_check() {
        // This test just checks that the probe doesn't panic
        let _available = is_ffmpeg_available();
    }

    #[tokio::test]
    async fn test_corrupt_input_fails_with_transcode_error() {
        if !is_ffmpeg_available() {
            return;
        }

        let result = convert_to_mp3(b"definitely not an audio container").await;
        assert!(matches!(result, Err(Error::Transcode(_))));
    }
}
