//! Courier Audio - inbound media normalization
//!
//! Fetches remote voice/audio attachments and produces a byte stream the
//! transcription endpoint accepts, re-encoding through ffmpeg when the
//! container is not natively supported.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod media;
pub mod normalizer;
pub mod transcode;

pub use error::{Error, Result};
pub use media::{MediaReference, NormalizedAudio, SUPPORTED_EXTENSIONS, TARGET_EXTENSION};
pub use normalizer::AudioNormalizer;
pub use transcode::{convert_to_mp3, is_ffmpeg_available};
