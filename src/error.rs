//! Error types for the `framesift` crate.
//!
//! This module defines [`FramesiftError`], the unified error type returned by
//! all fallible operations in the crate. Errors carry enough context to
//! diagnose the problem at the call site, including file paths and upstream
//! error messages.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use image::ImageError;
use thiserror::Error;

/// The unified error type for all `framesift` operations.
///
/// Every public method that can fail returns `Result<T, FramesiftError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FramesiftError {
    /// The video source could not be opened.
    ///
    /// Covers missing paths, unreadable or corrupt containers, and codecs
    /// the decoding backend does not support. Fatal for the extraction:
    /// no frames are read after this.
    #[error("Failed to open video source at {path}: {reason}")]
    SourceOpen {
        /// Path that was passed to [`crate::VideoSource::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The container opened cleanly but holds no video stream.
    #[error("No video stream found in source")]
    NoVideoStream,

    /// A sampling interval of zero was supplied.
    ///
    /// Rejected before the output directory is created and before any frame
    /// is read, so a contract violation leaves no filesystem side effects.
    #[error("Sampling interval must be greater than zero")]
    InvalidInterval,

    /// The decoder failed mid-stream.
    ///
    /// Distinct from normal end of stream: the reader reports exhaustion by
    /// ending iteration, never through this variant.
    #[error("Failed to decode video frame: {0}")]
    DecodeFailed(String),

    /// An image could not be encoded or persisted to disk.
    #[error("Failed to write frame image to {path}: {reason}")]
    FrameWrite {
        /// Destination path of the failed write.
        path: PathBuf,
        /// Underlying reason the write failed.
        reason: String,
    },

    /// An I/O error occurred, typically during output-directory creation.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// An error from the `image` crate during frame conversion.
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),
}

impl From<FfmpegError> for FramesiftError {
    fn from(error: FfmpegError) -> Self {
        FramesiftError::DecodeFailed(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::FramesiftError;

    #[test]
    fn source_open_display_includes_path_and_reason() {
        let error = FramesiftError::SourceOpen {
            path: PathBuf::from("missing.mp4"),
            reason: "No such file or directory".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("missing.mp4"));
        assert!(message.contains("No such file or directory"));
    }

    #[test]
    fn frame_write_display_includes_destination() {
        let error = FramesiftError::FrameWrite {
            path: PathBuf::from("clip/frame_000003.png"),
            reason: "disk full".to_string(),
        };
        assert!(error.to_string().contains("frame_000003.png"));
    }

    #[test]
    fn ffmpeg_error_folds_into_decode_failed() {
        let error = FramesiftError::from(ffmpeg_next::Error::Eof);
        assert!(matches!(error, FramesiftError::DecodeFailed(_)));
    }
}
