//! Source metadata types.
//!
//! This module defines the metadata structures returned by
//! [`VideoSource::metadata`](crate::VideoSource::metadata). Metadata is
//! extracted once when the source is opened and cached for the lifetime of
//! the handle.

use std::time::Duration;

/// Container-level metadata for an opened video source.
#[derive(Debug, Clone)]
#[must_use]
pub struct SourceMetadata {
    /// Video stream metadata for the best video stream.
    pub video: VideoMetadata,
    /// Total duration of the container.
    pub duration: Duration,
    /// Container format name (e.g. `"mp4"`, `"matroska"`, `"avi"`).
    pub format: String,
}

/// Metadata for a video stream.
///
/// The frame count here is an estimate computed from duration and frame
/// rate. Containers can misreport both, so treat it as advisory: it is
/// suitable for progress display and nothing else.
#[derive(Debug, Clone)]
#[must_use]
pub struct VideoMetadata {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second (may be approximate for variable-frame-rate content).
    pub frames_per_second: f64,
    /// Estimated total number of frames. May be zero or inaccurate.
    pub frame_count: u64,
    /// Codec name (e.g. `"h264"`, `"vp9"`, `"av1"`).
    pub codec: String,
}
