//! The [`VideoSource`] handle.
//!
//! `VideoSource` is the entry point for decoding. It opens a video file,
//! locates the best video stream, extracts and caches metadata, and hands
//! out a [`FrameReader`] for sequential decoding. The underlying demuxer is
//! released when the handle is dropped, on every exit path.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    time::Duration,
};

use ffmpeg_next::{codec::context::Context as CodecContext, format::context::Input, media::Type};

use crate::{
    error::FramesiftError,
    metadata::{SourceMetadata, VideoMetadata},
    reader::FrameReader,
};

/// An opened, sequentially-readable handle over a video file.
///
/// Created via [`VideoSource::open`]. The handle exclusively owns the
/// demuxer context for its lifetime; obtain a [`FrameReader`] with
/// [`frames`](VideoSource::frames) to decode.
///
/// # Example
///
/// ```no_run
/// use framesift::VideoSource;
///
/// let mut source = VideoSource::open("input.mp4")?;
/// println!("~{} frames", source.metadata().video.frame_count);
///
/// for result in source.frames()? {
///     let (ordinal, image) = result?;
///     println!("decoded frame {ordinal} ({}x{})", image.width(), image.height());
/// }
/// # Ok::<(), framesift::FramesiftError>(())
/// ```
pub struct VideoSource {
    /// The opened FFmpeg input (demuxer) context.
    pub(crate) input_context: Input,
    /// Cached metadata extracted at open time.
    pub(crate) metadata: SourceMetadata,
    /// Index of the best video stream.
    pub(crate) video_stream_index: usize,
    /// Path to the opened file (kept for error messages).
    pub(crate) file_path: PathBuf,
}

impl Debug for VideoSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("VideoSource")
            .field("metadata", &self.metadata)
            .field("video_stream_index", &self.video_stream_index)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

impl VideoSource {
    /// Open a video file for sequential decoding.
    ///
    /// Initializes FFmpeg (idempotent), opens the container, locates the
    /// best video stream, and caches its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`FramesiftError::SourceOpen`] if the file cannot be opened
    /// or its codec parameters cannot be read, and
    /// [`FramesiftError::NoVideoStream`] if the container holds no video
    /// stream.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FramesiftError> {
        let path = path.as_ref();
        let file_path = path.to_path_buf();

        log::debug!("Opening video source: {}", file_path.display());

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| FramesiftError::SourceOpen {
            path: file_path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| FramesiftError::SourceOpen {
                path: file_path.clone(),
                reason: error.to_string(),
            })?;

        let video_stream_index = input_context
            .streams()
            .best(Type::Video)
            .map(|stream| stream.index())
            .ok_or(FramesiftError::NoVideoStream)?;

        // Container-level duration.
        let duration_microseconds = input_context.duration();
        let duration = if duration_microseconds > 0 {
            Duration::from_micros(duration_microseconds as u64)
        } else {
            Duration::ZERO
        };

        let format = input_context.format().name().to_string();

        let stream = input_context
            .stream(video_stream_index)
            .ok_or(FramesiftError::NoVideoStream)?;

        let codec_parameters = stream.parameters();
        let decoder_context =
            CodecContext::from_parameters(codec_parameters).map_err(|error| {
                FramesiftError::SourceOpen {
                    path: file_path.clone(),
                    reason: format!(
                        "Failed to read video codec parameters for stream {video_stream_index}: {error}"
                    ),
                }
            })?;
        let video_decoder =
            decoder_context
                .decoder()
                .video()
                .map_err(|error| FramesiftError::SourceOpen {
                    path: file_path.clone(),
                    reason: format!(
                        "Failed to create video decoder for stream {video_stream_index}: {error}"
                    ),
                })?;

        let width = video_decoder.width();
        let height = video_decoder.height();

        // Frames per second from the stream's average frame rate, with the
        // raw rate field as fallback.
        let frame_rate = stream.avg_frame_rate();
        let frames_per_second = if frame_rate.denominator() != 0 {
            frame_rate.numerator() as f64 / frame_rate.denominator() as f64
        } else {
            let rate = stream.rate();
            if rate.denominator() != 0 {
                rate.numerator() as f64 / rate.denominator() as f64
            } else {
                0.0
            }
        };

        // Advisory only. Containers misreport durations and frame rates, so
        // this must never be used to terminate the decode loop.
        let frame_count = if frames_per_second > 0.0 {
            (duration.as_secs_f64() * frames_per_second) as u64
        } else {
            0
        };

        let codec = video_decoder
            .codec()
            .map(|codec| codec.name().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let metadata = SourceMetadata {
            video: VideoMetadata {
                width,
                height,
                frames_per_second,
                frame_count,
                codec,
            },
            duration,
            format,
        };

        log::info!(
            "Opened video source: {} (format={}, duration={:.2}s, {}x{}, {:.2} fps, ~{} frames, codec={})",
            file_path.display(),
            metadata.format,
            metadata.duration.as_secs_f64(),
            metadata.video.width,
            metadata.video.height,
            metadata.video.frames_per_second,
            metadata.video.frame_count,
            metadata.video.codec,
        );

        Ok(Self {
            input_context,
            metadata,
            video_stream_index,
            file_path,
        })
    }

    /// Get a reference to the cached source metadata.
    ///
    /// Metadata is extracted once during [`open`](VideoSource::open) and
    /// does not require additional decoding.
    pub fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    /// Path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Create a lazy reader over all frames of the video stream, in decode
    /// order from the start of the file.
    ///
    /// The reader borrows this source mutably, so only one reader can be
    /// alive at a time. Dropping the reader releases the borrow; dropping
    /// the source releases the demuxer.
    ///
    /// # Errors
    ///
    /// Returns [`FramesiftError::DecodeFailed`] if the decoder or pixel
    /// converter cannot be constructed.
    pub fn frames(&mut self) -> Result<FrameReader<'_>, FramesiftError> {
        FrameReader::new(self)
    }
}
