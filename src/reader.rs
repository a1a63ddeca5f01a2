//! Lazy, pull-based sequential frame reader.
//!
//! [`FrameReader`] implements [`Iterator`] and decodes frames on demand —
//! each call to [`next()`](Iterator::next) reads and decodes just enough
//! packets to produce the next frame. There is no seeking: decoding always
//! proceeds from the start of the stream to its end, one pass.
//!
//! The iterator makes the three terminal conditions of a decode attempt
//! explicit, which a plain "got a frame?" boolean cannot:
//!
//! - `Some(Ok((ordinal, image)))` — the next frame, with its zero-based
//!   position in decode order;
//! - `None` — end of stream, reached after the decoder has been flushed
//!   and drained (normal termination);
//! - `Some(Err(_))` — the decoder failed mid-stream, which callers can now
//!   tell apart from ordinary exhaustion.
//!
//! Create a `FrameReader` via [`VideoSource::frames`](crate::VideoSource::frames).
//!
//! # Example
//!
//! ```no_run
//! use framesift::VideoSource;
//!
//! let mut source = VideoSource::open("input.mp4")?;
//! for result in source.frames()? {
//!     let (ordinal, image) = result?;
//!     image.save(format!("frame_{ordinal}.png"))?;
//! }
//! # Ok::<(), framesift::FramesiftError>(())
//! ```

use ffmpeg_next::{
    Error as FfmpegError, Packet,
    codec::context::Context as CodecContext,
    decoder::Video as VideoDecoder,
    format::Pixel,
    frame::Video as VideoFrame,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::{DynamicImage, RgbImage};

use crate::{error::FramesiftError, source::VideoSource};

/// A lazy iterator over decoded video frames.
///
/// Frames are decoded one at a time as [`next()`](Iterator::next) is called
/// and converted to RGB8 [`DynamicImage`] values. The reader borrows the
/// underlying [`VideoSource`] mutably, so no other decoding can happen while
/// it is alive.
///
/// Ordinals are assigned by a counter that advances once per decoded frame,
/// starting at zero. Because the reader never seeks, the counter is exactly
/// the frame's position in presentation order.
pub struct FrameReader<'a> {
    source: &'a mut VideoSource,
    decoder: VideoDecoder,
    scaler: ScalingContext,
    video_stream_index: usize,
    width: u32,
    height: u32,
    /// Ordinal of the next frame to yield. Advances unconditionally.
    next_ordinal: u64,
    decoded_frame: VideoFrame,
    rgb_frame: VideoFrame,
    eof_sent: bool,
    done: bool,
}

impl<'a> FrameReader<'a> {
    /// Build a fresh decoder and RGB24 converter over the source's best
    /// video stream.
    pub(crate) fn new(source: &'a mut VideoSource) -> Result<Self, FramesiftError> {
        let video_stream_index = source.video_stream_index;

        let stream = source
            .input_context
            .stream(video_stream_index)
            .ok_or(FramesiftError::NoVideoStream)?;
        let codec_parameters = stream.parameters();
        let decoder_context = CodecContext::from_parameters(codec_parameters)?;
        let decoder = decoder_context.decoder().video()?;

        let width = decoder.width();
        let height = decoder.height();

        let scaler = ScalingContext::get(
            decoder.format(),
            width,
            height,
            Pixel::RGB24,
            width,
            height,
            ScalingFlags::BILINEAR,
        )?;

        Ok(Self {
            source,
            decoder,
            scaler,
            video_stream_index,
            width,
            height,
            next_ordinal: 0,
            decoded_frame: VideoFrame::empty(),
            rgb_frame: VideoFrame::empty(),
            eof_sent: false,
            done: false,
        })
    }

    /// Convert the current `decoded_frame` to an RGB8 `DynamicImage`.
    fn convert_current_frame(&mut self) -> Result<DynamicImage, FramesiftError> {
        self.scaler.run(&self.decoded_frame, &mut self.rgb_frame)?;

        let buffer = crate::utilities::packed_rgb_buffer(&self.rgb_frame, self.width, self.height);
        let img = RgbImage::from_raw(self.width, self.height, buffer).ok_or_else(|| {
            FramesiftError::DecodeFailed(
                "Failed to construct RGB image from decoded frame data".to_string(),
            )
        })?;
        Ok(DynamicImage::ImageRgb8(img))
    }
}

impl Iterator for FrameReader<'_> {
    type Item = Result<(u64, DynamicImage), FramesiftError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            // Try to receive a frame the decoder has already produced.
            if self.decoder.receive_frame(&mut self.decoded_frame).is_ok() {
                match self.convert_current_frame() {
                    Ok(image) => {
                        let ordinal = self.next_ordinal;
                        self.next_ordinal += 1;
                        return Some(Ok((ordinal, image)));
                    }
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            }

            // Decoder has no buffered frames. Feed it more packets.
            if self.eof_sent {
                // Already sent EOF and the decoder is drained.
                self.done = true;
                return None;
            }

            let mut packet = Packet::empty();
            match packet.read(&mut self.source.input_context) {
                Ok(()) => {
                    if packet.stream() == self.video_stream_index {
                        if let Err(e) = self.decoder.send_packet(&packet) {
                            self.done = true;
                            return Some(Err(FramesiftError::from(e)));
                        }
                    }
                    // Non-video packets are silently skipped.
                }
                Err(FfmpegError::Eof) => {
                    if let Err(e) = self.decoder.send_eof() {
                        self.done = true;
                        return Some(Err(FramesiftError::from(e)));
                    }
                    self.eof_sent = true;
                }
                Err(_) => {
                    // Non-fatal read error, try the next packet.
                }
            }
        }
    }
}
