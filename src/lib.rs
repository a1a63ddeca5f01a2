//! # framesift
//!
//! Sift video files into still-frame image sequences.
//!
//! `framesift` opens a video file, decodes it frame-by-frame in presentation
//! order, keeps every Nth frame according to a fixed sampling stride, and
//! writes each kept frame as an image into a directory named after the
//! video, powered by FFmpeg via the
//! [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate.
//!
//! ## Quick Start
//!
//! ```no_run
//! use framesift::{FrameSampler, SampleOptions};
//!
//! // Save every 30th frame of input.mp4 as a PNG under ./input/
//! let options = SampleOptions::new().with_interval(30).with_image_format("png");
//! let report = FrameSampler::new(options).extract("input.mp4")?;
//! println!("saved {} frames to {}", report.saved, report.output_dir.display());
//! # Ok::<(), framesift::FramesiftError>(())
//! ```
//!
//! ## Iterate Frames Directly
//!
//! ```no_run
//! use framesift::VideoSource;
//!
//! let mut source = VideoSource::open("input.mp4")?;
//! for result in source.frames()? {
//!     let (ordinal, image) = result?;
//!     println!("frame {ordinal}: {}x{}", image.width(), image.height());
//! }
//! # Ok::<(), framesift::FramesiftError>(())
//! ```
//!
//! ## Behavior
//!
//! - The output directory is derived from the source file's base name with
//!   its extension stripped. An existing directory is reused, never cleared;
//!   colliding file names are overwritten.
//! - Saved files are named `frame_<ordinal:06>.<format>` where `<ordinal>`
//!   is the frame's index in the source, so numbering gaps appear whenever
//!   the interval is greater than 1.
//! - The container's reported frame count is advisory only: it feeds the
//!   progress estimate but never terminates the decode loop. The loop stops
//!   when the demuxer signals end of stream.
//! - Extraction is synchronous, single-pass, and single-threaded.
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system.

pub mod error;
pub mod ffmpeg;
pub mod metadata;
pub mod options;
pub mod progress;
pub mod reader;
pub mod sampler;
pub mod source;
mod utilities;

pub use error::FramesiftError;
pub use ffmpeg::{NativeLogLevel, set_native_log_level};
pub use metadata::{SourceMetadata, VideoMetadata};
pub use options::{SampleOptions, WritePolicy};
pub use progress::{ProgressCallback, ProgressInfo};
pub use reader::FrameReader;
pub use sampler::{FrameSampler, SampleReport, output_dir_for, output_image_path};
pub use source::VideoSource;
