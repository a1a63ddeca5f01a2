//! Extraction options.
//!
//! [`SampleOptions`] is a builder that carries the sampling interval, image
//! format, destination root, write-failure policy, and an optional progress
//! sink into [`FrameSampler::extract`](crate::FrameSampler::extract) without
//! polluting the call signature. Inputs arrive here as already-validated
//! parameters — the core never reads from standard input.
//!
//! # Example
//!
//! ```
//! use framesift::{SampleOptions, WritePolicy};
//!
//! let options = SampleOptions::new()
//!     .with_interval(30)
//!     .with_image_format("jpg")
//!     .with_dest_root("out")
//!     .with_write_policy(WritePolicy::SkipAndCount);
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::progress::{NoOpProgress, ProgressCallback};

/// What to do when a frame image fails to encode or persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Abort the extraction on the first failed write. This is the default.
    #[default]
    Fail,
    /// Log the failure, count it in
    /// [`SampleReport::failed_writes`](crate::SampleReport::failed_writes),
    /// and continue with the next frame.
    SkipAndCount,
}

/// Configuration for a sampling extraction.
///
/// All fields have defaults: interval 1 (every frame), `png` images, output
/// under the current working directory, fail-fast writes, no progress
/// callback.
#[derive(Clone)]
pub struct SampleOptions {
    /// Sampling stride: only frames whose ordinal is a multiple of this are
    /// saved. Zero is rejected by the sampler before any work happens.
    pub(crate) interval: u64,
    /// Image file extension; the encoding backend picks the codec from it.
    pub(crate) image_format: String,
    /// Directory under which the derived output directory is created.
    pub(crate) dest_root: PathBuf,
    /// Write-failure policy.
    pub(crate) write_policy: WritePolicy,
    /// Progress callback. Defaults to a no-op.
    pub(crate) progress: Arc<dyn ProgressCallback>,
}

impl Debug for SampleOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SampleOptions")
            .field("interval", &self.interval)
            .field("image_format", &self.image_format)
            .field("dest_root", &self.dest_root)
            .field("write_policy", &self.write_policy)
            .finish_non_exhaustive()
    }
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self {
            interval: 1,
            image_format: "png".to_string(),
            dest_root: PathBuf::from("."),
            write_policy: WritePolicy::default(),
            progress: Arc::new(NoOpProgress),
        }
    }

    /// Set the sampling interval.
    ///
    /// An interval of 1 saves every frame; 30 saves every 30th. Zero is a
    /// caller contract violation and makes
    /// [`extract`](crate::FrameSampler::extract) return
    /// [`InvalidInterval`](crate::FramesiftError::InvalidInterval) before
    /// anything is opened or written.
    #[must_use]
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval;
        self
    }

    /// Set the image format (file extension).
    ///
    /// A leading dot is stripped and the value lowercased. No allow-list is
    /// enforced here — an extension the encoding backend does not support
    /// fails at write time.
    #[must_use]
    pub fn with_image_format(mut self, format: impl AsRef<str>) -> Self {
        self.image_format = format
            .as_ref()
            .trim_start_matches('.')
            .to_ascii_lowercase();
        self
    }

    /// Set the directory under which the derived output directory is
    /// created. Defaults to `"."`, the process working directory.
    #[must_use]
    pub fn with_dest_root(mut self, root: impl AsRef<Path>) -> Self {
        self.dest_root = root.as_ref().to_path_buf();
        self
    }

    /// Set the write-failure policy.
    #[must_use]
    pub fn with_write_policy(mut self, policy: WritePolicy) -> Self {
        self.write_policy = policy;
        self
    }

    /// Attach a progress callback, invoked once per saved frame.
    #[must_use]
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = callback;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{SampleOptions, WritePolicy};

    #[test]
    fn defaults() {
        let options = SampleOptions::new();
        assert_eq!(options.interval, 1);
        assert_eq!(options.image_format, "png");
        assert_eq!(options.dest_root, std::path::PathBuf::from("."));
        assert_eq!(options.write_policy, WritePolicy::Fail);
    }

    #[test]
    fn image_format_is_normalized() {
        let options = SampleOptions::new().with_image_format(".JPG");
        assert_eq!(options.image_format, "jpg");
    }

    #[test]
    fn debug_elides_callback() {
        let rendered = format!("{:?}", SampleOptions::new().with_interval(5));
        assert!(rendered.contains("interval: 5"));
        assert!(!rendered.contains("progress"));
    }
}
