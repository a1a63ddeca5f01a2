//! The bounded frame-sampling extraction loop.
//!
//! [`FrameSampler`] owns the entire lifecycle of one extraction: derive and
//! create the output directory, open the source, iterate frames in
//! presentation order, keep every Nth frame, persist each kept frame as an
//! image, and return a [`SampleReport`]. One call to
//! [`extract`](FrameSampler::extract) processes exactly one source
//! end-to-end; there is no reentry and no mid-run cancellation.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::FramesiftError,
    options::{SampleOptions, WritePolicy},
    progress::ProgressTracker,
    source::VideoSource,
};

/// Derive the output directory for a source path: the source file's base
/// name with its extension stripped, joined under `dest_root`.
///
/// Returns `None` when the path has no file name component.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// let dir = framesift::output_dir_for(Path::new("clips/holiday.mp4"), Path::new(".")).unwrap();
/// assert_eq!(dir, Path::new("./holiday"));
/// ```
pub fn output_dir_for(source_path: &Path, dest_root: &Path) -> Option<PathBuf> {
    source_path
        .file_stem()
        .map(|stem| dest_root.join(stem))
}

/// Build the image path for a saved frame:
/// `<output_dir>/frame_<ordinal:06>.<format>`.
///
/// The ordinal is the frame's index in the source, not its rank among saved
/// frames, so file numbering has gaps whenever the sampling interval is
/// greater than 1.
pub fn output_image_path(output_dir: &Path, ordinal: u64, image_format: &str) -> PathBuf {
    output_dir.join(format!("frame_{ordinal:06}.{image_format}"))
}

/// The result of a completed extraction.
#[derive(Debug, Clone)]
#[must_use]
pub struct SampleReport {
    /// Number of frames persisted as images.
    pub saved: u64,
    /// Total number of frames decoded, saved or not.
    pub frames_read: u64,
    /// Number of image writes that failed, when running under
    /// [`WritePolicy::SkipAndCount`]. Always zero under
    /// [`WritePolicy::Fail`].
    pub failed_writes: u64,
    /// The directory the images were written to.
    pub output_dir: PathBuf,
}

/// Single-pass frame-sampling extractor.
///
/// # Example
///
/// ```no_run
/// use framesift::{FrameSampler, SampleOptions};
///
/// let options = SampleOptions::new().with_interval(3).with_image_format("png");
/// let report = FrameSampler::new(options).extract("clip.mp4")?;
/// // A 10-frame clip yields frame_000000.png, frame_000003.png,
/// // frame_000006.png and frame_000009.png under ./clip/.
/// assert_eq!(report.saved, 4);
/// # Ok::<(), framesift::FramesiftError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameSampler {
    options: SampleOptions,
}

impl FrameSampler {
    /// Create a sampler with the given options.
    pub fn new(options: SampleOptions) -> Self {
        Self { options }
    }

    /// Extract sampled frames from `source_path`.
    ///
    /// Steps, in order:
    ///
    /// 1. Reject a zero interval ([`FramesiftError::InvalidInterval`])
    ///    before anything is created, opened, or written.
    /// 2. Derive the output directory from the source base name and create
    ///    it. Creation is idempotent: an existing directory is reused,
    ///    never cleared, and images from prior runs with colliding names
    ///    are overwritten.
    /// 3. Open the source. On failure the already-created empty directory
    ///    remains; nothing else has been written.
    /// 4. Decode every frame; save those whose ordinal is a multiple of the
    ///    interval. The ordinal advances on every decoded frame regardless
    ///    of whether it was saved. The loop ends only when the stream is
    ///    exhausted — the container's reported frame count is never
    ///    consulted for termination.
    ///
    /// # Errors
    ///
    /// - [`FramesiftError::InvalidInterval`] for a zero interval.
    /// - [`FramesiftError::SourceOpen`] / [`FramesiftError::NoVideoStream`]
    ///   if the source cannot be opened.
    /// - [`FramesiftError::DecodeFailed`] if the decoder fails mid-stream
    ///   (distinct from ordinary end of stream).
    /// - [`FramesiftError::FrameWrite`] if an image write fails under
    ///   [`WritePolicy::Fail`].
    /// - [`FramesiftError::Io`] if the output directory cannot be created.
    pub fn extract<P: AsRef<Path>>(&self, source_path: P) -> Result<SampleReport, FramesiftError> {
        let source_path = source_path.as_ref();
        let interval = self.options.interval;

        if interval == 0 {
            return Err(FramesiftError::InvalidInterval);
        }

        let output_dir = output_dir_for(source_path, &self.options.dest_root).ok_or_else(|| {
            FramesiftError::SourceOpen {
                path: source_path.to_path_buf(),
                reason: "path has no file name component".to_string(),
            }
        })?;

        if output_dir.is_dir() {
            log::debug!("Reusing existing output directory: {}", output_dir.display());
        } else {
            log::debug!("Creating output directory: {}", output_dir.display());
        }
        fs::create_dir_all(&output_dir)?;

        let mut source = VideoSource::open(source_path)?;

        // Advisory estimate for the progress side channel only.
        let frame_count = source.metadata().video.frame_count;
        let estimated_total = (frame_count > 0).then(|| frame_count.div_ceil(interval));

        let mut tracker = ProgressTracker::new(self.options.progress.clone(), estimated_total);

        let mut saved = 0_u64;
        let mut failed_writes = 0_u64;
        let mut frames_read = 0_u64;

        for result in source.frames()? {
            let (ordinal, image) = result?;
            frames_read = ordinal + 1;

            if ordinal % interval != 0 {
                continue;
            }

            let image_path = output_image_path(&output_dir, ordinal, &self.options.image_format);
            match image.save(&image_path) {
                Ok(()) => {
                    saved += 1;
                    log::debug!("Saved frame {ordinal} -> {}", image_path.display());
                    tracker.record_saved(ordinal);
                }
                Err(error) => match self.options.write_policy {
                    WritePolicy::Fail => {
                        return Err(FramesiftError::FrameWrite {
                            path: image_path,
                            reason: error.to_string(),
                        });
                    }
                    WritePolicy::SkipAndCount => {
                        failed_writes += 1;
                        log::warn!(
                            "Failed to write frame {ordinal} to {}: {error}",
                            image_path.display(),
                        );
                    }
                },
            }
        }

        log::info!(
            "Saved {saved} of {frames_read} frames to {}",
            output_dir.display(),
        );

        Ok(SampleReport {
            saved,
            frames_read,
            failed_writes,
            output_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{output_dir_for, output_image_path};

    #[test]
    fn output_dir_strips_extension() {
        let dir = output_dir_for(Path::new("clips/holiday.mp4"), Path::new(".")).unwrap();
        assert_eq!(dir, Path::new("./holiday"));
    }

    #[test]
    fn output_dir_keeps_extensionless_name() {
        let dir = output_dir_for(Path::new("raw_capture"), Path::new("out")).unwrap();
        assert_eq!(dir, Path::new("out/raw_capture"));
    }

    #[test]
    fn output_dir_uses_only_the_base_name() {
        // The directory lands under dest_root, not alongside the source.
        let dir = output_dir_for(Path::new("/mnt/media/trip.mkv"), Path::new(".")).unwrap();
        assert_eq!(dir, Path::new("./trip"));
    }

    #[test]
    fn output_dir_rejects_nameless_path() {
        assert!(output_dir_for(Path::new("/"), Path::new(".")).is_none());
    }

    #[test]
    fn image_path_zero_pads_to_six_digits() {
        let path = output_image_path(Path::new("holiday"), 7, "png");
        assert_eq!(path, Path::new("holiday/frame_000007.png"));
    }

    #[test]
    fn image_path_carries_large_ordinals_unpadded() {
        let path = output_image_path(Path::new("holiday"), 1_234_567, "jpg");
        assert_eq!(path, Path::new("holiday/frame_1234567.jpg"));
    }
}
