//! Progress reporting support.
//!
//! This module provides [`ProgressCallback`] for monitoring an extraction
//! and [`ProgressInfo`] for the snapshots it receives. Progress is a side
//! channel: the callback observes the loop but cannot influence it, and the
//! estimated total it receives is advisory — containers can misreport frame
//! counts, so the estimate may be absent, zero, or simply wrong.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use framesift::{FrameSampler, ProgressCallback, ProgressInfo, SampleOptions};
//!
//! struct PrintProgress;
//!
//! impl ProgressCallback for PrintProgress {
//!     fn on_progress(&self, info: &ProgressInfo) {
//!         if let Some(pct) = info.percentage {
//!             println!("{} saved ({pct:.1}%)", info.saved);
//!         }
//!     }
//! }
//!
//! let options = SampleOptions::new()
//!     .with_interval(10)
//!     .with_progress(Arc::new(PrintProgress));
//! let report = FrameSampler::new(options).extract("input.mp4")?;
//! # Ok::<(), framesift::FramesiftError>(())
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

/// A snapshot of extraction progress.
///
/// Delivered to [`ProgressCallback::on_progress`] once per saved frame.
#[derive(Debug, Clone)]
pub struct ProgressInfo {
    /// How many frames have been saved so far.
    pub saved: u64,
    /// Estimated number of frames that will be saved, if the container
    /// reported a usable frame count. Advisory only.
    pub estimated_total: Option<u64>,
    /// Completion percentage (0.0 – 100.0), if an estimate exists.
    pub percentage: Option<f32>,
    /// Source ordinal of the frame that was just saved.
    pub source_ordinal: u64,
    /// Wall-clock time elapsed since the extraction started.
    pub elapsed: Duration,
}

/// Trait for receiving progress updates during an extraction.
///
/// Implementations must be [`Send`] and [`Sync`] so the same callback value
/// can be shared by callers that live on other threads.
///
/// Progress callbacks are **infallible** — they observe but cannot halt the
/// operation.
pub trait ProgressCallback: Send + Sync {
    /// Called after each saved frame.
    fn on_progress(&self, info: &ProgressInfo);
}

/// A no-op implementation that discards all progress notifications.
///
/// This is the default when no callback is configured.
pub(crate) struct NoOpProgress;

impl ProgressCallback for NoOpProgress {
    fn on_progress(&self, _info: &ProgressInfo) {}
}

/// Internal helper that tracks timing and emits callbacks.
pub(crate) struct ProgressTracker {
    callback: Arc<dyn ProgressCallback>,
    estimated_total: Option<u64>,
    saved: u64,
    start_time: Instant,
}

impl ProgressTracker {
    pub(crate) fn new(callback: Arc<dyn ProgressCallback>, estimated_total: Option<u64>) -> Self {
        Self {
            callback,
            estimated_total,
            saved: 0,
            start_time: Instant::now(),
        }
    }

    /// Record one saved frame and fire the callback.
    pub(crate) fn record_saved(&mut self, source_ordinal: u64) {
        self.saved += 1;

        let percentage = self
            .estimated_total
            .filter(|&total| total > 0)
            .map(|total| (self.saved as f32 / total as f32) * 100.0);

        let info = ProgressInfo {
            saved: self.saved,
            estimated_total: self.estimated_total,
            percentage,
            source_ordinal,
            elapsed: self.start_time.elapsed(),
        };

        self.callback.on_progress(&info);
    }
}
