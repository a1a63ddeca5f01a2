//! FFmpeg native log verbosity.
//!
//! FFmpeg has its own logging system, separate from the Rust
//! [`log`](https://crates.io/crates/log) crate, and prints warnings and
//! errors to stderr by default. This module wraps FFmpeg's log-level API so
//! callers can quiet that output without importing `ffmpeg-next` directly.
//!
//! ```no_run
//! use framesift::NativeLogLevel;
//!
//! // Silence everything except fatal errors before extracting.
//! framesift::set_native_log_level(NativeLogLevel::Fatal);
//! ```
//!
//! This controls FFmpeg's own console output only; Rust-side diagnostics go
//! through the `log` facade and whatever subscriber the caller installs.

use ffmpeg_next::util::log::Level;

/// FFmpeg internal log verbosity level, most quiet to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeLogLevel {
    /// Print no output at all.
    Quiet,
    /// Only unrecoverable conditions that abort the process.
    Panic,
    /// Only unrecoverable errors (the process may continue).
    Fatal,
    /// Recoverable errors.
    Error,
    /// Warnings (FFmpeg's default level).
    Warning,
    /// Informational messages.
    Info,
    /// Verbose informational messages.
    Verbose,
    /// Debugging messages.
    Debug,
    /// Extremely verbose tracing output.
    Trace,
}

/// Set FFmpeg's internal log verbosity.
pub fn set_native_log_level(level: NativeLogLevel) {
    let native = match level {
        NativeLogLevel::Quiet => Level::Quiet,
        NativeLogLevel::Panic => Level::Panic,
        NativeLogLevel::Fatal => Level::Fatal,
        NativeLogLevel::Error => Level::Error,
        NativeLogLevel::Warning => Level::Warning,
        NativeLogLevel::Info => Level::Info,
        NativeLogLevel::Verbose => Level::Verbose,
        NativeLogLevel::Debug => Level::Debug,
        NativeLogLevel::Trace => Level::Trace,
    };
    ffmpeg_next::util::log::set_level(native);
}
