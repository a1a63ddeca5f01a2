use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use framesift::{
    FrameSampler, NativeLogLevel, ProgressCallback, ProgressInfo, SampleOptions, WritePolicy,
    output_image_path,
};

const CLI_AFTER_HELP: &str = "Examples:\n  framesift input.mp4\n  framesift input.mp4 --ext jpg --every 30 --progress\n  framesift input.mp4 --dest out --every 10 --json";

/// Image extensions the encoding backend is known to handle. Anything else
/// falls back to jpg with a warning.
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff"];

#[derive(Debug, Parser)]
#[command(
    name = "framesift",
    version,
    about = "Sift a video file into a still-frame image sequence",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Input video path.
    input: PathBuf,

    /// Output image extension (png, jpg, jpeg, bmp, tiff).
    #[arg(long, default_value = "png")]
    ext: String,

    /// Save every Nth frame.
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Directory under which the output directory is created.
    #[arg(long, default_value = ".")]
    dest: PathBuf,

    /// On a failed image write: abort, or skip the frame and keep going.
    #[arg(long, default_value = "abort")]
    on_write_error: String,

    /// Show a progress bar.
    #[arg(long)]
    progress: bool,

    /// Print each saved frame path.
    #[arg(long)]
    verbose: bool,

    /// Print the final report as machine-readable JSON.
    #[arg(long)]
    json: bool,

    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_log_level(value: &str) -> Option<NativeLogLevel> {
    match value.to_ascii_lowercase().as_str() {
        "quiet" => Some(NativeLogLevel::Quiet),
        "panic" => Some(NativeLogLevel::Panic),
        "fatal" => Some(NativeLogLevel::Fatal),
        "error" => Some(NativeLogLevel::Error),
        "warning" | "warn" => Some(NativeLogLevel::Warning),
        "info" => Some(NativeLogLevel::Info),
        "verbose" => Some(NativeLogLevel::Verbose),
        "debug" => Some(NativeLogLevel::Debug),
        "trace" => Some(NativeLogLevel::Trace),
        _ => None,
    }
}

fn parse_write_policy(value: &str) -> Option<WritePolicy> {
    match value.to_ascii_lowercase().as_str() {
        "abort" | "fail" => Some(WritePolicy::Fail),
        "skip" | "continue" => Some(WritePolicy::SkipAndCount),
        _ => None,
    }
}

/// Validate the requested extension against the allow-list, falling back to
/// jpg with a warning when it is not supported.
fn normalize_image_format(value: &str) -> String {
    let cleaned = value.trim_start_matches('.').to_ascii_lowercase();
    if SUPPORTED_FORMATS.contains(&cleaned.as_str()) {
        cleaned
    } else {
        eprintln!(
            "{} {}",
            "warning:".yellow().bold(),
            format!("unsupported image format {value:?}, using jpg").yellow()
        );
        "jpg".to_string()
    }
}

/// Feeds library progress snapshots into an indicatif bar and/or per-frame
/// terminal lines.
struct TerminalProgress {
    bar: Option<ProgressBar>,
    verbose: bool,
    output_dir: PathBuf,
    image_format: String,
}

impl ProgressCallback for TerminalProgress {
    fn on_progress(&self, info: &ProgressInfo) {
        if let Some(bar) = &self.bar {
            if bar.length().is_none() {
                if let Some(total) = info.estimated_total {
                    bar.set_length(total);
                }
            }
            bar.set_position(info.saved);
        }

        if self.verbose {
            let path = output_image_path(&self.output_dir, info.source_ordinal, &self.image_format);
            eprintln!("saved frame {} -> {}", info.source_ordinal, path.display());
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        let parsed = parse_log_level(level).ok_or(format!("unsupported --log-level: {level}"))?;
        framesift::set_native_log_level(parsed);
    }

    if cli.every == 0 {
        return Err("--every must be greater than 0".into());
    }

    let write_policy = parse_write_policy(&cli.on_write_error)
        .ok_or(format!("unsupported --on-write-error: {}", cli.on_write_error))?;

    let image_format = normalize_image_format(&cli.ext);

    let output_dir = framesift::output_dir_for(&cli.input, &cli.dest)
        .ok_or(format!("input path has no file name: {}", cli.input.display()))?;

    let progress_bar = if cli.progress {
        let pb = ProgressBar::no_length();
        let style =
            ProgressStyle::with_template("{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}")?;
        pb.set_style(style.progress_chars("##-"));
        Some(pb)
    } else {
        None
    };

    let options = SampleOptions::new()
        .with_interval(cli.every)
        .with_image_format(&image_format)
        .with_dest_root(&cli.dest)
        .with_write_policy(write_policy)
        .with_progress(Arc::new(TerminalProgress {
            bar: progress_bar.clone(),
            verbose: cli.verbose,
            output_dir,
            image_format: image_format.clone(),
        }));

    let report = FrameSampler::new(options).extract(&cli.input)?;

    if let Some(pb) = progress_bar {
        pb.finish_with_message("done");
    }

    if cli.json {
        let payload = json!({
            "saved": report.saved,
            "frames_read": report.frames_read,
            "failed_writes": report.failed_writes,
            "output_dir": report.output_dir.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        if report.failed_writes > 0 {
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                format!("{} frame write(s) failed", report.failed_writes).yellow()
            );
        }
        println!(
            "{} {}",
            "success:".green().bold(),
            format!(
                "Saved {} of {} frame(s) to {}",
                report.saved,
                report.frames_read,
                report.output_dir.display()
            )
            .green()
        );
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
