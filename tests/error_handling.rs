//! Error handling integration tests.
//!
//! These tests verify that meaningful errors are returned for various
//! failure conditions, and that failures leave no partial output behind.

use framesift::{FrameSampler, FramesiftError, SampleOptions, VideoSource};

#[test]
fn open_nonexistent_file() {
    let result = VideoSource::open("this_file_does_not_exist.mp4");
    assert!(result.is_err());

    let error_message = result.unwrap_err().to_string();
    assert!(
        error_message.contains("Failed to open video source"),
        "Error message should mention source open failure: {error_message}",
    );
}

#[test]
fn open_invalid_file() {
    // Create a temporary file with garbage content.
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let invalid_file_path = temporary_directory.path().join("invalid.mp4");
    std::fs::write(&invalid_file_path, b"this is not a media file")
        .expect("Failed to write invalid file");

    let result = VideoSource::open(&invalid_file_path);
    assert!(result.is_err(), "Expected error for invalid media file");
}

#[test]
fn zero_interval_rejected_before_any_side_effect() {
    let dest = tempfile::tempdir().expect("Failed to create temp dir");

    let options = SampleOptions::new()
        .with_interval(0)
        .with_dest_root(dest.path());
    // The path does not even need to exist: the interval guard runs first.
    let result = FrameSampler::new(options).extract("whatever.mp4");

    assert!(matches!(result, Err(FramesiftError::InvalidInterval)));

    // No directory was created, nothing was written.
    let entries: Vec<_> = std::fs::read_dir(dest.path())
        .expect("Failed to read dest root")
        .collect();
    assert!(
        entries.is_empty(),
        "Expected no filesystem side effects for a zero interval",
    );
}

#[test]
fn unopenable_source_leaves_at_most_an_empty_directory() {
    let dest = tempfile::tempdir().expect("Failed to create temp dir");

    let options = SampleOptions::new().with_dest_root(dest.path());
    let result = FrameSampler::new(options).extract("missing_clip.mp4");

    match result {
        Err(FramesiftError::SourceOpen { path, .. }) => {
            assert_eq!(path, std::path::PathBuf::from("missing_clip.mp4"));
        }
        other => panic!("Expected SourceOpen, got: {other:?}"),
    }

    // The derived directory was created before the open attempt and
    // remains, empty.
    let output_dir = dest.path().join("missing_clip");
    assert!(output_dir.is_dir());
    let entries: Vec<_> = std::fs::read_dir(&output_dir)
        .expect("Failed to read output dir")
        .collect();
    assert!(entries.is_empty(), "Expected an empty output directory");
}

#[test]
fn corrupt_source_leaves_no_images() {
    let dest = tempfile::tempdir().expect("Failed to create temp dir");
    let invalid_file_path = dest.path().join("broken.mp4");
    std::fs::write(&invalid_file_path, b"\x00\x00garbage").expect("Failed to write invalid file");

    let options = SampleOptions::new().with_dest_root(dest.path());
    let result = FrameSampler::new(options).extract(&invalid_file_path);
    assert!(result.is_err());

    let output_dir = dest.path().join("broken");
    if output_dir.is_dir() {
        let entries: Vec<_> = std::fs::read_dir(&output_dir)
            .expect("Failed to read output dir")
            .collect();
        assert!(entries.is_empty(), "Expected no images for a corrupt source");
    }
}
