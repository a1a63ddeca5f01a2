//! Source-open and frame-reader integration tests.
//!
//! Tests require fixture files from `tests/fixtures/generate_fixtures.sh`
//! and skip silently when the fixtures are absent.

use std::path::Path;

use framesift::{FrameSampler, SampleOptions, VideoSource};

fn ten_frame_fixture() -> &'static str {
    "tests/fixtures/sample_10_frames.mp4"
}

fn empty_stream_fixture() -> &'static str {
    "tests/fixtures/sample_empty.mp4"
}

#[test]
fn metadata_is_cached_at_open() {
    let fixture = ten_frame_fixture();
    if !Path::new(fixture).exists() {
        return;
    }

    let source = VideoSource::open(fixture).expect("Failed to open fixture");
    let metadata = source.metadata();

    assert_eq!(metadata.video.width, 64);
    assert_eq!(metadata.video.height, 64);
    assert!(metadata.video.frames_per_second > 0.0);
    assert!(!metadata.video.codec.is_empty());
    assert!(!metadata.format.is_empty());
}

#[test]
fn reader_yields_sequential_ordinals() {
    let fixture = ten_frame_fixture();
    if !Path::new(fixture).exists() {
        return;
    }

    let mut source = VideoSource::open(fixture).expect("Failed to open fixture");
    let mut expected_ordinal = 0_u64;

    for result in source.frames().expect("Failed to build reader") {
        let (ordinal, image) = result.expect("Decode failed");
        assert_eq!(ordinal, expected_ordinal);
        assert_eq!(image.width(), 64);
        assert_eq!(image.height(), 64);
        expected_ordinal += 1;
    }

    assert_eq!(expected_ordinal, 10, "Fixture holds exactly 10 frames");
}

#[test]
fn reader_terminates_on_stream_exhaustion_not_metadata() {
    let fixture = ten_frame_fixture();
    if !Path::new(fixture).exists() {
        return;
    }

    let mut source = VideoSource::open(fixture).expect("Failed to open fixture");
    // Whatever the container claims, the reader must stop by itself.
    let decoded = source
        .frames()
        .expect("Failed to build reader")
        .filter(|result| result.is_ok())
        .count();
    assert_eq!(decoded, 10);
}

#[test]
fn empty_stream_extracts_zero_frames_without_error() {
    let fixture = empty_stream_fixture();
    if !Path::new(fixture).exists() {
        return;
    }

    let dest = tempfile::tempdir().expect("Failed to create temp dir");
    let options = SampleOptions::new().with_dest_root(dest.path());
    let report = FrameSampler::new(options)
        .extract(fixture)
        .expect("Emptiness alone is not an error");

    assert_eq!(report.saved, 0);
    assert_eq!(report.frames_read, 0);
    assert!(report.output_dir.is_dir());
    let entries: Vec<_> = std::fs::read_dir(&report.output_dir)
        .expect("Failed to read output dir")
        .collect();
    assert!(entries.is_empty());
}
