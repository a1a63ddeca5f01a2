//! Internal utility functions.

use ffmpeg_next::frame::Video as VideoFrame;

/// Copy pixel data from an FFmpeg video frame into a tightly-packed RGB
/// buffer suitable for [`image::RgbImage::from_raw`].
///
/// FFmpeg planes frequently carry per-row padding (stride > width × 3),
/// which must be stripped before the data can be handed to `image`.
pub fn packed_rgb_buffer(video_frame: &VideoFrame, width: u32, height: u32) -> Vec<u8> {
    let stride = video_frame.stride(0);
    let row_bytes = (width as usize) * 3;
    let data = video_frame.data(0);

    if stride == row_bytes {
        return data[..row_bytes * (height as usize)].to_vec();
    }

    let mut buffer = Vec::with_capacity(row_bytes * (height as usize));
    for row in data.chunks(stride).take(height as usize) {
        buffer.extend_from_slice(&row[..row_bytes]);
    }
    buffer
}
