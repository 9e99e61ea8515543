use crate::brightness::{luma_plane, weighted_rgba};
use crate::shared::frame_view::{FrameView, PixelLayout};

/// Normalized brightness of one frame, in [0, 1].
///
/// A cheap strided approximation run on every frame, never a colorimetric
/// measurement. Luma frames read the Y plane directly; RGBA frames reduce
/// a weighted luminance over a parallel fan-out of row chunks.
pub fn estimate(frame: &FrameView) -> f64 {
    match frame.layout() {
        PixelLayout::Luma {
            row_stride,
            pixel_stride,
        } => luma_plane::estimate(
            frame.data(),
            frame.width(),
            frame.height(),
            row_stride,
            pixel_stride,
        ),
        PixelLayout::Rgba { row_stride } => weighted_rgba::estimate(
            frame.data(),
            frame.width(),
            frame.height(),
            row_stride,
        ),
    }
}
