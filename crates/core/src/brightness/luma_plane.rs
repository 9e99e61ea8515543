/// Sampling stride, in pixels, along both axes of the luma plane.
pub const SAMPLE_STEP: usize = 50;

/// Mean luminance of a Y plane, sampled every [`SAMPLE_STEP`]th pixel in
/// both dimensions and normalized by 255 into [0, 1].
///
/// `row_stride`/`pixel_stride` address samples exactly as the camera laid
/// them out; row padding and interleaved chroma bytes are never read.
pub fn estimate(data: &[u8], width: u32, height: u32, row_stride: usize, pixel_stride: usize) -> f64 {
    let width = width as usize;
    let height = height as usize;

    let mut total: u64 = 0;
    let mut samples: u64 = 0;
    let mut y = 0;
    while y < height {
        let row = y * row_stride;
        let mut x = 0;
        while x < width {
            total += u64::from(data[row + x * pixel_stride]);
            samples += 1;
            x += SAMPLE_STEP;
        }
        y += SAMPLE_STEP;
    }

    if samples == 0 {
        return 0.0;
    }
    (total as f64 / samples as f64 / 255.0).clamp(0.0, 1.0)
}
