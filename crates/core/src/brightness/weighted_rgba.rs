use std::ops::Range;

/// Sampling stride, in pixels, along both axes of the RGBA buffer.
pub const SAMPLE_STEP: usize = 20;

const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// Mean weighted luminance of an RGBA buffer, clamped into [0, 1].
///
/// Rows are partitioned into chunks (one per available processing unit)
/// whose partial sums are computed on scoped threads and combined through
/// a single channel fan-in before the mean is read.
pub fn estimate(data: &[u8], width: u32, height: u32, row_stride: usize) -> f64 {
    estimate_chunked(data, width, height, row_stride, default_chunk_count(height))
}

/// Same reduction with an explicit chunk count.
///
/// The partials are combined in chunk order, so for a given chunk count the
/// result is deterministic regardless of thread scheduling.
pub fn estimate_chunked(
    data: &[u8],
    width: u32,
    height: u32,
    row_stride: usize,
    chunks: usize,
) -> f64 {
    let width = width as usize;
    let height = height as usize;
    let chunks = chunks.clamp(1, height.max(1));

    if chunks == 1 {
        let (sum, samples) = sum_rows(data, width, row_stride, 0..height);
        return mean(sum, samples);
    }

    let ranges = row_chunks(height, chunks);
    let (partial_tx, partial_rx) = crossbeam_channel::bounded(ranges.len());

    std::thread::scope(|scope| {
        for (index, rows) in ranges.iter().cloned().enumerate() {
            let partial_tx = partial_tx.clone();
            scope.spawn(move || {
                let partial = sum_rows(data, width, row_stride, rows);
                // capacity covers every chunk, so the send cannot block
                let _ = partial_tx.send((index, partial));
            });
        }
    });
    drop(partial_tx);

    let mut partials = vec![(0.0, 0u64); ranges.len()];
    for (index, partial) in partial_rx {
        partials[index] = partial;
    }
    let (sum, samples) = partials
        .iter()
        .fold((0.0, 0u64), |(sum, n), (ps, pn)| (sum + ps, n + pn));
    mean(sum, samples)
}

pub fn default_chunk_count(height: u32) -> usize {
    let units = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    units.clamp(1, height.max(1) as usize)
}

/// Weighted sum over the global sample grid restricted to `rows`.
///
/// The grid is anchored at the frame origin, not at the chunk start, so an
/// arbitrary chunking covers each sampled row exactly once.
fn sum_rows(data: &[u8], width: usize, row_stride: usize, rows: Range<usize>) -> (f64, u64) {
    let mut sum = 0.0;
    let mut samples: u64 = 0;

    let mut y = rows.start.next_multiple_of(SAMPLE_STEP);
    while y < rows.end {
        let row = y * row_stride;
        let mut x = 0;
        while x < width {
            let i = row + x * 4;
            let r = f64::from(data[i]) / 255.0;
            let g = f64::from(data[i + 1]) / 255.0;
            let b = f64::from(data[i + 2]) / 255.0;
            sum += RED_WEIGHT * r + GREEN_WEIGHT * g + BLUE_WEIGHT * b;
            samples += 1;
            x += SAMPLE_STEP;
        }
        y += SAMPLE_STEP;
    }

    (sum, samples)
}

fn mean(sum: f64, samples: u64) -> f64 {
    if samples == 0 {
        return 0.0;
    }
    (sum / samples as f64).clamp(0.0, 1.0)
}

fn row_chunks(height: usize, chunks: usize) -> Vec<Range<usize>> {
    let size = height.div_ceil(chunks);
    (0..chunks)
        .map(|i| (i * size).min(height)..((i + 1) * size).min(height))
        .filter(|range| !range.is_empty())
        .collect()
}
