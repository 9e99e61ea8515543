use ndarray::{ArrayView3, ShapeBuilder};
use thiserror::Error;

use crate::shared::orientation::Orientation;

#[derive(Error, Debug)]
pub enum FrameViewError {
    #[error("frame dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
    #[error("row stride {row_stride} too small for {width} pixels of {bytes_per_pixel} bytes")]
    RowStrideTooSmall {
        row_stride: usize,
        width: u32,
        bytes_per_pixel: usize,
    },
    #[error("pixel stride must be >= 1")]
    ZeroPixelStride,
    #[error("buffer of {actual} bytes too small, geometry requires {required}")]
    BufferTooSmall { actual: usize, required: usize },
}

/// Memory layout of the pixel buffer behind a [`FrameView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single-channel luminance plane (the Y plane of a YUV camera frame).
    Luma {
        row_stride: usize,
        pixel_stride: usize,
    },
    /// Interleaved 4-byte RGBA pixels.
    Rgba { row_stride: usize },
}

/// Borrowed view of one camera frame's pixel memory plus its metadata.
///
/// The buffer is owned by the host pipeline and is only valid for the
/// duration of one plugin callback; the borrow makes retaining it past
/// that window impossible. Construction validates that the buffer covers
/// the described geometry, so accessors never go out of bounds.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    orientation: Orientation,
}

impl<'a> FrameView<'a> {
    /// View of a luminance plane with explicit row and pixel strides.
    pub fn luma(
        data: &'a [u8],
        width: u32,
        height: u32,
        row_stride: usize,
        pixel_stride: usize,
        orientation: Orientation,
    ) -> Result<Self, FrameViewError> {
        check_dimensions(width, height)?;
        if pixel_stride == 0 {
            return Err(FrameViewError::ZeroPixelStride);
        }
        if row_stride < width as usize * pixel_stride {
            return Err(FrameViewError::RowStrideTooSmall {
                row_stride,
                width,
                bytes_per_pixel: pixel_stride,
            });
        }
        // Last addressable sample; trailing row padding is not required.
        let required = (height as usize - 1) * row_stride + (width as usize - 1) * pixel_stride + 1;
        check_length(data.len(), required)?;
        Ok(Self {
            data,
            width,
            height,
            layout: PixelLayout::Luma {
                row_stride,
                pixel_stride,
            },
            orientation,
        })
    }

    /// View of a tightly packed RGBA buffer (`row_stride = width * 4`).
    pub fn rgba(
        data: &'a [u8],
        width: u32,
        height: u32,
        orientation: Orientation,
    ) -> Result<Self, FrameViewError> {
        Self::rgba_with_stride(data, width, height, width as usize * 4, orientation)
    }

    /// View of an RGBA buffer whose rows may carry padding.
    pub fn rgba_with_stride(
        data: &'a [u8],
        width: u32,
        height: u32,
        row_stride: usize,
        orientation: Orientation,
    ) -> Result<Self, FrameViewError> {
        check_dimensions(width, height)?;
        if row_stride < width as usize * 4 {
            return Err(FrameViewError::RowStrideTooSmall {
                row_stride,
                width,
                bytes_per_pixel: 4,
            });
        }
        let required = (height as usize - 1) * row_stride + width as usize * 4;
        check_length(data.len(), required)?;
        Ok(Self {
            data,
            width,
            height,
            layout: PixelLayout::Rgba { row_stride },
            orientation,
        })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// `(height, width, 4)` view over an RGBA buffer, honoring row padding.
    /// Returns `None` for luma frames.
    pub fn as_rgba_ndarray(&self) -> Option<ArrayView3<'a, u8>> {
        match self.layout {
            PixelLayout::Rgba { row_stride } => {
                let shape = (self.height as usize, self.width as usize, 4)
                    .strides((row_stride, 4, 1));
                Some(
                    ArrayView3::from_shape(shape, self.data)
                        .expect("validated geometry must fit the buffer"),
                )
            }
            PixelLayout::Luma { .. } => None,
        }
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), FrameViewError> {
    if width == 0 || height == 0 {
        return Err(FrameViewError::EmptyDimensions { width, height });
    }
    Ok(())
}

fn check_length(actual: usize, required: usize) -> Result<(), FrameViewError> {
    if actual < required {
        return Err(FrameViewError::BufferTooSmall { actual, required });
    }
    Ok(())
}
