use std::io::Cursor;

use image::{GrayImage, ImageFormat, RgbaImage};
use thiserror::Error;

use crate::output::frame_output::{EncodedImage, RawPixels};
use crate::shared::frame_view::{FrameView, PixelLayout};

#[derive(Error, Debug)]
pub enum FrameEncodeError {
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Packed copy of the frame's samples for the `returnOriginal` payload.
///
/// Row padding and interleaved non-luma bytes are stripped, so the copy is
/// `width * height * channels` bytes regardless of the source strides.
pub fn original_payload(frame: &FrameView) -> RawPixels {
    let (data, channels) = packed_samples(frame);
    RawPixels {
        width: frame.width(),
        height: frame.height(),
        channels,
        data,
    }
}

/// PNG rendering of the frame for the `convertFrame` payload.
///
/// RGBA frames encode as color, luma frames as grayscale.
pub fn convert_to_png(frame: &FrameView) -> Result<EncodedImage, FrameEncodeError> {
    let (data, _) = packed_samples(frame);
    let width = frame.width();
    let height = frame.height();

    let mut bytes = Vec::new();
    match frame.layout() {
        PixelLayout::Rgba { .. } => {
            let img = RgbaImage::from_raw(width, height, data)
                .expect("packed buffer matches dimensions");
            img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        }
        PixelLayout::Luma { .. } => {
            let img = GrayImage::from_raw(width, height, data)
                .expect("packed buffer matches dimensions");
            img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        }
    }

    Ok(EncodedImage {
        format: "png",
        data: bytes,
    })
}

fn packed_samples(frame: &FrameView) -> (Vec<u8>, u8) {
    let width = frame.width() as usize;
    let height = frame.height() as usize;

    match frame.layout() {
        PixelLayout::Rgba { .. } => {
            let arr = frame
                .as_rgba_ndarray()
                .expect("rgba layout has an ndarray view");
            let mut data = Vec::with_capacity(width * height * 4);
            for row in arr.outer_iter() {
                data.extend(row.iter().copied());
            }
            (data, 4)
        }
        PixelLayout::Luma {
            row_stride,
            pixel_stride,
        } => {
            let source = frame.data();
            let mut data = Vec::with_capacity(width * height);
            for y in 0..height {
                let row = y * row_stride;
                for x in 0..width {
                    data.push(source[row + x * pixel_stride]);
                }
            }
            (data, 1)
        }
    }
}
