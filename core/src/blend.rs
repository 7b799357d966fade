use alloc::vec::Vec;
use log::trace;

use crate::{
    error::{Error, Result},
    raster::{RasterImage, Rgba},
};

/// First and last frame are the two inputs, so fewer frames make no fade.
pub const MIN_FRAME_COUNT: usize = 2;

/// One step of a cross-fade from the first image to the second.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendedFrame {
    pub index: usize,
    pub alpha: f64,
    pub image: RasterImage,
}

/// Share of the second image in frame `index` of `frame_count`.
///
/// Runs from exactly 0.0 for the first frame to exactly 1.0 for the last.
pub fn frame_alpha(index: usize, frame_count: usize) -> Result<f64> {
    if frame_count < MIN_FRAME_COUNT {
        return Err(Error::InvalidFrameCount(frame_count));
    }
    Ok(index as f64 / (frame_count - 1) as f64)
}

/// Cross-fades `first` into `second` over `frame_count` frames.
///
/// Both inputs are cropped to their shared top-left region. Opacity of every
/// output pixel is 255.
pub fn blend_frames(
    first: &RasterImage,
    second: &RasterImage,
    frame_count: usize,
) -> Result<Vec<BlendedFrame>> {
    if frame_count < MIN_FRAME_COUNT {
        return Err(Error::InvalidFrameCount(frame_count));
    }
    let width = first.width().min(second.width());
    let height = first.height().min(second.height());
    let first = first.crop(width, height)?;
    let second = second.crop(width, height)?;

    (0..frame_count)
        .map(|index| {
            let alpha = frame_alpha(index, frame_count)?;
            trace!("Blending frame {index} with alpha {alpha:.3}");
            let image = blend(&first, &second, alpha)?;
            Ok(BlendedFrame { index, alpha, image })
        })
        .collect()
}

// Both images have the same dimensions.
fn blend(first: &RasterImage, second: &RasterImage, alpha: f64) -> Result<RasterImage> {
    let pixels = first
        .pixels()
        .iter()
        .zip(second.pixels())
        .map(|(&a, &b)| blend_pixel(a, b, alpha))
        .collect();
    RasterImage::new(first.width(), first.height(), pixels)
}

fn blend_pixel(a: Rgba, b: Rgba, alpha: f64) -> Rgba {
    let mix = |c1: u8, c2: u8| round_channel(c1 as f64 * (1.0 - alpha) + c2 as f64 * alpha);
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]), 255]
}

// Inputs are never negative, so truncating after +0.5 rounds half away from zero.
fn round_channel(value: f64) -> u8 {
    (value + 0.5) as u8
}
