use alloc::vec::Vec;

use crate::{
    bitmap::BitMatrix,
    raster::{RasterImage, gray},
    threshold::THRESHOLD,
};

/// Per-pixel luminance scratch space for error diffusion.
///
/// Values are unclamped and may leave `0..=255` while error accumulates.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleBuffer {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl GrayscaleBuffer {
    pub fn from_image(image: &RasterImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            values: image.pixels().iter().map(|&px| gray(px)).collect(),
        }
    }

    #[cfg(test)]
    fn values(&self) -> &[f64] {
        &self.values
    }

    fn diffuse(&mut self, x: usize, y: usize, amount: f64) {
        self.values[y * self.width + x] += amount;
    }

    /// Floyd–Steinberg error diffusion, consuming the buffer.
    ///
    /// Raster order, rows top to bottom and pixels left to right. The error
    /// of each pixel is spread 7/16 right, 3/16 below left, 5/16 below and
    /// 1/16 below right; shares falling outside the buffer are dropped.
    pub fn dither(mut self) -> BitMatrix {
        let (width, height) = (self.width, self.height);
        let mut matrix = BitMatrix::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let old = self.values[y * width + x];
                let new = if old < THRESHOLD { 0.0 } else { 255.0 };
                matrix.set(x, y, new == 0.0);

                let err = old - new;
                let has_right = x + 1 < width;
                let has_below = y + 1 < height;
                if has_right {
                    self.diffuse(x + 1, y, err * 7.0 / 16.0);
                }
                if x > 0 && has_below {
                    self.diffuse(x - 1, y + 1, err * 3.0 / 16.0);
                }
                if has_below {
                    self.diffuse(x, y + 1, err * 5.0 / 16.0);
                }
                if has_right && has_below {
                    self.diffuse(x + 1, y + 1, err * 1.0 / 16.0);
                }
            }
        }
        matrix
    }
}

pub fn dither(image: &RasterImage) -> BitMatrix {
    GrayscaleBuffer::from_image(image).dither()
}
