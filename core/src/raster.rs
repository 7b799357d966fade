use alloc::vec::Vec;

use crate::error::{Error, Result};

/// One RGBA8 pixel, channels in `[r, g, b, a]` order.
pub type Rgba = [u8; 4];

/// Decoded RGBA image as handed over by the image decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl RasterImage {
    pub fn new(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }
        if pixels.len() != pixel_count(width, height)? {
            return Err(Error::InvalidData);
        }
        Ok(Self { width, height, pixels })
    }

    /// Builds an image from interleaved RGBA8 bytes, 4 bytes per pixel.
    pub fn from_rgba8(width: usize, height: usize, data: &[u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }
        let byte_count = pixel_count(width, height)?
            .checked_mul(4)
            .ok_or(Error::InvalidData)?;
        if data.len() != byte_count {
            return Err(Error::InvalidData);
        }
        let pixels = data
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        Ok(Self { width, height, pixels })
    }

    /// Image filled with a single color.
    pub fn solid(width: usize, height: usize, color: Rgba) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Self::new(width, height, alloc::vec![color; count])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.width + x]
    }

    /// Top-left `width x height` region of the image, no resampling.
    pub fn crop(&self, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }
        let width = width.min(self.width);
        let height = height.min(self.height);
        let pixels = self
            .pixels
            .chunks_exact(self.width)
            .take(height)
            .flat_map(|row| row[..width].iter().copied())
            .collect();
        Ok(Self { width, height, pixels })
    }
}

// Dimensions whose area does not fit in usize can never match any buffer.
fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width.checked_mul(height).ok_or(Error::InvalidData)
}

/// Unweighted channel average, the luminance used by every quantizer here.
pub fn gray(pixel: Rgba) -> f64 {
    (pixel[0] as f64 + pixel[1] as f64 + pixel[2] as f64) / 3.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::vec;

    #[test]
    fn test_rejects_empty() {
        assert_eq!(RasterImage::new(0, 4, vec![]), Err(Error::EmptyImage));
        assert_eq!(RasterImage::new(4, 0, vec![]), Err(Error::EmptyImage));
        assert_eq!(RasterImage::from_rgba8(0, 0, &[]), Err(Error::EmptyImage));
    }

    #[test]
    fn test_rejects_short_data() {
        assert_eq!(
            RasterImage::new(2, 2, vec![[0; 4]; 3]),
            Err(Error::InvalidData)
        );
        assert_eq!(
            RasterImage::from_rgba8(2, 1, &[0u8; 7]),
            Err(Error::InvalidData)
        );
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        let huge = 1usize << 32;
        assert_eq!(RasterImage::new(huge, huge, vec![]), Err(Error::InvalidData));
        assert_eq!(RasterImage::new(usize::MAX, 2, vec![]), Err(Error::InvalidData));
        assert_eq!(RasterImage::from_rgba8(huge, huge, &[]), Err(Error::InvalidData));
        // Pixel count fits, byte count does not
        assert_eq!(RasterImage::from_rgba8(1 << 61, 4, &[]), Err(Error::InvalidData));
        assert_eq!(RasterImage::solid(huge, huge, [0; 4]), Err(Error::InvalidData));
    }

    #[test]
    fn test_from_rgba8() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let image = RasterImage::from_rgba8(2, 1, &data).unwrap();
        assert_eq!(image.pixel(0, 0), [1, 2, 3, 4]);
        assert_eq!(image.pixel(1, 0), [5, 6, 7, 8]);
    }

    #[test]
    fn test_crop_top_left() {
        let pixels = (0..12u8).map(|v| [v, v, v, 255]).collect();
        let image = RasterImage::new(4, 3, pixels).unwrap();
        let cropped = image.crop(2, 2).unwrap();
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.height(), 2);
        let values: std::vec::Vec<u8> = cropped.pixels().iter().map(|p| p[0]).collect();
        assert_eq!(values, [0, 1, 4, 5]);
    }

    #[test]
    fn test_gray_ignores_alpha() {
        assert_eq!(gray([30, 60, 90, 0]), 60.0);
        assert_eq!(gray([30, 60, 90, 255]), 60.0);
    }
}
