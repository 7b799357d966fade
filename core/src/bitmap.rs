use alloc::{vec, vec::Vec};
use embedded_graphics::{
    image::{Image, ImageRaw},
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Drawable, Point},
};

/// One bit per pixel, row-major, 1 = dark/foreground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    bits: Vec<u8>,
}

impl BitMatrix {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![0u8; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x] != 0
    }

    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        self.bits[y * self.width + x] = dark as u8;
    }

    pub fn count_dark(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit != 0).count()
    }
}

/// Row-padded MSB-first packing of a [`BitMatrix`].
///
/// Pixel `(x, y)` lives in bit `7 - x % 8` of byte
/// `y * bytes_per_row + x / 8`. Padding bits at the end of a row stay 0.
/// This is the layout `drawBitmap` style firmware routines expect, and the
/// big-endian layout of [`ImageRaw<BinaryColor>`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PackedBitmap {
    pub fn pack(matrix: &BitMatrix) -> Self {
        let bytes_per_row = matrix.width.div_ceil(8);
        let mut bytes = vec![0u8; bytes_per_row * matrix.height];
        for y in 0..matrix.height {
            for x in 0..matrix.width {
                if matrix.get(x, y) {
                    let byte_index = y * bytes_per_row + x / 8;
                    let bit_index = 7 - (x % 8);
                    bytes[byte_index] |= 1 << bit_index;
                }
            }
        }
        Self {
            width: matrix.width,
            height: matrix.height,
            bytes,
        }
    }

    pub fn unpack(&self) -> BitMatrix {
        let mut matrix = BitMatrix::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                matrix.set(x, y, self.get(x, y));
            }
        }
        matrix
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        self.width.div_ceil(8)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        let byte = self.bytes[y * self.bytes_per_row() + x / 8];
        (byte >> (7 - (x % 8))) & 1 == 1
    }

    pub fn as_image_raw(&self) -> ImageRaw<'_, BinaryColor> {
        ImageRaw::new(&self.bytes, self.width as u32)
    }

    /// Draws the bitmap at `origin`, dark bits as [`BinaryColor::On`].
    pub fn draw<D>(&self, target: &mut D, origin: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let raw = self.as_image_raw();
        Image::new(&raw, origin).draw(target)
    }
}
