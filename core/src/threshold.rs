use crate::{
    bitmap::BitMatrix,
    raster::{RasterImage, gray},
};

/// Average below this is dark.
pub const THRESHOLD: f64 = 128.0;

/// Plain threshold quantization, no error diffusion.
pub fn threshold(image: &RasterImage) -> BitMatrix {
    let mut matrix = BitMatrix::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            matrix.set(x, y, gray(image.pixel(x, y)) < THRESHOLD);
        }
    }
    matrix
}
