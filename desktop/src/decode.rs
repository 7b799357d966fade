use std::path::Path;

use image::DynamicImage;
use img2cpp_core::{Error, RasterImage, Result};
use log::{debug, error};

pub fn load_image(path: &Path) -> Result<RasterImage> {
    let image = image::open(path).map_err(|err| {
        error!("Failed to decode {}: {}", path.display(), err);
        Error::DecodeFailure
    })?;
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    to_raster(image)
}

pub fn to_raster(image: DynamicImage) -> Result<RasterImage> {
    let rgba = image.into_rgba8();
    RasterImage::from_rgba8(rgba.width() as usize, rgba.height() as usize, rgba.as_raw())
}

/// File name used to label and name the generated array.
pub fn label_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_to_raster_keeps_channels() {
        let mut image = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 40]));
        image.put_pixel(2, 1, Rgba([1, 2, 3, 4]));
        let raster = to_raster(DynamicImage::ImageRgba8(image)).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.pixel(0, 0), [10, 20, 30, 40]);
        assert_eq!(raster.pixel(2, 1), [1, 2, 3, 4]);
    }

    #[test]
    fn test_to_raster_gray_is_opaque() {
        let image = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(1, 1, image::Luma([77])));
        let raster = to_raster(image).unwrap();
        assert_eq!(raster.pixel(0, 0), [77, 77, 77, 255]);
    }

    #[test]
    fn test_to_raster_empty() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(0, 4));
        assert_eq!(to_raster(image), Err(Error::EmptyImage));
    }

    #[test]
    fn test_load_png_round_trip() {
        let path = std::env::temp_dir().join(format!("img2cpp-decode-{}.png", std::process::id()));
        RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]))
            .save(&path)
            .unwrap();
        let raster = load_image(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(raster.pixels(), &[[0, 0, 0, 255]; 16]);
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("does/not/exist.png");
        assert_eq!(load_image(path), Err(Error::DecodeFailure));
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(Path::new("assets/wink frame 1.png")), "wink frame 1.png");
        assert_eq!(label_for(Path::new("logo.bmp")), "logo.bmp");
    }
}
