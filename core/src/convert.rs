use alloc::vec::Vec;
use log::{debug, info};

use crate::{
    bitmap::PackedBitmap,
    blend::blend_frames,
    codegen::OutputArtifact,
    dither::GrayscaleBuffer,
    error::Result,
    raster::RasterImage,
    threshold::threshold,
};

/// One packed step of a dithered cross-fade.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub alpha: f64,
    pub bitmap: PackedBitmap,
}

/// Result of [`convert_dither_blend`]: the source text plus the frames for previewing.
#[derive(Debug, Clone, PartialEq)]
pub struct DitherBlend {
    pub artifact: OutputArtifact,
    pub frames: Vec<Frame>,
}

/// Thresholds one image and renders it as a byte array named after `label`.
pub fn convert_single(image: &RasterImage, label: &str) -> Result<OutputArtifact> {
    info!(
        "Converting '{}' ({}x{}) with threshold",
        label,
        image.width(),
        image.height()
    );
    let bitmap = PackedBitmap::pack(&threshold(image));
    debug!("Packed {} bytes", bitmap.bytes().len());
    Ok(OutputArtifact::single(&bitmap, label))
}

/// Cross-fades `first` into `second` over `frame_count` frames, dithers each
/// frame and renders all of them, first frame first.
pub fn convert_dither_blend(
    first: &RasterImage,
    second: &RasterImage,
    frame_count: usize,
) -> Result<DitherBlend> {
    let blended = blend_frames(first, second, frame_count)?;
    if let Some(frame) = blended.first() {
        info!(
            "Dithering {} blend frames at {}x{}",
            frame_count,
            frame.image.width(),
            frame.image.height()
        );
    }

    let frames: Vec<Frame> = blended
        .into_iter()
        .map(|frame| Frame {
            index: frame.index,
            alpha: frame.alpha,
            bitmap: PackedBitmap::pack(&GrayscaleBuffer::from_image(&frame.image).dither()),
        })
        .collect();

    let artifact = OutputArtifact::blend_frames(frames.iter().map(|f| &f.bitmap), frame_count);
    debug!("Rendered {} bytes of source", artifact.as_str().len());
    Ok(DitherBlend { artifact, frames })
}
