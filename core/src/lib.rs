#![no_std]

pub mod bitmap;
pub mod blend;
pub mod codegen;
pub mod convert;
pub mod dither;
pub mod error;
pub mod preview;
pub mod raster;
pub mod threshold;


extern crate alloc;

pub use bitmap::{BitMatrix, PackedBitmap};
pub use codegen::OutputArtifact;
pub use convert::{DitherBlend, Frame, convert_dither_blend, convert_single};
pub use error::{Error, Result};
pub use preview::PreviewSession;
pub use raster::{RasterImage, Rgba};
