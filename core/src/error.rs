use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// One or both of the images a conversion needs were not supplied.
    MissingInput,
    /// Blending needs at least two frames, the first and last are the inputs.
    InvalidFrameCount(usize),
    /// Width or height is zero.
    EmptyImage,
    /// Pixel data does not match the declared dimensions.
    InvalidData,
    /// The image decoder could not produce a raster.
    DecodeFailure,
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingInput => write!(f, "missing input image"),
            Error::InvalidFrameCount(count) => {
                write!(f, "invalid frame count {count}, at least 2 frames are needed")
            }
            Error::EmptyImage => write!(f, "image has zero width or height"),
            Error::InvalidData => write!(f, "pixel data does not match image dimensions"),
            Error::DecodeFailure => write!(f, "failed to decode image"),
        }
    }
}

impl core::error::Error for Error {}
