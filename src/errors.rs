use std::io;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("Width and height of image must be greater than zero")]
    ZeroDimensions,
    #[error("Size of buffer don't match to image dimensions")]
    InvalidBufferSize,
    #[error("Image dimensions are too large to be addressed in memory")]
    TooLarge,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Coordinates ({x}, {y}) are out of the image boundaries")]
pub struct OutOfBoundsError {
    pub x: u32,
    pub y: u32,
}

#[derive(Error, Debug)]
pub enum PnmError {
    #[error("Unsupported image format: magic token must be \"P6\"")]
    InvalidMagic,
    #[error("Malformed header: {0}")]
    InvalidHeader(String),
    #[error("Unsupported image format: max sample value {0} is not equal to 255")]
    UnsupportedMaxValue(u32),
    #[error(transparent)]
    InvalidDimensions(#[from] ImageBufferError),
    #[error("Pixel data is truncated: expected {expected} bytes, got {actual}")]
    TruncatedPixelData { expected: usize, actual: usize },
    #[error("Failed to encode image: {0}")]
    Encoding(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

#[cfg(feature = "rayon")]
impl From<rayon::ThreadPoolBuildError> for FilterError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        FilterError::ThreadPool(err.to_string())
    }
}
