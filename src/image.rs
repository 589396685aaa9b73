use crate::pixels::{U8x3, CHANNELS};
use crate::{ImageBufferError, OutOfBoundsError};

/// Owned RGB image with interleaved `u8` components.
///
/// Sample of channel `c` of pixel `(x, y)` is stored at
/// index `3 * (y * width + x) + c` of the buffer.
/// Width and height of image are always greater than zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl Image {
    /// Create a black image with given dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, ImageBufferError> {
        let size = buffer_size(width, height)?;
        Ok(Self {
            width,
            height,
            buffer: vec![0; size],
        })
    }

    /// Create an image with all pixels set to the given value.
    pub fn filled(width: u32, height: u32, pixel: U8x3) -> Result<Self, ImageBufferError> {
        let size = buffer_size(width, height)?;
        let buffer = pixel.0.iter().copied().cycle().take(size).collect();
        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    /// Create an image from vector with pixels data.
    ///
    /// Size of the vector must be exactly `width * height * 3` bytes.
    pub fn from_vec_u8(
        width: u32,
        height: u32,
        buffer: Vec<u8>,
    ) -> Result<Self, ImageBufferError> {
        let size = buffer_size(width, height)?;
        if buffer.len() != size {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    /// Create an image that has the same dimensions as `self`,
    /// but a zeroed buffer.
    pub(crate) fn new_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            buffer: vec![0; self.buffer.len()],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of one row of image in bytes.
    #[inline]
    pub fn row_size(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Buffer with image pixels data.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Mutable buffer with image pixels data.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer
    }

    /// Returns row of image with given index.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let row_size = self.row_size();
        let start = y as usize * row_size;
        self.buffer.get(start..start + row_size)
    }

    /// Returns an iterator over rows of image.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> {
        self.buffer.chunks_exact(self.row_size())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<U8x3> {
        let idx = self.pixel_index(x, y)?;
        let mut components = [0u8; CHANNELS];
        components.copy_from_slice(&self.buffer[idx..idx + CHANNELS]);
        Some(U8x3(components))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: U8x3) -> Result<(), OutOfBoundsError> {
        let idx = self
            .pixel_index(x, y)
            .ok_or(OutOfBoundsError { x, y })?;
        self.buffer[idx..idx + CHANNELS].copy_from_slice(&pixel.0);
        Ok(())
    }

    /// Returns an iterator over all pixels of image in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = U8x3> + '_ {
        self.buffer
            .chunks_exact(CHANNELS)
            .map(|c| U8x3([c[0], c[1], c[2]]))
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * CHANNELS)
    }
}

pub(crate) fn buffer_size(width: u32, height: u32) -> Result<usize, ImageBufferError> {
    if width == 0 || height == 0 {
        return Err(ImageBufferError::ZeroDimensions);
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|count| count.checked_mul(CHANNELS))
        .ok_or(ImageBufferError::TooLarge)
}
