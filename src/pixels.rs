//! Contains the pixel type used by [Image](crate::Image).

/// Count of components (channels) in one pixel.
pub const CHANNELS: usize = 3;

/// Pixel with three `u8` components (R, G, B).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct U8x3(pub [u8; CHANNELS]);

impl U8x3 {
    pub const BLACK: Self = Self([0; CHANNELS]);
    pub const WHITE: Self = Self([255; CHANNELS]);

    #[inline(always)]
    pub const fn new(components: [u8; CHANNELS]) -> Self {
        Self(components)
    }

    /// Pixel with equal value of all components.
    #[inline(always)]
    pub const fn gray(value: u8) -> Self {
        Self([value; CHANNELS])
    }

    #[inline(always)]
    pub fn components(&self) -> [u8; CHANNELS] {
        self.0
    }

    /// Size of pixel in bytes
    #[inline(always)]
    pub const fn size() -> usize {
        CHANNELS
    }
}

impl From<[u8; CHANNELS]> for U8x3 {
    fn from(components: [u8; CHANNELS]) -> Self {
        Self(components)
    }
}
