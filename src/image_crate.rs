use image::RgbImage;

use crate::{Image, ImageBufferError};

impl TryFrom<RgbImage> for Image {
    type Error = ImageBufferError;

    fn try_from(image: RgbImage) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        Image::from_vec_u8(width, height, image.into_raw())
    }
}

impl TryFrom<Image> for RgbImage {
    type Error = ImageBufferError;

    fn try_from(image: Image) -> Result<Self, Self::Error> {
        let (width, height) = (image.width(), image.height());
        RgbImage::from_raw(width, height, image.into_vec())
            .ok_or(ImageBufferError::InvalidBufferSize)
    }
}
