#![allow(dead_code)]
use fast_image_filter::{Image, U8x3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn image_checksum<const N: usize>(buffer: &[u8]) -> [u32; N] {
    let mut res = [0u32; N];
    for pixel in buffer.chunks_exact(N) {
        res.iter_mut().zip(pixel).for_each(|(d, &s)| *d += s as u32);
    }
    res
}

/// Creates image filled by pseudo-random noise.
pub fn noise_image(width: u32, height: u32, seed: u64) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    rng.fill(buffer.as_mut_slice());
    Image::from_vec_u8(width, height, buffer).unwrap()
}

/// Creates black image with single white pixel.
pub fn dot_image(width: u32, height: u32, x: u32, y: u32) -> Image {
    let mut image = Image::new(width, height).unwrap();
    image.set_pixel(x, y, U8x3::WHITE).unwrap();
    image
}

pub fn is_border(image: &Image, x: u32, y: u32) -> bool {
    x == 0 || y == 0 || x == image.width() - 1 || y == image.height() - 1
}

pub fn assert_border_unchanged(src: &Image, dst: &Image) {
    assert_eq!(src.width(), dst.width());
    assert_eq!(src.height(), dst.height());
    for y in 0..src.height() {
        for x in 0..src.width() {
            if is_border(src, x, y) {
                assert_eq!(src.pixel(x, y), dst.pixel(x, y), "pixel ({x}, {y})");
            }
        }
    }
}
