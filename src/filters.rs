use crate::pixels::CHANNELS;

/// Horizontal kernel of Sobel operator (indexed as `[dy + 1][dx + 1]`).
pub const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
/// Vertical kernel of Sobel operator (indexed as `[dy + 1][dx + 1]`).
pub const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Type of 3x3 filter applied to every interior pixel of image.
///
/// Pixels on the outermost rows and columns of image don't have
/// all eight neighbours, so filters leave them unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum FilterType {
    /// Box blur. Each component of a result pixel is the sum of the
    /// corresponding components of the 3x3 neighbourhood divided by 9
    /// (fractional part is dropped).
    #[default]
    Average,
    /// Sobel edge detector. Each component of a result pixel is the
    /// magnitude of the gradient `sqrt(Gx² + Gy²)` calculated with
    /// [SOBEL_X] and [SOBEL_Y] kernels, clamped to 255.
    Sobel,
}

impl FilterType {
    /// Calculates the result pixel for the column `x` of the middle row.
    ///
    /// `rows` are the previous, current and next rows of the source image.
    /// `x` must be in range `1..width - 1`.
    #[inline(always)]
    pub(crate) fn reduce(self, rows: &[&[u8]; 3], x: usize) -> [u8; CHANNELS] {
        match self {
            Self::Average => average(rows, x),
            Self::Sobel => sobel(rows, x),
        }
    }
}

#[inline(always)]
fn neighbourhood(row: &[u8], x: usize) -> &[u8] {
    &row[(x - 1) * CHANNELS..(x + 2) * CHANNELS]
}

#[inline(always)]
fn average(rows: &[&[u8]; 3], x: usize) -> [u8; CHANNELS] {
    let mut sums = [0u32; CHANNELS];
    for row in rows {
        for pixel in neighbourhood(row, x).chunks_exact(CHANNELS) {
            sums.iter_mut()
                .zip(pixel)
                .for_each(|(s, &c)| *s += c as u32);
        }
    }
    // The sum of 9 values from 0..=255 divided by 9 can't exceed 255.
    sums.map(|s| (s / 9) as u8)
}

#[inline(always)]
fn sobel(rows: &[&[u8]; 3], x: usize) -> [u8; CHANNELS] {
    let mut gx = [0i32; CHANNELS];
    let mut gy = [0i32; CHANNELS];
    for (dy, row) in rows.iter().enumerate() {
        for (dx, pixel) in neighbourhood(row, x).chunks_exact(CHANNELS).enumerate() {
            let kx = SOBEL_X[dy][dx];
            let ky = SOBEL_Y[dy][dx];
            for ((sx, sy), &c) in gx.iter_mut().zip(gy.iter_mut()).zip(pixel) {
                *sx += c as i32 * kx;
                *sy += c as i32 * ky;
            }
        }
    }
    std::array::from_fn(|c| gradient_magnitude(gx[c], gy[c]))
}

/// Euclidean norm of the gradient, truncated to integer and clamped to 255.
#[inline(always)]
pub(crate) fn gradient_magnitude(gx: i32, gy: i32) -> u8 {
    // |gx|, |gy| <= 4 * 255, so the sum of squares fits into i32.
    let square = gx * gx + gy * gy;
    (square as f64).sqrt().min(255.) as u8
}
