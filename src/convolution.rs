use crate::pixels::CHANNELS;
use crate::{FilterType, Image};

/// Fills `dst_rows` with the filtered rows of the source image
/// starting from the row with index `first_row`.
///
/// `dst_rows` must contain a whole number of rows. Border pixels are
/// copied from the source image as is.
pub(crate) fn filter_rows(src: &Image, dst_rows: &mut [u8], first_row: u32, filter: FilterType) {
    let row_size = src.row_size();
    let height = src.height();
    let width = src.width() as usize;
    let src_buffer = src.buffer();
    debug_assert_eq!(dst_rows.len() % row_size, 0);
    debug_assert!(first_row as usize + dst_rows.len() / row_size <= height as usize);

    for (dst_row, y) in dst_rows.chunks_exact_mut(row_size).zip(first_row as usize..) {
        let start = y * row_size;
        let src_row = &src_buffer[start..start + row_size];
        if !is_interior_row(y, height as usize, width) {
            dst_row.copy_from_slice(src_row);
            continue;
        }

        let window = &src_buffer[start - row_size..start + 2 * row_size];
        let (top, rest) = window.split_at(row_size);
        let (middle, bottom) = rest.split_at(row_size);
        let rows = [top, middle, bottom];

        let last = (width - 1) * CHANNELS;
        dst_row[..CHANNELS].copy_from_slice(&src_row[..CHANNELS]);
        dst_row[last..].copy_from_slice(&src_row[last..]);

        let interior = &mut dst_row[CHANNELS..last];
        for (dst_pixel, x) in interior.chunks_exact_mut(CHANNELS).zip(1..) {
            dst_pixel.copy_from_slice(&filter.reduce(&rows, x));
        }
    }
}

/// Row contains interior pixels only if it is not the first or the last
/// row of image and image has at least 3 columns.
#[inline]
fn is_interior_row(y: usize, height: usize, width: usize) -> bool {
    width >= 3 && y > 0 && y + 1 < height
}

/// Applies filter to the whole image on the current thread.
pub(crate) fn filter_image(src: &Image, filter: FilterType) -> Image {
    let mut dst = src.new_like();
    filter_rows(src, dst.buffer_mut(), 0, filter);
    dst
}
