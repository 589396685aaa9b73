use std::num::NonZeroUsize;

use log::{debug, trace};
use rayon::current_num_threads;
use rayon::prelude::*;

use crate::convolution::{filter_image, filter_rows};
use crate::{FilterError, FilterType, Image};

/// Filters image in a thread pool of `rayon`.
///
/// If `max_threads` is `None`, the current pool is used
/// (the global one by default). Otherwise, a dedicated pool with
/// given number of threads is created for this call.
///
/// Returns the result image and the number of bands dispatched
/// (at most the pool size).
pub(crate) fn filter_image_in_pool(
    src: &Image,
    filter: FilterType,
    max_threads: Option<NonZeroUsize>,
) -> Result<(Image, usize), FilterError> {
    match max_threads {
        None => Ok(filter_image_in_parallel(src, filter)),
        Some(num_threads) => {
            debug!("Build thread pool with {} threads", num_threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads.get())
                .build()?;
            Ok(pool.install(|| filter_image_in_parallel(src, filter)))
        }
    }
}

/// Splits the destination image into horizontal bands of whole rows
/// and filters them in parallel.
///
/// Every band is written by exactly one task and the source image is only
/// read, so the result doesn't depend on the number of bands.
pub(crate) fn filter_image_in_parallel(src: &Image, filter: FilterType) -> (Image, usize) {
    let height = src.height();
    let max_num_parts = calculate_max_h_parts_number(src.width(), height);
    let num_threads = current_num_threads() as u32;
    if num_threads <= 1 || max_num_parts <= 1 {
        trace!("Image is too small to split it, filter it in one thread");
        return (filter_image(src, filter), 1);
    }

    let num_parts = num_threads.min(max_num_parts);
    let rows_per_part = height.div_ceil(num_parts);
    let num_bands = height.div_ceil(rows_per_part);
    trace!(
        "Split image into {} bands with {} rows ({} threads available)",
        num_bands,
        rows_per_part,
        num_threads
    );

    let mut dst = src.new_like();
    let band_size = rows_per_part as usize * src.row_size();
    dst.buffer_mut()
        .par_chunks_mut(band_size)
        .enumerate()
        .for_each(|(i, band)| {
            filter_rows(src, band, i as u32 * rows_per_part, filter);
        });
    (dst, num_bands as usize)
}

/// It is not optimal to split images on too small parts.
/// We have to calculate minimal height of one part.
/// For small images, it is equal to `constant / area`.
/// For tall images, it is equal to `height / 256`.
fn calculate_max_h_parts_number(width: u32, height: u32) -> u32 {
    if width == 0 || height == 0 {
        return 1;
    }
    let area = height as u64 * height.max(width) as u64;
    let min_height = ((1u64 << 14) / area).max(height as u64 / 256);
    (height as u64 / min_height.max(1)).max(1) as u32
}
