use std::num::NonZeroUsize;

use crate::convolution::filter_image;
use crate::{FilterError, FilterType, Image};

/// How an image is processed by [Filterer].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threading {
    /// Process all rows of image on the current thread.
    Sequential,
    /// Process bands of rows in parallel.
    ///
    /// With `max_threads: None` the current `rayon` thread pool is used
    /// (its size is equal to the number of available CPUs by default).
    /// With `max_threads: Some(n)` a dedicated pool with `n` threads
    /// is created for every call of [Filterer::filter].
    ///
    /// Without the `rayon` feature, image is processed on the current thread.
    Parallel { max_threads: Option<NonZeroUsize> },
}

impl Default for Threading {
    fn default() -> Self {
        Self::Parallel { max_threads: None }
    }
}

/// Options for filtering images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub filter: FilterType,
    pub threading: Threading,
}

impl FilterOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set filter type.
    pub fn filter(&self, filter: FilterType) -> Self {
        let mut options = *self;
        options.filter = filter;
        options
    }

    /// Set how image should be processed.
    pub fn threading(&self, threading: Threading) -> Self {
        let mut options = *self;
        options.threading = threading;
        options
    }

    /// Process image on the current thread.
    pub fn sequential(&self) -> Self {
        self.threading(Threading::Sequential)
    }

    /// Process image in parallel with using up to `max_threads` threads.
    ///
    /// Zero means the size of the current thread pool.
    pub fn parallel(&self, max_threads: usize) -> Self {
        self.threading(Threading::Parallel {
            max_threads: NonZeroUsize::new(max_threads),
        })
    }
}

/// Result of filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    pub image: Image,
    /// Number of row bands dispatched as separate `rayon` tasks.
    ///
    /// It is never greater than the size of the thread pool, but with
    /// work stealing one thread may process several bands, so it is
    /// an upper bound of threads that actually did the work.
    /// Equal to 1 for sequential processing and for images too small to split.
    pub threads_used: usize,
}

/// Methods of this structure used to apply filters to images.
#[derive(Debug, Clone, Default)]
pub struct Filterer {
    pub options: FilterOptions,
}

impl Filterer {
    pub fn new(options: FilterOptions) -> Self {
        Self { options }
    }

    /// Applies filter to the source image and returns a new image
    /// with the same dimensions.
    ///
    /// The source image is not changed.
    pub fn filter(&self, src_image: &Image) -> Result<Filtered, FilterError> {
        let filter = self.options.filter;
        match self.options.threading {
            Threading::Sequential => Ok(Filtered {
                image: filter_image(src_image, filter),
                threads_used: 1,
            }),
            Threading::Parallel { max_threads } => {
                filter_in_parallel(src_image, filter, max_threads)
            }
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        fn filter_in_parallel(
            src_image: &Image,
            filter: FilterType,
            max_threads: Option<NonZeroUsize>,
        ) -> Result<Filtered, FilterError> {
            let (image, threads_used) =
                crate::threading::filter_image_in_pool(src_image, filter, max_threads)?;
            Ok(Filtered {
                image,
                threads_used,
            })
        }
    } else {
        fn filter_in_parallel(
            src_image: &Image,
            filter: FilterType,
            _max_threads: Option<NonZeroUsize>,
        ) -> Result<Filtered, FilterError> {
            Ok(Filtered {
                image: filter_image(src_image, filter),
                threads_used: 1,
            })
        }
    }
}

/// Applies filter to the source image and returns a new image.
///
/// If `parallel` is `true`, the image is processed
/// in the current `rayon` thread pool.
pub fn apply(src_image: &Image, filter: FilterType, parallel: bool) -> Image {
    #[cfg(feature = "rayon")]
    if parallel {
        return crate::threading::filter_image_in_parallel(src_image, filter).0;
    }
    #[cfg(not(feature = "rayon"))]
    let _ = parallel;
    filter_image(src_image, filter)
}
