#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use errors::*;
pub use filterer::{apply, FilterOptions, Filtered, Filterer, Threading};
pub use filters::{FilterType, SOBEL_X, SOBEL_Y};
pub use pixels::U8x3;

pub use crate::image::Image;

mod convolution;
mod errors;
mod filterer;
mod filters;
mod image;
#[cfg(feature = "image")]
mod image_crate;
pub mod pixels;
#[cfg(feature = "pnm")]
pub mod pnm;
#[cfg(feature = "rayon")]
mod threading;
