//! Floyd–Steinberg error-diffusion dithering of 8-bit grayscale rasters to
//! black and white.
//!
//! Each pixel is mapped to `0` or `255` and the difference is pushed to the
//! four neighbours that have not been visited yet:
//!
//! ```text
//!        X   7
//!    3   5   1     (sixteenths)
//! ```
//!
//! The scan is a single raster pass, top to bottom and left to right. Only
//! two rows of error are kept, plus three scalar carries. All arithmetic is
//! integer and every share is rounded toward negative infinity, so the
//! output is bit-exact with shift-based implementations of the same kernel.
//!
//! Shares that would land outside the image (down-left of the first column,
//! down-right and right of the last column, everything below the last row)
//! are dropped.
//!
//! ## Examples
//!
//! ```
//! use fsdither::{dither, dither_in_place};
//!
//! let gradient: Vec<u8> = (0..8).map(|x| (x * 255 / 7) as u8).collect();
//!
//! let result = dither(&gradient, 8, 1)?;
//! assert_eq!(result, [0, 0, 0, 255, 0, 255, 255, 255]);
//!
//! let mut pixels = gradient.clone();
//! dither_in_place(&mut pixels, 8, 1)?;
//! assert_eq!(pixels, result);
//! # Ok::<(), fsdither::DitherError>(())
//! ```
//!
//! ## Cargo Features
//!
//! * `std` (default) -- Use `std`. Without it the crate is `no_std` and
//!   needs `alloc`.
//! * `rayon` (default) -- [`dither_all()`] processes independent rasters
//!   in parallel.
//! * `image` -- `DitherImage` for `image::GrayImage` and
//!   `image::DynamicImage`.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod diffusion;
mod engine;
#[cfg(feature = "image")]
mod luma;
mod raster;
mod rows;

pub use diffusion::{BLACK, Diffusion, THRESHOLD, WHITE, floor_div, quantize};
pub use engine::{dither, dither_in_place, dither_into};
#[cfg(feature = "image")]
pub use luma::DitherImage;
pub use raster::{GrayRaster, dither_all};

/// Errors reported before any output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DitherError {
    /// A dimension is zero, or `width * height` does not fit in `usize`.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The source buffer does not hold `width * height` samples.
    #[error("source size mismatch: expected {expected} samples, got {actual}")]
    SourceSizeMismatch { expected: usize, actual: usize },

    /// The target buffer does not hold `width * height` samples.
    #[error("target size mismatch: expected {expected} samples, got {actual}")]
    TargetSizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = core::result::Result<T, DitherError>;
