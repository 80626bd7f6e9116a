//! Owned grayscale rasters and batch dithering.

use crate::{
    DitherError, Result,
    engine::{self, pixel_count},
};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// An 8-bit grayscale raster whose shape has been checked.
///
/// `pixels` is row-major and always holds exactly `width * height`
/// samples, so dithering a `GrayRaster` cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GrayRaster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl GrayRaster {
    /// Wrap `pixels` after checking them against `width` and `height`.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use fsdither::{DitherError, GrayRaster};
    /// assert!(GrayRaster::new(vec![0; 6], 3, 2).is_ok());
    /// assert_eq!(
    ///     GrayRaster::new(vec![0; 5], 3, 2),
    ///     Err(DitherError::SourceSizeMismatch { expected: 6, actual: 5 })
    /// );
    /// ```
    pub fn new(pixels: Vec<u8>, width: usize, height: usize) -> Result<Self> {
        let len = pixel_count(width, height)?;

        if pixels.len() != len {
            return Err(DitherError::SourceSizeMismatch {
                expected: len,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Sample at column `x`, row `y`, or `None` outside the raster.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Black-and-white copy of this raster.
    pub fn dithered(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: engine::dither_unchecked(
                &self.pixels,
                self.width,
                self.height,
            ),
        }
    }

    /// Dither this raster without allocating.
    pub fn dither_in_place(&mut self) {
        engine::dither_in_place_unchecked(
            &mut self.pixels,
            self.width,
            self.height,
        );
    }
}

/// Dither every raster in `rasters` in place.
///
/// Each raster is still scanned by a single thread. With the `rayon`
/// feature, different rasters are processed in parallel.
///
/// ## Examples
///
/// ```
/// # use fsdither::{GrayRaster, dither_all};
/// let mut rasters = vec![
///     GrayRaster::new(vec![128; 16], 4, 4)?,
///     GrayRaster::new(vec![10, 250], 2, 1)?,
/// ];
///
/// dither_all(&mut rasters);
///
/// assert_eq!(rasters[1].pixels(), [0, 255]);
/// # Ok::<(), fsdither::DitherError>(())
/// ```
pub fn dither_all(rasters: &mut [GrayRaster]) {
    tracing::debug!(count = rasters.len(), "dithering rasters");

    #[cfg(feature = "rayon")]
    rasters.par_iter_mut().for_each(GrayRaster::dither_in_place);

    #[cfg(not(feature = "rayon"))]
    rasters.iter_mut().for_each(GrayRaster::dither_in_place);
}
