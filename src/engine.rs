//! The raster scan.
//!
//! One pass, top to bottom, left to right. Two [`ErrorRows`] hold the row
//! being scanned and the row below; three scalar carries move error along
//! the row. Nothing survives a call.

use crate::{
    DitherError, Result,
    diffusion::{Carry, Diffusion, quantize},
    rows::ErrorRows,
};
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Where source rows come from and where result rows go.
enum Raster<'a> {
    /// Distinct source and target buffers.
    Split { source: &'a [u8], target: &'a mut [u8] },
    /// One buffer that is both. Row `y + 1` is read only while row `y` is
    /// written, and row `y + 1` has not been written yet at that point.
    Shared(&'a mut [u8]),
}

impl Raster<'_> {
    fn first_row(&self, width: usize) -> &[u8] {
        match self {
            Raster::Split { source, .. } => &source[..width],
            Raster::Shared(pixels) => &pixels[..width],
        }
    }

    /// Target row `y` and, unless `y` is the last row, source row `y + 1`.
    fn rows(&mut self, y: usize, width: usize) -> (&mut [u8], Option<&[u8]>) {
        let start = y * width;
        let end = start + width;

        match self {
            Raster::Split { source, target } => {
                (&mut target[start..end], source.get(end..end + width))
            }
            Raster::Shared(pixels) => {
                let (head, tail) = pixels.split_at_mut(end);
                (&mut head[start..], tail.get(..width))
            }
        }
    }
}

/// Check `width` and `height` and return the pixel count.
pub(crate) fn pixel_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(DitherError::InvalidDimensions { width, height });
    }

    width
        .checked_mul(height)
        .ok_or(DitherError::InvalidDimensions { width, height })
}

fn check_source(len: usize, expected: usize) -> Result<()> {
    if len != expected {
        return Err(DitherError::SourceSizeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Dither an 8-bit grayscale raster to black and white.
///
/// `source` is row-major and must hold exactly `width * height` samples.
/// The result has the same shape; every sample is [`BLACK`](crate::BLACK)
/// or [`WHITE`](crate::WHITE).
///
/// ## Examples
///
/// ```
/// # use fsdither::dither;
/// let gray = [128u8; 16];
///
/// let result = dither(&gray, 4, 4)?;
///
/// assert_eq!(
///     result,
///     [
///         255, 0, 255, 0, //
///         0, 255, 0, 255, //
///         255, 0, 255, 0, //
///         0, 255, 0, 255, //
///     ]
/// );
/// # Ok::<(), fsdither::DitherError>(())
/// ```
///
/// ## Errors
///
/// [`DitherError::InvalidDimensions`] if either dimension is zero,
/// [`DitherError::SourceSizeMismatch`] if `source` has the wrong length.
pub fn dither(source: &[u8], width: usize, height: usize) -> Result<Vec<u8>> {
    let len = pixel_count(width, height)?;
    check_source(source.len(), len)?;

    Ok(dither_unchecked(source, width, height))
}

/// [`dither()`] for a shape that has already been checked.
pub(crate) fn dither_unchecked(
    source: &[u8],
    width: usize,
    height: usize,
) -> Vec<u8> {
    let mut target = vec![0; source.len()];
    scan(Raster::Split { source, target: &mut target }, width, height);
    target
}

/// Dither `source` into a caller-owned `target` of the same shape.
///
/// ## Errors
///
/// As [`dither()`], plus [`DitherError::TargetSizeMismatch`] if `target`
/// has the wrong length. Nothing is written to `target` on error.
pub fn dither_into(
    source: &[u8],
    target: &mut [u8],
    width: usize,
    height: usize,
) -> Result<()> {
    let len = pixel_count(width, height)?;
    check_source(source.len(), len)?;

    if target.len() != len {
        return Err(DitherError::TargetSizeMismatch {
            expected: len,
            actual: target.len(),
        });
    }

    scan(Raster::Split { source, target }, width, height);

    Ok(())
}

/// Dither `pixels` in place.
///
/// Produces exactly what [`dither()`] returns for the same input, without
/// allocating a second raster.
///
/// ## Errors
///
/// As [`dither()`]. `pixels` is left untouched on error.
pub fn dither_in_place(
    pixels: &mut [u8],
    width: usize,
    height: usize,
) -> Result<()> {
    let len = pixel_count(width, height)?;
    check_source(pixels.len(), len)?;

    dither_in_place_unchecked(pixels, width, height);

    Ok(())
}

/// [`dither_in_place()`] for a shape that has already been checked.
pub(crate) fn dither_in_place_unchecked(
    pixels: &mut [u8],
    width: usize,
    height: usize,
) {
    scan(Raster::Shared(pixels), width, height);
}

fn scan(mut raster: Raster<'_>, width: usize, height: usize) {
    tracing::debug!(width, height, "floyd-steinberg scan");

    let mut rows = ErrorRows::new(raster.first_row(width));

    for y in 0..height {
        let (target, below) = raster.rows(y, width);
        let mut carry = Carry::default();

        for (x, out) in target.iter_mut().enumerate() {
            let old_value = rows.current(x) + carry.right;
            let new_value = quantize(old_value);
            *out = new_value;

            let shares = Diffusion::split(old_value - new_value as i16);
            let behind = carry.advance(&shares);

            // Column 0 has no pixel below-left; its 3/16 share is dropped.
            match below {
                Some(below) if x > 0 => {
                    rows.set_next(x - 1, below[x - 1] as i16 + behind)
                }
                _ => {}
            }
        }

        if let Some(below) = below {
            rows.set_next(width - 1, below[width - 1] as i16 + carry.finish());
            rows.rotate();
        }
    }

    tracing::trace!(width, height, "floyd-steinberg scan done");
}
