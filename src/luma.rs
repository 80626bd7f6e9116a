//! Dithering of [`image`] crate buffers.
//!
//! Color images are converted to 8-bit luma first; the result is always a
//! [`GrayImage`] whose samples are [`BLACK`](crate::BLACK) or
//! [`WHITE`](crate::WHITE).

use crate::{DitherError, Result, dither, dither_in_place};
use image::{DynamicImage, GrayImage};

/// Floyd–Steinberg dithering for images.
///
/// ## Examples
///
/// ```
/// # use fsdither::DitherImage;
/// let gray = image::GrayImage::from_pixel(4, 4, image::Luma([128]));
///
/// let result = gray.floyd_steinberg()?;
///
/// assert_eq!(result.get_pixel(0, 0).0, [255]);
/// assert_eq!(result.get_pixel(1, 0).0, [0]);
/// # Ok::<(), fsdither::DitherError>(())
/// ```
pub trait DitherImage {
    /// Black-and-white copy of `self`.
    fn floyd_steinberg(&self) -> Result<GrayImage>;

    /// Dither `self` in place.
    fn floyd_steinberg_in_place(&mut self) -> Result<()>;
}

impl DitherImage for GrayImage {
    fn floyd_steinberg(&self) -> Result<GrayImage> {
        let (width, height) = (self.width(), self.height());
        let pixels = dither(self.as_raw(), width as usize, height as usize)?;

        let len = pixels.len();
        GrayImage::from_raw(width, height, pixels).ok_or(
            DitherError::TargetSizeMismatch {
                expected: width as usize * height as usize,
                actual: len,
            },
        )
    }

    fn floyd_steinberg_in_place(&mut self) -> Result<()> {
        let (width, height) = (self.width() as usize, self.height() as usize);
        dither_in_place(&mut **self, width, height)
    }
}

impl DitherImage for DynamicImage {
    fn floyd_steinberg(&self) -> Result<GrayImage> {
        match self {
            DynamicImage::ImageLuma8(luma) => luma.floyd_steinberg(),
            _ => {
                let mut luma = self.to_luma8();
                luma.floyd_steinberg_in_place()?;
                Ok(luma)
            }
        }
    }

    /// Converts `self` to [`DynamicImage::ImageLuma8`] unless it already is.
    fn floyd_steinberg_in_place(&mut self) -> Result<()> {
        if let DynamicImage::ImageLuma8(luma) = self {
            return luma.floyd_steinberg_in_place();
        }

        let mut luma = self.to_luma8();
        luma.floyd_steinberg_in_place()?;
        *self = DynamicImage::ImageLuma8(luma);

        Ok(())
    }
}
