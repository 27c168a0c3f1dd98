//! In-memory pixel grid shared by the fitter, the encoders and the search.

use std::borrow::Cow;

use image::{DynamicImage, ExtendedColorType, Pixel, Rgb, RgbImage, RgbaImage};
use thiserror::Error;

/// Errors raised when building a grid from raw sample data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Sample buffer length doesn't match `width * height * channels`
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Channel layout of a [`PixelGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayout {
    /// 3 bytes per pixel, no transparency.
    Rgb8,
    /// 4 bytes per pixel, straight (non-premultiplied) alpha.
    Rgba8,
}

impl ColorLayout {
    /// Number of samples per pixel.
    pub fn channels(self) -> usize {
        match self {
            ColorLayout::Rgb8 => 3,
            ColorLayout::Rgba8 => 4,
        }
    }

    pub(crate) fn extended(self) -> ExtendedColorType {
        match self {
            ColorLayout::Rgb8 => ExtendedColorType::Rgb8,
            ColorLayout::Rgba8 => ExtendedColorType::Rgba8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Samples {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

/// A decoded image: a rectangular grid of 8-bit color samples.
///
/// The sample buffer always matches `width * height * channels`; every
/// constructor enforces that, so the resampler and the encoders can borrow
/// the buffer without re-checking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    samples: Samples,
}

impl PixelGrid {
    /// Build a grid from row-major sample data.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if either side is zero and
    /// `GridError::InvalidPixelData` if `pixels` has the wrong length.
    pub fn from_raw(
        width: u32,
        height: u32,
        layout: ColorLayout,
        pixels: Vec<u8>,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let expected = (width as usize) * (height as usize) * layout.channels();
        let actual = pixels.len();
        if actual != expected {
            return Err(GridError::InvalidPixelData { expected, actual });
        }

        let invalid = GridError::InvalidPixelData { expected, actual };
        let samples = match layout {
            ColorLayout::Rgb8 => {
                Samples::Rgb(RgbImage::from_raw(width, height, pixels).ok_or(invalid)?)
            }
            ColorLayout::Rgba8 => {
                Samples::Rgba(RgbaImage::from_raw(width, height, pixels).ok_or(invalid)?)
            }
        };

        Ok(Self { samples })
    }

    /// Wrap a decoded image, keeping an alpha channel only if the source has one.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        if image.color().has_alpha() {
            Self::from(image.into_rgba8())
        } else {
            Self::from(image.into_rgb8())
        }
    }

    pub fn width(&self) -> u32 {
        match &self.samples {
            Samples::Rgb(img) => img.width(),
            Samples::Rgba(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match &self.samples {
            Samples::Rgb(img) => img.height(),
            Samples::Rgba(img) => img.height(),
        }
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn layout(&self) -> ColorLayout {
        match &self.samples {
            Samples::Rgb(_) => ColorLayout::Rgb8,
            Samples::Rgba(_) => ColorLayout::Rgba8,
        }
    }

    pub fn has_alpha(&self) -> bool {
        self.layout() == ColorLayout::Rgba8
    }

    /// Row-major sample data.
    pub fn pixels(&self) -> &[u8] {
        match &self.samples {
            Samples::Rgb(img) => img.as_raw(),
            Samples::Rgba(img) => img.as_raw(),
        }
    }

    /// Samples of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        match &self.samples {
            Samples::Rgb(img) => img.get_pixel_checked(x, y).map(|p| p.channels()),
            Samples::Rgba(img) => img.get_pixel_checked(x, y).map(|p| p.channels()),
        }
    }

    /// Consume the grid and return its sample buffer.
    pub fn into_raw(self) -> Vec<u8> {
        match self.samples {
            Samples::Rgb(img) => img.into_raw(),
            Samples::Rgba(img) => img.into_raw(),
        }
    }

    /// Resample to exactly `width` x `height` with the given filter.
    pub(crate) fn resampled(
        &self,
        width: u32,
        height: u32,
        filter: image::imageops::FilterType,
    ) -> Self {
        match &self.samples {
            Samples::Rgb(img) => Self::from(image::imageops::resize(img, width, height, filter)),
            Samples::Rgba(img) => Self::from(image::imageops::resize(img, width, height, filter)),
        }
    }

    /// RGB view of the grid, compositing any alpha over opaque black.
    ///
    /// Grids without alpha are borrowed as-is.
    pub fn to_opaque_rgb(&self) -> Cow<'_, RgbImage> {
        match &self.samples {
            Samples::Rgb(img) => Cow::Borrowed(img),
            Samples::Rgba(img) => Cow::Owned(RgbImage::from_fn(img.width(), img.height(), |x, y| {
                let [r, g, b, a] = img.get_pixel(x, y).0;
                Rgb([over_black(r, a), over_black(g, a), over_black(b, a)])
            })),
        }
    }
}

impl From<RgbImage> for PixelGrid {
    fn from(img: RgbImage) -> Self {
        Self {
            samples: Samples::Rgb(img),
        }
    }
}

impl From<RgbaImage> for PixelGrid {
    fn from(img: RgbaImage) -> Self {
        Self {
            samples: Samples::Rgba(img),
        }
    }
}

#[inline]
fn over_black(channel: u8, alpha: u8) -> u8 {
    ((channel as u16 * alpha as u16 + 127) / 255) as u8
}
