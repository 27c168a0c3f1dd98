//! Resampling a grid into its fitted bounding box.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fit_dimensions;
use crate::grid::PixelGrid;

/// Filter type for resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResampleFilter {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Catmull-Rom bicubic interpolation (sharp, good for downscaling).
    #[default]
    CatmullRom,
    /// Lanczos3 interpolation (slowest, highest quality).
    Lanczos3,
}

impl ResampleFilter {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResampleFilter::Nearest => image::imageops::FilterType::Nearest,
            ResampleFilter::Bilinear => image::imageops::FilterType::Triangle,
            ResampleFilter::CatmullRom => image::imageops::FilterType::CatmullRom,
            ResampleFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Fit `grid` inside `max_width` x `max_height`, preserving its aspect ratio.
///
/// A zero maximum leaves that axis unconstrained. When no resize is needed
/// (no limits, limits already satisfied, or the fitted size rounds back to
/// the original) the input is returned borrowed, without copying. Otherwise a
/// new, independently owned grid is produced with `filter`.
///
/// # Example
///
/// ```ignore
/// let fitted = fit(&grid, 1920, 0, ResampleFilter::CatmullRom);
/// assert!(fitted.width() <= 1920);
/// ```
pub fn fit(
    grid: &PixelGrid,
    max_width: u32,
    max_height: u32,
    filter: ResampleFilter,
) -> Cow<'_, PixelGrid> {
    if max_width == 0 && max_height == 0 {
        return Cow::Borrowed(grid);
    }

    let (width, height) = grid.dimensions();
    let target = fit_dimensions(width, height, max_width, max_height);

    if target.width == width && target.height == height {
        return Cow::Borrowed(grid);
    }

    debug!(
        from_width = width,
        from_height = height,
        to_width = target.width,
        to_height = target.height,
        ?filter,
        "resampling grid"
    );

    Cow::Owned(grid.resampled(target.width, target.height, filter.to_image_filter()))
}
