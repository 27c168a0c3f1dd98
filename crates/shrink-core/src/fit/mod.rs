//! Dimension fitting: deciding whether a grid must shrink, and shrinking it.
//!
//! This module provides:
//! - Bounding-box arithmetic that preserves aspect ratio ([`fit_dimensions`])
//! - Resampling into the fitted size, skipped when it would be a no-op ([`fit`])
//!
//! # Examples
//!
//! ```ignore
//! use shrink_core::fit::{fit, ResampleFilter};
//!
//! // 4000x3000 with a 1920 width limit becomes 1920x1440
//! let fitted = fit(&grid, 1920, 0, ResampleFilter::CatmullRom);
//! ```

mod dimensions;
mod resample;

pub use dimensions::{fit_dimensions, Dimensions};
pub use resample::{fit, ResampleFilter};
