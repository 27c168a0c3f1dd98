//! JPEG encoding, the lossy path.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG encoder.
//! Grids carrying alpha are composited over opaque black first, since JPEG
//! has no transparency.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{check_dimensions, EncodeError, LossyEncoder};
use crate::grid::PixelGrid;

/// Encode a grid to JPEG bytes.
///
/// # Arguments
///
/// * `grid` - The pixel grid to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality). Values
///   outside that range are clamped, so 0 encodes at 1. Mapping out-of-range
///   values to the default of 80 only happens through
///   [`CompressOptions::effective_quality`](crate::CompressOptions::effective_quality).
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if encoding fails.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(grid: &PixelGrid, quality: u8) -> Result<Vec<u8>, EncodeError> {
    check_dimensions(grid)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let rgb = grid.to_opaque_rgb();
    let mut buffer = Vec::new();

    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// The `image` crate's baseline JPEG encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegCodec;

impl LossyEncoder for JpegCodec {
    fn encode(&self, grid: &PixelGrid, quality: u8) -> Result<Vec<u8>, EncodeError> {
        encode_jpeg(grid, quality)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
