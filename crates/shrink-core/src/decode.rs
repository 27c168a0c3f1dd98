//! Decoding encoded image bytes into a [`PixelGrid`].
//!
//! Format detection is left to the `image` crate; any format it was built
//! with (JPEG and PNG here) is accepted. Only the first frame is decoded and
//! EXIF orientation is not applied.

use std::io::Cursor;

use image::error::ImageError;
use image::ImageReader;
use thiserror::Error;

use crate::grid::PixelGrid;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The format is not recognized or not supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedFile(String),

    /// Decoding would exceed the decoder's memory limits.
    #[error("Image exceeds decoder limits: {0}")]
    LimitsExceeded(String),
}

impl From<ImageError> for DecodeError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::Unsupported(_) => DecodeError::InvalidFormat,
            ImageError::Limits(e) => DecodeError::LimitsExceeded(e.to_string()),
            other => DecodeError::CorruptedFile(other.to_string()),
        }
    }
}

/// Decode an image from its encoded bytes.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is not recognized.
/// Returns `DecodeError::CorruptedFile` if the data is malformed.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode()?;
    Ok(PixelGrid::from_dynamic(img))
}
