//! Image encoding for Shrink.
//!
//! This module provides functionality for:
//! - Encoding grids to JPEG with configurable quality (lossy)
//! - Encoding grids to PNG at maximum compression (lossless)
//!
//! # Architecture
//!
//! Encoders write into an owned in-memory buffer; callers that need a stream
//! copy that buffer to their sink. This keeps encoder faults ([`EncodeError`])
//! apart from sink I/O failures.
//!
//! # Examples
//!
//! ```ignore
//! use shrink_core::encode::encode_jpeg;
//!
//! let jpeg_bytes = encode_jpeg(&grid, 90).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;
mod png;

use thiserror::Error;

use crate::grid::PixelGrid;

pub use jpeg::{encode_jpeg, JpegCodec};
pub use png::encode_png;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder rejected the grid or failed internally
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// A quality-parameterized encoder, as driven by the size-targeted search.
pub trait LossyEncoder {
    /// Encode `grid` at `quality` (1-100) into an owned byte buffer.
    fn encode(&self, grid: &PixelGrid, quality: u8) -> Result<Vec<u8>, EncodeError>;
}

/// Grids built through the public constructors are never empty, but a fit
/// down to a sliver can truncate an axis to zero.
fn check_dimensions(grid: &PixelGrid) -> Result<(), EncodeError> {
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    Ok(())
}
