//! Size-targeted quality search.
//!
//! Walks the lossy encoder's quality down from [`START_QUALITY`] in steps of
//! [`QUALITY_STEP`] and keeps the first encoding that fits the byte budget.
//! When nothing fits, the encoding at [`QUALITY_FLOOR`] is returned as a best
//! effort; check [`SearchOutcome::fits`] (or the length) to tell the cases apart.
//!
//! Each attempt encodes into a fresh, uncapped buffer and only the finished
//! length is compared against the budget.

use tracing::{debug, info, warn};

use crate::encode::{EncodeError, JpegCodec, LossyEncoder};
use crate::grid::PixelGrid;

/// First quality tried.
pub const START_QUALITY: u8 = 95;
/// Quality decrement between attempts.
pub const QUALITY_STEP: u8 = 5;
/// Lowest quality tried, inclusive.
pub const QUALITY_FLOOR: u8 = 10;

/// Result of a quality search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Encoded bytes at `quality`.
    pub bytes: Vec<u8>,
    /// Quality the bytes were encoded at.
    pub quality: u8,
    /// Whether `bytes` is within the target size.
    pub fits: bool,
}

/// Search for the highest quality whose encoding is at most `target_bytes`.
///
/// Qualities are tried in the fixed order 95, 90, ..., 15, 10 and the first
/// one that fits wins. If none fits, the quality-10 encoding is returned with
/// `fits == false`. A target of 0 therefore always ends at the floor.
///
/// # Errors
///
/// The first encoder failure is returned as-is; no other quality is tried.
pub fn search_quality<E: LossyEncoder + ?Sized>(
    encoder: &E,
    grid: &PixelGrid,
    target_bytes: usize,
) -> Result<SearchOutcome, EncodeError> {
    let mut quality = START_QUALITY;

    loop {
        let bytes = encoder.encode(grid, quality)?;
        let fits = bytes.len() <= target_bytes;

        debug!(quality, size = bytes.len(), target_bytes, fits, "quality attempt");

        if fits {
            info!(quality, size = bytes.len(), target_bytes, "target size met");
            return Ok(SearchOutcome {
                bytes,
                quality,
                fits,
            });
        }

        if quality <= QUALITY_FLOOR {
            warn!(
                quality,
                size = bytes.len(),
                target_bytes,
                "target size not reachable, returning floor quality"
            );
            return Ok(SearchOutcome {
                bytes,
                quality,
                fits,
            });
        }

        quality -= QUALITY_STEP;
    }
}

/// JPEG-encode `grid` at the highest quality that fits in `target_bytes`.
///
/// Falls back to the quality-10 encoding when the target is unreachable, so
/// the returned length may exceed `target_bytes`.
///
/// # Example
///
/// ```ignore
/// let bytes = compress_to_size(&grid, 500 * 1024)?;
/// if bytes.len() > 500 * 1024 {
///     // even quality 10 was too large
/// }
/// ```
pub fn compress_to_size(grid: &PixelGrid, target_bytes: usize) -> Result<Vec<u8>, EncodeError> {
    search_quality(&JpegCodec, grid, target_bytes).map(|outcome| outcome.bytes)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
