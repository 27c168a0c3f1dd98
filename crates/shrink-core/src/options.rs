//! Compression options and quality presets.

use serde::{Deserialize, Serialize};

use crate::fit::ResampleFilter;

/// Quality used when the requested one is out of range.
pub const DEFAULT_QUALITY: u8 = 80;

/// Named quality levels for easy reference.
///
/// These are plain values; nothing validates a quality against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Quality {
    Low = 30,
    Medium = 60,
    High = 80,
    Best = 95,
}

impl Quality {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.value()
    }
}

impl From<Quality> for i32 {
    fn from(quality: Quality) -> Self {
        quality.value() as i32
    }
}

/// Map a requested quality onto the encoder's range.
///
/// Anything `<= 0` or `> 100` becomes [`DEFAULT_QUALITY`]. Note the asymmetry:
/// 100 is kept, 0 is not.
pub fn normalize_quality(quality: i32) -> u8 {
    if quality <= 0 || quality > 100 {
        DEFAULT_QUALITY
    } else {
        quality as u8
    }
}

/// Options for [`compress_jpeg`](crate::compress_jpeg) and friends.
///
/// `quality` is stored as given and only normalized when encoding, so an
/// out-of-range value round-trips through serialization untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompressOptions {
    /// JPEG quality (1-100). Ignored by the lossless path.
    pub quality: i32,
    /// Maximum width in pixels (0 = no limit)
    pub max_width: u32,
    /// Maximum height in pixels (0 = no limit)
    pub max_height: u32,
    /// Filter used when the grid has to shrink
    pub filter: ResampleFilter,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY as i32,
            max_width: 0,
            max_height: 0,
            filter: ResampleFilter::default(),
        }
    }
}

impl CompressOptions {
    /// Create options with the defaults: quality 80, no size limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, quality: impl Into<i32>) -> Self {
        self.quality = quality.into();
        self
    }

    pub fn with_max_dimensions(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The quality the lossy encoder will actually receive.
    pub fn effective_quality(&self) -> u8 {
        normalize_quality(self.quality)
    }

    /// Check if neither axis is limited
    pub fn is_unbounded(&self) -> bool {
        self.max_width == 0 && self.max_height == 0
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
