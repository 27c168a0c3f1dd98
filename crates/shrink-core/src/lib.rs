//! Shrink Core - Image size and quality reduction
//!
//! This crate shrinks decoded images: it fits them inside bounding
//! dimensions while keeping their aspect ratio, re-encodes them as JPEG at a
//! chosen quality or as PNG at maximum compression, and searches for the
//! highest JPEG quality that fits a byte budget.
//!
//! # Data flow
//!
//! ```text
//! encoded bytes -> decode_image -> PixelGrid -> fit (optional) -> encode / search -> bytes
//! ```
//!
//! Decoding, resampling and the codecs themselves come from the `image` crate.

pub mod compress;
pub mod decode;
pub mod encode;
pub mod error;
pub mod fit;
pub mod grid;
pub mod options;
pub mod search;

pub use compress::{compress, compress_file, compress_jpeg, compress_png, compress_to_size_with_options};
pub use decode::{decode_image, DecodeError};
pub use encode::{encode_jpeg, encode_png, EncodeError, JpegCodec, LossyEncoder};
pub use error::CompressError;
pub use fit::{fit, fit_dimensions, Dimensions, ResampleFilter};
pub use grid::{ColorLayout, GridError, PixelGrid};
pub use options::{normalize_quality, CompressOptions, Quality, DEFAULT_QUALITY};
pub use search::{compress_to_size, search_quality, SearchOutcome, QUALITY_FLOOR};
