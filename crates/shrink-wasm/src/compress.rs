//! Compression WASM bindings.
//!
//! # Functions
//!
//! - [`compress_jpeg`] - Fit and encode to JPEG bytes
//! - [`compress_png`] - Fit and encode to PNG bytes at maximum compression
//! - [`compress_to_size`] - Highest JPEG quality that fits a byte budget
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, compress_jpeg, compress_to_size } from '@shrink/wasm';
//!
//! const grid = decode_image(bytes);
//! const jpeg = compress_jpeg(grid, { quality: 80, maxWidth: 1920 });
//! const sized = compress_to_size(grid, 500 * 1024, { maxWidth: 1920 });
//! ```

use crate::types::{options_from_js, JsPixelGrid};
use shrink_core::compress;
use wasm_bindgen::prelude::*;

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Fit `image` to the options' size limits and encode it as JPEG.
///
/// `options` is an optional `{ quality, maxWidth, maxHeight, filter }` object.
/// Out-of-range qualities (<= 0 or > 100) encode at 80.
#[wasm_bindgen]
pub fn compress_jpeg(image: &JsPixelGrid, options: JsValue) -> Result<Vec<u8>, JsValue> {
    let opts = options_from_js(options)?;
    let mut out = Vec::new();
    compress::compress_jpeg(image.grid(), &mut out, &opts).map_err(to_js_error)?;
    Ok(out)
}

/// Fit `image` to the options' size limits and encode it as PNG.
///
/// `quality` in `options` is ignored.
#[wasm_bindgen]
pub fn compress_png(image: &JsPixelGrid, options: JsValue) -> Result<Vec<u8>, JsValue> {
    let opts = options_from_js(options)?;
    let mut out = Vec::new();
    compress::compress_png(image.grid(), &mut out, &opts).map_err(to_js_error)?;
    Ok(out)
}

/// JPEG-encode `image` at the highest quality whose output is at most
/// `target_bytes`, after fitting it to the options' size limits.
///
/// If even quality 10 is too large, that encoding is returned anyway; compare
/// `byteLength` with the target to detect it.
#[wasm_bindgen]
pub fn compress_to_size(
    image: &JsPixelGrid,
    target_bytes: usize,
    options: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let opts = options_from_js(options)?;
    compress::compress_to_size_with_options(image.grid(), target_bytes, &opts).map_err(to_js_error)
}
