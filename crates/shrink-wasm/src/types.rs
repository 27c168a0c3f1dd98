//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Shrink types,
//! handling the conversion between Rust and JavaScript data representations.

use shrink_core::{ColorLayout, CompressOptions, GridError, PixelGrid};
use wasm_bindgen::prelude::*;

/// A pixel grid wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsPixelGrid {
    inner: PixelGrid,
}

#[wasm_bindgen]
impl JsPixelGrid {
    /// Create a grid from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - Row-major pixel data, 3 (RGB) or 4 (RGBA) bytes per pixel
    ///
    /// The layout is inferred from the buffer length.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelGrid, JsValue> {
        Self::from_parts(width, height, pixels).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Bytes per pixel: 3 for RGB, 4 for RGBA
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> usize {
        self.inner.layout().channels()
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }
}

impl JsPixelGrid {
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, GridError> {
        let area = (width as usize) * (height as usize);
        let layout = if area > 0 && pixels.len() == area * 4 {
            ColorLayout::Rgba8
        } else {
            ColorLayout::Rgb8
        };
        PixelGrid::from_raw(width, height, layout, pixels).map(Self::from_grid)
    }

    pub(crate) fn from_grid(inner: PixelGrid) -> Self {
        Self { inner }
    }

    pub(crate) fn grid(&self) -> &PixelGrid {
        &self.inner
    }
}

/// Read compression options from a plain JS object.
///
/// `undefined` and `null` give the defaults; missing fields take their
/// default values, e.g. `{ quality: 70, maxWidth: 1920 }`.
pub(crate) fn options_from_js(options: JsValue) -> Result<CompressOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(CompressOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid compression options: {}", e)))
}
