//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@shrink/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const grid = decode_image(bytes);
//! console.log(`Decoded ${grid.width}x${grid.height}, ${grid.channels} channels`);
//! ```

use crate::types::JsPixelGrid;
use shrink_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG image from bytes.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the data is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelGrid, JsValue> {
    decode::decode_image(bytes)
        .map(JsPixelGrid::from_grid)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
