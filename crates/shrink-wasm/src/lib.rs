//! Shrink WASM - WebAssembly bindings for Shrink
//!
//! This crate exposes the shrink-core functionality to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for pixel grids and options
//! - `decode` - Image decoding bindings
//! - `compress` - Fit, encode and size-targeted compression bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, compress_to_size } from '@shrink/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const grid = decode_image(bytes);
//! const jpeg = compress_to_size(grid, 200 * 1024, { maxWidth: 1600 });
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod decode;
mod types;

// Re-export public types
pub use compress::{compress_jpeg, compress_png, compress_to_size};
pub use decode::decode_image;
pub use types::JsPixelGrid;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Named quality levels: `{ low: 30, medium: 60, high: 80, best: 95 }`.
#[wasm_bindgen]
pub fn quality_presets() -> Result<JsValue, JsValue> {
    use shrink_core::Quality;

    #[derive(serde::Serialize)]
    struct Presets {
        low: u8,
        medium: u8,
        high: u8,
        best: u8,
    }

    let presets = Presets {
        low: Quality::Low.value(),
        medium: Quality::Medium.value(),
        high: Quality::High.value(),
        best: Quality::Best.value(),
    };
    serde_wasm_bindgen::to_value(&presets).map_err(|e| JsValue::from_str(&e.to_string()))
}
