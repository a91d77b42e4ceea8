//! Photosheet WASM - WebAssembly bindings for the Photosheet engine
//!
//! This crate exposes the photosheet-core layout and compositing
//! functionality to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Upload decoding and resize bindings
//! - `crop` - Crop rasterization bindings
//! - `adjustments` - Brightness/contrast/saturation bindings
//! - `layout` - Grid layout and paper catalog bindings
//! - `frames` - Frame catalog bindings
//! - `compose` - Cell and sheet render bindings
//! - `encode` - Export encoding bindings (PNG/JPEG + fallback)
//! - `preview` - Preview scale bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, compute_grid } from '@photosheet/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const grid = compute_grid(layoutConfig);
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod compose;
mod crop;
mod decode;
mod encode;
mod frames;
mod layout;
mod preview;
mod types;

// Re-export public types
pub use adjustments::{apply_adjustments, AdjustmentSettings};
pub use compose::{render_cell, render_sheet};
pub use crop::{confirm_crop, crop_output_resolution};
pub use decode::{decode_image, decode_image_no_orientation, resize, resize_to_fit};
pub use encode::{
    encode_jpeg, encode_png, export_format_extension, export_sheet, export_sheet_with_fallback,
};
pub use frames::{frame_by_id, frame_catalog, frame_overlay_asset, manual_border_active};
pub use layout::{cell_positions, compute_grid, maximize_cell, page_size_directive, paper_profiles};
pub use preview::{compute_preview_scale, compute_preview_scale_in_container};
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
