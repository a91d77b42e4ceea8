//! Image decoding bindings (upload decode, resize).
//!
//! Uploads come in as raw bytes from a file picker or drag-drop; these
//! bindings hand back RGBA rasters ready for the crop step.

use crate::types::{filter_from_u8, JsRaster};
use photosheet_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded PNG/JPEG/WebP image, applying EXIF orientation.
///
/// # Example (TypeScript)
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    decode::decode_upload(bytes)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode an uploaded image without EXIF orientation correction.
///
/// Use for images the host already oriented (e.g. a canvas re-encode of
/// the background-removed result).
#[wasm_bindgen]
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    decode::decode_upload_no_orientation(bytes)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to exact dimensions.
///
/// `filter`: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3.
#[wasm_bindgen]
pub fn resize(image: &JsRaster, width: u32, height: u32, filter: u8) -> Result<JsRaster, JsValue> {
    decode::resize(&image.to_raster(), width, height, filter_from_u8(filter))
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to fit within a maximum edge length, preserving aspect
/// ratio. Already-smaller images come back unchanged.
#[wasm_bindgen]
pub fn resize_to_fit(image: &JsRaster, max_edge: u32, filter: u8) -> Result<JsRaster, JsValue> {
    decode::resize_to_fit(&image.to_raster(), max_edge, filter_from_u8(filter))
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
