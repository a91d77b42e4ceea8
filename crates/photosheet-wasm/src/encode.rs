//! Export encoding WASM bindings.
//!
//! PNG for lossless alpha, JPEG for flattened sheets, and the fallback
//! path: when the requested encode fails, save a PNG of the raster that
//! is already on screen rather than produce nothing.
//!
//! # Example
//!
//! ```typescript
//! import { export_sheet, export_format_extension } from '@photosheet/wasm';
//!
//! const bytes = export_sheet(sheetRaster, "png", 100);
//! const blob = new Blob([bytes], { type: "image/png" });
//! saveAs(blob, `passport_sheet.${export_format_extension("png")}`);
//! ```

use crate::types::JsRaster;
use photosheet_core::encode::{self, ExportFormat};
use wasm_bindgen::prelude::*;

fn parse_format(format: &str, quality: u8) -> ExportFormat {
    match format {
        "jpeg" | "jpg" => ExportFormat::Jpeg { quality },
        _ => ExportFormat::Png,
    }
}

/// Encode RGBA pixel data to PNG bytes.
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode RGBA pixel data to JPEG bytes, flattening alpha over white.
#[wasm_bindgen]
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a sheet raster in the requested format (`"png"`, `"jpeg"`).
#[wasm_bindgen]
pub fn export_sheet(sheet: &JsRaster, format: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::export_sheet(&sheet.to_raster(), parse_format(format, quality))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode the sheet, falling back to a PNG of the preview raster when the
/// requested encode fails. Sniff the magic bytes (or check
/// `export_format_extension`) to pick the download name.
#[wasm_bindgen]
pub fn export_sheet_with_fallback(
    sheet: &JsRaster,
    preview: Option<JsRaster>,
    format: &str,
    quality: u8,
) -> Result<Vec<u8>, JsValue> {
    let preview = preview.map(|p| p.to_raster());
    encode::export_with_fallback(
        &sheet.to_raster(),
        preview.as_ref(),
        parse_format(format, quality),
    )
    .map(|(bytes, _)| bytes)
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// File extension for a format string (`"png"` → `"png"`, `"jpeg"` → `"jpg"`).
#[wasm_bindgen]
pub fn export_format_extension(format: &str) -> String {
    parse_format(format, 90).extension().to_string()
}
