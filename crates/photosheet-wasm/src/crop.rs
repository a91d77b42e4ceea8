//! Crop WASM bindings.
//!
//! The crop UI (pan/zoom window or free-transform box) lives in
//! JavaScript; it resolves to a selection rectangle in source pixels and
//! hands it here for rasterization at the cell's export resolution.

use crate::types::JsRaster;
use photosheet_core::crop::{self, CropSelection};
use photosheet_core::units::PhysicalDimension;
use wasm_bindgen::prelude::*;

/// Rasterize a selection into an `out_width × out_height` RGBA buffer.
///
/// The selection is in source pixels and may extend past the source
/// edges; uncovered regions come back transparent. Resampling is
/// Lanczos3, and source alpha is preserved.
///
/// # Example (TypeScript)
/// ```typescript
/// // croppedAreaPixels from the crop widget
/// const cropped = confirm_crop(
///     source,
///     area.x, area.y, area.width, area.height,
///     outWidth, outHeight,
/// );
/// ```
#[wasm_bindgen]
pub fn confirm_crop(
    source: &JsRaster,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    out_width: u32,
    out_height: u32,
) -> Result<JsRaster, JsValue> {
    let selection = CropSelection {
        x,
        y,
        width,
        height,
    };
    crop::confirm_crop(&source.to_raster(), selection, out_width, out_height)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Pixel resolution a crop should be rasterized at for a physical cell
/// size at the given print DPI. Returns `[width, height]`.
///
/// `unit` is `"cm"` or `"in"` (anything else is read as cm).
#[wasm_bindgen]
pub fn crop_output_resolution(
    cell_width: f64,
    cell_height: f64,
    unit: &str,
    dpi: f64,
) -> Vec<u32> {
    let (w, h) = if unit == "in" {
        (
            PhysicalDimension::inches(cell_width),
            PhysicalDimension::inches(cell_height),
        )
    } else {
        (
            PhysicalDimension::cm(cell_width),
            PhysicalDimension::cm(cell_height),
        )
    };
    let (out_w, out_h) = crop::output_resolution(w, h, dpi);
    vec![out_w, out_h]
}

#[cfg(test)]
mod tests {
    use super::*;
    use photosheet_core::decode::Raster;

    #[test]
    fn test_confirm_crop_through_core() {
        let src = JsRaster::from_raster(Raster::filled(50, 50, [7, 7, 7, 255]));
        let sel = CropSelection {
            x: 10.0,
            y: 10.0,
            width: 20.0,
            height: 20.0,
        };
        let out = crop::confirm_crop(&src.to_raster(), sel, 40, 40).unwrap();
        assert_eq!(out.width, 40);
        assert_eq!(out.height, 40);
        assert_eq!(out.get(20, 20), [7, 7, 7, 255]);
    }

    #[test]
    fn test_crop_output_resolution_cm() {
        assert_eq!(crop_output_resolution(3.5, 4.5, "cm", 300.0), vec![413, 531]);
    }

    #[test]
    fn test_crop_output_resolution_inches() {
        assert_eq!(crop_output_resolution(2.0, 2.0, "in", 300.0), vec![600, 600]);
    }
}
