//! Frame catalog WASM bindings.
//!
//! The catalog is generated on the Rust side so ids stay deterministic;
//! the picker UI renders it from the serialized descriptors. Overlay art
//! is referenced by asset key — the host fetches and rasterizes the art,
//! then passes it into the cell render.

use photosheet_core::frames;
use wasm_bindgen::prelude::*;

/// The full frame catalog as an array of descriptors:
/// `{ id, name, style: { Plain | Bordered {...} | Padded {...} | Overlay {...} } }`.
#[wasm_bindgen]
pub fn frame_catalog() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&frames::catalog()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// One catalog entry by id. Unknown ids resolve to the `none` sentinel.
#[wasm_bindgen]
pub fn frame_by_id(id: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&frames::by_id(id)).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The overlay asset key for a frame id, or undefined when the frame has
/// no art (the picker uses this to know what to prefetch).
#[wasm_bindgen]
pub fn frame_overlay_asset(id: &str) -> Option<String> {
    frames::by_id(id).overlay_asset().map(str::to_string)
}

/// Whether the manual border controls apply under this frame selection.
#[wasm_bindgen]
pub fn manual_border_active(id: &str) -> bool {
    frames::by_id(id).id == frames::NONE_FRAME_ID
}
