//! Preview scaling WASM bindings.
//!
//! The host calls these from its ResizeObserver callback (and once after
//! the first layout settles), not on a timer. The math itself is pure.

use photosheet_core::preview::{self, PreviewScaler};
use wasm_bindgen::prelude::*;

/// Uniform scale fitting a sheet into a viewport, capped at 1 — a sheet
/// smaller than the viewport is never upscaled.
#[wasm_bindgen]
pub fn compute_preview_scale(
    viewport_width: f64,
    viewport_height: f64,
    sheet_width: f64,
    sheet_height: f64,
) -> f64 {
    preview::compute_scale(viewport_width, viewport_height, sheet_width, sheet_height)
}

/// Like [`compute_preview_scale`], but insets the container by the
/// standard preview chrome padding first.
#[wasm_bindgen]
pub fn compute_preview_scale_in_container(
    container_width: f64,
    container_height: f64,
    sheet_width: f64,
    sheet_height: f64,
) -> f64 {
    PreviewScaler::default().scale(container_width, container_height, sheet_width, sheet_height)
}
