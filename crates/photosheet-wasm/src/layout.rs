//! Layout WASM bindings.
//!
//! Layout configs and grid results cross the JS boundary as plain objects
//! via serde, so the front end keeps its state in ordinary JavaScript and
//! asks the engine for derivations.

use photosheet_core::layout::{
    self, CellSpec, LayoutConfig, PaperProfile,
};
use photosheet_core::units::{dpcm_for_dpi, DPCM_96};
use wasm_bindgen::prelude::*;

fn parse_config(config: JsValue) -> Result<LayoutConfig, JsValue> {
    serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The selectable paper profiles, in display order.
#[wasm_bindgen]
pub fn paper_profiles() -> Result<JsValue, JsValue> {
    to_js(&PaperProfile::catalog())
}

/// Compute the grid for a layout config at the on-screen density.
///
/// Returns `{ cols, rows, capacity, rendered }`. `capacity === 0` means
/// the sheet is unrenderable and the UI must show the "too large to fit"
/// diagnostic instead of a grid.
#[wasm_bindgen]
pub fn compute_grid(config: JsValue) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    to_js(&layout::compute_grid(&config, DPCM_96))
}

/// Pixel origins of the rendered cells in row-major order at the given
/// print DPI. Returns a flat `[x0, y0, x1, y1, ...]` array.
#[wasm_bindgen]
pub fn cell_positions(config: JsValue, dpi: f64) -> Result<Vec<f64>, JsValue> {
    let config = parse_config(config)?;
    let dpcm = dpcm_for_dpi(dpi);
    let grid = layout::compute_grid(&config, DPCM_96);
    let positions = layout::cell_positions(&config, &grid, dpcm);
    Ok(positions.into_iter().flat_map(|(x, y)| [x, y]).collect())
}

/// The largest cell that fits the paper with the current margin,
/// expressed in the cell's unit. Returns a `CellSpec` object.
#[wasm_bindgen]
pub fn maximize_cell(config: JsValue) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    let cell: CellSpec = layout::maximize_cell(&config);
    to_js(&cell)
}

/// The `@page` size value for printing a paper profile, e.g.
/// `"21cm 29.7cm"`. Inject as
/// `@page { size: <value>; margin: 0; }` so the print driver adds no
/// second margin.
#[wasm_bindgen]
pub fn page_size_directive(paper: JsValue) -> Result<String, JsValue> {
    let paper: PaperProfile =
        serde_wasm_bindgen::from_value(paper).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(paper.page_size_directive())
}
