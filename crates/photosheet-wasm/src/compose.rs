//! Compositing WASM bindings.
//!
//! The preview paints individual cells (one render, tiled by the DOM
//! grid); the export paths render the whole sheet at the chosen print DPI.
//! Both share one options object so the preview and the export are
//! guaranteed to describe the same cell.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::types::JsRaster;
use photosheet_core::compose::{self, CellBackground, CellPaint, ManualBorder};
use photosheet_core::frames;
use photosheet_core::layout::{self, LayoutConfig};
use photosheet_core::units::dpcm_for_dpi;
use photosheet_core::{AdjustmentSettings, Rgba};

/// Cell styling options passed from JavaScript as a plain object. Every
/// field is optional; absent fields take the session defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CellRenderOptions {
    pub frame_id: String,
    /// Hex color behind the subject, e.g. `"#E6E6FA"`. Absent = none.
    pub background_color: Option<String>,
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    /// Manual border stroke, used only under the `none` frame.
    pub border_width: f32,
    pub border_color: String,
}

impl Default for CellRenderOptions {
    fn default() -> Self {
        Self {
            frame_id: frames::NONE_FRAME_ID.to_string(),
            background_color: None,
            brightness: 100.0,
            contrast: 100.0,
            saturation: 100.0,
            border_width: 2.0,
            border_color: "#000000".to_string(),
        }
    }
}

impl CellRenderOptions {
    fn adjustments(&self) -> AdjustmentSettings {
        AdjustmentSettings {
            brightness: self.brightness.clamp(0.0, 200.0),
            contrast: self.contrast.clamp(0.0, 200.0),
            saturation: self.saturation.clamp(0.0, 200.0),
        }
    }

    fn manual_border(&self) -> Option<ManualBorder> {
        if self.border_width > 0.0 {
            Some(ManualBorder {
                thickness_px: self.border_width,
                color: Rgba::from_hex(&self.border_color).unwrap_or(Rgba::BLACK),
            })
        } else {
            None
        }
    }

    fn background_color(&self) -> Option<Rgba> {
        self.background_color.as_deref().and_then(Rgba::from_hex)
    }
}

fn parse_options(options: JsValue) -> Result<CellRenderOptions, JsValue> {
    serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_config(config: JsValue) -> Result<LayoutConfig, JsValue> {
    serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn run_cell_render(
    cropped: &JsRaster,
    overlay_art: Option<&JsRaster>,
    background_image: Option<&JsRaster>,
    options: &CellRenderOptions,
    cell_width: u32,
    cell_height: u32,
    scale: f32,
) -> Result<photosheet_core::Raster, JsValue> {
    let frame = frames::by_id(&options.frame_id);
    let adjustments = options.adjustments();
    let overlay = overlay_art.map(|a| a.to_raster());
    let background = background_image.map(|b| b.to_raster());

    let paint = CellPaint {
        frame: &frame.style,
        overlay_art: overlay.as_ref(),
        background: match (&background, options.background_color()) {
            (Some(img), _) => CellBackground::Image(img),
            (None, Some(color)) => CellBackground::Solid(color),
            (None, None) => CellBackground::None,
        },
        adjustments: &adjustments,
        manual_border: options.manual_border(),
    };

    compose::render_cell(&cropped.to_raster(), &paint, cell_width, cell_height, scale)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render one cell at an explicit pixel size.
///
/// `dpi` scales stroke thicknesses and paddings; pass 96 for the
/// on-screen preview.
#[wasm_bindgen]
pub fn render_cell(
    cropped: &JsRaster,
    overlay_art: Option<JsRaster>,
    background_image: Option<JsRaster>,
    options: JsValue,
    cell_width: u32,
    cell_height: u32,
    dpi: f64,
) -> Result<JsRaster, JsValue> {
    let options = parse_options(options)?;
    let scale = (dpi / 96.0) as f32;
    run_cell_render(
        cropped,
        overlay_art.as_ref(),
        background_image.as_ref(),
        &options,
        cell_width,
        cell_height,
        scale,
    )
    .map(JsRaster::from_raster)
}

/// Render the full sheet at the given print DPI.
///
/// This is a true re-render: every pixel quantity is recomputed at the
/// export density, not upscaled from the preview. Fails with the
/// "too large to fit" message when the grid capacity is zero.
#[wasm_bindgen]
pub fn render_sheet(
    cropped: &JsRaster,
    overlay_art: Option<JsRaster>,
    background_image: Option<JsRaster>,
    options: JsValue,
    config: JsValue,
    dpi: f64,
) -> Result<JsRaster, JsValue> {
    let options = parse_options(options)?;
    let config = parse_config(config)?;

    // The grid is derived from physical dimensions, so compute it at the
    // reference density and reuse it for the export pass.
    let grid = layout::compute_grid(&config, photosheet_core::DPCM_96);
    let dpcm = dpcm_for_dpi(dpi);
    let scale = (dpi / 96.0) as f32;

    let sheet = compose::render_sheet(&config, &grid, dpcm, |cell_w, cell_h| {
        run_cell_render(
            cropped,
            overlay_art.as_ref(),
            background_image.as_ref(),
            &options,
            cell_w,
            cell_h,
            scale,
        )
        .map_err(|e| {
            photosheet_core::ComposeError::Raster(
                e.as_string().unwrap_or_else(|| "cell render failed".to_string()),
            )
        })
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(JsRaster::from_raster(sheet))
}
