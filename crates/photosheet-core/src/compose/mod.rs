//! Cell and sheet compositing.
//!
//! A cell is built as an explicit layer pipeline — frame base fill, then
//! background, then the adjusted subject, then the frame decoration — each
//! layer resolved to pixels and alpha-composited in order. There is no
//! shared drawing-context state: what you pass in is exactly what gets
//! drawn, which makes the compositing order a testable contract.
//!
//! The sheet render tiles one cell raster across the grid positions; every
//! cell is identical, so the cell is rendered once and blitted. All pixel
//! quantities derive from physical dimensions at the pass's density, so an
//! export pass at 300 DPI is a true re-render, not an upscale.

mod border;

pub use border::{draw_border_band, draw_stroke};

use thiserror::Error;

use crate::adjustments::apply_adjustments;
use crate::decode::{resize, DecodeError, FilterType, Raster};
use crate::frames::FrameStyle;
use crate::layout::{cell_positions, GridResult, LayoutConfig};
use crate::{AdjustmentSettings, Rgba};

/// Errors surfaced by the compositor.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Zero cells fit the paper; the sheet shows a diagnostic instead.
    #[error("Photos are too large or margins too big to fit on configured paper")]
    DoesNotFit,

    /// Cell or sheet dimensions degenerate to zero pixels.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// An underlying pixel operation failed.
    #[error("Rasterization failed: {0}")]
    Raster(String),
}

impl From<DecodeError> for ComposeError {
    fn from(err: DecodeError) -> Self {
        ComposeError::Raster(err.to_string())
    }
}

/// The manual border stroked around frameless cells.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ManualBorder {
    pub thickness_px: f32,
    pub color: Rgba,
}

impl Default for ManualBorder {
    fn default() -> Self {
        Self {
            thickness_px: 2.0,
            color: Rgba::BLACK,
        }
    }
}

/// What sits behind the subject inside the cell's content box.
#[derive(Debug, Clone, Copy)]
pub enum CellBackground<'a> {
    /// Nothing; the white sheet shows through transparent subject areas.
    None,
    /// A solid fill.
    Solid(Rgba),
    /// An image stretched to the content box.
    Image(&'a Raster),
}

/// Everything besides the subject that shapes a cell's pixels.
pub struct CellPaint<'a> {
    pub frame: &'a FrameStyle,
    /// Resolved overlay art for `FrameStyle::Overlay`. None means the
    /// asset failed to load; the overlay layer is skipped.
    pub overlay_art: Option<&'a Raster>,
    pub background: CellBackground<'a>,
    pub adjustments: &'a AdjustmentSettings,
    /// Drawn only when the frame is `Plain`.
    pub manual_border: Option<ManualBorder>,
}

/// Source-over alpha compositing of one pixel.
#[inline]
fn blend(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as f32 / 255.0;
    if sa >= 1.0 {
        return src;
    }
    if sa <= 0.0 {
        return dst;
    }
    let da = dst[3] as f32 / 255.0;
    let oa = sa + da * (1.0 - sa);
    if oa <= 0.0 {
        return [0, 0, 0, 0];
    }
    let mix = |s: u8, d: u8| {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        (((s * sa + d * da * (1.0 - sa)) / oa) * 255.0).round() as u8
    };
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (oa * 255.0).round() as u8,
    ]
}

/// Composite `src` over `target` with its top-left corner at (x, y).
fn composite_at(target: &mut Raster, src: &Raster, x: i64, y: i64) {
    for sy in 0..src.height {
        let ty = y + sy as i64;
        if ty < 0 || ty >= target.height as i64 {
            continue;
        }
        for sx in 0..src.width {
            let tx = x + sx as i64;
            if tx < 0 || tx >= target.width as i64 {
                continue;
            }
            let over = src.get(sx, sy);
            let under = target.get(tx as u32, ty as u32);
            target.put(tx as u32, ty as u32, blend(under, over));
        }
    }
}

/// Composite a solid color over a rectangle.
fn composite_rect(target: &mut Raster, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
    for py in y..(y + h).min(target.height) {
        for px in x..(x + w).min(target.width) {
            let under = target.get(px, py);
            target.put(px, py, blend(under, color.0));
        }
    }
}

/// Scale-to-cover then center-crop `src` into a `w × h` buffer.
fn cover_fit(src: &Raster, w: u32, h: u32) -> Result<Raster, ComposeError> {
    if src.is_empty() || w == 0 || h == 0 {
        return Err(ComposeError::InvalidGeometry(
            "cover fit of empty raster".to_string(),
        ));
    }
    let scale = (w as f64 / src.width as f64).max(h as f64 / src.height as f64);
    let rw = ((src.width as f64 * scale).ceil() as u32).max(w);
    let rh = ((src.height as f64 * scale).ceil() as u32).max(h);
    let resized = resize(src, rw, rh, FilterType::Lanczos3)?;

    let ox = (rw - w) / 2;
    let oy = (rh - h) / 2;
    let mut out = Raster::transparent(w, h);
    for y in 0..h {
        for x in 0..w {
            out.put(x, y, resized.get(ox + x, oy + y));
        }
    }
    Ok(out)
}

/// The content box (x, y, w, h) left inside a cell by the frame's insets,
/// with pixel paddings scaled by the pass's DPI ratio.
fn content_box(frame: &FrameStyle, cell_w: u32, cell_h: u32, scale: f32) -> (u32, u32, u32, u32) {
    let (top, right, bottom, left) = match frame {
        FrameStyle::Plain => (0.0, 0.0, 0.0, 0.0),
        FrameStyle::Bordered { thickness_px, .. } => {
            let t = thickness_px * scale;
            (t, t, t, t)
        }
        FrameStyle::Padded { padding, .. } => {
            let p = padding.scaled(scale);
            (p.top, p.right, p.bottom, p.left)
        }
        FrameStyle::Overlay { inset, .. } => (
            inset.top * cell_h as f32,
            inset.right * cell_w as f32,
            inset.bottom * cell_h as f32,
            inset.left * cell_w as f32,
        ),
    };

    let x = (left.round() as u32).min(cell_w.saturating_sub(1));
    let y = (top.round() as u32).min(cell_h.saturating_sub(1));
    let w = (cell_w as i64 - left.round() as i64 - right.round() as i64).max(1) as u32;
    let h = (cell_h as i64 - top.round() as i64 - bottom.round() as i64).max(1) as u32;
    (x, y, w.min(cell_w - x), h.min(cell_h - y))
}

/// Render one cell of the sheet.
///
/// Layer order: frame base fill, background, adjusted subject
/// (cover-fitted into the content box), frame decoration. `scale` is the
/// pass's `dpcm / DPCM_96` ratio and rescales every pixel-denominated
/// thickness and padding.
pub fn render_cell(
    cropped: &Raster,
    paint: &CellPaint,
    cell_width: u32,
    cell_height: u32,
    scale: f32,
) -> Result<Raster, ComposeError> {
    if cell_width == 0 || cell_height == 0 {
        return Err(ComposeError::InvalidGeometry(
            "cell dimensions must be positive".to_string(),
        ));
    }
    if cropped.is_empty() {
        return Err(ComposeError::InvalidGeometry(
            "cropped image is empty".to_string(),
        ));
    }

    let mut cell = Raster::transparent(cell_width, cell_height);

    // 1. Frame base fill
    if let FrameStyle::Padded { color, .. } = paint.frame {
        composite_rect(&mut cell, 0, 0, cell_width, cell_height, *color);
    }

    let (cx, cy, cw, ch) = content_box(paint.frame, cell_width, cell_height, scale);

    // 2. Background under the subject
    match paint.background {
        CellBackground::None => {}
        CellBackground::Solid(color) => composite_rect(&mut cell, cx, cy, cw, ch, color),
        CellBackground::Image(img) => {
            if !img.is_empty() {
                let stretched = resize(img, cw, ch, FilterType::Bilinear)?;
                composite_at(&mut cell, &stretched, cx as i64, cy as i64);
            }
        }
    }

    // 3. Adjusted subject, cover-fitted
    let mut subject = cover_fit(cropped, cw, ch)?;
    apply_adjustments(&mut subject.pixels, paint.adjustments);
    composite_at(&mut cell, &subject, cx as i64, cy as i64);

    // 4. Frame decoration
    match paint.frame {
        FrameStyle::Plain => {
            if let Some(border) = paint.manual_border {
                if border.thickness_px > 0.0 {
                    draw_stroke(&mut cell, border.color, border.thickness_px * scale);
                }
            }
        }
        FrameStyle::Bordered {
            style,
            color,
            thickness_px,
        } => {
            draw_border_band(&mut cell, *style, *color, thickness_px * scale);
        }
        FrameStyle::Padded { outline, .. } => {
            if let Some(outline) = outline {
                draw_stroke(&mut cell, outline.color, outline.thickness_px * scale);
            }
        }
        FrameStyle::Overlay { .. } => {
            // A missing overlay skips the layer; the cell still renders.
            if let Some(art) = paint.overlay_art {
                if !art.is_empty() {
                    let stretched =
                        resize(art, cell_width, cell_height, FilterType::Lanczos3)?;
                    composite_at(&mut cell, &stretched, 0, 0);
                }
            }
        }
    }

    Ok(cell)
}

/// Render the full sheet at the given density.
///
/// Fails fast with [`ComposeError::DoesNotFit`] when the grid has zero
/// capacity. Otherwise the cell is rendered once through `cell_fn` and
/// blitted into each rendered position, row-major, on a white sheet.
pub fn render_sheet<F>(
    config: &LayoutConfig,
    grid: &GridResult,
    dpcm: f64,
    cell_fn: F,
) -> Result<Raster, ComposeError>
where
    F: FnOnce(u32, u32) -> Result<Raster, ComposeError>,
{
    if grid.is_unrenderable() {
        return Err(ComposeError::DoesNotFit);
    }

    let sheet_w = config.paper.width.to_pixels(dpcm).round() as u32;
    let sheet_h = config.paper.height.to_pixels(dpcm).round() as u32;
    if sheet_w == 0 || sheet_h == 0 {
        return Err(ComposeError::InvalidGeometry(
            "paper dimensions must be positive".to_string(),
        ));
    }

    let cell_w = (config.cell.width.to_pixels(dpcm).round() as u32).max(1);
    let cell_h = (config.cell.height.to_pixels(dpcm).round() as u32).max(1);

    let cell = cell_fn(cell_w, cell_h)?;

    let mut sheet = Raster::filled(sheet_w, sheet_h, Rgba::WHITE.0);
    for (x, y) in cell_positions(config, grid, dpcm) {
        composite_at(&mut sheet, &cell, x.round() as i64, y.round() as i64);
    }

    Ok(sheet)
}
