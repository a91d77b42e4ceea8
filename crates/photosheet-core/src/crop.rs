//! Crop selection and rasterization.
//!
//! Two interaction modes resolve to the same `CropSelection` rectangle in
//! source pixels:
//!
//! - [`AspectCrop`] — a stationary crop window with the cell's aspect
//!   ratio; the source image pans and zooms underneath it.
//! - [`FreeCrop`] — a movable, resizable box over the full image with
//!   independently draggable edges and corners, no aspect lock.
//!
//! [`confirm_crop`] rasterizes whatever the selection covers into a fixed
//! output buffer at the cell's export resolution. The selection may hang
//! over the source edges (free-move mode allows it); those areas fill with
//! transparent pixels, and source alpha always survives.

use serde::{Deserialize, Serialize};

use crate::decode::{resize, DecodeError, FilterType, Raster};
use crate::units::{dpcm_for_dpi, PhysicalDimension};

/// A rectangular selection in source-image pixels.
///
/// Not necessarily contained in the source: out-of-bounds regions
/// rasterize as transparency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropSelection {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Pixel resolution of the crop output for a given cell size and print DPI.
pub fn output_resolution(width: PhysicalDimension, height: PhysicalDimension, dpi: f64) -> (u32, u32) {
    let dpcm = dpcm_for_dpi(dpi);
    (
        width.to_pixels(dpcm).round().max(1.0) as u32,
        height.to_pixels(dpcm).round().max(1.0) as u32,
    )
}

/// Aspect-locked crop: a fixed window, the image moves underneath.
///
/// `offset_x`/`offset_y` shift the selection center away from the source
/// center, in source pixels. Zoom shrinks the selection (the image appears
/// larger under the window).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectCrop {
    /// Crop window width/height ratio (the cell's aspect).
    pub aspect: f64,
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// When true the selection is kept inside the source bounds.
    pub restrict_position: bool,
}

impl AspectCrop {
    /// The passport preset: zoom 1–3, selection pinned inside the source.
    pub fn locked(aspect: f64) -> Self {
        Self {
            aspect,
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            min_zoom: 1.0,
            max_zoom: 3.0,
            restrict_position: true,
        }
    }

    /// The album preset: zoom 0.2–5, free movement past the source edges.
    pub fn free_move(aspect: f64) -> Self {
        Self {
            aspect,
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            min_zoom: 0.2,
            max_zoom: 5.0,
            restrict_position: false,
        }
    }

    /// Set zoom, clamped to the mode's range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Pan the selection center by a delta in source pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Resolve the current pan/zoom into a source-pixel selection.
    ///
    /// At zoom 1 the selection is the largest rect of the window's aspect
    /// that fits the source, centered. Zoom divides its size; the offsets
    /// then shift it, clamped to the source when the mode restricts
    /// position.
    pub fn selection(&self, src_width: u32, src_height: u32) -> CropSelection {
        let src_w = src_width as f64;
        let src_h = src_height as f64;

        let base_w = src_w.min(src_h * self.aspect);
        let base_h = base_w / self.aspect;

        let w = base_w / self.zoom;
        let h = base_h / self.zoom;

        let mut x = (src_w - w) / 2.0 + self.offset_x;
        let mut y = (src_h - h) / 2.0 + self.offset_y;

        if self.restrict_position {
            // When the selection is larger than the source (zoom < 1),
            // clamping degenerates to centering.
            if w <= src_w {
                x = x.clamp(0.0, src_w - w);
            } else {
                x = (src_w - w) / 2.0;
            }
            if h <= src_h {
                y = y.clamp(0.0, src_h - h);
            } else {
                y = (src_h - h) / 2.0;
            }
        }

        CropSelection {
            x,
            y,
            width: w,
            height: h,
        }
    }
}

/// An edge of the free-transform box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// A corner of the free-transform box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Free-transform crop: a box over the image with draggable edges and
/// corners and no aspect lock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreeCrop {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Smallest box dimension a drag can shrink to, in source px.
    pub min_size: f64,
}

impl FreeCrop {
    /// Start centered over the middle half of the source.
    pub fn centered(src_width: u32, src_height: u32) -> Self {
        let w = src_width as f64 / 2.0;
        let h = src_height as f64 / 2.0;
        Self {
            x: w / 2.0,
            y: h / 2.0,
            width: w,
            height: h,
            min_size: 16.0,
        }
    }

    /// Move the whole box.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Drag a single edge by a delta along its axis.
    pub fn drag_edge(&mut self, edge: Edge, delta: f64) {
        match edge {
            Edge::Left => {
                let delta = delta.min(self.width - self.min_size);
                self.x += delta;
                self.width -= delta;
            }
            Edge::Right => {
                self.width = (self.width + delta).max(self.min_size);
            }
            Edge::Top => {
                let delta = delta.min(self.height - self.min_size);
                self.y += delta;
                self.height -= delta;
            }
            Edge::Bottom => {
                self.height = (self.height + delta).max(self.min_size);
            }
        }
    }

    /// Drag a corner; both adjacent edges follow.
    pub fn drag_corner(&mut self, corner: Corner, dx: f64, dy: f64) {
        let (h_edge, v_edge) = match corner {
            Corner::TopLeft => (Edge::Left, Edge::Top),
            Corner::TopRight => (Edge::Right, Edge::Top),
            Corner::BottomRight => (Edge::Right, Edge::Bottom),
            Corner::BottomLeft => (Edge::Left, Edge::Bottom),
        };
        self.drag_edge(h_edge, dx);
        self.drag_edge(v_edge, dy);
    }

    /// Pull the box back inside the source bounds.
    pub fn clamp_to(&mut self, src_width: u32, src_height: u32) {
        let src_w = src_width as f64;
        let src_h = src_height as f64;
        self.width = self.width.min(src_w).max(self.min_size.min(src_w));
        self.height = self.height.min(src_h).max(self.min_size.min(src_h));
        self.x = self.x.clamp(0.0, (src_w - self.width).max(0.0));
        self.y = self.y.clamp(0.0, (src_h - self.height).max(0.0));
    }

    pub fn selection(&self) -> CropSelection {
        CropSelection {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Rasterize the selection into an `out_width × out_height` RGBA buffer.
///
/// The selection area is lifted out of the source (transparent where it
/// hangs past the edges) and resampled with Lanczos3 to the requested
/// output resolution.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` when either output dimension is
/// zero or the selection is degenerate.
pub fn confirm_crop(
    source: &Raster,
    selection: CropSelection,
    out_width: u32,
    out_height: u32,
) -> Result<Raster, DecodeError> {
    if out_width == 0 || out_height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    let sel_x = selection.x.round() as i64;
    let sel_y = selection.y.round() as i64;
    let sel_w = selection.width.round().max(1.0) as i64;
    let sel_h = selection.height.round().max(1.0) as i64;

    // Lift the selection into its own buffer; anything outside the source
    // stays transparent.
    let mut lifted = Raster::transparent(sel_w as u32, sel_h as u32);

    let copy_x0 = sel_x.max(0);
    let copy_y0 = sel_y.max(0);
    let copy_x1 = (sel_x + sel_w).min(source.width as i64);
    let copy_y1 = (sel_y + sel_h).min(source.height as i64);

    for src_y in copy_y0..copy_y1 {
        for src_x in copy_x0..copy_x1 {
            let px = source.get(src_x as u32, src_y as u32);
            lifted.put((src_x - sel_x) as u32, (src_y - sel_y) as u32, px);
        }
    }

    resize(&lifted, out_width, out_height, FilterType::Lanczos3)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a restricted aspect crop always stays inside the source.
        #[test]
        fn prop_restricted_selection_in_bounds(
            (src_w, src_h) in (50u32..500, 50u32..500),
            aspect in 0.3f64..3.0,
            zoom in 1.0f64..3.0,
            (dx, dy) in (-1000.0f64..1000.0, -1000.0f64..1000.0),
        ) {
            let mut crop = AspectCrop::locked(aspect);
            crop.set_zoom(zoom);
            crop.pan(dx, dy);
            let sel = crop.selection(src_w, src_h);

            prop_assert!(sel.x >= -1e-6);
            prop_assert!(sel.y >= -1e-6);
            prop_assert!(sel.x + sel.width <= src_w as f64 + 1e-6);
            prop_assert!(sel.y + sel.height <= src_h as f64 + 1e-6);
        }

        /// Property: the selection always keeps the window aspect ratio.
        #[test]
        fn prop_selection_keeps_aspect(
            (src_w, src_h) in (50u32..500, 50u32..500),
            aspect in 0.3f64..3.0,
            zoom in 0.2f64..5.0,
        ) {
            let mut crop = AspectCrop::free_move(aspect);
            crop.set_zoom(zoom);
            let sel = crop.selection(src_w, src_h);
            prop_assert!((sel.width / sel.height - aspect).abs() / aspect < 1e-9);
        }

        /// Property: confirm_crop always produces the requested dimensions.
        #[test]
        fn prop_confirm_crop_dimensions(
            (src_w, src_h) in (8u32..64, 8u32..64),
            (out_w, out_h) in (1u32..128, 1u32..128),
            (x, y) in (-32.0f64..64.0, -32.0f64..64.0),
            (w, h) in (1.0f64..64.0, 1.0f64..64.0),
        ) {
            let src = Raster::filled(src_w, src_h, [9, 9, 9, 255]);
            let sel = CropSelection { x, y, width: w, height: h };
            let out = confirm_crop(&src, sel, out_w, out_h).unwrap();
            prop_assert_eq!(out.width, out_w);
            prop_assert_eq!(out.height, out_h);
            prop_assert_eq!(out.pixels.len(), (out_w * out_h * 4) as usize);
        }
    }
}
