//! Raster renditions of the border styles.
//!
//! CSS-style border patterns redrawn as pixel bands. A band occupies the
//! outer `thickness` pixels of the cell; everything is keyed off each
//! pixel's distance to its nearest cell edge, so the four sides and the
//! corners come out of one pass.

use crate::decode::Raster;
use crate::frames::BorderStyle;
use crate::Rgba;

/// Multiplier pairs for the two-tone 3D styles.
const LIGHT: f32 = 1.35;
const DARK: f32 = 0.65;

fn shade(color: Rgba, factor: f32) -> Rgba {
    let [r, g, b, a] = color.0;
    let scale = |c: u8| ((c as f32 * factor).clamp(0.0, 255.0)) as u8;
    Rgba([scale(r), scale(g), scale(b), a])
}

/// Which cell edge a band pixel belongs to.
#[derive(Clone, Copy, PartialEq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Distance to the nearest edge and which edge that is.
#[inline]
fn edge_distance(x: u32, y: u32, width: u32, height: u32) -> (f32, Side) {
    let left = x as f32;
    let top = y as f32;
    let right = (width - 1 - x) as f32;
    let bottom = (height - 1 - y) as f32;

    let mut dist = left;
    let mut side = Side::Left;
    if top < dist {
        dist = top;
        side = Side::Top;
    }
    if right < dist {
        dist = right;
        side = Side::Right;
    }
    if bottom < dist {
        dist = bottom;
        side = Side::Bottom;
    }
    (dist, side)
}

/// Coordinate along the edge the pixel is nearest to (for dash phases).
#[inline]
fn tangent(x: u32, y: u32, side: Side) -> f32 {
    match side {
        Side::Top | Side::Bottom => x as f32,
        Side::Left | Side::Right => y as f32,
    }
}

/// Resolve the band color at one pixel, or None where the pattern is open
/// (dash gaps, the slot of a double border).
fn band_pixel(
    style: BorderStyle,
    color: Rgba,
    dist: f32,
    side: Side,
    along: f32,
    thickness: f32,
) -> Option<Rgba> {
    match style {
        BorderStyle::Solid => Some(color),
        BorderStyle::Double => {
            // Two strokes of t/3 with a t/3 slot between them
            let third = thickness / 3.0;
            if dist < third || dist >= 2.0 * third {
                Some(color)
            } else {
                None
            }
        }
        BorderStyle::Ridge => {
            // Raised look: light outer half, dark inner half
            if dist < thickness / 2.0 {
                Some(shade(color, LIGHT))
            } else {
                Some(shade(color, DARK))
            }
        }
        BorderStyle::Groove => {
            // Carved look: dark outer half, light inner half
            if dist < thickness / 2.0 {
                Some(shade(color, DARK))
            } else {
                Some(shade(color, LIGHT))
            }
        }
        BorderStyle::Inset => match side {
            Side::Top | Side::Left => Some(shade(color, DARK)),
            Side::Bottom | Side::Right => Some(shade(color, LIGHT)),
        },
        BorderStyle::Outset => match side {
            Side::Top | Side::Left => Some(shade(color, LIGHT)),
            Side::Bottom | Side::Right => Some(shade(color, DARK)),
        },
        BorderStyle::Dashed => {
            // Dashes of 2t with gaps of t
            let period = 3.0 * thickness;
            if along.rem_euclid(period) < 2.0 * thickness {
                Some(color)
            } else {
                None
            }
        }
        BorderStyle::Dotted => {
            // Round dots of diameter t at 2t center spacing
            let radius = thickness / 2.0;
            let spacing = 2.0 * thickness;
            let k = ((along - radius) / spacing).round();
            let center_along = radius + k * spacing;
            let d_along = along - center_along;
            let d_norm = dist - radius;
            if d_along * d_along + d_norm * d_norm <= radius * radius {
                Some(color)
            } else {
                None
            }
        }
    }
}

/// Draw a patterned border band in the outer `thickness` pixels of the
/// target. Thicknesses below one pixel round up so a border never
/// disappears entirely.
pub fn draw_border_band(target: &mut Raster, style: BorderStyle, color: Rgba, thickness: f32) {
    if thickness <= 0.0 || target.is_empty() {
        return;
    }
    let thickness = thickness.max(1.0);

    for y in 0..target.height {
        for x in 0..target.width {
            let (dist, side) = edge_distance(x, y, target.width, target.height);
            if dist >= thickness {
                continue;
            }
            let along = tangent(x, y, side);
            if let Some(rgba) = band_pixel(style, color, dist, side, along, thickness) {
                target.put(x, y, rgba.0);
            }
        }
    }
}

/// Draw a plain rectangular stroke (the manual border and matte outlines).
pub fn draw_stroke(target: &mut Raster, color: Rgba, thickness: f32) {
    draw_border_band(target, BorderStyle::Solid, color, thickness);
}
