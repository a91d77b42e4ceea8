//! Image adjustment algorithms.
//!
//! Applies the three cell adjustments to RGBA pixel data.
//!
//! ## Adjustment Order
//! 1. Brightness
//! 2. Contrast
//! 3. Saturation
//!
//! The order is fixed: each step feeds the next, so reordering changes the
//! output. The formulas follow the CSS filter functions the live preview
//! uses (`brightness()`, `contrast()`, `saturate()`), keeping the exported
//! sheet consistent with what the user saw on screen. Alpha is never
//! modified.

use crate::AdjustmentSettings;

/// Apply the adjustment chain to RGBA pixel data in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `settings` - Percentage values in [0, 200]; 100 is a no-op
pub fn apply_adjustments(pixels: &mut [u8], settings: &AdjustmentSettings) {
    // Early exit if every slider sits at 100%
    if settings.is_default() {
        return;
    }

    let brightness = settings.brightness / 100.0;
    let contrast = settings.contrast / 100.0;
    let saturation = settings.saturation / 100.0;

    for chunk in pixels.chunks_exact_mut(4) {
        let mut r = chunk[0] as f32 / 255.0;
        let mut g = chunk[1] as f32 / 255.0;
        let mut b = chunk[2] as f32 / 255.0;

        (r, g, b) = apply_brightness(r, g, b, brightness);
        (r, g, b) = apply_contrast(r, g, b, contrast);
        (r, g, b) = apply_saturation(r, g, b, saturation);

        chunk[0] = (r.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[1] = (g.clamp(0.0, 1.0) * 255.0).round() as u8;
        chunk[2] = (b.clamp(0.0, 1.0) * 255.0).round() as u8;
        // chunk[3] (alpha) stays untouched
    }
}

/// Apply brightness as a linear multiplier.
///
/// Formula: `output = input * factor`
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    if factor == 1.0 {
        return (r, g, b);
    }
    (r * factor, g * factor, b * factor)
}

/// Apply contrast around the 50% gray midpoint.
///
/// Formula: `output = (input - 0.5) * factor + 0.5`
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    if factor == 1.0 {
        return (r, g, b);
    }
    let midpoint = 0.5;
    (
        (r - midpoint) * factor + midpoint,
        (g - midpoint) * factor + midpoint,
        (b - midpoint) * factor + midpoint,
    )
}

/// Per-pixel luma with the filter-effects weights (0.213, 0.715, 0.072).
#[inline]
fn luma(r: f32, g: f32, b: f32) -> f32 {
    0.213 * r + 0.715 * g + 0.072 * b
}

/// Apply saturation as a mix between the pixel and its luma.
///
/// Factor 0 desaturates to grayscale, 1 is the identity, 2 doubles the
/// distance of each channel from the luma.
#[inline]
fn apply_saturation(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    if factor == 1.0 {
        return (r, g, b);
    }
    let gray = luma(r, g, b);
    (
        gray + (r - gray) * factor,
        gray + (g - gray) * factor,
        gray + (b - gray) * factor,
    )
}
