//! Adjustment WASM bindings.
//!
//! This module provides JavaScript bindings for the AdjustmentSettings
//! type, mirroring the brightness/contrast/saturation sliders.

use crate::types::JsRaster;
use photosheet_core::adjustments::apply_adjustments as core_apply;
use wasm_bindgen::prelude::*;

/// Adjustment settings wrapper for JavaScript.
///
/// Each value is a percentage in [0, 200]; 100 is a no-op. Out-of-range
/// values are clamped on set, matching the slider bounds.
#[wasm_bindgen]
pub struct AdjustmentSettings {
    inner: photosheet_core::AdjustmentSettings,
}

#[wasm_bindgen]
impl AdjustmentSettings {
    /// Create new settings with every slider at 100%.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: photosheet_core::AdjustmentSettings::new(),
        }
    }

    /// Get brightness percentage
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    /// Set brightness percentage
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value.clamp(0.0, 200.0);
    }

    /// Get contrast percentage
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    /// Set contrast percentage
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value.clamp(0.0, 200.0);
    }

    /// Get saturation percentage
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    /// Set saturation percentage
    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f32) {
        self.inner.saturation = value.clamp(0.0, 200.0);
    }

    /// Check if all sliders are at their neutral position
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }

    /// Serialize to a plain JS object for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain JS object
    pub fn from_json(value: JsValue) -> Result<AdjustmentSettings, JsValue> {
        let inner: photosheet_core::AdjustmentSettings =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for AdjustmentSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl AdjustmentSettings {
    /// Get a reference to the inner settings for use in compositing.
    pub(crate) fn inner(&self) -> &photosheet_core::AdjustmentSettings {
        &self.inner
    }
}

/// Apply the adjustment chain to an image.
///
/// Returns a new adjusted image; the original pixel data is untouched.
/// Alpha is preserved.
///
/// # Example (TypeScript)
/// ```typescript
/// const adj = new AdjustmentSettings();
/// adj.brightness = 120;
/// adj.saturation = 80;
///
/// const adjusted = apply_adjustments(croppedImage, adj);
/// ```
#[wasm_bindgen]
pub fn apply_adjustments(image: &JsRaster, settings: &AdjustmentSettings) -> JsRaster {
    // Clone the pixel data so we don't modify the original
    let mut pixels = image.pixels();

    core_apply(&mut pixels, settings.inner());

    JsRaster::new(image.width(), image.height(), pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_and_clamping() {
        let mut adj = AdjustmentSettings::new();
        assert!(adj.is_default());

        adj.set_brightness(250.0);
        assert_eq!(adj.brightness(), 200.0);
        assert!(!adj.is_default());

        adj.set_contrast(-5.0);
        assert_eq!(adj.contrast(), 0.0);

        adj.set_saturation(140.0);
        assert_eq!(adj.saturation(), 140.0);
    }

    #[test]
    fn test_apply_adjustments_identity() {
        let pixels = vec![128, 128, 128, 255, 64, 64, 64, 128];
        let image = JsRaster::new(2, 1, pixels.clone());
        let adj = AdjustmentSettings::new();

        let result = apply_adjustments(&image, &adj);

        assert_eq!(result.width(), 2);
        assert_eq!(result.height(), 1);
        assert_eq!(result.pixels(), pixels);
    }

    #[test]
    fn test_apply_adjustments_brightness() {
        let image = JsRaster::new(1, 1, vec![64, 64, 64, 255]);

        let mut adj = AdjustmentSettings::new();
        adj.set_brightness(200.0); // 2x

        let result = apply_adjustments(&image, &adj);
        assert_eq!(result.pixels(), vec![128, 128, 128, 255]);
    }

    #[test]
    fn test_apply_adjustments_does_not_modify_original() {
        let pixels = vec![100, 100, 100, 200];
        let image = JsRaster::new(1, 1, pixels.clone());

        let mut adj = AdjustmentSettings::new();
        adj.set_brightness(180.0);

        let _result = apply_adjustments(&image, &adj);

        assert_eq!(image.pixels(), pixels);
    }

    #[test]
    fn test_apply_adjustments_preserves_alpha() {
        let image = JsRaster::new(1, 1, vec![90, 90, 90, 42]);

        let mut adj = AdjustmentSettings::new();
        adj.set_contrast(150.0);

        let result = apply_adjustments(&image, &adj);
        assert_eq!(result.pixels()[3], 42);
    }
}
