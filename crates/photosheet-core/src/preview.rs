//! Live preview scaling.
//!
//! The preview shows the full-resolution sheet raster inside a bounded
//! viewport by scaling it down uniformly; it never scales up past 100%.
//! The host recomputes the scale from its resize/layout-settled observer
//! callbacks — the math here is pure, there are no timers.

/// Uniform scale that fits a sheet into a viewport, capped at 1.
///
/// Degenerate viewports (zero or negative after insets) yield 0, which the
/// host treats as "nothing visible yet".
pub fn compute_scale(
    viewport_width: f64,
    viewport_height: f64,
    sheet_width: f64,
    sheet_height: f64,
) -> f64 {
    if sheet_width <= 0.0 || sheet_height <= 0.0 {
        return 0.0;
    }
    let scale_w = viewport_width / sheet_width;
    let scale_h = viewport_height / sheet_height;
    scale_w.min(scale_h).min(1.0).max(0.0)
}

/// Preview chrome: the container padding eaten out of the viewport before
/// the sheet is fitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewScaler {
    pub padding_px: f64,
}

impl Default for PreviewScaler {
    fn default() -> Self {
        Self { padding_px: 40.0 }
    }
}

impl PreviewScaler {
    /// Scale for a sheet inside a container, insetting the container by the
    /// padding on each axis first.
    pub fn scale(
        &self,
        container_width: f64,
        container_height: f64,
        sheet_width: f64,
        sheet_height: f64,
    ) -> f64 {
        compute_scale(
            container_width - self.padding_px,
            container_height - self.padding_px,
            sheet_width,
            sheet_height,
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the scale never exceeds 1, whatever the inputs.
        #[test]
        fn prop_scale_at_most_one(
            vw in 0.0f64..5000.0,
            vh in 0.0f64..5000.0,
            sw in 1.0f64..5000.0,
            sh in 1.0f64..5000.0,
        ) {
            let scale = compute_scale(vw, vh, sw, sh);
            prop_assert!(scale <= 1.0);
            prop_assert!(scale >= 0.0);
        }

        /// Property: at the computed scale the sheet fits the viewport.
        #[test]
        fn prop_scaled_sheet_fits(
            vw in 1.0f64..5000.0,
            vh in 1.0f64..5000.0,
            sw in 1.0f64..5000.0,
            sh in 1.0f64..5000.0,
        ) {
            let scale = compute_scale(vw, vh, sw, sh);
            prop_assert!(sw * scale <= vw + 1e-6);
            prop_assert!(sh * scale <= vh + 1e-6);
        }
    }
}
