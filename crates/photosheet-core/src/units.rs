//! Physical unit and print resolution conversions.
//!
//! All layout math is done in pixels at some dots-per-centimeter density.
//! The on-screen preview uses the 96 DPI reference density; exports derive
//! a higher density from the user-selected print DPI and recompute every
//! pixel quantity from the same physical dimensions.

use serde::{Deserialize, Serialize};

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Dots per centimeter at the 96 DPI screen reference (96 / 2.54).
pub const DPCM_96: f64 = 37.7952755906;

/// Dots per centimeter for an arbitrary print DPI.
///
/// Scales linearly from the 96 DPI reference: 300 DPI ≈ 118.11 dots/cm.
#[inline]
pub fn dpcm_for_dpi(dpi: f64) -> f64 {
    DPCM_96 * (dpi / 96.0)
}

/// A physical measurement unit surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "in")]
    In,
}

impl Unit {
    /// The label shown next to dimension inputs ("cm" / "in").
    pub fn label(self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::In => "in",
        }
    }
}

/// A positive physical length together with its unit.
///
/// Positivity is a caller contract; this type does not validate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalDimension {
    pub value: f64,
    pub unit: Unit,
}

impl PhysicalDimension {
    pub fn cm(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Cm,
        }
    }

    pub fn inches(value: f64) -> Self {
        Self {
            value,
            unit: Unit::In,
        }
    }

    /// Convert to pixels at the given dots-per-centimeter density.
    #[inline]
    pub fn to_pixels(self, dpcm: f64) -> f64 {
        match self.unit {
            Unit::Cm => self.value * dpcm,
            Unit::In => self.value * CM_PER_INCH * dpcm,
        }
    }

    /// Express this length in another unit without losing numeric intent.
    ///
    /// Same-unit conversion is the identity; cm↔in round trips reproduce
    /// the value within floating-point tolerance.
    pub fn convert_to(self, unit: Unit) -> Self {
        let value = match (self.unit, unit) {
            (Unit::Cm, Unit::In) => self.value / CM_PER_INCH,
            (Unit::In, Unit::Cm) => self.value * CM_PER_INCH,
            _ => self.value,
        };
        Self { value, unit }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: cm→in→cm reproduces the value within 1e-6 relative.
        #[test]
        fn prop_roundtrip_cm(value in 0.01f64..1000.0) {
            let d = PhysicalDimension::cm(value);
            let back = d.convert_to(Unit::In).convert_to(Unit::Cm);
            prop_assert!((back.value - value).abs() / value < 1e-6);
        }

        /// Property: in→cm→in reproduces the value within 1e-6 relative.
        #[test]
        fn prop_roundtrip_in(value in 0.01f64..1000.0) {
            let d = PhysicalDimension::inches(value);
            let back = d.convert_to(Unit::Cm).convert_to(Unit::In);
            prop_assert!((back.value - value).abs() / value < 1e-6);
        }

        /// Property: pixel count is invariant under unit conversion.
        #[test]
        fn prop_pixels_invariant(value in 0.01f64..1000.0, dpi in 72.0f64..600.0) {
            let dpcm = dpcm_for_dpi(dpi);
            let cm = PhysicalDimension::cm(value);
            let inches = cm.convert_to(Unit::In);
            let diff = (cm.to_pixels(dpcm) - inches.to_pixels(dpcm)).abs();
            prop_assert!(diff / cm.to_pixels(dpcm) < 1e-9);
        }
    }
}
