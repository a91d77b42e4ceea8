//! Frame and decoration catalog.
//!
//! Every cell on the sheet wears one frame. The catalog combines a few
//! hand-authored premium frames (overlay art with bespoke photo insets)
//! with a generated cross-product of border styles and a fixed color
//! palette, plus one gallery matte per color. Entries carry stable,
//! deterministic ids so a selection survives re-renders and reloads of the
//! catalog.
//!
//! A frame's visual is a tagged `FrameStyle` variant; the compositor
//! pattern-matches on it rather than calling into per-frame style
//! closures, which keeps catalog construction order irrelevant to
//! rendering.

use serde::{Deserialize, Serialize};

use crate::Rgba;

/// Sentinel id of the frameless entry. Only while it is selected do the
/// manual border width/color controls apply.
pub const NONE_FRAME_ID: &str = "none";

/// Per-edge amounts; pixels for paddings, fractions of the cell for
/// overlay insets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Multiply every edge by a factor (DPI scaling of pixel paddings).
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(
            self.top * factor,
            self.right * factor,
            self.bottom * factor,
            self.left * factor,
        )
    }
}

/// Border patterns available for generated frames. Each carries the fixed
/// stroke thickness (in px at the 96-DPI reference) its look was tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorderStyle {
    Solid,
    Double,
    Ridge,
    Groove,
    Inset,
    Outset,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub const ALL: [BorderStyle; 8] = [
        BorderStyle::Solid,
        BorderStyle::Double,
        BorderStyle::Ridge,
        BorderStyle::Groove,
        BorderStyle::Inset,
        BorderStyle::Outset,
        BorderStyle::Dashed,
        BorderStyle::Dotted,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::Solid => "Solid",
            BorderStyle::Double => "Double",
            BorderStyle::Ridge => "Ridge",
            BorderStyle::Groove => "Groove",
            BorderStyle::Inset => "Inset",
            BorderStyle::Outset => "Outset",
            BorderStyle::Dashed => "Dashed",
            BorderStyle::Dotted => "Dotted",
        }
    }

    /// Stroke thickness in px at the 96-DPI reference scale.
    pub fn thickness_px(self) -> f32 {
        match self {
            BorderStyle::Solid => 15.0,
            BorderStyle::Double => 20.0,
            BorderStyle::Ridge => 25.0,
            BorderStyle::Groove => 25.0,
            BorderStyle::Inset => 15.0,
            BorderStyle::Outset => 15.0,
            BorderStyle::Dashed => 10.0,
            BorderStyle::Dotted => 12.0,
        }
    }
}

/// A thin stroke drawn at the outer edge of a padded frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub thickness_px: f32,
    pub color: Rgba,
}

/// The visual of a frame, as a tagged variant the compositor matches on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrameStyle {
    /// No decoration; the manual border settings apply instead.
    Plain,
    /// A patterned border band in the outer `thickness_px` of the cell.
    Bordered {
        style: BorderStyle,
        color: Rgba,
        thickness_px: f32,
    },
    /// A colored mat around the photo, optionally outlined.
    Padded {
        /// Padding per edge, px at the 96-DPI reference scale.
        padding: EdgeInsets,
        color: Rgba,
        outline: Option<Outline>,
    },
    /// Ornamental art stretched over the whole cell, with the photo inset
    /// to the art's window.
    Overlay {
        /// Photo inset per edge as a fraction of the cell dimension.
        inset: EdgeInsets,
        /// Opaque key the host resolves to the overlay raster.
        asset: String,
    },
}

/// One selectable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDescriptor {
    pub id: String,
    pub name: String,
    pub style: FrameStyle,
}

impl FrameDescriptor {
    /// The overlay asset key, when this frame has ornamental art.
    pub fn overlay_asset(&self) -> Option<&str> {
        match &self.style {
            FrameStyle::Overlay { asset, .. } => Some(asset),
            _ => None,
        }
    }
}

/// The named colors the generated catalog cycles through.
pub const PALETTE: [(&str, &str); 14] = [
    ("White", "#FFFFFF"),
    ("Black", "#1A1A1A"),
    ("Gold", "#FFD700"),
    ("Silver", "#E0E0E0"),
    ("Oak", "#8B5A2B"),
    ("Walnut", "#3E2723"),
    ("Rose", "#B76E79"),
    ("Navy", "#000080"),
    ("Crimson", "#DC143C"),
    ("Teal", "#008080"),
    ("Pink", "#FFD1DC"),
    ("Mint", "#98FF98"),
    ("Lavender", "#E6E6FA"),
    ("Peach", "#FFE5B4"),
];

fn premium_frames() -> Vec<FrameDescriptor> {
    vec![
        FrameDescriptor {
            id: NONE_FRAME_ID.to_string(),
            name: "No Custom Frame".to_string(),
            style: FrameStyle::Plain,
        },
        FrameDescriptor {
            id: "real-wood-love".to_string(),
            name: "3D Romantic Wood".to_string(),
            style: FrameStyle::Overlay {
                inset: EdgeInsets::new(0.12, 0.12, 0.25, 0.12),
                asset: "real-wood-love".to_string(),
            },
        },
        FrameDescriptor {
            id: "real-family".to_string(),
            name: "3D Classic Family".to_string(),
            style: FrameStyle::Overlay {
                inset: EdgeInsets::new(0.22, 0.08, 0.08, 0.08),
                asset: "real-family".to_string(),
            },
        },
        FrameDescriptor {
            id: "real-gold".to_string(),
            name: "3D Royal Gold Ornate".to_string(),
            style: FrameStyle::Overlay {
                inset: EdgeInsets::uniform(0.18),
                asset: "real-gold".to_string(),
            },
        },
        FrameDescriptor {
            id: "polaroid".to_string(),
            name: "Classic Polaroid".to_string(),
            style: FrameStyle::Padded {
                padding: EdgeInsets::new(16.0, 16.0, 60.0, 16.0),
                color: Rgba::WHITE,
                outline: None,
            },
        },
    ]
}

/// Build the full frame catalog: premium entries first, then per palette
/// color all eight border styles followed by that color's gallery matte.
pub fn catalog() -> Vec<FrameDescriptor> {
    let mut frames = premium_frames();

    for (color_name, hex) in PALETTE {
        let color = Rgba::from_hex(hex).unwrap_or(Rgba::BLACK);
        for style in BorderStyle::ALL {
            frames.push(FrameDescriptor {
                id: format!(
                    "{}-{}",
                    style.name().to_lowercase(),
                    color_name.to_lowercase()
                ),
                name: format!("{} {}", style.name(), color_name),
                style: FrameStyle::Bordered {
                    style,
                    color,
                    thickness_px: style.thickness_px(),
                },
            });
        }
        frames.push(FrameDescriptor {
            id: format!("matte-{}", color_name.to_lowercase()),
            name: format!("{} Gallery Matte", color_name),
            style: FrameStyle::Padded {
                padding: EdgeInsets::uniform(20.0),
                color,
                outline: Some(Outline {
                    thickness_px: 3.0,
                    color: Rgba::opaque(0x33, 0x33, 0x33),
                }),
            },
        });
    }

    frames
}

/// Look up a catalog entry by id. Unknown ids fall back to the `none`
/// sentinel so a stale selection can never break rendering.
pub fn by_id(id: &str) -> FrameDescriptor {
    catalog()
        .into_iter()
        .find(|f| f.id == id)
        .unwrap_or_else(|| premium_frames().remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        // 5 premium entries + 14 colors × (8 border styles + 1 matte)
        assert_eq!(catalog().len(), 5 + 14 * 9);
    }

    #[test]
    fn test_ids_unique() {
        let frames = catalog();
        let ids: HashSet<_> = frames.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), frames.len());
    }

    #[test]
    fn test_ids_stable_across_builds() {
        let a: Vec<String> = catalog().into_iter().map(|f| f.id).collect();
        let b: Vec<String> = catalog().into_iter().map(|f| f.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_id_derivation_lowercase_hyphenated() {
        let frames = catalog();
        assert!(frames.iter().any(|f| f.id == "solid-white"));
        assert!(frames.iter().any(|f| f.id == "dotted-lavender"));
        assert!(frames.iter().any(|f| f.id == "matte-teal"));
    }

    #[test]
    fn test_none_sentinel_is_plain() {
        let none = by_id(NONE_FRAME_ID);
        assert_eq!(none.style, FrameStyle::Plain);
        assert!(none.overlay_asset().is_none());
    }

    #[test]
    fn test_unknown_id_falls_back_to_none() {
        assert_eq!(by_id("no-such-frame").id, NONE_FRAME_ID);
    }

    #[test]
    fn test_bordered_frame_carries_style_thickness() {
        let frame = by_id("ridge-gold");
        match frame.style {
            FrameStyle::Bordered {
                style,
                thickness_px,
                color,
            } => {
                assert_eq!(style, BorderStyle::Ridge);
                assert_eq!(thickness_px, 25.0);
                assert_eq!(color, Rgba::from_hex("#FFD700").unwrap());
            }
            other => panic!("Expected Bordered, got {:?}", other),
        }
    }

    #[test]
    fn test_matte_has_outline() {
        let frame = by_id("matte-navy");
        match frame.style {
            FrameStyle::Padded {
                padding, outline, ..
            } => {
                assert_eq!(padding, EdgeInsets::uniform(20.0));
                let outline = outline.expect("matte should be outlined");
                assert_eq!(outline.thickness_px, 3.0);
            }
            other => panic!("Expected Padded, got {:?}", other),
        }
    }

    #[test]
    fn test_premium_overlay_insets() {
        let wood = by_id("real-wood-love");
        match wood.style {
            FrameStyle::Overlay { inset, .. } => {
                assert_eq!(inset.bottom, 0.25);
                assert_eq!(inset.left, 0.12);
            }
            other => panic!("Expected Overlay, got {:?}", other),
        }
        assert_eq!(wood.overlay_asset(), Some("real-wood-love"));
    }

    #[test]
    fn test_polaroid_padding_is_bottom_heavy() {
        let polaroid = by_id("polaroid");
        match polaroid.style {
            FrameStyle::Padded { padding, color, .. } => {
                assert_eq!(padding.bottom, 60.0);
                assert_eq!(padding.top, 16.0);
                assert_eq!(color, Rgba::WHITE);
            }
            other => panic!("Expected Padded, got {:?}", other),
        }
    }

    #[test]
    fn test_edge_insets_scaled() {
        let insets = EdgeInsets::new(1.0, 2.0, 3.0, 4.0).scaled(2.5);
        assert_eq!(insets, EdgeInsets::new(2.5, 5.0, 7.5, 10.0));
    }

    #[test]
    fn test_border_style_thicknesses() {
        assert_eq!(BorderStyle::Solid.thickness_px(), 15.0);
        assert_eq!(BorderStyle::Double.thickness_px(), 20.0);
        assert_eq!(BorderStyle::Dashed.thickness_px(), 10.0);
        assert_eq!(BorderStyle::Dotted.thickness_px(), 12.0);
    }
}
