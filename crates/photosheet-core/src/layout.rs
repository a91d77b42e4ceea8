//! Print-sheet grid layout engine.
//!
//! Pure arithmetic from physical paper/cell/margin/gap dimensions to a
//! column/row grid in pixels. Nothing here is cached: every result is
//! recomputed from the current configuration on read, so the engine is
//! trivially idempotent and safe to call from any render pass (preview or
//! high-DPI export) with a different pixel density.
//!
//! The grid is anchored at the top-left margin corner. Residual space that
//! does not fit another column or row accumulates at the right and bottom
//! edges; the sheet is not centered.

use serde::{Deserialize, Serialize};

use crate::units::{PhysicalDimension, Unit};

/// A predefined paper size with its default margin and gap.
///
/// Catalog entries are immutable; selecting one overwrites the active
/// margin/gap with the profile defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperProfile {
    pub name: String,
    pub width: PhysicalDimension,
    pub height: PhysicalDimension,
    pub default_margin: PhysicalDimension,
    pub default_gap: PhysicalDimension,
}

impl PaperProfile {
    /// A4 (21 × 29.7 cm).
    pub fn a4() -> Self {
        Self {
            name: "A4 (21 x 29.7 cm)".to_string(),
            width: PhysicalDimension::cm(21.0),
            height: PhysicalDimension::cm(29.7),
            default_margin: PhysicalDimension::cm(1.0),
            default_gap: PhysicalDimension::cm(0.4),
        }
    }

    /// 4×6 inch photo paper.
    pub fn four_by_six() -> Self {
        Self {
            name: "4x6 inches".to_string(),
            width: PhysicalDimension::inches(4.0),
            height: PhysicalDimension::inches(6.0),
            default_margin: PhysicalDimension::inches(0.32),
            default_gap: PhysicalDimension::inches(0.2),
        }
    }

    /// 8×10 inch photo paper.
    pub fn eight_by_ten() -> Self {
        Self {
            name: "8x10 inches".to_string(),
            width: PhysicalDimension::inches(8.0),
            height: PhysicalDimension::inches(10.0),
            default_margin: PhysicalDimension::inches(0.5),
            default_gap: PhysicalDimension::inches(0.3),
        }
    }

    /// Free-form entry, seeded with A4 dimensions.
    pub fn custom() -> Self {
        Self {
            name: "Custom".to_string(),
            ..Self::a4()
        }
    }

    /// The full selectable catalog, in display order.
    pub fn catalog() -> Vec<PaperProfile> {
        vec![
            Self::a4(),
            Self::four_by_six(),
            Self::eight_by_ten(),
            Self::custom(),
        ]
    }

    /// The `width height` value for a print `@page { size: ...; margin: 0 }`
    /// rule, e.g. `"21cm 29.7cm"`. Zeroing the page margin keeps the print
    /// driver from adding its own margin on top of the sheet's.
    pub fn page_size_directive(&self) -> String {
        format!(
            "{}{} {}{}",
            self.width.value,
            self.width.unit.label(),
            self.height.value,
            self.height.unit.label()
        )
    }
}

/// The physical size of one photo cell on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSpec {
    pub width: PhysicalDimension,
    pub height: PhysicalDimension,
}

impl CellSpec {
    pub fn new(width: PhysicalDimension, height: PhysicalDimension) -> Self {
        Self { width, height }
    }

    /// Width/height ratio; drives the fixed-aspect crop window.
    pub fn aspect_ratio(&self) -> f64 {
        let w = self.width.convert_to(Unit::Cm).value;
        let h = self.height.convert_to(Unit::Cm).value;
        w / h
    }
}

/// Everything the grid derivation needs: paper, cell, margin, gap, copies.
///
/// `copies == 0` means auto-fill the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub paper: PaperProfile,
    pub cell: CellSpec,
    pub margin: PhysicalDimension,
    pub gap: PhysicalDimension,
    pub copies: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let paper = PaperProfile::a4();
        Self {
            margin: paper.default_margin,
            gap: paper.default_gap,
            paper,
            cell: CellSpec::new(PhysicalDimension::cm(3.5), PhysicalDimension::cm(4.5)),
            copies: 0,
        }
    }
}

/// Derived column/row counts for a layout at some pixel density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridResult {
    pub cols: u32,
    pub rows: u32,
    /// Total cells that fit: `cols * rows`.
    pub capacity: u32,
    /// Cells actually drawn: capacity when auto-filling, otherwise
    /// `min(copies, capacity)`.
    pub rendered: u32,
}

impl GridResult {
    /// True when nothing fits and the sheet must show the "too large to
    /// fit" diagnostic instead of a grid.
    pub fn is_unrenderable(&self) -> bool {
        self.capacity == 0
    }
}

/// Compute how many cells fit on the paper at the given density.
///
/// `cols = floor((availW + gap) / (cellW + gap))` with
/// `availW = paperW - 2*margin`; same along the height. Negative counts
/// clamp to zero.
pub fn compute_grid(config: &LayoutConfig, dpcm: f64) -> GridResult {
    let paper_w = config.paper.width.to_pixels(dpcm);
    let paper_h = config.paper.height.to_pixels(dpcm);
    let cell_w = config.cell.width.to_pixels(dpcm);
    let cell_h = config.cell.height.to_pixels(dpcm);
    let margin = config.margin.to_pixels(dpcm);
    let gap = config.gap.to_pixels(dpcm);

    let avail_w = paper_w - margin * 2.0;
    let avail_h = paper_h - margin * 2.0;

    let cols = ((avail_w + gap) / (cell_w + gap)).floor().max(0.0) as u32;
    let rows = ((avail_h + gap) / (cell_h + gap)).floor().max(0.0) as u32;

    let capacity = cols * rows;
    let rendered = if config.copies > 0 {
        config.copies.min(capacity)
    } else {
        capacity
    };

    GridResult {
        cols,
        rows,
        capacity,
        rendered,
    }
}

/// Pixel origins of the rendered cells in row-major order.
///
/// Cell (col, row) sits at `margin + col*(cellW + gap)` /
/// `margin + row*(cellH + gap)` from the sheet's top-left corner.
pub fn cell_positions(config: &LayoutConfig, grid: &GridResult, dpcm: f64) -> Vec<(f64, f64)> {
    let cell_w = config.cell.width.to_pixels(dpcm);
    let cell_h = config.cell.height.to_pixels(dpcm);
    let margin = config.margin.to_pixels(dpcm);
    let gap = config.gap.to_pixels(dpcm);

    let mut positions = Vec::with_capacity(grid.rendered as usize);
    'outer: for row in 0..grid.rows {
        for col in 0..grid.cols {
            if positions.len() >= grid.rendered as usize {
                break 'outer;
            }
            positions.push((
                margin + col as f64 * (cell_w + gap),
                margin + row as f64 * (cell_h + gap),
            ));
        }
    }
    positions
}

/// The largest cell that fits the paper with the current margin: paper
/// minus twice the margin, expressed in the cell's unit and rounded to two
/// decimals (the precision of the dimension inputs).
pub fn maximize_cell(config: &LayoutConfig) -> CellSpec {
    let unit = config.cell.width.unit;
    let paper_w = config.paper.width.convert_to(unit).value;
    let paper_h = config.paper.height.convert_to(unit).value;
    let margin = config.margin.convert_to(unit).value;

    let round2 = |v: f64| (v * 100.0).round() / 100.0;

    CellSpec {
        width: PhysicalDimension {
            value: round2(paper_w - 2.0 * margin),
            unit,
        },
        height: PhysicalDimension {
            value: round2(paper_h - 2.0 * margin),
            unit,
        },
    }
}
