//! The editing session and its state transitions.
//!
//! One user, one in-memory session, no persistence. Everything the UI can
//! touch lives in [`Session`]; every mutation is a pure
//! `reduce(session, action) -> session` transition, so the layout engine
//! and compositor can be exercised without any UI runtime behind them.
//! Derived data (grid, preview scale) is never stored here — it is
//! recomputed from the current state on read.

use crate::compose::ManualBorder;
use crate::crop::output_resolution;
use crate::decode::Raster;
use crate::frames::{self, FrameDescriptor, NONE_FRAME_ID};
use crate::layout::{compute_grid, maximize_cell, CellSpec, GridResult, LayoutConfig, PaperProfile};
use crate::units::{PhysicalDimension, Unit, DPCM_96};
use crate::AdjustmentSettings;

/// Which screen the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Crop,
    Layout,
}

/// The full editing state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub step: Step,
    /// The unit dimension inputs are expressed in.
    pub unit: Unit,
    /// Print quality for exports, in DPI.
    pub export_dpi: f64,
    pub layout: LayoutConfig,
    pub adjustments: AdjustmentSettings,
    /// Id of the selected catalog frame.
    pub selected_frame: String,
    pub manual_border: ManualBorder,
    /// The confirmed crop; present only in the layout step.
    pub cropped: Option<Raster>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            step: Step::Crop,
            unit: Unit::Cm,
            export_dpi: 300.0,
            layout: LayoutConfig::default(),
            adjustments: AdjustmentSettings::default(),
            selected_frame: NONE_FRAME_ID.to_string(),
            manual_border: ManualBorder::default(),
            cropped: None,
        }
    }
}

/// Every mutation the UI can request.
#[derive(Debug, Clone)]
pub enum Action {
    SelectPaper(PaperProfile),
    SetUnit(Unit),
    /// Cell width/height in the session's current unit.
    SetCellSize { width: f64, height: f64 },
    /// Margin in the session's current unit.
    SetMargin(f64),
    /// Gap in the session's current unit.
    SetGap(f64),
    /// 0 auto-fills the page.
    SetCopies(u32),
    SetExportDpi(f64),
    SelectFrame(String),
    SetManualBorder(ManualBorder),
    SetBrightness(f32),
    SetContrast(f32),
    SetSaturation(f32),
    /// Grow the cell to paper minus margins.
    MaximizeCell,
    ConfirmCrop(Raster),
    BackToCrop,
}

/// DPI choices offered for export.
pub const EXPORT_DPI_RANGE: (f64, f64) = (200.0, 600.0);

fn clamp_percent(value: f32) -> f32 {
    value.clamp(0.0, 200.0)
}

/// Apply one action to the session.
pub fn reduce(mut session: Session, action: Action) -> Session {
    match action {
        Action::SelectPaper(paper) => {
            // Selecting a profile overwrites the active margin/gap with
            // its defaults.
            session.layout.margin = paper.default_margin;
            session.layout.gap = paper.default_gap;
            session.layout.paper = paper;
        }
        Action::SetUnit(unit) => {
            // Convert, don't relabel: the physical sizes stay the same.
            session.layout.cell.width = session.layout.cell.width.convert_to(unit);
            session.layout.cell.height = session.layout.cell.height.convert_to(unit);
            session.layout.margin = session.layout.margin.convert_to(unit);
            session.layout.gap = session.layout.gap.convert_to(unit);
            session.unit = unit;
        }
        Action::SetCellSize { width, height } => {
            session.layout.cell = CellSpec::new(
                PhysicalDimension {
                    value: width,
                    unit: session.unit,
                },
                PhysicalDimension {
                    value: height,
                    unit: session.unit,
                },
            );
        }
        Action::SetMargin(value) => {
            session.layout.margin = PhysicalDimension {
                value,
                unit: session.unit,
            };
        }
        Action::SetGap(value) => {
            session.layout.gap = PhysicalDimension {
                value,
                unit: session.unit,
            };
        }
        Action::SetCopies(copies) => {
            session.layout.copies = copies;
        }
        Action::SetExportDpi(dpi) => {
            session.export_dpi = dpi.clamp(EXPORT_DPI_RANGE.0, EXPORT_DPI_RANGE.1);
        }
        Action::SelectFrame(id) => {
            // Resolve through the catalog so a stale id degrades to the
            // sentinel instead of rendering nothing.
            session.selected_frame = frames::by_id(&id).id;
        }
        Action::SetManualBorder(border) => {
            session.manual_border = border;
        }
        Action::SetBrightness(value) => {
            session.adjustments.brightness = clamp_percent(value);
        }
        Action::SetContrast(value) => {
            session.adjustments.contrast = clamp_percent(value);
        }
        Action::SetSaturation(value) => {
            session.adjustments.saturation = clamp_percent(value);
        }
        Action::MaximizeCell => {
            session.layout.cell = maximize_cell(&session.layout);
        }
        Action::ConfirmCrop(raster) => {
            // Transition to layout only on a usable crop.
            if !raster.is_empty() {
                session.cropped = Some(raster);
                session.step = Step::Layout;
            }
        }
        Action::BackToCrop => {
            session.cropped = None;
            session.step = Step::Crop;
        }
    }
    session
}

impl Session {
    /// The grid for the current layout at the preview density. Always
    /// recomputed; never cached.
    pub fn grid(&self) -> GridResult {
        compute_grid(&self.layout, DPCM_96)
    }

    /// The selected frame, resolved from the catalog.
    pub fn frame(&self) -> FrameDescriptor {
        frames::by_id(&self.selected_frame)
    }

    /// Manual border controls apply only while the sentinel frame is
    /// selected.
    pub fn manual_border_active(&self) -> bool {
        self.selected_frame == NONE_FRAME_ID
    }

    /// The manual border to hand the compositor, or None when a catalog
    /// frame owns the decoration or the stroke is zero.
    pub fn manual_border_for_render(&self) -> Option<ManualBorder> {
        if self.manual_border_active() && self.manual_border.thickness_px > 0.0 {
            Some(self.manual_border)
        } else {
            None
        }
    }

    /// Pixel resolution a confirmed crop should be rasterized at: the cell
    /// size at the export DPI.
    pub fn crop_resolution(&self) -> (u32, u32) {
        output_resolution(
            self.layout.cell.width,
            self.layout.cell.height,
            self.export_dpi,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgba;

    fn session() -> Session {
        Session::default()
    }

    #[test]
    fn test_defaults() {
        let s = session();
        assert_eq!(s.step, Step::Crop);
        assert_eq!(s.unit, Unit::Cm);
        assert_eq!(s.export_dpi, 300.0);
        assert_eq!(s.selected_frame, NONE_FRAME_ID);
        assert!(s.cropped.is_none());
        assert!(s.manual_border_active());
    }

    #[test]
    fn test_select_paper_overwrites_margin_and_gap() {
        let mut s = session();
        s = reduce(s, Action::SetMargin(3.0));
        assert_eq!(s.layout.margin.value, 3.0);

        s = reduce(s, Action::SelectPaper(PaperProfile::four_by_six()));
        assert_eq!(s.layout.paper.name, "4x6 inches");
        assert_eq!(s.layout.margin, PhysicalDimension::inches(0.32));
        assert_eq!(s.layout.gap, PhysicalDimension::inches(0.2));
    }

    #[test]
    fn test_unit_toggle_converts_values() {
        let mut s = session();
        s = reduce(
            s,
            Action::SetCellSize {
                width: 2.54,
                height: 5.08,
            },
        );
        s = reduce(s, Action::SetUnit(Unit::In));

        assert_eq!(s.unit, Unit::In);
        assert_eq!(s.layout.cell.width.unit, Unit::In);
        assert!((s.layout.cell.width.value - 1.0).abs() < 1e-9);
        assert!((s.layout.cell.height.value - 2.0).abs() < 1e-9);
        // Margin converted too (was 1cm)
        assert!((s.layout.margin.value - 1.0 / 2.54).abs() < 1e-9);
    }

    #[test]
    fn test_unit_toggle_roundtrip_preserves_intent() {
        let mut s = session();
        s = reduce(s, Action::SetUnit(Unit::In));
        s = reduce(s, Action::SetUnit(Unit::Cm));
        assert!((s.layout.cell.width.value - 3.5).abs() < 1e-9);
        assert!((s.layout.cell.height.value - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_dimension_edits_use_session_unit() {
        let mut s = session();
        s = reduce(s, Action::SetUnit(Unit::In));
        s = reduce(s, Action::SetMargin(0.5));
        assert_eq!(s.layout.margin, PhysicalDimension::inches(0.5));
        s = reduce(s, Action::SetGap(0.1));
        assert_eq!(s.layout.gap, PhysicalDimension::inches(0.1));
    }

    #[test]
    fn test_adjustments_clamped() {
        let mut s = session();
        s = reduce(s, Action::SetBrightness(250.0));
        assert_eq!(s.adjustments.brightness, 200.0);
        s = reduce(s, Action::SetContrast(-10.0));
        assert_eq!(s.adjustments.contrast, 0.0);
        s = reduce(s, Action::SetSaturation(130.0));
        assert_eq!(s.adjustments.saturation, 130.0);
    }

    #[test]
    fn test_export_dpi_clamped_to_offered_range() {
        let mut s = session();
        s = reduce(s, Action::SetExportDpi(1200.0));
        assert_eq!(s.export_dpi, 600.0);
        s = reduce(s, Action::SetExportDpi(72.0));
        assert_eq!(s.export_dpi, 200.0);
        s = reduce(s, Action::SetExportDpi(400.0));
        assert_eq!(s.export_dpi, 400.0);
    }

    #[test]
    fn test_frame_selection_toggles_manual_border() {
        let mut s = session();
        assert!(s.manual_border_active());

        s = reduce(s, Action::SelectFrame("real-gold".to_string()));
        assert!(!s.manual_border_active());
        assert!(s.manual_border_for_render().is_none());
        assert_eq!(s.frame().overlay_asset(), Some("real-gold"));

        // Back to the sentinel: manual border controls reactivate and the
        // overlay is gone from the next render's inputs.
        s = reduce(s, Action::SelectFrame(NONE_FRAME_ID.to_string()));
        assert!(s.manual_border_active());
        assert!(s.manual_border_for_render().is_some());
        assert!(s.frame().overlay_asset().is_none());
    }

    #[test]
    fn test_zero_width_manual_border_not_rendered() {
        let mut s = session();
        s = reduce(
            s,
            Action::SetManualBorder(ManualBorder {
                thickness_px: 0.0,
                color: Rgba::BLACK,
            }),
        );
        assert!(s.manual_border_for_render().is_none());
    }

    #[test]
    fn test_unknown_frame_id_degrades_to_none() {
        let mut s = session();
        s = reduce(s, Action::SelectFrame("deleted-frame".to_string()));
        assert_eq!(s.selected_frame, NONE_FRAME_ID);
    }

    #[test]
    fn test_confirm_crop_transitions_to_layout() {
        let mut s = session();
        s = reduce(s, Action::ConfirmCrop(Raster::filled(10, 10, [1, 1, 1, 255])));
        assert_eq!(s.step, Step::Layout);
        assert!(s.cropped.is_some());
    }

    #[test]
    fn test_confirm_crop_ignores_empty_raster() {
        let mut s = session();
        s = reduce(s, Action::ConfirmCrop(Raster::transparent(0, 0)));
        assert_eq!(s.step, Step::Crop);
        assert!(s.cropped.is_none());
    }

    #[test]
    fn test_back_to_crop_discards_cropped_image() {
        let mut s = session();
        s = reduce(s, Action::ConfirmCrop(Raster::filled(10, 10, [1, 1, 1, 255])));
        s = reduce(s, Action::BackToCrop);
        assert_eq!(s.step, Step::Crop);
        assert!(s.cropped.is_none());
    }

    #[test]
    fn test_maximize_cell() {
        let mut s = session();
        s = reduce(s, Action::MaximizeCell);
        assert!((s.layout.cell.width.value - 19.0).abs() < 1e-9);
        assert!((s.layout.cell.height.value - 27.7).abs() < 1e-9);
    }

    #[test]
    fn test_grid_recomputed_from_state() {
        let mut s = session();
        assert_eq!(s.grid().capacity, 20);

        s = reduce(s, Action::SetCopies(5));
        assert_eq!(s.grid().rendered, 5);

        s = reduce(
            s,
            Action::SetCellSize {
                width: 25.0,
                height: 30.0,
            },
        );
        assert!(s.grid().is_unrenderable());
    }

    #[test]
    fn test_crop_resolution_follows_cell_and_dpi() {
        let s = session();
        // 3.5×4.5cm at 300 DPI
        assert_eq!(s.crop_resolution(), (413, 531));

        let s = reduce(s, Action::SetExportDpi(600.0));
        assert_eq!(s.crop_resolution(), (827, 1063));
    }

    #[test]
    fn test_reduce_is_pure_on_unrelated_fields() {
        let s = session();
        let before = s.clone();
        let after = reduce(s, Action::SetCopies(7));
        assert_eq!(after.adjustments, before.adjustments);
        assert_eq!(after.selected_frame, before.selected_frame);
        assert_eq!(after.layout.cell, before.layout.cell);
    }
}
