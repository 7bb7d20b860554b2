use railpix::{QuarterCircle, TrackDesign};
use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;

pub use api::{expand_band_res, parse_tangent_res, rasterize_line_res};

/// Caller-owned session holding the most recent results.
#[wasm_bindgen]
pub struct Workbench {
    pub(crate) design: Option<TrackDesign>,
    pub(crate) circle: Option<QuarterCircle>,
}

impl Workbench {
    pub fn rs_new() -> Workbench {
        Workbench {
            design: None,
            circle: None,
        }
    }
    pub fn rs_cell_count(&self) -> usize {
        self.design.as_ref().map_or(0, |d| d.cells.len())
    }
    pub fn rs_export_text(&self) -> Option<String> {
        self.design.as_ref().map(|d| d.to_coordinate_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railpix::{design_track, TrackRequest, Vec2};

    #[test]
    fn workbench_tracks_last_design() {
        let mut wb = Workbench::rs_new();
        assert_eq!(wb.rs_cell_count(), 0);
        assert!(wb.rs_export_text().is_none());
        let mut req = TrackRequest::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0));
        req.mode = railpix::SegmentMode::Line;
        wb.design = Some(design_track(&req).unwrap());
        assert_eq!(wb.rs_cell_count(), 3);
        assert_eq!(wb.rs_export_text().as_deref(), Some("0 0 0\n1 0 0\n2 0 0\n"));
    }
}
