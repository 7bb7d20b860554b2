//! Complete track generation request: one segment, or two through a via-point.

use serde::{Deserialize, Serialize};

use crate::algorithms::compose::{compose_detailed, ViaPoint};
use crate::error::RasterError;
use crate::export;
use crate::geometry::tangent::Tangent;
use crate::model::{CellSet, CurveSpec, SegmentMode, Vec2, DEFAULT_CURVATURE};
use crate::raster::{expand_band, rasterize_segment, SegmentRaster};

fn default_width() -> u32 {
    1
}

fn default_curvature() -> f64 {
    DEFAULT_CURVATURE
}

/// Parameters collected for one generation request.
///
/// In line mode the tangents, the via tangent and the curvature are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackRequest {
    pub start: Vec2,
    pub end: Vec2,
    #[serde(default)]
    pub start_tangent: Tangent,
    #[serde(default)]
    pub end_tangent: Tangent,
    #[serde(default)]
    pub mode: SegmentMode,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_curvature")]
    pub curvature: f64,
    /// Sampling density; the mode's default when absent.
    #[serde(default)]
    pub samples_per_unit: Option<f64>,
    /// Constant elevation written next to every exported cell.
    #[serde(default)]
    pub elevation: i32,
    #[serde(default)]
    pub via: Option<ViaPoint>,
}

impl TrackRequest {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        TrackRequest {
            start,
            end,
            start_tangent: Tangent::default(),
            end_tangent: Tangent::default(),
            mode: SegmentMode::default(),
            width: default_width(),
            curvature: default_curvature(),
            samples_per_unit: None,
            elevation: 0,
            via: None,
        }
    }

    /// The whole request as a single segment spec, before any via split.
    pub fn curve_spec(&self) -> CurveSpec {
        let density = self
            .samples_per_unit
            .unwrap_or_else(|| self.mode.default_samples_per_unit());
        let spec = match self.mode {
            SegmentMode::Line => CurveSpec::line(self.start, self.end),
            SegmentMode::Bezier => {
                CurveSpec::bezier(self.start, self.end, self.start_tangent, self.end_tangent)
                    .with_curvature(self.curvature)
            }
        };
        spec.with_samples_per_unit(density)
    }
}

/// Centerlines of every segment plus the widened cell set.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackDesign {
    pub segments: Vec<SegmentRaster>,
    pub cells: CellSet,
    pub elevation: i32,
}

impl TrackDesign {
    pub fn to_coordinate_text(&self) -> String {
        export::to_coordinate_text(&self.cells, self.elevation)
    }
}

pub fn design_track(req: &TrackRequest) -> Result<TrackDesign, RasterError> {
    let spec = req.curve_spec();
    let (segments, cells) = match req.via {
        None => {
            let seg = rasterize_segment(&spec)?;
            let cells = expand_band(&seg.path, req.width)?;
            (vec![seg], cells)
        }
        Some(via) => {
            let via = match req.mode {
                SegmentMode::Line => ViaPoint {
                    at: via.at,
                    tangent: None,
                },
                SegmentMode::Bezier => via,
            };
            let composed = compose_detailed(&spec, &spec, &via, req.width)?;
            (Vec::from(composed.halves), composed.cells)
        }
    };
    log::debug!(
        "track {:?}: {} segment(s), {} cells",
        req.mode,
        segments.len(),
        cells.len()
    );
    Ok(TrackDesign {
        segments,
        cells,
        elevation: req.elevation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cell;

    #[test]
    fn line_mode_ignores_curve_parameters() {
        let mut req = TrackRequest::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0));
        req.mode = SegmentMode::Line;
        req.start_tangent = Tangent::Vertical;
        req.curvature = -1.0;
        let design = design_track(&req).unwrap();
        assert_eq!(design.segments.len(), 1);
        assert_eq!(design.cells.len(), 5);
        assert!(design.segments[0].controls.is_none());
    }

    #[test]
    fn bezier_rejects_bad_curvature() {
        let mut req = TrackRequest::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0));
        req.curvature = 0.0;
        assert_eq!(design_track(&req).unwrap_err().code(), "out_of_range");
    }

    #[test]
    fn via_point_produces_two_segments() {
        let mut req = TrackRequest::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0));
        req.via = Some(ViaPoint {
            at: Vec2::new(10.0, 6.0),
            tangent: None,
        });
        req.width = 3;
        let design = design_track(&req).unwrap();
        assert_eq!(design.segments.len(), 2);
        assert_eq!(design.segments[0].path.last(), Cell::new(10, 6));
        assert_eq!(design.segments[1].path.first(), Cell::new(10, 6));
        assert!(design.cells.contains(&Cell::new(11, 7)));
    }

    #[test]
    fn coincident_via_degenerates_to_single_cells() {
        let p = Vec2::new(3.0, 3.0);
        let mut req = TrackRequest::new(p, p);
        req.via = Some(ViaPoint { at: p, tangent: None });
        let design = design_track(&req).unwrap();
        assert_eq!(design.cells.sorted(), vec![Cell::new(3, 3)]);
    }

    #[test]
    fn export_uses_elevation() {
        let mut req = TrackRequest::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0));
        req.mode = SegmentMode::Line;
        req.elevation = 64;
        let text = design_track(&req).unwrap().to_coordinate_text();
        assert_eq!(text, "0 64 0\n1 64 0\n2 64 0\n");
    }
}
