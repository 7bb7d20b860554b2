//! Single-segment pipeline: sample, snap to cells, enforce 4-connectivity.

use serde::Serialize;

use crate::algorithms::{band, connectivity, sampler};
use crate::error::RasterError;
use crate::geometry::cubic::CubicBezier;
use crate::model::{CellSet, CurveSpec, Path, SegmentMode, Vec2};

/// Centerline of a Bézier segment with the geometry it was traced from.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierRaster {
    pub path: Path,
    pub samples: Vec<Vec2>,
    pub controls: CubicBezier,
}

/// Centerline of a segment of either mode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentRaster {
    pub mode: SegmentMode,
    pub path: Path,
    pub samples: Vec<Vec2>,
    /// `[p0, p1, p2, p3]`, Bézier segments only.
    pub controls: Option<[Vec2; 4]>,
}

fn centerline(cells: &[crate::model::Cell]) -> Result<Path, RasterError> {
    let raw = connectivity::dedup_first_seen(cells);
    connectivity::enforce(&raw)
}

pub fn rasterize_line(p0: Vec2, p1: Vec2, samples_per_unit: f64) -> Result<Path, RasterError> {
    let spec = CurveSpec::line(p0, p1).with_samples_per_unit(samples_per_unit);
    sampler::validate(&spec)?;
    let samples = sampler::sample_line(p0, p1, samples_per_unit)?;
    let path = centerline(&samples.cells)?;
    log::debug!(
        "line: {} samples -> {} cells",
        samples.points.len(),
        path.len()
    );
    Ok(path)
}

pub fn rasterize_bezier(spec: &CurveSpec) -> Result<BezierRaster, RasterError> {
    let spec = CurveSpec {
        mode: SegmentMode::Bezier,
        ..*spec
    };
    sampler::validate(&spec)?;
    let controls = sampler::control_polygon(&spec);
    let samples = sampler::sample_bezier(&spec, &controls)?;
    let path = centerline(&samples.cells)?;
    log::debug!(
        "bezier: {} samples -> {} cells",
        samples.points.len(),
        path.len()
    );
    Ok(BezierRaster {
        path,
        samples: samples.points,
        controls,
    })
}

/// Rasterize according to `spec.mode`.
pub fn rasterize_segment(spec: &CurveSpec) -> Result<SegmentRaster, RasterError> {
    match spec.mode {
        SegmentMode::Line => {
            sampler::validate(spec)?;
            let samples = sampler::sample_line(spec.start, spec.end, spec.samples_per_unit)?;
            let path = centerline(&samples.cells)?;
            Ok(SegmentRaster {
                mode: SegmentMode::Line,
                path,
                samples: samples.points,
                controls: None,
            })
        }
        SegmentMode::Bezier => {
            let r = rasterize_bezier(spec)?;
            Ok(SegmentRaster {
                mode: SegmentMode::Bezier,
                path: r.path,
                samples: r.samples,
                controls: Some(r.controls.points()),
            })
        }
    }
}

/// Widen a centerline into a band of the given width.
pub fn expand_band(path: &Path, width: u32) -> Result<CellSet, RasterError> {
    let set = band::expand_cells(path, width)?;
    log::debug!("band: {} cells x width {} -> {}", path.len(), width, set.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::tangent::Tangent;
    use crate::model::Cell;

    #[test]
    fn horizontal_line() {
        let path = rasterize_line(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), 1.0).unwrap();
        let expected: Vec<Cell> = (0..=5).map(|x| Cell::new(x, 0)).collect();
        assert_eq!(path.cells(), &expected[..]);
    }

    #[test]
    fn diagonal_line_is_four_connected() {
        let path = rasterize_line(Vec2::new(0.0, 0.0), Vec2::new(7.0, 3.0), 1.0).unwrap();
        assert_eq!(path.first(), Cell::new(0, 0));
        assert_eq!(path.last(), Cell::new(7, 3));
        for w in path.cells().windows(2) {
            assert!(w[0].is_four_adjacent(w[1]));
        }
        // Manhattan distance is the minimum for a monotone staircase.
        assert_eq!(path.len(), 11);
    }

    #[test]
    fn line_rejects_bad_density() {
        let err = rasterize_line(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 0.0).unwrap_err();
        assert_eq!(err.code(), "out_of_range");
    }

    #[test]
    fn bezier_returns_controls_and_samples() {
        let spec = CurveSpec::bezier(
            Vec2::new(0.0, 0.0),
            Vec2::new(30.0, 30.0),
            Tangent::Slope(0.0),
            Tangent::Vertical,
        );
        let r = rasterize_bezier(&spec).unwrap();
        assert_eq!(r.controls.p0, spec.start);
        assert_eq!(r.controls.p3, spec.end);
        assert_eq!(r.samples.first(), Some(&spec.start));
        assert_eq!(r.path.first(), Cell::new(0, 0));
        assert_eq!(r.path.last(), Cell::new(30, 30));
    }

    #[test]
    fn segment_dispatches_on_mode() {
        let line = CurveSpec::line(Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0));
        let r = rasterize_segment(&line).unwrap();
        assert_eq!(r.mode, SegmentMode::Line);
        assert!(r.controls.is_none());
        assert_eq!(r.path.len(), 4);

        let curve = CurveSpec::bezier(
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Tangent::Slope(1.0),
            Tangent::Slope(-1.0),
        );
        let r = rasterize_segment(&curve).unwrap();
        assert_eq!(r.mode, SegmentMode::Bezier);
        assert!(r.controls.is_some());
    }

    #[test]
    fn band_of_width_one_matches_path() {
        let path = rasterize_line(Vec2::new(-2.0, 1.0), Vec2::new(3.0, -4.0), 1.0).unwrap();
        assert_eq!(expand_band(&path, 1).unwrap(), path.to_cell_set());
    }
}
