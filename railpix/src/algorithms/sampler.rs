//! Parametric sampling of line and cubic segments.
//!
//! A segment is evaluated at `t = i / N` for `i in 0..=N`, where `N` scales
//! with the chord length. Zero-length chords yield a single sample.

use crate::error::RasterError;
use crate::geometry::cubic::CubicBezier;
use crate::geometry::limits::{self, MAX_SAMPLES};
use crate::geometry::tolerance::{near_zero, EPS_LEN};
use crate::model::{Cell, CurveSpec, SegmentMode, Vec2};

pub const MIN_LINE_STEPS: u64 = 2;
pub const MIN_CURVE_STEPS: u64 = 4;

/// Continuous samples of a segment and their nearest cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Samples {
    pub points: Vec<Vec2>,
    pub cells: Vec<Cell>,
}

impl Samples {
    fn from_points(points: Vec<Vec2>) -> Self {
        let cells = points.iter().map(|p| p.to_cell()).collect();
        Samples { points, cells }
    }
}

/// Number of parametric steps for a chord: `max(min_steps, round(chord * density))`.
pub fn step_count(chord: f64, samples_per_unit: f64, min_steps: u64) -> Result<u64, RasterError> {
    let raw = (chord * samples_per_unit).round();
    if !raw.is_finite() || raw > MAX_SAMPLES as f64 {
        return Err(RasterError::TooManySamples {
            requested: if raw.is_finite() { raw as u64 } else { u64::MAX },
            max: MAX_SAMPLES,
        });
    }
    Ok((raw as u64).max(min_steps))
}

/// Validate the numeric parts of a spec before any evaluation.
pub fn validate(spec: &CurveSpec) -> Result<(), RasterError> {
    limits::check_coord("start.x", spec.start.x)?;
    limits::check_coord("start.y", spec.start.y)?;
    limits::check_coord("end.x", spec.end.x)?;
    limits::check_coord("end.y", spec.end.y)?;
    limits::check_positive("samples_per_unit", spec.samples_per_unit)?;
    if spec.mode == SegmentMode::Bezier {
        limits::check_positive("curvature", spec.curvature)?;
    }
    Ok(())
}

pub fn sample_line(p0: Vec2, p1: Vec2, samples_per_unit: f64) -> Result<Samples, RasterError> {
    let chord = p0.distance(p1);
    if near_zero(chord, EPS_LEN) {
        log::warn!("zero-length line at ({}, {}), using a single sample", p0.x, p0.y);
        return Ok(Samples::from_points(vec![p0]));
    }
    let n = step_count(chord, samples_per_unit, MIN_LINE_STEPS)?;
    let points = (0..=n)
        .map(|i| p0.lerp(p1, i as f64 / n as f64))
        .collect();
    Ok(Samples::from_points(points))
}

/// Build the control polygon for a Bézier spec; degenerate chords collapse to `start`.
pub fn control_polygon(spec: &CurveSpec) -> CubicBezier {
    if near_zero(spec.chord(), EPS_LEN) {
        return CubicBezier::new(spec.start, spec.start, spec.start, spec.start);
    }
    CubicBezier::from_tangents(
        spec.start,
        spec.end,
        spec.start_tangent,
        spec.end_tangent,
        spec.curvature,
    )
}

pub fn sample_bezier(spec: &CurveSpec, curve: &CubicBezier) -> Result<Samples, RasterError> {
    let chord = spec.chord();
    if near_zero(chord, EPS_LEN) {
        log::warn!(
            "zero-length curve at ({}, {}), using a single sample",
            spec.start.x,
            spec.start.y
        );
        return Ok(Samples::from_points(vec![spec.start]));
    }
    let n = step_count(chord, spec.samples_per_unit, MIN_CURVE_STEPS)?;
    let points = (0..=n).map(|i| curve.eval(i as f64 / n as f64)).collect();
    Ok(Samples::from_points(points))
}
