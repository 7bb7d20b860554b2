//! Two-segment composition through a via-point.

use serde::{Deserialize, Serialize};

use crate::error::RasterError;
use crate::geometry::tangent::Tangent;
use crate::model::{CellSet, CurveSpec, Vec2};
use crate::raster::{expand_band, rasterize_segment, SegmentRaster};

/// Intermediate point a composed curve must pass through.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViaPoint {
    pub at: Vec2,
    /// Direction at the via-point; defaults to the mean of the free-end tangents.
    #[serde(default)]
    pub tangent: Option<Tangent>,
}

/// Both halves and the union of their bands.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    pub halves: [SegmentRaster; 2],
    pub cells: CellSet,
}

/// Re-anchor two specs on a via-point.
///
/// `first` keeps its start and start tangent, `second` keeps its end and end
/// tangent. The shared tangent at the via-point is `via.tangent` or the mean
/// of those two free-end tangents.
pub fn split_at_via(first: &CurveSpec, second: &CurveSpec, via: &ViaPoint) -> (CurveSpec, CurveSpec) {
    let shared = via
        .tangent
        .unwrap_or_else(|| Tangent::mean(first.start_tangent, second.end_tangent));
    let a = CurveSpec {
        end: via.at,
        end_tangent: shared,
        ..*first
    };
    let b = CurveSpec {
        start: via.at,
        start_tangent: shared,
        ..*second
    };
    (a, b)
}

pub fn compose_detailed(
    first: &CurveSpec,
    second: &CurveSpec,
    via: &ViaPoint,
    width: u32,
) -> Result<Composition, RasterError> {
    let (a, b) = split_at_via(first, second, via);
    let ra = rasterize_segment(&a)?;
    let rb = rasterize_segment(&b)?;
    let cells = expand_band(&ra.path, width)?.union(expand_band(&rb.path, width)?);
    log::debug!(
        "composed via ({}, {}): {} + {} centerline cells -> {}",
        via.at.x,
        via.at.y,
        ra.path.len(),
        rb.path.len(),
        cells.len()
    );
    Ok(Composition {
        halves: [ra, rb],
        cells,
    })
}

/// Rasterize `first` up to the via-point and `second` from it, and union the bands.
pub fn compose_two_segment(
    first: &CurveSpec,
    second: &CurveSpec,
    via: &ViaPoint,
    width: u32,
) -> Result<CellSet, RasterError> {
    Ok(compose_detailed(first, second, via, width)?.cells)
}
