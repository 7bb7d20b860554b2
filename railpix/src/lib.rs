//! Rasterization of lines, cubic Bézier arcs and quarter circles onto a
//! 4-connected integer grid.
//!
//! The pipeline is one-way: a [`CurveSpec`] is sampled, the samples are
//! snapped to cells, the cells are stitched into a 4-connected [`Path`], and
//! the path is widened into a [`CellSet`]. Quarter circles come from a
//! separate incremental walk in [`algorithms::circle`].

pub mod error;
pub mod export;
pub mod model;
pub mod raster;
pub mod track;
pub mod geometry {
    pub mod cubic;
    pub mod limits;
    pub mod tangent;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod band;
    pub mod circle;
    pub mod compose;
    pub mod connectivity;
    pub mod sampler;
}
mod json;

pub use algorithms::circle::QuarterCircle;
pub use algorithms::compose::{compose_two_segment, Composition, ViaPoint};
pub use error::RasterError;
pub use geometry::tangent::Tangent;
pub use json::{circle_to_json, design_to_json, request_from_json, request_from_value};
pub use model::{Cell, CellSet, CurveSpec, Path, SegmentMode, Vec2};
pub use raster::{expand_band, rasterize_bezier, rasterize_line, rasterize_segment, BezierRaster, SegmentRaster};
pub use track::{design_track, TrackDesign, TrackRequest};

/// Quarter circle boundary and its mirrored run-length encoding.
///
/// Radius 0 gives an empty result; negative radii and radii above
/// [`geometry::limits::MAX_RADIUS`] are rejected.
pub fn generate_quarter_circle(radius: i64) -> Result<QuarterCircle, RasterError> {
    algorithms::circle::quarter_circle(radius)
}
