use serde::{Deserialize, Serialize};
use std::collections::hash_set;
use std::collections::HashSet;

use crate::error::RasterError;
use crate::geometry::tangent::Tangent;

/// A point in continuous design space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Exact at both ends: `lerp(a, b, 0) == a` and `lerp(a, b, 1) == b`.
    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        let mt = 1.0 - t;
        Vec2 {
            x: mt * self.x + t * other.x,
            y: mt * self.y + t * other.y,
        }
    }

    /// Nearest grid cell, rounding each axis with `floor(v + 0.5)`.
    pub fn to_cell(self) -> Cell {
        Cell {
            x: (self.x + 0.5).floor() as i32,
            y: (self.y + 0.5).floor() as i32,
        }
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2 { x, y }
    }
}

/// One discrete grid position.
///
/// Ordering is lexicographic on `(x, y)`, which is the order used for export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Reflection about the line x = y.
    pub const fn transposed(self) -> Cell {
        Cell { x: self.y, y: self.x }
    }

    /// True when `other` is exactly one unit away on exactly one axis.
    pub fn is_four_adjacent(self, other: Cell) -> bool {
        let dx = (other.x as i64 - self.x as i64).abs();
        let dy = (other.y as i64 - self.y as i64).abs();
        dx + dy == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell { x, y }
    }
}

/// How a segment is traced between its endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentMode {
    #[default]
    Bezier,
    Line,
}

impl SegmentMode {
    pub fn default_samples_per_unit(self) -> f64 {
        match self {
            SegmentMode::Bezier => 1.5,
            SegmentMode::Line => 1.0,
        }
    }
}

pub const DEFAULT_CURVATURE: f64 = 3.0;

/// Immutable description of one segment to rasterize.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    pub start: Vec2,
    pub end: Vec2,
    pub start_tangent: Tangent,
    pub end_tangent: Tangent,
    /// Control points sit `chord / curvature` away from their endpoint.
    pub curvature: f64,
    pub samples_per_unit: f64,
    pub mode: SegmentMode,
}

impl CurveSpec {
    pub fn bezier(start: Vec2, end: Vec2, start_tangent: Tangent, end_tangent: Tangent) -> Self {
        CurveSpec {
            start,
            end,
            start_tangent,
            end_tangent,
            curvature: DEFAULT_CURVATURE,
            samples_per_unit: SegmentMode::Bezier.default_samples_per_unit(),
            mode: SegmentMode::Bezier,
        }
    }

    pub fn line(start: Vec2, end: Vec2) -> Self {
        CurveSpec {
            start,
            end,
            start_tangent: Tangent::Slope(0.0),
            end_tangent: Tangent::Slope(0.0),
            curvature: DEFAULT_CURVATURE,
            samples_per_unit: SegmentMode::Line.default_samples_per_unit(),
            mode: SegmentMode::Line,
        }
    }

    pub fn with_curvature(mut self, curvature: f64) -> Self {
        self.curvature = curvature;
        self
    }

    pub fn with_samples_per_unit(mut self, samples_per_unit: f64) -> Self {
        self.samples_per_unit = samples_per_unit;
        self
    }

    pub fn chord(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A non-empty, 4-connected run of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Wrap cells that are already 4-connected.
    ///
    /// Fails with `EmptyPath` on an empty list. Connectivity is checked in
    /// debug builds only; use `connectivity::enforce` for arbitrary input.
    pub fn from_connected(cells: Vec<Cell>) -> Result<Self, RasterError> {
        if cells.is_empty() {
            return Err(RasterError::EmptyPath);
        }
        debug_assert!(cells.windows(2).all(|w| w[0].is_four_adjacent(w[1])));
        Ok(Path { cells })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn first(&self) -> Cell {
        self.cells[0]
    }

    pub fn last(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a `Path` holds at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    pub fn to_cell_set(&self) -> CellSet {
        self.cells.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Unordered set of cells. Use `sorted` for a stable listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn union(mut self, other: CellSet) -> CellSet {
        self.cells.extend(other.cells);
        self
    }

    /// Cells in ascending `(x, y)` order.
    pub fn sorted(&self) -> Vec<Cell> {
        let mut out: Vec<Cell> = self.cells.iter().copied().collect();
        out.sort_unstable();
        out
    }

    /// Inclusive bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> Option<(i32, i32, i32, i32)> {
        let mut it = self.cells.iter();
        let first = it.next()?;
        let mut b = (first.x, first.y, first.x, first.y);
        for c in it {
            b.0 = b.0.min(c.x);
            b.1 = b.1.min(c.y);
            b.2 = b.2.max(c.x);
            b.3 = b.3.max(c.y);
        }
        Some(b)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        CellSet {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = hash_set::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
