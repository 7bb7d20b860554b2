//! Midpoint-style quarter circle rasterization and its run-length encoding.
//!
//! The first octant is walked from `(r, 0)` with `y` increasing until the
//! walk crosses the diagonal. `x` only changes on the south-east step, so
//! the octant splits into runs of constant `x`; the second octant is the
//! mirror image and its runs are the first octant's in reverse.

use std::fmt;
use std::ops::Range;

use crate::error::RasterError;
use crate::geometry::limits;
use crate::model::{Cell, CellSet};

/// Boundary of the `x >= 0, y >= 0` quarter of a circle of integer radius.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuarterCircle {
    pub radius: u32,
    /// First-octant cells in walk order, `(r, 0)` first.
    pub octant: Vec<Cell>,
    /// Lengths of the constant-`x` runs of `octant`.
    pub runs: Vec<u32>,
    /// `octant` together with its reflection about `x = y`.
    pub boundary: CellSet,
    /// `runs` followed by `runs` reversed.
    pub segments: Vec<u32>,
}

/// Walk the first octant, returning its cells and run lengths.
pub fn octant_runs(radius: u32) -> (Vec<Cell>, Vec<u32>) {
    if radius == 0 {
        return (Vec::new(), Vec::new());
    }
    let mut x = radius as i64;
    let mut y: i64 = 0;
    let mut d: i64 = 1 - x;
    let mut cells = Vec::new();
    let mut runs = Vec::new();
    let mut current: u32 = 0;
    while x >= y {
        cells.push(Cell {
            x: x as i32,
            y: y as i32,
        });
        current += 1;
        if d < 0 {
            d += 2 * y + 3;
        } else {
            d += 2 * (y - x) + 5;
            runs.push(current);
            current = 0;
            x -= 1;
        }
        y += 1;
    }
    if current > 0 {
        runs.push(current);
    }
    (cells, runs)
}

pub fn quarter_circle(radius: i64) -> Result<QuarterCircle, RasterError> {
    let radius = limits::check_radius(radius)?;
    let (octant, runs) = octant_runs(radius);

    let mut boundary: CellSet = octant.iter().copied().collect();
    boundary.extend(octant.iter().map(|c| c.transposed()));

    let mut segments = runs.clone();
    segments.extend(runs.iter().rev());

    log::debug!(
        "quarter circle r={} octant={} runs={} boundary={}",
        radius,
        octant.len(),
        runs.len(),
        boundary.len()
    );
    Ok(QuarterCircle {
        radius,
        octant,
        runs,
        boundary,
        segments,
    })
}

impl QuarterCircle {
    /// Index range into `octant` covered by each run, in run order.
    pub fn run_spans(&self) -> Vec<Range<usize>> {
        let mut start = 0;
        self.runs
            .iter()
            .map(|&len| {
                let end = start + len as usize;
                let span = start..end;
                start = end;
                span
            })
            .collect()
    }

    /// `"<n> segments: a b c"`.
    pub fn summary(&self) -> String {
        format!("{} segments: {}", self.segments.len(), self)
    }

    /// Segment lengths concatenated with no separator.
    pub fn compact(&self) -> String {
        self.segments.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for QuarterCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}
