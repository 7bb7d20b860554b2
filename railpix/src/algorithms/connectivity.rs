//! 4-connected stepping between sampled cells.
//!
//! Each gap is closed with an axis-priority staircase: x first, then y. This
//! is not a minimal Bresenham line.

use std::collections::HashSet;

use crate::error::RasterError;
use crate::geometry::limits::{self, MAX_SAMPLES};
use crate::model::{Cell, Path};

/// One unit step from `from` toward `to`, x axis first.
#[inline]
fn step_towards(from: Cell, to: Cell) -> Cell {
    if from.x != to.x {
        Cell {
            x: from.x + (to.x as i64 - from.x as i64).signum() as i32,
            y: from.y,
        }
    } else if from.y != to.y {
        Cell {
            x: from.x,
            y: from.y + (to.y as i64 - from.y as i64).signum() as i32,
        }
    } else {
        from
    }
}

/// Drop repeated cells, keeping the first occurrence of each.
pub fn dedup_first_seen(cells: &[Cell]) -> Vec<Cell> {
    let mut seen = HashSet::with_capacity(cells.len());
    cells.iter().copied().filter(|c| seen.insert(*c)).collect()
}

/// Rewrite `waypoints` so consecutive cells are exactly one axis step apart.
///
/// Waypoints are visited in order. An empty input gives an empty output.
pub fn enforce_4connectivity(waypoints: &[Cell]) -> Vec<Cell> {
    let Some(&first) = waypoints.first() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(waypoints.len() * 2);
    out.push(first);
    for &target in &waypoints[1..] {
        let mut cur = out[out.len() - 1];
        while cur != target {
            cur = step_towards(cur, target);
            out.push(cur);
        }
    }
    out.dedup();
    out
}

/// `enforce_4connectivity` wrapped into a `Path`.
pub fn enforce(waypoints: &[Cell]) -> Result<Path, RasterError> {
    Path::from_connected(enforce_4connectivity(waypoints))
}

/// Number of cells `enforce_4connectivity` can emit for `waypoints`, at most.
pub fn staircase_len(waypoints: &[Cell]) -> u64 {
    let gaps: u64 = waypoints
        .windows(2)
        .map(|w| {
            (w[1].x as i64 - w[0].x as i64).unsigned_abs()
                + (w[1].y as i64 - w[0].y as i64).unsigned_abs()
        })
        .sum();
    gaps + waypoints.len().min(1) as u64
}

/// `enforce` for caller-supplied cells: coordinates must be within the
/// coordinate limits and the stitched path within `MAX_SAMPLES` cells.
pub fn enforce_checked(waypoints: &[Cell]) -> Result<Path, RasterError> {
    for c in waypoints {
        limits::check_cell("cell.x", c.x)?;
        limits::check_cell("cell.y", c.y)?;
    }
    let len = staircase_len(waypoints);
    if len > MAX_SAMPLES {
        return Err(RasterError::TooManySamples {
            requested: len,
            max: MAX_SAMPLES,
        });
    }
    enforce(waypoints)
}
