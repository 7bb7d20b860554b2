//! Widening a centerline into a band.
//!
//! The band is a dilation with a `(2h + 1)²` square, `h = width / 2`, so even
//! widths come out one cell wider than asked. Bends can look uneven; this is
//! not a perpendicular offset.

use crate::error::RasterError;
use crate::geometry::limits;
use crate::model::{Cell, CellSet};

pub fn expand_cells<'a, I>(centerline: I, width: u32) -> Result<CellSet, RasterError>
where
    I: IntoIterator<Item = &'a Cell>,
{
    let half = (limits::check_width(width)? / 2) as i32;
    let mut out = CellSet::new();
    for c in centerline {
        limits::check_cell("cell.x", c.x)?;
        limits::check_cell("cell.y", c.y)?;
        for dx in -half..=half {
            for dy in -half..=half {
                out.insert(Cell {
                    x: c.x + dx,
                    y: c.y + dy,
                });
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_one_is_identity() {
        let line = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1)];
        let set = expand_cells(&line, 1).unwrap();
        assert_eq!(set.sorted(), line.to_vec());
    }

    #[test]
    fn width_three_is_a_square_per_cell() {
        let set = expand_cells(&[Cell::new(5, 5)], 3).unwrap();
        assert_eq!(set.len(), 9);
        assert_eq!(set.bounds(), Some((4, 4, 6, 6)));
    }

    #[test]
    fn even_width_rounds_up_to_odd_block() {
        let two = expand_cells(&[Cell::new(0, 0)], 2).unwrap();
        let three = expand_cells(&[Cell::new(0, 0)], 3).unwrap();
        assert_eq!(two, three);
    }

    #[test]
    fn cells_past_coordinate_limits_are_rejected() {
        let err = expand_cells(&[Cell::new(i32::MAX, 0)], 3).unwrap_err();
        assert!(
            matches!(err, RasterError::OutOfRange { param: "cell.x", .. }),
            "{:?}",
            err
        );
        let err = expand_cells(&[Cell::new(0, 0), Cell::new(0, i32::MIN)], 1).unwrap_err();
        assert_eq!(err.code(), "out_of_range");
    }

    #[test]
    fn overlapping_blocks_merge() {
        let set = expand_cells(&[Cell::new(0, 0), Cell::new(1, 0)], 3).unwrap();
        assert_eq!(set.len(), 12);
    }

    #[test]
    fn zero_and_huge_widths_are_rejected() {
        assert_eq!(
            expand_cells(&[Cell::new(0, 0)], 0),
            Err(RasterError::InvalidWidth { width: 0, max: limits::MAX_BAND_WIDTH })
        );
        assert!(expand_cells(&[Cell::new(0, 0)], 256).is_err());
    }
}
