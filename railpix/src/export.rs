//! Plain-text coordinate listing: one `x elevation y` triple per line.
//!
//! Lines are written in ascending `(x, y)` order. Reading is lenient about
//! blank lines and lines that do not have three fields, and strict about the
//! fields themselves.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::error::RasterError;
use crate::model::CellSet;

pub fn to_coordinate_text(cells: &CellSet, elevation: i32) -> String {
    let mut out = String::with_capacity(cells.len() * 12);
    for c in cells.sorted() {
        let _ = writeln!(out, "{} {} {}", c.x, elevation, c.y);
    }
    out
}

pub fn write_coordinates<W: Write>(mut w: W, cells: &CellSet, elevation: i32) -> io::Result<()> {
    for c in cells.sorted() {
        writeln!(w, "{} {} {}", c.x, elevation, c.y)?;
    }
    w.flush()
}

/// Parse `x elevation y` lines back into `[x, elevation, y]` triples.
///
/// `line` in `MalformedCoordinates` is 1-based.
pub fn parse_coordinates(text: &str) -> Result<Vec<[i32; 3]>, RasterError> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 3 {
            continue;
        }
        let mut triple = [0i32; 3];
        for (slot, part) in triple.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| RasterError::MalformedCoordinates {
                    line: idx + 1,
                    content: line.trim().to_string(),
                })?;
        }
        out.push(triple);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Cell;

    fn set(v: &[(i32, i32)]) -> CellSet {
        v.iter().map(|&p| Cell::from(p)).collect()
    }

    #[test]
    fn text_is_sorted_by_x_then_y() {
        let cells = set(&[(2, -1), (-3, 4), (2, -5)]);
        assert_eq!(to_coordinate_text(&cells, 7), "-3 7 4\n2 7 -5\n2 7 -1\n");
    }

    #[test]
    fn writer_matches_string_form() {
        let cells = set(&[(0, 0), (1, 0), (1, 1)]);
        let mut buf = Vec::new();
        write_coordinates(&mut buf, &cells, -2).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_coordinate_text(&cells, -2));
    }

    #[test]
    fn parse_skips_short_lines() {
        let text = "1 64 2\n\n# header\n3 64 4 extra\n-5 0 6\n";
        assert_eq!(parse_coordinates(text).unwrap(), vec![[1, 64, 2], [-5, 0, 6]]);
    }

    #[test]
    fn parse_rejects_non_integers() {
        let err = parse_coordinates("1 2 3\n4 0.0 5\n").unwrap_err();
        assert_eq!(
            err,
            RasterError::MalformedCoordinates {
                line: 2,
                content: "4 0.0 5".into()
            }
        );
    }

    #[test]
    fn empty_set_gives_empty_text() {
        assert_eq!(to_coordinate_text(&CellSet::new(), 0), "");
    }
}
