// Centralized input limits; every public entry point validates against these

use crate::error::RasterError;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 = 10_000_000.0;

// Circle radius above which the arc is no longer worth rendering
pub const MAX_RADIUS: i64 = 999;

// Band widths
pub const MAX_BAND_WIDTH: u32 = 255;

// Samples per curve (N + 1 points are evaluated)
pub const MAX_SAMPLES: u64 = 1_000_000;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool {
    x.is_finite() && (COORD_MIN..=COORD_MAX).contains(&x)
}

pub fn check_finite(param: &'static str, v: f64) -> Result<f64, RasterError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RasterError::NonFinite(param))
    }
}

pub fn check_coord(param: &'static str, v: f64) -> Result<f64, RasterError> {
    check_finite(param, v)?;
    if in_coord_bounds(v) {
        Ok(v)
    } else {
        Err(RasterError::OutOfRange {
            param,
            min: COORD_MIN,
            max: COORD_MAX,
            got: v,
        })
    }
}

/// Grid coordinate held to the same bounds as continuous coordinates.
pub fn check_cell(param: &'static str, v: i32) -> Result<i32, RasterError> {
    check_coord(param, v as f64).map(|_| v)
}

/// Strictly positive and finite, e.g. sampling density or curvature divisor.
pub fn check_positive(param: &'static str, v: f64) -> Result<f64, RasterError> {
    check_finite(param, v)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(RasterError::OutOfRange {
            param,
            min: f64::MIN_POSITIVE,
            max: f64::MAX,
            got: v,
        })
    }
}

pub fn check_width(width: u32) -> Result<u32, RasterError> {
    if (1..=MAX_BAND_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(RasterError::InvalidWidth {
            width,
            max: MAX_BAND_WIDTH,
        })
    }
}

pub fn check_radius(radius: i64) -> Result<u32, RasterError> {
    if (0..=MAX_RADIUS).contains(&radius) {
        Ok(radius as u32)
    } else {
        Err(RasterError::InvalidRadius {
            radius,
            max: MAX_RADIUS,
        })
    }
}
