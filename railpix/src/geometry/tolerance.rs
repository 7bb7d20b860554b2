// Tolerances for continuous geometry

pub const EPS_LEN: f64 = 1e-9; // zero-length chord / vector threshold

#[inline]
pub fn near_zero(x: f64, eps: f64) -> bool {
    x.abs() <= eps
}

#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Unit vector and length; zero vector for lengths at or below `EPS_LEN`.
#[inline]
pub fn norm2(x: f64, y: f64) -> ((f64, f64), f64) {
    let len = x.hypot(y);
    if len > EPS_LEN {
        ((x / len, y / len), len)
    } else {
        ((0.0, 0.0), 0.0)
    }
}
