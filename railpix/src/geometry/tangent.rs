//! Endpoint tangent directions.
//!
//! A tangent is either a finite slope `dy/dx` or explicitly vertical. Text
//! input accepts the infinity spellings as vertical so that form values such
//! as `"inf"` keep working.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RasterError;
use crate::geometry::tolerance::norm2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TangentRepr", into = "TangentRepr")]
pub enum Tangent {
    Slope(f64),
    Vertical,
}

impl Default for Tangent {
    fn default() -> Self {
        Tangent::Slope(0.0)
    }
}

impl Tangent {
    /// Build from a numeric slope. Infinities map to `Vertical`, NaN is rejected.
    pub fn from_slope(k: f64) -> Result<Tangent, RasterError> {
        if k.is_nan() {
            Err(RasterError::MalformedTangent(k.to_string()))
        } else if k.is_infinite() {
            Ok(Tangent::Vertical)
        } else {
            Ok(Tangent::Slope(k))
        }
    }

    /// Unit direction: `(1, k) / |(1, k)|` for a slope, `(0, 1)` for vertical.
    pub fn unit_vector(self) -> (f64, f64) {
        match self {
            Tangent::Vertical => (0.0, 1.0),
            Tangent::Slope(k) => {
                let (u, _) = norm2(1.0, k);
                u
            }
        }
    }

    /// Tangent shared by two halves meeting at a via-point.
    pub fn mean(a: Tangent, b: Tangent) -> Tangent {
        match (a, b) {
            (Tangent::Slope(ka), Tangent::Slope(kb)) => Tangent::Slope(0.5 * (ka + kb)),
            _ => Tangent::Vertical,
        }
    }
}

impl FromStr for Tangent {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t.to_ascii_lowercase().as_str() {
            "inf" | "+inf" | "-inf" | "infinity" | "+infinity" | "-infinity" | "vertical" => {
                return Ok(Tangent::Vertical)
            }
            _ => {}
        }
        match t.parse::<f64>() {
            Ok(k) if k.is_finite() => Ok(Tangent::Slope(k)),
            _ => Err(RasterError::MalformedTangent(s.to_string())),
        }
    }
}

impl fmt::Display for Tangent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tangent::Slope(k) => write!(f, "{}", k),
            Tangent::Vertical => f.write_str("vertical"),
        }
    }
}

// Wire form: a bare number or a string token.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TangentRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<TangentRepr> for Tangent {
    type Error = RasterError;

    fn try_from(r: TangentRepr) -> Result<Self, Self::Error> {
        match r {
            TangentRepr::Number(k) => Tangent::from_slope(k),
            TangentRepr::Text(s) => s.parse(),
        }
    }
}

impl From<Tangent> for TangentRepr {
    fn from(t: Tangent) -> Self {
        match t {
            Tangent::Slope(k) => TangentRepr::Number(k),
            Tangent::Vertical => TangentRepr::Text("vertical".to_string()),
        }
    }
}
