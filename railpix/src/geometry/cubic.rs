//! Cubic Bézier evaluation and tangent-driven control point placement.

use crate::geometry::tangent::Tangent;
use crate::model::Vec2;

/// Control points of a cubic Bézier curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2, // Start point
    pub p1: Vec2, // First control point
    pub p2: Vec2, // Second control point
    pub p3: Vec2, // End point
}

impl CubicBezier {
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Place the inner control points along the endpoint tangents.
    ///
    /// Both sit `chord / curvature` away from their endpoint: `p1` forward
    /// along the start tangent, `p2` backward along the end tangent. A
    /// larger `curvature` divisor therefore gives a flatter curve.
    pub fn from_tangents(p0: Vec2, p3: Vec2, t0: Tangent, t3: Tangent, curvature: f64) -> Self {
        let d = p0.distance(p3) / curvature;
        let (ux0, uy0) = t0.unit_vector();
        let (ux3, uy3) = t3.unit_vector();
        CubicBezier {
            p0,
            p1: Vec2 {
                x: p0.x + d * ux0,
                y: p0.y + d * uy0,
            },
            p2: Vec2 {
                x: p3.x - d * ux3,
                y: p3.y - d * uy3,
            },
            p3,
        }
    }

    /// Evaluate the curve at parameter t ∈ [0, 1].
    pub fn eval(&self, t: f64) -> Vec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        Vec2 {
            x: mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x,
            y: mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y,
        }
    }

    pub fn points(&self) -> [Vec2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}
