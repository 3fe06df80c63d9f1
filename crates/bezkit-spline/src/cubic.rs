//! Cubic Bezier evaluation in the Bernstein basis.

use bezkit_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Evaluate the cubic Bezier curve defined by `p0..p3` at parameter `t`.
///
/// `t` is clamped to `[0, 1]`; evaluation never fails for any real input.
/// The direct weighted sum keeps the endpoints exact: the Bernstein weights
/// are exactly `{1,0,0,0}` at `t = 0` and `{0,0,0,1}` at `t = 1`, so
/// `point_at(.., 0.0) == p0` and `point_at(.., 1.0) == p3` bit-for-bit.
/// Coincident control points degrade to quadratic/linear curves by the same
/// formula; no special case.
pub fn point_at(p0: Point3, p1: Point3, p2: Point3, p3: Point3, t: f64) -> Point3 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    p0 * b0 + p1 * b1 + p2 * b2 + p3 * b3
}

/// Evaluate the curve derivative at parameter `t` (clamped to `[0, 1]`).
///
/// `B'(t) = 3(1-t)^2 (p1-p0) + 6t(1-t) (p2-p1) + 3t^2 (p3-p2)`.
pub fn tangent_at(p0: Point3, p1: Point3, p2: Point3, p3: Point3, t: f64) -> Vector3 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    (p1 - p0) * (3.0 * u * u) + (p2 - p1) * (6.0 * u * t) + (p3 - p2) * (3.0 * t * t)
}

/// A single cubic segment as an absolute control-point snapshot.
///
/// `p0`/`p3` are the bounding waypoint positions; `p1`/`p2` are the
/// absolute outgoing/incoming control points derived from the handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl CubicSegment {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub fn point_at(&self, t: f64) -> Point3 {
        point_at(self.p0, self.p1, self.p2, self.p3, t)
    }

    pub fn tangent_at(&self, t: f64) -> Vector3 {
        tangent_at(self.p0, self.p1, self.p2, self.p3, t)
    }
}
