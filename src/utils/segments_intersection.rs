//! 2D segment/segment intersection test.

use crate::math::{Point2, Real};

/// Tolerance below which the parametric determinant is considered zero.
const PARALLEL_EPSILON: Real = 1.0e-6;

/// Tests whether the segments `[p1, p2]` and `[q1, q2]` intersect.
///
/// Parallel and colinear pairs are reported as non-intersecting: colinear
/// overlap detection is deliberately not attempted. Endpoint contact
/// counts as an intersection.
pub fn segments_intersect(
    p1: &Point2<Real>,
    p2: &Point2<Real>,
    q1: &Point2<Real>,
    q2: &Point2<Real>,
) -> bool {
    let d1 = p2 - p1;
    let d2 = q2 - q1;
    let denom = d1.perp(&d2);

    // If denom is zero, the segments are parallel. This also catches NaN
    // input, which then falls through the range checks below.
    if denom.abs() < PARALLEL_EPSILON || ulps_eq!(denom, 0.0) {
        return false;
    }

    let dp = q1 - p1;
    let t = dp.perp(&d2) / denom;
    let u = dp.perp(&d1) / denom;

    t >= 0.0 && t <= 1.0 && u >= 0.0 && u <= 1.0
}
