//! 2D convex hull of a projected vertex buffer.

use crate::math::{Point2, Point3, Real};
use crate::utils;

/// Distance under which two projected points are considered the same.
const DEDUP_TOLERANCE: Real = 1.0e-3;

/// Angle difference under which two polar angles compare equal during the
/// hull sort.
const ANGLE_EPSILON: Real = 1.0e-6;

/// Projects a vertex buffer on its local XY plane, merging points closer
/// than [`DEDUP_TOLERANCE`] and dropping non-finite points.
///
/// Without the merge, triangulation seams inject clusters of coincident
/// points that end up as degenerate hull edges. NaN or infinite
/// coordinates are degenerate input: they are removed here so they can
/// never reach the hull scan, whose polar sort assumes finite angles.
pub fn project_and_dedup(vertices: &[Point3<Real>]) -> Vec<Point2<Real>> {
    let mut projected: Vec<Point2<Real>> = Vec::with_capacity(vertices.len());

    for vertex in vertices {
        let pt = Point2::new(vertex.x, vertex.y);
        if !pt.x.is_finite() || !pt.y.is_finite() {
            continue;
        }
        if !projected
            .iter()
            .any(|prev| na::distance(prev, &pt) < DEDUP_TOLERANCE)
        {
            projected.push(pt);
        }
    }

    projected
}

/// Computes the counter-clockwise convex hull of a set of distinct,
/// finite points.
///
/// The anchor is the lowest point, ties broken towards the smallest x.
/// The remaining points are sorted by polar angle around the anchor,
/// equal angles (within [`ANGLE_EPSILON`]) keeping the nearest point
/// first, and a single scan then pops every non-counter-clockwise turn.
/// Inputs with fewer than three points are returned unchanged.
pub fn convex_hull2(points: &[Point2<Real>]) -> Vec<Point2<Real>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut anchor_id = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let best = &points[anchor_id];
        if pt.y < best.y || (pt.y == best.y && pt.x < best.x) {
            anchor_id = i;
        }
    }

    let anchor = points[anchor_id];
    let mut rest: Vec<Point2<Real>> = points
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != anchor_id)
        .map(|(_, pt)| *pt)
        .collect();

    rest.sort_by(|a, b| {
        let angle_a = (a.y - anchor.y).atan2(a.x - anchor.x);
        let angle_b = (b.y - anchor.y).atan2(b.x - anchor.x);

        if (angle_a - angle_b).abs() < ANGLE_EPSILON {
            let dist_a = na::distance(&anchor, a);
            let dist_b = na::distance(&anchor, b);
            dist_a
                .partial_cmp(&dist_b)
                .unwrap_or(core::cmp::Ordering::Equal)
        } else {
            angle_a
                .partial_cmp(&angle_b)
                .unwrap_or(core::cmp::Ordering::Equal)
        }
    });

    let mut hull = vec![anchor];

    for pt in rest {
        while hull.len() >= 2
            && utils::cross2d(&hull[hull.len() - 2], &hull[hull.len() - 1], &pt) <= 0.0
        {
            let _ = hull.pop();
        }
        hull.push(pt);
    }

    hull
}
