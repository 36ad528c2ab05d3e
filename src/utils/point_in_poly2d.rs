//! Ray-parity point-in-polygon test.

use crate::math::{Point2, Real};

/// Tests if the given point is inside a closed polygon, counting the
/// crossings of the horizontal ray shot from `pt` towards `+x`.
///
/// The polygon is implicitly closed: its first and last points are
/// assumed to be connected by an edge. An even crossing count means
/// outside, an odd count inside; points lying exactly on an edge follow
/// whichever side the parity puts them on, consistently. Polygons with
/// fewer than 3 vertices contain nothing.
pub fn point_in_poly2d(pt: &Point2<Real>, poly: &[Point2<Real>]) -> bool {
    if poly.len() < 3 {
        return false;
    }

    let mut inside = false;

    for (i, a) in poly.iter().enumerate() {
        let b = &poly[(i + 1) % poly.len()];

        if (a.y > pt.y) != (b.y > pt.y) {
            // The edge straddles the ray's altitude; toggle when the
            // crossing lies strictly to the right of `pt`.
            let x_cross = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if pt.x < x_cross {
                inside = !inside;
            }
        }
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn square() -> [Point2<Real>; 4] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn point_in_square() {
        assert!(point_in_poly2d(&Point2::new(0.5, 0.5), &square()));
        assert!(!point_in_poly2d(&Point2::new(1.5, 0.5), &square()));
        assert!(!point_in_poly2d(&Point2::new(-0.5, 0.5), &square()));
    }

    #[test]
    fn point_on_right_edge_follows_parity() {
        // The ray from (1, 0.5) crosses no edge strictly to its right, so
        // the parity convention puts a point on the right edge outside.
        assert!(!point_in_poly2d(&Point2::new(1.0, 0.5), &square()));
        // Symmetrically, a point on the left edge is inside.
        assert!(point_in_poly2d(&Point2::new(0.0, 0.5), &square()));
    }

    #[test]
    fn too_small_polygons_contain_nothing() {
        let segment = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(!point_in_poly2d(&Point2::new(0.5, 0.0), &segment));
        assert!(!point_in_poly2d(&Point2::new(0.5, 0.0), &segment[..1]));
        assert!(!point_in_poly2d(&Point2::new(0.5, 0.0), &[]));
    }

    #[test]
    fn degenerate_triangle_is_consistent() {
        // A near-zero-area triangle goes through the exact same parity
        // code path as any other polygon.
        let sliver = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 1.0e-6),
            Point2::new(4.0, 0.0),
        ];
        assert!(!point_in_poly2d(&Point2::new(1.0, 0.5), &sliver));
        assert!(!point_in_poly2d(&Point2::new(-1.0, 0.0), &sliver));
    }

    #[test]
    fn concave_polygon() {
        let poly = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 4.0),
        ];
        assert!(point_in_poly2d(&Point2::new(0.5, 0.5), &poly));
        assert!(!point_in_poly2d(&Point2::new(2.0, 3.0), &poly));
    }
}
