//! Function to check if a point is inside a triangle and related functions.

use crate::math::{Point2, Real};

/// The orientation or winding direction of a corner or polygon.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum Orientation {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
    /// Neither (a straight line)
    None,
}

/// Signed area of the parallelogram spanned by `o -> a` and `o -> b`.
///
/// Positive when the turn `o -> a -> b` is counter-clockwise.
#[inline]
pub fn cross2d(o: &Point2<Real>, a: &Point2<Real>, b: &Point2<Real>) -> Real {
    (a - o).perp(&(b - o))
}

/// Returns the turn direction of `o -> a -> b`.
///
/// NaN coordinates are reported as [`Orientation::None`] (degenerate)
/// rather than panicking.
pub fn corner_direction(o: &Point2<Real>, a: &Point2<Real>, b: &Point2<Real>) -> Orientation {
    let cross = cross2d(o, a, b);

    if cross > 0.0 {
        Orientation::Ccw
    } else if cross < 0.0 {
        Orientation::Cw
    } else {
        Orientation::None
    }
}

/// Returns `true` if `p` lies in the triangle `(a, b, c)`.
///
/// The triangle's winding does not matter, and a point lying exactly on
/// an edge counts as inside.
pub fn point_in_triangle(
    p: &Point2<Real>,
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
) -> bool {
    let s1 = cross2d(a, b, p);
    let s2 = cross2d(b, c, p);
    let s3 = cross2d(c, a, p);

    let has_cw = s1 < 0.0 || s2 < 0.0 || s3 < 0.0;
    let has_ccw = s1 > 0.0 || s2 > 0.0 || s3 > 0.0;

    !(has_cw && has_ccw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn point_in_triangle_interior() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);
        assert!(point_in_triangle(&Point2::new(1.0, 1.0), &a, &b, &c));
        assert!(!point_in_triangle(&Point2::new(3.0, 3.0), &a, &b, &c));
    }

    #[test]
    fn point_on_edge_counts_as_inside() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);
        assert!(point_in_triangle(&Point2::new(2.0, 0.0), &a, &b, &c));
        assert!(point_in_triangle(&a, &a, &b, &c));
    }

    #[test]
    fn winding_does_not_matter() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(0.0, 4.0);
        assert!(point_in_triangle(&Point2::new(1.0, 1.0), &a, &c, &b));
    }

    #[test]
    fn corner_direction_signs() {
        let o = Point2::new(0.0, 0.0);
        let a = Point2::new(1.0, 0.0);
        let b = Point2::new(0.0, 1.0);
        assert_eq!(corner_direction(&o, &a, &b), Orientation::Ccw);
        assert_eq!(corner_direction(&o, &b, &a), Orientation::Cw);
        assert_eq!(
            corner_direction(&o, &a, &Point2::new(2.0, 0.0)),
            Orientation::None
        );
    }
}
