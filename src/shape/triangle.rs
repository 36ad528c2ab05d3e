//! A triangle on the 2D silhouette plane.

use crate::math::{Point2, Real};
use crate::utils;

/// A triangle of a mesh's silhouette, on the world XY plane.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point2<Real>,
    /// The triangle second point.
    pub b: Point2<Real>,
    /// The triangle third point.
    pub c: Point2<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point2<Real>, b: Point2<Real>, c: Point2<Real>) -> Self {
        Self { a, b, c }
    }

    /// The three edges of this triangle, as vertex pairs.
    #[inline]
    pub fn edges(&self) -> [(Point2<Real>, Point2<Real>); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Tests whether `pt` lies inside this triangle, edges included.
    #[inline]
    pub fn contains_point(&self, pt: &Point2<Real>) -> bool {
        utils::point_in_triangle(pt, &self.a, &self.b, &self.c)
    }
}
