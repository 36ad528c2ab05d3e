//! Scalar 2D predicates shared by the hull builder, the cut detector and
//! the selection tests.

pub use self::point_in_poly2d::point_in_poly2d;
pub use self::point_in_triangle::{corner_direction, cross2d, point_in_triangle, Orientation};
pub use self::segments_intersection::segments_intersect;

mod point_in_poly2d;
mod point_in_triangle;
mod segments_intersection;
