//! The convex collision polygon attached to fragments.

use crate::math::{Point2, Real};
use crate::shape::TriMesh;
use crate::transformation;
use crate::utils;

/// A 2D convex polygon used as a simplified collision boundary.
///
/// This is deliberately a hull of the mesh's silhouette rather than the
/// silhouette itself: a handful of boundary points is enough for the
/// physics layer, and hull reduction erases the seams triangulation
/// leaves in the projected vertex buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    points: Vec<Point2<Real>>,
}

impl ConvexPolygon {
    /// Builds the collision polygon of a mesh from its local XY
    /// projection.
    ///
    /// Returns `None` when fewer than three distinct projected points, or
    /// fewer than three hull vertices, remain. Such a mesh simply carries
    /// no collider; this is a valid outcome, not an error.
    pub fn from_mesh_projection(mesh: &TriMesh) -> Option<Self> {
        let projected = transformation::project_and_dedup(mesh.vertices());
        if projected.len() < 3 {
            log::debug!(
                "no collider: {} distinct projected point(s)",
                projected.len()
            );
            return None;
        }

        Self::from_convex_polyline(transformation::convex_hull2(&projected))
    }

    /// Creates a polygon from points assumed to already describe a
    /// counter-clockwise convex boundary. Convexity is not checked.
    ///
    /// Returns `None` if fewer than three points are given.
    pub fn from_convex_polyline(points: Vec<Point2<Real>>) -> Option<Self> {
        if points.len() < 3 {
            None
        } else {
            Some(Self { points })
        }
    }

    /// The ordered boundary of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    /// Tests whether a point, expressed in the polygon's frame, lies
    /// inside it.
    pub fn contains_local_point(&self, pt: &Point2<Real>) -> bool {
        utils::point_in_poly2d(pt, &self.points)
    }
}
