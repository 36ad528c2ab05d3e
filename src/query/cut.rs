//! Detection of valid, fully-traversing cut strokes.

use crate::math::{Isometry, Point2, Point3, Real, UnitVector3, Vector3, DEFAULT_EPSILON};
use crate::shape::TriMesh;
use crate::utils;

/// A completed cut stroke, in world space.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Stroke {
    /// Where the stroke started.
    pub a: Point3<Real>,
    /// Where the stroke ended.
    pub b: Point3<Real>,
}

impl Stroke {
    /// Creates a stroke from its two endpoints.
    #[inline]
    pub fn new(a: Point3<Real>, b: Point3<Real>) -> Self {
        Self { a, b }
    }

    /// The stroke endpoints on the silhouette (world XY) plane.
    #[inline]
    pub fn silhouette(&self) -> (Point2<Real>, Point2<Real>) {
        (
            Point2::new(self.a.x, self.a.y),
            Point2::new(self.b.x, self.b.y),
        )
    }
}

/// Derives the cutting plane of a stroke.
///
/// The plane passes through the stroke's start; its normal is the cross
/// product of the stroke direction and the viewing direction. Returns
/// `None` for zero-length strokes and degenerate cross products (a stroke
/// aligned with the view axis cuts nothing), NaN included.
pub fn cut_plane(
    stroke: &Stroke,
    view_forward: &Vector3<Real>,
) -> Option<(Point3<Real>, UnitVector3<Real>)> {
    let dir = stroke.b - stroke.a;
    let normal = UnitVector3::try_new(dir.cross(view_forward), DEFAULT_EPSILON)?;
    Some((stroke.a, normal))
}

/// Tests whether `stroke` constitutes a valid, fully-traversing cut of
/// the mesh positioned at `pos`.
///
/// The first silhouette triangle with an edge crossed by the stroke
/// decides. If either stroke endpoint lies inside that very triangle, the
/// stroke merely grazes the mesh from within and the whole mesh is
/// rejected. A mesh the stroke never crosses is simply not cut; neither
/// case is an error.
pub fn stroke_traverses_mesh(stroke: &Stroke, mesh: &TriMesh, pos: &Isometry) -> bool {
    let (p1, p2) = stroke.silhouette();

    for i in 0..mesh.num_triangles() {
        let triangle = mesh.silhouette_triangle(i, pos);
        let crossed = triangle
            .edges()
            .iter()
            .any(|(e1, e2)| utils::segments_intersect(&p1, &p2, e1, e2));

        if !crossed {
            continue;
        }

        // The stroke must enter and leave the silhouette. An endpoint
        // inside the crossed triangle means it started or died there.
        if triangle.contains_point(&p1) || triangle.contains_point(&p2) {
            return false;
        }

        return true;
    }

    false
}
