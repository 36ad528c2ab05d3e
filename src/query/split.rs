//! Interface to the external mesh-plane bisection primitive.

use crate::math::{Point3, Real, Vector3};
use crate::shape::TriMesh;

/// The two hulls produced by bisecting a mesh with a plane.
///
/// Either side may be absent when the plane leaves no material there.
#[derive(Clone, Debug, Default)]
pub struct SlicedHull {
    /// The hull on the positive side of the plane.
    pub upper: Option<TriMesh>,
    /// The hull on the negative side of the plane.
    pub lower: Option<TriMesh>,
}

impl SlicedHull {
    /// Whether the bisection produced no material at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.upper.is_none() && self.lower.is_none()
    }
}

/// The external mesh-plane bisection primitive.
///
/// This crate records and replays cuts but never splits meshes itself.
/// Implementations are free to cap the cut faces, rebuild normals, and so
/// on, as long as both hulls stay in the local space of the input mesh.
/// The plane is expressed in that same local space. Returning `None`
/// signals a degenerate cut, which callers treat as a no-op.
pub trait PlaneBisector {
    /// Splits `mesh` along the plane through `local_point` with normal
    /// `local_normal`.
    fn bisect(
        &self,
        mesh: &TriMesh,
        local_point: &Point3<Real>,
        local_normal: &Vector3<Real>,
    ) -> Option<SlicedHull>;
}
