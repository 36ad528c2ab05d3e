//! Transient fragments, produced by cutting or by replaying a tree.

use crate::math::{Isometry, Point2, Real};
use crate::shape::{ConvexPolygon, TriMesh};
use crate::slicing::{RigidBodyProperties, Side, SliceOpId};

/// One side of a single cut, materialized in the scene.
///
/// Fragments are transient: a fragment is consumed whenever it is cut
/// again or discarded by a selection, and nothing but the
/// [`SliceTree`](crate::slicing::SliceTree) survives a slicing session.
/// The back-reference into the tree is an id, never a live reference.
#[derive(Clone, Debug)]
pub struct Fragment {
    /// The fragment's mesh, in the local frame shared with its ancestors.
    pub mesh: TriMesh,
    /// Placement of that local frame in the world.
    pub transform: Isometry,
    /// Simplified 2D collision boundary. Absent when the mesh projects to
    /// fewer than three distinct points.
    pub collider: Option<ConvexPolygon>,
    /// Physical properties inherited from the object that was cut.
    pub body: RigidBodyProperties,
    /// The cut that produced this fragment and the side it lies on, or
    /// `None` for an object that was never cut.
    pub origin: Option<(SliceOpId, Side)>,
}

impl Fragment {
    /// Creates a fragment, building its collision boundary from the mesh.
    pub fn new(
        mesh: TriMesh,
        transform: Isometry,
        body: RigidBodyProperties,
        origin: Option<(SliceOpId, Side)>,
    ) -> Self {
        let collider = ConvexPolygon::from_mesh_projection(&mesh);
        Self {
            mesh,
            transform,
            collider,
            body,
            origin,
        }
    }

    /// The world-space silhouette position of the fragment's centroid,
    /// used by lasso selections.
    pub fn world_centroid_2d(&self) -> Point2<Real> {
        let centroid = self.transform * self.mesh.local_centroid();
        Point2::new(centroid.x, centroid.y)
    }
}
