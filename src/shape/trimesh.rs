//! Definition of the triangle mesh consumed and produced by the slicing
//! pipeline.

use crate::math::{Isometry, Point2, Point3, Real, Vector3};
use crate::shape::Triangle;

/// Indicates an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle referenced a vertex index outside of the vertex buffer.
    #[error("the triangle {triangle} references the out-of-bounds vertex {index}.")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-bounds vertex index it referenced.
        index: u32,
    },
}

/// A triangle mesh, expressed in the local space of the object it belongs
/// to.
///
/// All the hulls descending from one object share that object's local
/// frame, which is what makes the planes recorded in a
/// [`SliceTree`](crate::slicing::SliceTree) replayable.
#[derive(Clone, Debug, Default)]
pub struct TriMesh {
    vertices: Vec<Point3<Real>>,
    indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Creates a mesh from a vertex buffer and an index buffer.
    ///
    /// An out-of-bounds index is a structural error, unlike the geometric
    /// degeneracies this crate otherwise swallows. An empty mesh is
    /// valid: it is simply never cut by anything.
    pub fn new(
        vertices: Vec<Point3<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        for (tri_id, idx) in indices.iter().enumerate() {
            for &index in idx {
                if index as usize >= vertices.len() {
                    return Err(TriMeshBuilderError::IndexOutOfBounds {
                        triangle: tri_id as u32,
                        index,
                    });
                }
            }
        }

        Ok(Self { vertices, indices })
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point3<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles in this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Whether this mesh contains no triangle at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The i-th triangle of the mesh, positioned by `pos` and projected
    /// on the world XY plane (the silhouette plane).
    pub fn silhouette_triangle(&self, i: usize, pos: &Isometry) -> Triangle {
        let idx = self.indices[i];
        let mut pts = [Point2::origin(); 3];

        for (k, &j) in idx.iter().enumerate() {
            let world = pos * self.vertices[j as usize];
            pts[k] = Point2::new(world.x, world.y);
        }

        Triangle::new(pts[0], pts[1], pts[2])
    }

    /// The centroid of the vertex buffer, or the origin for an empty
    /// vertex buffer.
    pub fn local_centroid(&self) -> Point3<Real> {
        if self.vertices.is_empty() {
            return Point3::origin();
        }

        let mut sum = Vector3::zeros();
        for pt in &self.vertices {
            sum += pt.coords;
        }

        Point3::from(sum / self.vertices.len() as Real)
    }
}
