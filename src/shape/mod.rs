//! Shapes handled by the slicing pipeline: triangle meshes, their 2D
//! silhouette triangles, and convex collision polygons.

pub use self::convex_polygon::ConvexPolygon;
pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod convex_polygon;
mod triangle;
mod trimesh;
