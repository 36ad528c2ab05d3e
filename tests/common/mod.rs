#![allow(dead_code)]

use slicetree::math::{Point3, Real, Vector3};
use slicetree::query::{PlaneBisector, SlicedHull, Stroke};
use slicetree::shape::TriMesh;

const PLANE_EPSILON: Real = 1.0e-6;

/// Reference bisector used by the integration tests.
///
/// Clips every triangle against the plane, Sutherland-Hodgman style, and
/// fan-triangulates the clipped polygons. No face capping, no vertex
/// welding. A plane that leaves one side without material did not bisect
/// anything and is reported as degenerate.
pub struct ClipBisector;

impl PlaneBisector for ClipBisector {
    fn bisect(
        &self,
        mesh: &TriMesh,
        local_point: &Point3<Real>,
        local_normal: &Vector3<Real>,
    ) -> Option<SlicedHull> {
        if mesh.is_empty() || local_normal.norm() < PLANE_EPSILON {
            return None;
        }

        let mut upper = SideBuffers::default();
        let mut lower = SideBuffers::default();

        for idx in mesh.indices() {
            let tri = [
                mesh.vertices()[idx[0] as usize],
                mesh.vertices()[idx[1] as usize],
                mesh.vertices()[idx[2] as usize],
            ];
            upper.push_polygon(&clip(&tri, local_point, local_normal, 1.0));
            lower.push_polygon(&clip(&tri, local_point, local_normal, -1.0));
        }

        let upper = upper.build();
        let lower = lower.build();

        if upper.is_none() || lower.is_none() {
            return None;
        }

        Some(SlicedHull { upper, lower })
    }
}

#[derive(Default)]
struct SideBuffers {
    vertices: Vec<Point3<Real>>,
    indices: Vec<[u32; 3]>,
}

impl SideBuffers {
    fn push_polygon(&mut self, poly: &[Point3<Real>]) {
        if poly.len() < 3 {
            return;
        }

        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(poly);
        for i in 1..poly.len() as u32 - 1 {
            self.indices.push([base, base + i, base + i + 1]);
        }
    }

    fn build(self) -> Option<TriMesh> {
        if self.indices.is_empty() {
            None
        } else {
            TriMesh::new(self.vertices, self.indices).ok()
        }
    }
}

/// Keeps the part of `poly` on the `sign` side of the plane.
fn clip(
    poly: &[Point3<Real>],
    plane_point: &Point3<Real>,
    plane_normal: &Vector3<Real>,
    sign: Real,
) -> Vec<Point3<Real>> {
    let mut out = Vec::new();

    for i in 0..poly.len() {
        let a = poly[i];
        let b = poly[(i + 1) % poly.len()];
        let da = (a - plane_point).dot(plane_normal) * sign;
        let db = (b - plane_point).dot(plane_normal) * sign;

        if da >= -PLANE_EPSILON {
            out.push(a);
        }
        if (da > PLANE_EPSILON && db < -PLANE_EPSILON)
            || (da < -PLANE_EPSILON && db > PLANE_EPSILON)
        {
            let t = da / (da - db);
            out.push(a + (b - a) * t);
        }
    }

    out
}

/// The unit square `[0, 1]²` on the z = 0 plane, as two triangles.
pub fn square_mesh() -> TriMesh {
    TriMesh::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
    .unwrap()
}

/// The camera of all the tests looks down the negative z axis.
pub fn view_forward() -> Vector3<Real> {
    Vector3::new(0.0, 0.0, -1.0)
}

/// A left-to-right stroke crossing the unit square at height `y`.
pub fn horizontal_stroke(y: Real) -> Stroke {
    Stroke::new(Point3::new(-0.5, y, 0.0), Point3::new(1.5, y, 0.0))
}

/// A bottom-to-top stroke crossing the unit square at abscissa `x`.
pub fn vertical_stroke(x: Real) -> Stroke {
    Stroke::new(Point3::new(x, -0.5, 0.0), Point3::new(x, 1.5, 0.0))
}
