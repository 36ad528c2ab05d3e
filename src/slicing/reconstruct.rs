//! Recursive replay of a slice tree into live fragments.

use crate::math::{Isometry, Real, UnitQuaternion, Vector3};
use crate::query::PlaneBisector;
use crate::shape::TriMesh;
use crate::slicing::{Fragment, RigidBodyProperties, Side, SliceOpId, SliceTree};

/// Bounded cosmetic scatter applied to reconstructed leaf fragments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JitterParams {
    /// Offsets are drawn uniformly in `[-amplitude, amplitude]` on x and y.
    pub amplitude: Real,
    /// Seed of the jitter generator. A fixed seed gives a reproducible
    /// layout.
    pub seed: u64,
}

impl Default for JitterParams {
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            seed: 0,
        }
    }
}

/// Parameters of [`reconstruct`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ReconstructParams {
    /// Cosmetic scatter of the leaf fragments. `None` rebuilds them
    /// exactly in place.
    pub jitter: Option<JitterParams>,
}

/// The single source object a slice tree is replayed against.
#[derive(Clone, Debug)]
pub struct SourceObject {
    /// The original, uncut mesh.
    pub mesh: TriMesh,
    /// Placement of the object in the world.
    pub transform: Isometry,
    /// Physical properties every rebuilt fragment inherits.
    pub body: RigidBodyProperties,
}

/// Replays `tree` against `source`, materializing every live leaf.
///
/// An empty tree yields the source as a single, uncut fragment. The
/// recursion visits the upper side before the lower one, depth first, so
/// the order of the returned fragments is deterministic for any given
/// tree. A side marked destroyed is pruned permanently: its hull is
/// discarded without materializing a fragment or recursing further.
pub fn reconstruct(
    tree: &SliceTree,
    source: &SourceObject,
    bisector: &dyn PlaneBisector,
    params: &ReconstructParams,
) -> Vec<Fragment> {
    let mut leaves = Vec::new();

    match tree.root() {
        None => leaves.push(Fragment::new(
            source.mesh.clone(),
            source.transform,
            source.body,
            None,
        )),
        Some(root) => rebuild_recursive(tree, root, source.mesh.clone(), None, source, bisector, &mut leaves),
    }

    if let Some(jitter) = params.jitter {
        scatter(&mut leaves, &jitter);
    }

    leaves
}

fn rebuild_recursive(
    tree: &SliceTree,
    id: SliceOpId,
    mesh: TriMesh,
    origin: Option<(SliceOpId, Side)>,
    source: &SourceObject,
    bisector: &dyn PlaneBisector,
    leaves: &mut Vec<Fragment>,
) {
    let Some(op) = tree.get(id) else {
        // Dangling ids cannot come out of `record_cut`; if one shows up
        // anyway, keep the material instead of losing it.
        leaves.push(Fragment::new(mesh, source.transform, source.body, origin));
        return;
    };

    let Some(hull) = bisector.bisect(&mesh, &op.local_plane_point, &op.local_plane_normal) else {
        // Degenerate replay of a recorded plane: keep the current mesh
        // whole rather than silently dropping it.
        log::debug!("degenerate bisection while replaying, keeping the mesh whole");
        leaves.push(Fragment::new(mesh, source.transform, source.body, origin));
        return;
    };

    for (side, side_mesh) in [(Side::Upper, hull.upper), (Side::Lower, hull.lower)] {
        if op.is_destroyed(side) {
            continue;
        }
        let Some(side_mesh) = side_mesh else { continue };

        match op.child(side) {
            Some(child) => rebuild_recursive(
                tree,
                child,
                side_mesh,
                Some((id, side)),
                source,
                bisector,
                leaves,
            ),
            None => leaves.push(Fragment::new(
                side_mesh,
                source.transform,
                source.body,
                Some((id, side)),
            )),
        }
    }
}

/// Scatters leaf fragments on the silhouette plane.
///
/// This only touches the fragments' transforms: the tree, the recorded
/// planes and any future cut are unaffected.
fn scatter(leaves: &mut [Fragment], jitter: &JitterParams) {
    let mut rng = oorandom::Rand32::new(jitter.seed);

    for leaf in leaves {
        let dx = (rng.rand_float() * 2.0 - 1.0) * jitter.amplitude;
        let dy = (rng.rand_float() * 2.0 - 1.0) * jitter.amplitude;
        let angle = rng.rand_float() * core::f32::consts::TAU;

        leaf.transform.translation.vector += Vector3::new(dx, dy, 0.0);
        leaf.transform.rotation =
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle) * leaf.transform.rotation;
    }
}
