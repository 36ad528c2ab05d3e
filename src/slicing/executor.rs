//! Execution of one cut against a live fragment.

use crate::math::{Real, Vector3};
use crate::query::{self, PlaneBisector, Stroke};
use crate::slicing::{Fragment, Side, SliceOpId, SliceOperation, SliceTree};

/// Distance and duration of the separation motion scheduled after a cut.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionParams {
    /// How far each new fragment is pushed away from the cutting plane.
    pub distance: Real,
    /// Over how long, in seconds.
    pub duration: Real,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            distance: 1.0,
            duration: 1.0,
        }
    }
}

/// A separation motion to play on one fragment of a [`CutOutcome`].
///
/// Purely presentational. Motions are computed once the tree mutation and
/// the fragments are final, so dropping or cancelling one can never leave
/// the cut history inconsistent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FragmentMotion {
    /// Index of the fragment to move, in the outcome's fragment list.
    pub fragment: usize,
    /// World-space push direction, away from the cutting plane.
    pub direction: Vector3<Real>,
    /// Push distance.
    pub distance: Real,
    /// Motion duration, in seconds.
    pub duration: Real,
}

/// The product of one successful cut.
#[derive(Clone, Debug)]
pub struct CutOutcome {
    /// The operation recorded into the tree.
    pub op: SliceOpId,
    /// The new fragments, upper side first.
    pub fragments: Vec<Fragment>,
    /// Separation motions to schedule, one per fragment.
    pub motions: Vec<FragmentMotion>,
}

/// Result of [`execute_cut`].
#[derive(Clone, Debug)]
pub enum CutResult {
    /// The fragment was cut and consumed.
    Cut(CutOutcome),
    /// The cut was degenerate; here is the fragment back, untouched, and
    /// the tree was left unchanged.
    Untouched(Fragment),
}

/// The product of one cut pass over all fragments of an object.
#[derive(Clone, Debug)]
pub struct PassOutcome {
    /// Every live fragment after the pass: untouched survivors and new
    /// fragments alike, in stable order.
    pub fragments: Vec<Fragment>,
    /// Separation motions to schedule, indexing into `fragments`.
    pub motions: Vec<FragmentMotion>,
}

/// Cuts `fragment` along the plane drawn by `stroke`.
///
/// The plane is derived from the stroke and the viewing direction, then
/// expressed in the fragment's local space, which is the space the
/// resulting [`SliceOperation`] stores it in. The operation is recorded
/// under the fragment's originating node, or as the tree root for an
/// object that was never cut. Each hull returned by the bisector becomes
/// a fragment carrying a fresh collision boundary and a verbatim copy of
/// the source's physical properties, and the source fragment is consumed:
/// the object that was cut never survives its own cut.
///
/// Degenerate cuts (no plane, no hull at all) mutate nothing and hand the
/// fragment back.
pub fn execute_cut(
    fragment: Fragment,
    stroke: &Stroke,
    view_forward: &Vector3<Real>,
    tree: &mut SliceTree,
    bisector: &dyn PlaneBisector,
    motion: &MotionParams,
) -> CutResult {
    let Some((world_point, world_normal)) = query::cut_plane(stroke, view_forward) else {
        return CutResult::Untouched(fragment);
    };

    let inv = fragment.transform.inverse();
    let local_point = inv * world_point;
    let local_normal = inv * world_normal.into_inner();

    let Some(hull) = bisector.bisect(&fragment.mesh, &local_point, &local_normal) else {
        log::debug!("degenerate bisection, cut ignored");
        return CutResult::Untouched(fragment);
    };

    if hull.is_empty() {
        return CutResult::Untouched(fragment);
    }

    let op = SliceOperation::new(local_point, local_normal);
    let Some(op_id) = tree.record_cut(fragment.origin, op) else {
        return CutResult::Untouched(fragment);
    };

    let mut fragments = Vec::new();
    let mut motions = Vec::new();

    for (side, mesh) in [(Side::Upper, hull.upper), (Side::Lower, hull.lower)] {
        let Some(mesh) = mesh else { continue };

        let sign = if side == Side::Upper { 1.0 } else { -1.0 };
        motions.push(FragmentMotion {
            fragment: fragments.len(),
            direction: world_normal.into_inner() * sign,
            distance: motion.distance,
            duration: motion.duration,
        });
        fragments.push(Fragment::new(
            mesh,
            fragment.transform,
            fragment.body,
            Some((op_id, side)),
        ));
    }

    CutResult::Cut(CutOutcome {
        op: op_id,
        fragments,
        motions,
    })
}

/// Applies one cut stroke to every fragment it validly traverses.
///
/// Fragments the stroke misses, or merely grazes, pass through untouched
/// and keep their position relative to the fragments that replace the cut
/// ones.
pub fn slice_all(
    fragments: Vec<Fragment>,
    stroke: &Stroke,
    view_forward: &Vector3<Real>,
    tree: &mut SliceTree,
    bisector: &dyn PlaneBisector,
    motion: &MotionParams,
) -> PassOutcome {
    let mut out = PassOutcome {
        fragments: Vec::new(),
        motions: Vec::new(),
    };

    for fragment in fragments {
        if !query::stroke_traverses_mesh(stroke, &fragment.mesh, &fragment.transform) {
            out.fragments.push(fragment);
            continue;
        }

        match execute_cut(fragment, stroke, view_forward, tree, bisector, motion) {
            CutResult::Cut(outcome) => {
                let base = out.fragments.len();
                out.motions.extend(outcome.motions.into_iter().map(|mut m| {
                    m.fragment += base;
                    m
                }));
                out.fragments.extend(outcome.fragments);
            }
            CutResult::Untouched(fragment) => out.fragments.push(fragment),
        }
    }

    out
}
