//! The persistent binary tree recording every cut applied to one object.

use crate::math::{Point3, Real, Vector3};
use slab::Slab;

/// Which side of a cutting plane a child or fragment lives on.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The positive half-space of the cutting plane.
    Upper,
    /// The negative half-space of the cutting plane.
    Lower,
}

/// Stable identifier of a [`SliceOperation`] inside its [`SliceTree`].
///
/// Fragments hold these ids rather than references, so the tree can
/// outlive any transient object it describes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SliceOpId(usize);

/// One recorded cut.
///
/// The plane is expressed in the local space of the mesh that was cut at
/// this node. Because every hull descending from an object shares that
/// object's local frame, the record stays replayable whatever happens to
/// the transforms of the transient objects later on.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SliceOperation {
    /// A point of the cutting plane.
    pub local_plane_point: Point3<Real>,
    /// The normal of the cutting plane.
    pub local_plane_normal: Vector3<Real>,
    upper_destroyed: bool,
    lower_destroyed: bool,
    upper_child: Option<SliceOpId>,
    lower_child: Option<SliceOpId>,
}

impl SliceOperation {
    /// Creates the record of a cut along the given local-space plane.
    pub fn new(local_plane_point: Point3<Real>, local_plane_normal: Vector3<Real>) -> Self {
        Self {
            local_plane_point,
            local_plane_normal,
            upper_destroyed: false,
            lower_destroyed: false,
            upper_child: None,
            lower_child: None,
        }
    }

    /// Whether the given side of this cut was discarded.
    #[inline]
    pub fn is_destroyed(&self, side: Side) -> bool {
        match side {
            Side::Upper => self.upper_destroyed,
            Side::Lower => self.lower_destroyed,
        }
    }

    /// The follow-up cut recorded on the given side, if any.
    #[inline]
    pub fn child(&self, side: Side) -> Option<SliceOpId> {
        match side {
            Side::Upper => self.upper_child,
            Side::Lower => self.lower_child,
        }
    }

    fn set_child(&mut self, side: Side, child: Option<SliceOpId>) {
        match side {
            Side::Upper => self.upper_child = child,
            Side::Lower => self.lower_child = child,
        }
    }

    fn take_child(&mut self, side: Side) -> Option<SliceOpId> {
        match side {
            Side::Upper => self.upper_child.take(),
            Side::Lower => self.lower_child.take(),
        }
    }

    fn set_destroyed(&mut self, side: Side) {
        match side {
            Side::Upper => self.upper_destroyed = true,
            Side::Lower => self.lower_destroyed = true,
        }
    }
}

/// The full cut history of one object, as an arena-backed binary tree.
///
/// The tree is pure data: it references no live object and is mutated
/// synchronously, by a single writer, in response to discrete user
/// actions. Its depth along a lineage equals the number of sequential
/// cuts applied along it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct SliceTree {
    nodes: Slab<SliceOperation>,
    root: Option<SliceOpId>,
}

impl SliceTree {
    /// Creates an empty tree, describing an object that was never cut.
    pub fn new() -> Self {
        Self::default()
    }

    /// The first cut ever applied, if any.
    #[inline]
    pub fn root(&self) -> Option<SliceOpId> {
        self.root
    }

    /// The node behind `id`, if it is still part of the tree.
    #[inline]
    pub fn get(&self, id: SliceOpId) -> Option<&SliceOperation> {
        self.nodes.get(id.0)
    }

    /// The number of recorded cuts.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the object was never cut.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Records a new cut.
    ///
    /// With a parent, the operation becomes that parent's child on the
    /// given side; a previously recorded child on that side is overwritten
    /// and its whole subtree freed (a node carries at most one outstanding
    /// cut per side — a deliberate constraint of the current design).
    /// Without a parent, the operation becomes the new root, replacing any
    /// prior history.
    ///
    /// Returns `None`, and records nothing, when the parent is unknown to
    /// this tree or the targeted side is already destroyed: destruction is
    /// terminal, a destroyed branch cannot carry further cuts.
    pub fn record_cut(
        &mut self,
        parent: Option<(SliceOpId, Side)>,
        op: SliceOperation,
    ) -> Option<SliceOpId> {
        match parent {
            Some((parent_id, side)) => {
                match self.nodes.get(parent_id.0) {
                    Some(node) if !node.is_destroyed(side) => {}
                    _ => {
                        log::debug!("cut not recorded: unknown parent or destroyed side");
                        return None;
                    }
                }

                if let Some(prior) = self.nodes[parent_id.0].child(side) {
                    self.free_subtree(prior);
                }

                let id = SliceOpId(self.nodes.insert(op));
                self.nodes[parent_id.0].set_child(side, Some(id));
                Some(id)
            }
            None => {
                if let Some(prior_root) = self.root.take() {
                    self.free_subtree(prior_root);
                }

                let id = SliceOpId(self.nodes.insert(op));
                self.root = Some(id);
                Some(id)
            }
        }
    }

    /// Marks one side of a node as destroyed.
    ///
    /// Destruction is terminal for that side: any child subtree recorded
    /// there is cleared and freed as part of the same operation, which
    /// keeps the "destroyed side has no child" invariant by construction.
    pub fn mark_destroyed(&mut self, id: SliceOpId, side: Side) {
        let child = match self.nodes.get_mut(id.0) {
            Some(node) => {
                node.set_destroyed(side);
                node.take_child(side)
            }
            None => {
                log::debug!("mark_destroyed ignored: unknown node");
                return;
            }
        };

        if let Some(child) = child {
            self.free_subtree(child);
        }
    }

    /// The number of (node, side) leaves that still materialize into
    /// fragments when the tree is replayed.
    pub fn live_leaf_count(&self) -> usize {
        self.root.map_or(0, |root| self.live_leaves_in(root))
    }

    /// The length of the longest lineage of sequential cuts.
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |root| self.depth_in(root))
    }

    fn live_leaves_in(&self, id: SliceOpId) -> usize {
        let Some(node) = self.nodes.get(id.0) else {
            return 0;
        };

        let mut count = 0;
        for side in [Side::Upper, Side::Lower] {
            if node.is_destroyed(side) {
                continue;
            }
            match node.child(side) {
                Some(child) => count += self.live_leaves_in(child),
                None => count += 1,
            }
        }

        count
    }

    fn depth_in(&self, id: SliceOpId) -> usize {
        let Some(node) = self.nodes.get(id.0) else {
            return 0;
        };

        let upper = node.upper_child.map_or(0, |child| self.depth_in(child));
        let lower = node.lower_child.map_or(0, |child| self.depth_in(child));
        1 + upper.max(lower)
    }

    fn free_subtree(&mut self, id: SliceOpId) {
        if let Some(node) = self.nodes.try_remove(id.0) {
            if let Some(child) = node.upper_child {
                self.free_subtree(child);
            }
            if let Some(child) = node.lower_child {
                self.free_subtree(child);
            }
        }
    }
}
