/*!
slicetree
=========

**slicetree** records every planar cut applied to a mesh as a persistent
binary tree, independent of the transient objects the cuts produce, so a
sliced object can be destroyed and later rebuilt exactly by replaying its
tree. It also provides the 2D computational geometry this requires:
cut-stroke detection against a mesh silhouette, convex-hull reduction of a
projected mesh into a lightweight collision polygon, and the ray-parity
containment test backing lasso selections.

The mesh-plane bisection itself is an external concern, consumed through
the [`query::PlaneBisector`] trait.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod gesture;
pub mod item;
pub mod query;
pub mod shape;
pub mod slicing;
pub mod transformation;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point2, Point3, UnitQuaternion, UnitVector3, Vector2, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The isometry mapping an object's local frame to the world.
    pub type Isometry = na::Isometry3<Real>;
}
