//! Reduction of a mesh's 2D projection into a convex boundary.

pub use self::convex_hull2::{convex_hull2, project_and_dedup};

mod convex_hull2;
