//! Cut-detection queries and the external bisection interface.

pub use self::cut::{cut_plane, stroke_traverses_mesh, Stroke};
pub use self::split::{PlaneBisector, SlicedHull};

mod cut;
mod split;
