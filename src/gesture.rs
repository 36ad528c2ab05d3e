//! Gesture state machines: the cut stroke and the lasso selection.
//!
//! Input arrives as discrete events. A gesture accumulates them and is
//! evaluated exactly once when it completes; nothing here depends on
//! rendering or timing.

use crate::math::{Point2, Point3, Real};
use crate::query::Stroke;
use crate::slicing::{Fragment, SliceTree};
use crate::utils;

/// Minimum spacing between two recorded lasso points.
const LASSO_SPACING: Real = 1.0e-3;

#[derive(Copy, Clone, Debug, PartialEq)]
enum StrokeState {
    Idle,
    Dragging { from: Point3<Real> },
    Ready { stroke: Stroke },
}

/// Two-point cut gesture: press, drag, release.
///
/// A press while a finished stroke is still waiting to be taken is
/// ignored, so at most one cut can be pending evaluation at a time.
#[derive(Copy, Clone, Debug)]
pub struct StrokeGesture {
    state: StrokeState,
}

impl Default for StrokeGesture {
    fn default() -> Self {
        Self {
            state: StrokeState::Idle,
        }
    }
}

impl StrokeGesture {
    /// Creates an idle gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a finished stroke is waiting to be taken.
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, StrokeState::Ready { .. })
    }

    /// Records the press starting a stroke. Ignored unless idle.
    pub fn press(&mut self, at: Point3<Real>) {
        if let StrokeState::Idle = self.state {
            self.state = StrokeState::Dragging { from: at };
        }
    }

    /// Records the release ending a stroke. Ignored unless dragging.
    pub fn release(&mut self, at: Point3<Real>) {
        if let StrokeState::Dragging { from } = self.state {
            self.state = StrokeState::Ready {
                stroke: Stroke::new(from, at),
            };
        }
    }

    /// Takes the finished stroke, returning the gesture to idle.
    pub fn take(&mut self) -> Option<Stroke> {
        match self.state {
            StrokeState::Ready { stroke } => {
                self.state = StrokeState::Idle;
                Some(stroke)
            }
            _ => None,
        }
    }

    /// Aborts whatever is in progress.
    pub fn cancel(&mut self) {
        self.state = StrokeState::Idle;
    }
}

/// A finished free-form selection outline on the silhouette plane.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    points: Vec<Point2<Real>>,
}

impl Outline {
    /// The recorded path.
    #[inline]
    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    /// Ray-parity containment test. Outlines with fewer than three points
    /// contain nothing.
    pub fn contains(&self, pt: &Point2<Real>) -> bool {
        utils::point_in_poly2d(pt, &self.points)
    }
}

/// Free-form lasso gesture accumulating a selection outline.
#[derive(Clone, Debug, Default)]
pub struct LassoGesture {
    points: Vec<Point2<Real>>,
    active: bool,
}

impl LassoGesture {
    /// Creates an idle gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an outline is currently being drawn.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts accumulating a new outline.
    pub fn begin(&mut self, at: Point2<Real>) {
        self.points.clear();
        self.points.push(at);
        self.active = true;
    }

    /// Extends the outline. Ignored when no outline is being drawn;
    /// points closer than the recording spacing to the previous one are
    /// dropped.
    pub fn extend(&mut self, at: Point2<Real>) {
        if !self.active {
            return;
        }
        if let Some(last) = self.points.last() {
            if na::distance(last, &at) < LASSO_SPACING {
                return;
            }
        }
        self.points.push(at);
    }

    /// Finishes the gesture and returns the outline, however small: a
    /// degenerate outline is a valid gesture that selects nothing.
    pub fn finish(&mut self) -> Outline {
        self.active = false;
        Outline {
            points: core::mem::take(&mut self.points),
        }
    }

    /// Aborts the gesture.
    pub fn cancel(&mut self) {
        self.active = false;
        self.points.clear();
    }
}

/// Partition of a fragment set by a selection outline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Indices of the fragments whose centroid lies inside the outline.
    pub kept: Vec<usize>,
    /// Indices of the fragments left outside.
    pub discarded: Vec<usize>,
}

/// Classifies fragments against a selection outline, by the silhouette
/// position of their centroid.
pub fn classify(outline: &Outline, fragments: &[Fragment]) -> Selection {
    let mut selection = Selection::default();

    for (i, fragment) in fragments.iter().enumerate() {
        if outline.contains(&fragment.world_centroid_2d()) {
            selection.kept.push(i);
        } else {
            selection.discarded.push(i);
        }
    }

    selection
}

/// Discards fragments, recording the discard in the tree so it survives
/// reconstruction.
///
/// Each fragment's originating branch is marked destroyed; a fragment
/// that never came from a cut has no branch to mark and is simply
/// dropped.
pub fn discard(tree: &mut SliceTree, fragments: impl IntoIterator<Item = Fragment>) {
    for fragment in fragments {
        if let Some((op, side)) = fragment.origin {
            tree.mark_destroyed(op, side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point2, Point3};

    #[test]
    fn stroke_gesture_lifecycle() {
        let mut gesture = StrokeGesture::new();
        assert!(gesture.take().is_none());

        gesture.press(Point3::origin());
        // A release is needed before anything can be taken.
        assert!(gesture.take().is_none());

        gesture.release(Point3::new(1.0, 0.0, 0.0));
        assert!(gesture.is_ready());

        // A new press is ignored until the stroke is consumed.
        gesture.press(Point3::new(9.0, 9.0, 9.0));
        let stroke = gesture.take().unwrap();
        assert_eq!(stroke.a, Point3::origin());
        assert_eq!(stroke.b, Point3::new(1.0, 0.0, 0.0));
        assert!(gesture.take().is_none());
    }

    #[test]
    fn stroke_gesture_cancel() {
        let mut gesture = StrokeGesture::new();
        gesture.press(Point3::origin());
        gesture.cancel();
        gesture.release(Point3::new(1.0, 0.0, 0.0));
        assert!(gesture.take().is_none());
    }

    #[test]
    fn lasso_dedups_close_points() {
        let mut lasso = LassoGesture::new();
        lasso.begin(Point2::new(0.0, 0.0));
        lasso.extend(Point2::new(0.0, 1.0e-5));
        lasso.extend(Point2::new(1.0, 0.0));
        lasso.extend(Point2::new(0.5, 1.0));

        let outline = lasso.finish();
        assert_eq!(outline.points().len(), 3);
        assert!(!lasso.is_active());
    }

    #[test]
    fn degenerate_outline_selects_nothing() {
        let mut lasso = LassoGesture::new();
        lasso.begin(Point2::new(0.0, 0.0));
        lasso.extend(Point2::new(1.0, 0.0));

        let outline = lasso.finish();
        assert!(!outline.contains(&Point2::new(0.5, 0.0)));
    }

    #[test]
    fn extend_without_begin_is_ignored() {
        let mut lasso = LassoGesture::new();
        lasso.extend(Point2::new(1.0, 0.0));
        assert_eq!(lasso.finish().points().len(), 0);
    }
}
