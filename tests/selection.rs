mod common;

use common::{horizontal_stroke, square_mesh, view_forward, ClipBisector};
use slicetree::gesture::{classify, discard, LassoGesture};
use slicetree::math::{Isometry, Point2};
use slicetree::slicing::{
    execute_cut, reconstruct, CutResult, Fragment, MotionParams, ReconstructParams,
    RigidBodyProperties, SliceTree, SourceObject,
};

fn lasso_around_upper_half() -> slicetree::gesture::Outline {
    let mut lasso = LassoGesture::new();
    lasso.begin(Point2::new(-1.0, 0.6));
    lasso.extend(Point2::new(2.0, 0.6));
    lasso.extend(Point2::new(2.0, 2.0));
    lasso.extend(Point2::new(-1.0, 2.0));
    lasso.finish()
}

fn cut_square_in_half(tree: &mut SliceTree) -> Vec<Fragment> {
    let fragment = Fragment::new(
        square_mesh(),
        Isometry::identity(),
        RigidBodyProperties::default(),
        None,
    );
    match execute_cut(
        fragment,
        &horizontal_stroke(0.5),
        &view_forward(),
        tree,
        &ClipBisector,
        &MotionParams::default(),
    ) {
        CutResult::Cut(outcome) => outcome.fragments,
        CutResult::Untouched(_) => panic!("expected the cut to go through"),
    }
}

#[test]
fn lasso_classifies_fragments_by_centroid() {
    let mut tree = SliceTree::new();
    let fragments = cut_square_in_half(&mut tree);

    let selection = classify(&lasso_around_upper_half(), &fragments);
    assert_eq!(selection.kept, vec![0]);
    assert_eq!(selection.discarded, vec![1]);
}

#[test]
fn discarding_survives_reconstruction() {
    let mut tree = SliceTree::new();
    let fragments = cut_square_in_half(&mut tree);

    let outline = lasso_around_upper_half();
    let selection = classify(&outline, &fragments);

    let mut discarded = Vec::new();
    for (i, fragment) in fragments.into_iter().enumerate() {
        if selection.discarded.contains(&i) {
            discarded.push(fragment);
        }
    }
    discard(&mut tree, discarded);
    assert_eq!(tree.live_leaf_count(), 1);

    // The discard is part of the recorded history: replaying the tree
    // never brings the lower half back.
    let source = SourceObject {
        mesh: square_mesh(),
        transform: Isometry::identity(),
        body: RigidBodyProperties::default(),
    };
    let leaves = reconstruct(&tree, &source, &ClipBisector, &ReconstructParams::default());

    assert_eq!(leaves.len(), 1);
    assert!(leaves[0].world_centroid_2d().y > 0.5);
    assert!(outline.contains(&leaves[0].world_centroid_2d()));
}

#[test]
fn discarding_an_uncut_fragment_leaves_the_tree_alone() {
    let mut tree = SliceTree::new();
    let fragment = Fragment::new(
        square_mesh(),
        Isometry::identity(),
        RigidBodyProperties::default(),
        None,
    );

    discard(&mut tree, [fragment]);
    assert!(tree.is_empty());
}
