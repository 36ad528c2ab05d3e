//! The persistent slice tree, and the operations that record, mutate and
//! replay it.

pub use self::body::{
    BodyType, CollisionMode, Interpolation, LockedAxes, MaterialHandle, RigidBodyProperties,
    SleepMode,
};
pub use self::executor::{
    execute_cut, slice_all, CutOutcome, CutResult, FragmentMotion, MotionParams, PassOutcome,
};
pub use self::fragment::Fragment;
pub use self::reconstruct::{reconstruct, JitterParams, ReconstructParams, SourceObject};
pub use self::tree::{Side, SliceOpId, SliceOperation, SliceTree};

mod body;
mod executor;
mod fragment;
mod reconstruct;
mod tree;
