//! The physical-property bundle duplicated onto every new fragment.

use crate::math::Real;
use bitflags::bitflags;

/// How a body is simulated by the physics layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum BodyType {
    /// Fully simulated.
    #[default]
    Dynamic,
    /// Moved only by its owner, pushes dynamic bodies around.
    Kinematic,
    /// Never moves.
    Static,
}

/// Collision-detection mode of a body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CollisionMode {
    /// Overlap tests at each step.
    #[default]
    Discrete,
    /// Swept tests, for fast-moving bodies.
    Continuous,
}

/// When the physics layer may put a body to sleep.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SleepMode {
    /// Starts awake, may sleep later.
    #[default]
    StartAwake,
    /// Starts asleep.
    StartAsleep,
    /// Never sleeps.
    NeverSleep,
}

/// Transform interpolation applied between physics steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Raw stepped transforms.
    #[default]
    None,
    /// Interpolate from the previous step.
    Interpolate,
    /// Extrapolate from the current velocities.
    Extrapolate,
}

bitflags! {
    /// Degrees of freedom a body is not allowed to change.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct LockedAxes: u8 {
        /// Translation along x is frozen.
        const TRANSLATION_X = 1 << 0;
        /// Translation along y is frozen.
        const TRANSLATION_Y = 1 << 1;
        /// Rotation on the silhouette plane is frozen.
        const ROTATION = 1 << 2;
    }
}

/// Opaque reference to a shared physics material.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaterialHandle(pub u64);

/// The full physical-property set of a fragment.
///
/// The slicing core never interprets these values; it only copies them
/// verbatim from the object being cut onto each of the fragments the cut
/// produces.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigidBodyProperties {
    /// How the body is simulated.
    pub body_type: BodyType,
    /// Mass of the body.
    pub mass: Real,
    /// Linear velocity damping.
    pub linear_damping: Real,
    /// Angular velocity damping.
    pub angular_damping: Real,
    /// Multiplier applied to the global gravity.
    pub gravity_scale: Real,
    /// Collision-detection mode.
    pub collision_mode: CollisionMode,
    /// Sleeping policy.
    pub sleep_mode: SleepMode,
    /// Transform interpolation between steps.
    pub interpolation: Interpolation,
    /// Frozen degrees of freedom.
    pub locked_axes: LockedAxes,
    /// Shared physics material, if any.
    pub material: Option<MaterialHandle>,
}

impl Default for RigidBodyProperties {
    fn default() -> Self {
        Self {
            body_type: BodyType::default(),
            mass: 1.0,
            linear_damping: 0.0,
            angular_damping: 0.05,
            gravity_scale: 1.0,
            collision_mode: CollisionMode::default(),
            sleep_mode: SleepMode::default(),
            interpolation: Interpolation::default(),
            locked_axes: LockedAxes::empty(),
            material: None,
        }
    }
}
