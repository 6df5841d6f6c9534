//! Bounding volume primitives
//!
//! Plain data types with the invariants the intersection routines rely on.
//! Nothing here is checked on the hot path; each type offers a `validate`
//! method for callers that want to catch malformed input up front.

mod aabb;
mod obb;
mod sphere;
mod convex;

pub use aabb::Aabb;
pub use obb::Obb;
pub use sphere::Sphere;
pub use convex::ConvexRegion;

use crate::foundation::math::Vec3;

/// Tolerance used by `validate` when checking unit length and orthogonality
pub const VALIDATION_TOLERANCE: f32 = 1e-4;

/// Invariant violations reported by the `validate` methods
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A half-extent component is negative
    #[error("Negative extent on axis {axis}: {value}")]
    NegativeExtent {
        /// Axis index (0 = x, 1 = y, 2 = z)
        axis: usize,
        /// Offending value
        value: f32,
    },

    /// A sphere radius is negative
    #[error("Negative radius: {0}")]
    NegativeRadius(f32),

    /// An OBB axis is not unit length
    #[error("OBB axis {axis} has length {length}, expected 1")]
    AxisNotUnit {
        /// Axis index
        axis: usize,
        /// Measured length
        length: f32,
    },

    /// Two OBB axes are not perpendicular
    #[error("OBB axes {a} and {b} are not orthogonal (dot = {dot})")]
    AxesNotOrthogonal {
        /// First axis index
        a: usize,
        /// Second axis index
        b: usize,
        /// Measured dot product
        dot: f32,
    },

    /// A convex region has no vertices
    #[error("Convex region has no vertices")]
    EmptyRegion,

    /// A component is NaN or infinite
    #[error("Non-finite value in {0}")]
    NonFiniteValue(&'static str),

    /// Near/far distances do not satisfy `0 < near < far`
    #[error("Invalid clip range: near = {near}, far = {far}")]
    InvalidClipRange {
        /// Near distance
        near: f32,
        /// Far distance
        far: f32,
    },

    /// Vertical field of view outside `(0, 180)` degrees
    #[error("Invalid field of view: {0} degrees")]
    InvalidFieldOfView(f32),

    /// Aspect ratio is not strictly positive
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(f32),
}

pub(crate) fn check_finite(v: &Vec3, what: &'static str) -> Result<(), ShapeError> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(ShapeError::NonFiniteValue(what))
    }
}

pub(crate) fn check_extents(extents: &Vec3) -> Result<(), ShapeError> {
    check_finite(extents, "extents")?;
    match extents.iter().position(|e| *e < 0.0) {
        Some(axis) => Err(ShapeError::NegativeExtent { axis, value: extents[axis] }),
        None => Ok(()),
    }
}
