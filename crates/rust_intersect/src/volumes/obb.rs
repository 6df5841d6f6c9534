//! Oriented bounding box

use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Quat, Vec3};
use super::{check_extents, check_finite, Aabb, ShapeError, VALIDATION_TOLERANCE};

/// Oriented Bounding Box
///
/// `axes` must be mutually orthogonal unit vectors forming a right-handed
/// basis. Nothing enforces this; a skewed basis gives wrong answers from
/// every test that consumes the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obb {
    /// Center of the box
    pub center: Vec3,
    /// Half-widths along each local axis, each component >= 0
    pub extents: Vec3,
    /// Local axes in world space
    pub axes: [Vec3; 3],
}

impl Obb {
    /// Create an OBB from center, half-extents and an explicit basis
    pub fn new(center: Vec3, extents: Vec3, axes: [Vec3; 3]) -> Self {
        Self { center, extents, axes }
    }

    /// Create an OBB whose basis is the rotation of the world axes
    pub fn from_orientation(center: Vec3, extents: Vec3, orientation: &Quat) -> Self {
        Self {
            center,
            extents,
            axes: utils::basis_axes(orientation),
        }
    }

    /// An axis-aligned box expressed as an OBB
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: aabb.center,
            extents: aabb.extents,
            axes: [Vec3::x(), Vec3::y(), Vec3::z()],
        }
    }

    /// Offset from the center to the corner picked by `signs` (each +-1)
    fn corner_offset(&self, signs: [f32; 3]) -> Vec3 {
        self.axes[0] * (self.extents.x * signs[0])
            + self.axes[1] * (self.extents.y * signs[1])
            + self.axes[2] * (self.extents.z * signs[2])
    }

    /// The eight corners, bit `i` of the index selecting `+extent` on axis `i`
    pub fn corners(&self) -> [Vec3; 8] {
        let mut corners = [Vec3::zeros(); 8];
        for (index, corner) in corners.iter_mut().enumerate() {
            let sign = |bit: usize| if index & (1 << bit) != 0 { 1.0 } else { -1.0 };
            *corner = self.center + self.corner_offset([sign(0), sign(1), sign(2)]);
        }
        corners
    }

    /// Furthest corner along `direction`
    pub fn support(&self, direction: &Vec3) -> Vec3 {
        let signs = [
            1.0_f32.copysign(self.axes[0].dot(direction)),
            1.0_f32.copysign(self.axes[1].dot(direction)),
            1.0_f32.copysign(self.axes[2].dot(direction)),
        ];
        self.center + self.corner_offset(signs)
    }

    /// Check extents and basis orthonormality
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_finite(&self.center, "obb center")?;
        check_extents(&self.extents)?;

        for (axis, v) in self.axes.iter().enumerate() {
            check_finite(v, "obb axis")?;
            let length = v.norm();
            if (length - 1.0).abs() > VALIDATION_TOLERANCE {
                return Err(ShapeError::AxisNotUnit { axis, length });
            }
        }

        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            let dot = self.axes[a].dot(&self.axes[b]);
            if dot.abs() > VALIDATION_TOLERANCE {
                return Err(ShapeError::AxesNotOrthogonal { a, b, dot });
            }
        }

        Ok(())
    }
}
