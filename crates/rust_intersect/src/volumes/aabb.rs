//! Axis-aligned bounding box

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use super::{check_extents, check_finite, ShapeError};

/// Axis-Aligned Bounding Box stored as center and half-extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center of the box
    pub center: Vec3,
    /// Half-widths along the world axes, each component >= 0
    pub extents: Vec3,
}

impl Aabb {
    /// Create an AABB from its center and half-extents
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self { center, extents }
    }

    /// Create an AABB spanning two corner points
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            extents: (max - min) * 0.5,
        }
    }

    /// Minimum corner
    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    /// Inclusive point containment
    pub fn contains_point(&self, point: Vec3) -> bool {
        let d = point - self.center;
        d.x.abs() <= self.extents.x && d.y.abs() <= self.extents.y && d.z.abs() <= self.extents.z
    }

    /// The eight corners, bit `i` of the index selecting `+extent` on axis `i`
    pub fn corners(&self) -> [Vec3; 8] {
        let mut corners = [Vec3::zeros(); 8];
        for (index, corner) in corners.iter_mut().enumerate() {
            let sign = |bit: usize| if index & (1 << bit) != 0 { 1.0 } else { -1.0 };
            *corner = self.center + Vec3::new(
                self.extents.x * sign(0),
                self.extents.y * sign(1),
                self.extents.z * sign(2),
            );
        }
        corners
    }

    /// Furthest corner along `direction`
    pub fn support(&self, direction: &Vec3) -> Vec3 {
        self.center + Vec3::new(
            self.extents.x.copysign(direction.x),
            self.extents.y.copysign(direction.y),
            self.extents.z.copysign(direction.z),
        )
    }

    /// Check the extents are finite and non-negative
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_finite(&self.center, "aabb center")?;
        check_extents(&self.extents)
    }
}
