//! Bounding sphere

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use super::{check_finite, ShapeError};

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere
    pub position: Vec3,
    /// Radius, >= 0
    pub radius: f32,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Inclusive point containment
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.position).norm_squared() <= self.radius * self.radius
    }

    /// Furthest surface point along `direction`
    ///
    /// A zero direction returns the center.
    pub fn support(&self, direction: &Vec3) -> Vec3 {
        match direction.try_normalize(f32::EPSILON) {
            Some(unit) => self.position + unit * self.radius,
            None => self.position,
        }
    }

    /// Check the radius is finite and non-negative
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_finite(&self.position, "sphere position")?;
        if !self.radius.is_finite() {
            return Err(ShapeError::NonFiniteValue("sphere radius"));
        }
        if self.radius < 0.0 {
            return Err(ShapeError::NegativeRadius(self.radius));
        }
        Ok(())
    }
}
