//! Convex point sets queried only through their support function

use crate::foundation::math::Vec3;
use super::{check_finite, ShapeError};

/// Borrowed view over the vertices of a convex region
///
/// The hull is never built. Only the furthest vertex in a direction is
/// ever asked for, so a non-convex input behaves like its convex hull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvexRegion<'a> {
    /// Vertices whose convex hull is the region
    pub vertices: &'a [Vec3],
}

impl<'a> ConvexRegion<'a> {
    /// Wrap a vertex slice
    pub fn new(vertices: &'a [Vec3]) -> Self {
        Self { vertices }
    }

    /// Number of vertices
    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex with the largest projection onto `direction`
    ///
    /// Ties keep the earliest vertex. An empty region returns the origin.
    pub fn support(&self, direction: &Vec3) -> Vec3 {
        let mut best = Vec3::zeros();
        let mut best_dot = f32::NEG_INFINITY;
        for vertex in self.vertices {
            let d = vertex.dot(direction);
            if d > best_dot {
                best_dot = d;
                best = *vertex;
            }
        }
        best
    }

    /// Average of the vertices
    pub fn centroid(&self) -> Vec3 {
        if self.vertices.is_empty() {
            return Vec3::zeros();
        }
        let sum: Vec3 = self.vertices.iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let count = self.vertices.len() as f32;
        sum / count
    }

    /// Check there is at least one finite vertex
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.vertices.is_empty() {
            return Err(ShapeError::EmptyRegion);
        }
        self.vertices.iter().try_for_each(|v| check_finite(v, "convex vertex"))
    }
}
