//! Closed-form overlap tests for spheres and axis-aligned boxes
//!
//! Touching shapes count as intersecting.

use crate::foundation::math::Vec3;
use crate::volumes::{Aabb, Sphere};

/// Check if two spheres intersect
pub fn sphere_sphere(a: &Sphere, b: &Sphere) -> bool {
    let distance_squared = (a.position - b.position).norm_squared();
    let radius_sum = a.radius + b.radius;
    distance_squared <= radius_sum * radius_sum
}

/// Check if two axis-aligned boxes intersect
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    let d = a.center - b.center;
    let r = a.extents + b.extents;
    d.x.abs() <= r.x && d.y.abs() <= r.y && d.z.abs() <= r.z
}

/// Check if a sphere intersects an axis-aligned box
///
/// Clamps the sphere center into the box and compares squared distances.
pub fn sphere_aabb(sphere: &Sphere, aabb: &Aabb) -> bool {
    let min = aabb.min();
    let max = aabb.max();
    let closest_point = Vec3::new(
        min.x.max(sphere.position.x.min(max.x)),
        min.y.max(sphere.position.y.min(max.y)),
        min.z.max(sphere.position.z.min(max.z)),
    );
    (closest_point - sphere.position).norm_squared() <= sphere.radius * sphere.radius
}
