//! Physics module for collision detection
//!
//! Narrow-phase yes/no intersection tests for common shapes. There is no
//! broad phase and no contact generation here; callers hand in exactly the
//! pairs they want tested.

pub mod collision;

pub use collision::{
    point_in_rect,
    point_in_obb,
    ray_plane,
    ray_sphere,
    ray_obb,
    ray_triangle,
    sphere_sphere,
    aabb_aabb,
    sphere_aabb,
    obb_obb,
    obb_obb_with_epsilon,
    intersect_convex,
    intersect_convex_with_limit,
    SupportMap,
    Shape,
};
