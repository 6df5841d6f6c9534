//! Collision detection primitives
//!
//! Every routine here is a pure function over its arguments: no allocation,
//! no shared state, no error path. Degenerate input (zero-length directions,
//! parallel rays, skewed bases) propagates as NaN or a wrong answer rather
//! than being reported.
//!
//! # Module Organization
//!
//! - [`point`] - Point containment in rectangles and oriented boxes
//! - [`ray`] - Ray casts against planes, spheres, boxes and triangles
//! - [`overlap`] - Closed-form sphere/AABB pair tests
//! - [`sat`] - 15-axis separating-axis test for oriented boxes
//! - [`gjk`] - General convex intersection on support functions
//! - [`shape`] - Tagged shape variant with a single dispatcher

pub mod point;
pub mod ray;
pub mod overlap;
pub mod sat;
pub mod gjk;
pub mod shape;

pub use point::{point_in_rect, point_in_obb};
pub use ray::{ray_plane, ray_sphere, ray_obb, ray_triangle};
pub use overlap::{sphere_sphere, aabb_aabb, sphere_aabb};
pub use sat::{obb_obb, obb_obb_with_epsilon};
pub use gjk::{intersect_convex, intersect_convex_with_limit, SupportMap};
pub use shape::Shape;
