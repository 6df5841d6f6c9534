//! # Rust Intersect
//!
//! Bounding volumes, intersection tests and batch frustum culling for a
//! game engine's visibility and picking paths.
//!
//! ## Features
//!
//! - **Bounding Volumes**: AABB, OBB, sphere and convex point sets
//! - **Frustum Culling**: Six-plane frustums built from camera parameters,
//!   culled against flat AABB/OBB/sphere lists every frame
//! - **Ray Queries**: Plane, sphere, oriented box and triangle casts
//! - **Shape Pairs**: Closed-form sphere/AABB tests, a 15-axis separating
//!   axis test for oriented boxes, and GJK for general convex shapes
//!
//! Every routine is a pure function over its arguments. There is no global
//! state and nothing to initialize; callers that want the library's log
//! output install a logger (see [`foundation::logging::init`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_intersect::prelude::*;
//!
//! let frustum = make_frustum(
//!     Vec3::zeros(), Vec3::x(), Vec3::y(), Vec3::z(),
//!     90.0, 16.0 / 9.0, 0.1, 100.0,
//! );
//!
//! let boxes = [
//!     Aabb::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(1.0, 1.0, 1.0)),
//!     Aabb::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(1.0, 1.0, 1.0)),
//! ];
//! let mut visible = [false; 2];
//! cull_aabb_list(&frustum, &boxes, &mut visible);
//! assert_eq!(visible, [true, false]);
//!
//! let a = Sphere::new(Vec3::zeros(), 5.0);
//! let b = Sphere::new(Vec3::new(6.0, 0.0, 0.0), 2.0);
//! assert!(sphere_sphere(&a, &b));
//! ```
//!
//! ## Conventions
//!
//! - A point `p` is inside frustum plane `i` when
//!   `dot(plane_normals[i], p) >= plane_dots[i]`.
//! - [`point_in_obb`](physics::point_in_obb) measures from a box corner,
//!   not its center.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod volumes;
pub mod physics;
pub mod scene;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, IntersectionConfig},
        foundation::math::{Quat, Vec2, Vec3},
        volumes::{Aabb, ConvexRegion, Obb, ShapeError, Sphere},
        physics::{
            point_in_rect, point_in_obb,
            ray_plane, ray_sphere, ray_obb, ray_triangle,
            sphere_sphere, aabb_aabb, sphere_aabb,
            obb_obb, obb_obb_with_epsilon,
            intersect_convex, intersect_convex_with_limit,
            Shape, SupportMap,
        },
        scene::{
            make_frustum, CameraParams, Frustum, FrustumPlane,
            cull_aabb_list, cull_obb_list, cull_sphere_list,
            visible_aabbs, visible_obbs, visible_indices,
        },
    };

    #[cfg(feature = "parallel")]
    pub use crate::scene::{par_cull_aabb_list, par_cull_obb_list};
}
