//! Camera-side spatial queries
//!
//! Builds the view frustum from camera parameters once per frame and culls
//! flat lists of bounding volumes against it.

pub mod frustum;
pub mod culling;

pub use frustum::{make_frustum, CameraParams, Frustum, FrustumPlane};
pub use culling::{
    cull_aabb_list,
    cull_obb_list,
    cull_sphere_list,
    visible_aabbs,
    visible_obbs,
    visible_indices,
};
#[cfg(feature = "parallel")]
pub use culling::{par_cull_aabb_list, par_cull_obb_list};
