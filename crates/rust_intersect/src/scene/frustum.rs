//! View frustum construction and single-object tests
//!
//! Plane `i` is the half-space `dot(plane_normals[i], p) >= plane_dots[i]`;
//! normals point into the frustum.

use crate::foundation::math::{utils, Vec3};
use crate::volumes::{Aabb, Obb, ShapeError, Sphere};

/// Index of each frustum plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    /// Top side plane
    Top = 0,
    /// Bottom side plane
    Bottom = 1,
    /// Left side plane
    Left = 2,
    /// Right side plane
    Right = 3,
    /// Near clip plane
    Near = 4,
    /// Far clip plane
    Far = 5,
}

impl FrustumPlane {
    /// All planes in storage order
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Top,
        FrustumPlane::Bottom,
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Near,
        FrustumPlane::Far,
    ];
}

/// Six inward-facing half-spaces bounding the visible volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Unit plane normals, pointing inside
    pub plane_normals: [Vec3; 6],
    /// Plane offsets: `dot(normal, p)` for any point `p` on the plane
    pub plane_dots: [f32; 6],
}

impl Frustum {
    /// Normal and offset of one plane
    pub fn plane(&self, plane: FrustumPlane) -> (Vec3, f32) {
        let i = plane as usize;
        (self.plane_normals[i], self.plane_dots[i])
    }

    /// Point inside or on every plane
    pub fn contains_point(&self, point: &Vec3) -> bool {
        self.plane_normals
            .iter()
            .zip(&self.plane_dots)
            .all(|(normal, dot)| normal.dot(point) >= *dot)
    }

    /// Sphere not entirely outside any plane
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.plane_normals
            .iter()
            .zip(&self.plane_dots)
            .all(|(normal, dot)| normal.dot(&sphere.position) + sphere.radius >= *dot)
    }

    /// AABB not entirely outside any plane
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.plane_normals
            .iter()
            .zip(&self.plane_dots)
            .all(|(normal, dot)| {
                normal.dot(&aabb.center) + aabb.extents.dot(&utils::abs(normal)) >= *dot
            })
    }

    /// OBB not entirely outside any plane
    pub fn intersects_obb(&self, obb: &Obb) -> bool {
        self.plane_normals
            .iter()
            .zip(&self.plane_dots)
            .all(|(normal, dot)| normal.dot(&obb.support(normal)) >= *dot)
    }
}

/// Camera parameters a frustum is built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    /// Eye position
    pub position: Vec3,
    /// Camera right axis
    pub view_x: Vec3,
    /// Camera up axis
    pub view_y: Vec3,
    /// Camera backward axis (the view looks along `-view_z`)
    pub view_z: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Viewport width / height
    pub aspect_ratio: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl CameraParams {
    /// Camera at `position` looking at `target`
    ///
    /// `up` only needs to be non-parallel to the view direction.
    pub fn look_at(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        fov_degrees: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let view_z = (position - target).normalize();
        let view_x = up.cross(&view_z).normalize();
        let view_y = view_z.cross(&view_x);
        Self {
            position,
            view_x,
            view_y,
            view_z,
            fov_degrees,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Build the frustum for these parameters
    pub fn frustum(&self) -> Frustum {
        make_frustum(
            self.position,
            self.view_x,
            self.view_y,
            self.view_z,
            self.fov_degrees,
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }

    /// Check the clip range, field of view and aspect ratio
    pub fn validate(&self) -> Result<(), ShapeError> {
        if !(self.near > 0.0 && self.near < self.far && self.far.is_finite()) {
            return Err(ShapeError::InvalidClipRange { near: self.near, far: self.far });
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ShapeError::InvalidFieldOfView(self.fov_degrees));
        }
        if !(self.aspect_ratio > 0.0 && self.aspect_ratio.is_finite()) {
            return Err(ShapeError::InvalidAspectRatio(self.aspect_ratio));
        }
        Ok(())
    }
}

/// Build the six frustum planes from camera parameters
///
/// `view_x`, `view_y`, `view_z` must be an orthonormal right-handed basis
/// (right, up, backward); anything else silently skews the frustum.
/// `fov_degrees` is the vertical field of view and
/// `aspect_ratio = width / height`. Requires `0 < near < far`.
pub fn make_frustum(
    position: Vec3,
    view_x: Vec3,
    view_y: Vec3,
    view_z: Vec3,
    fov_degrees: f32,
    aspect_ratio: f32,
    near: f32,
    far: f32,
) -> Frustum {
    let near_center = position - view_z * near;
    let far_center = position - view_z * far;

    let near_height = near * (utils::deg_to_rad(fov_degrees) * 0.5).tan();
    let near_width = near_height * aspect_ratio;

    let top = ((near_center + view_y * near_height) - position).normalize().cross(&view_x).normalize();
    let bottom = view_x.cross(&((near_center - view_y * near_height) - position).normalize()).normalize();
    let left = ((near_center - view_x * near_width) - position).normalize().cross(&view_y).normalize();
    let right = view_y.cross(&((near_center + view_x * near_width) - position).normalize()).normalize();
    let near_normal = -view_z;
    let far_normal = view_z;

    // Every side plane passes through the eye
    let plane_normals = [top, bottom, left, right, near_normal, far_normal];
    let plane_dots = [
        top.dot(&position),
        bottom.dot(&position),
        left.dot(&position),
        right.dot(&position),
        near_normal.dot(&near_center),
        far_normal.dot(&far_center),
    ];

    Frustum { plane_normals, plane_dots }
}
