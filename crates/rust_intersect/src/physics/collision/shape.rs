//! Tagged shape variant with a single intersection dispatcher
//!
//! The pairwise functions stay the primary API. [`Shape`] exists for call
//! sites that hold mixed shape kinds and want one entry point.

use crate::config::IntersectionConfig;
use crate::foundation::math::Vec3;
use crate::volumes::{Aabb, ConvexRegion, Obb, Sphere};
use super::gjk::{intersect_convex_with_limit, SupportMap};
use super::overlap::{aabb_aabb, sphere_aabb, sphere_sphere};
use super::sat::obb_obb_with_epsilon;

/// Any bounding volume the library can test
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Axis-aligned box
    Aabb(Aabb),
    /// Oriented box
    Obb(Obb),
    /// Sphere
    Sphere(Sphere),
    /// Convex hull of a borrowed point set
    Convex(ConvexRegion<'a>),
}

impl<'a> Shape<'a> {
    /// Test against another shape with default tunables
    pub fn intersects(&self, other: &Shape<'_>) -> bool {
        self.intersects_with(other, &IntersectionConfig::default())
    }

    /// Test against another shape
    ///
    /// Pairs with a closed form use it; everything else (sphere-OBB and
    /// any pair involving a convex region) runs GJK on support functions.
    pub fn intersects_with(&self, other: &Shape<'_>, config: &IntersectionConfig) -> bool {
        match (self, other) {
            (Self::Sphere(a), Shape::Sphere(b)) => sphere_sphere(a, b),
            (Self::Aabb(a), Shape::Aabb(b)) => aabb_aabb(a, b),

            (Self::Sphere(sphere), Shape::Aabb(aabb)) |
            (Self::Aabb(aabb), Shape::Sphere(sphere)) => sphere_aabb(sphere, aabb),

            (Self::Obb(a), Shape::Obb(b)) => obb_obb_with_epsilon(a, b, config.sat_epsilon),
            (Self::Aabb(aabb), Shape::Obb(obb)) |
            (Self::Obb(obb), Shape::Aabb(aabb)) => {
                obb_obb_with_epsilon(&Obb::from_aabb(aabb), obb, config.sat_epsilon)
            }

            _ => intersect_convex_with_limit(self, other, config.gjk_max_iterations),
        }
    }
}

impl SupportMap for Shape<'_> {
    fn support(&self, direction: &Vec3) -> Vec3 {
        match self {
            Self::Aabb(aabb) => aabb.support(direction),
            Self::Obb(obb) => obb.support(direction),
            Self::Sphere(sphere) => sphere.support(direction),
            Self::Convex(region) => region.support(direction),
        }
    }
}

impl From<Aabb> for Shape<'_> {
    fn from(aabb: Aabb) -> Self {
        Self::Aabb(aabb)
    }
}

impl From<Obb> for Shape<'_> {
    fn from(obb: Obb) -> Self {
        Self::Obb(obb)
    }
}

impl From<Sphere> for Shape<'_> {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl<'a> From<ConvexRegion<'a>> for Shape<'a> {
    fn from(region: ConvexRegion<'a>) -> Self {
        Self::Convex(region)
    }
}
