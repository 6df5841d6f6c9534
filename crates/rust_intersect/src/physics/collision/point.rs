//! Point containment tests

use crate::foundation::math::{Quat, Vec2, Vec3};

/// Strict point-in-rectangle test
///
/// The rectangle spans `(x, y)` to `(x + w, y + h)`. Points on an edge are
/// outside.
pub fn point_in_rect(point: Vec2, x: f32, y: f32, w: f32, h: f32) -> bool {
    point.x > x && point.x < x + w && point.y > y && point.y < y + h
}

/// Point inside an oriented box described by its corner
///
/// `obb_origin` is one corner of the box, not its center; the box spans
/// `[0, obb_dimensions]` along each local axis after undoing
/// `obb_orientation`. Faces count as inside.
pub fn point_in_obb(point: Vec3, obb_origin: Vec3, obb_orientation: &Quat, obb_dimensions: Vec3) -> bool {
    let local = obb_orientation.inverse_transform_vector(&(point - obb_origin));

    (0..3).all(|i| local[i] >= 0.0 && local[i] <= obb_dimensions[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use crate::volumes::Aabb;

    #[test]
    fn test_point_in_rect_strict_edges() {
        assert!(!point_in_rect(Vec2::new(0.0, 5.0), 0.0, 0.0, 10.0, 10.0));
        assert!(point_in_rect(Vec2::new(0.0001, 5.0), 0.0, 0.0, 10.0, 10.0));
        assert!(!point_in_rect(Vec2::new(10.0, 5.0), 0.0, 0.0, 10.0, 10.0));
        assert!(!point_in_rect(Vec2::new(5.0, 10.0), 0.0, 0.0, 10.0, 10.0));
        assert!(point_in_rect(Vec2::new(5.0, 5.0), 0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_point_in_obb_is_corner_relative() {
        let identity = Quat::identity();
        let origin = Vec3::new(1.0, 1.0, 1.0);
        let dims = Vec3::new(2.0, 2.0, 2.0);

        assert!(point_in_obb(Vec3::new(2.0, 2.0, 2.0), origin, &identity, dims));
        assert!(point_in_obb(origin, origin, &identity, dims));
        // Half a box below the corner would be inside a center-relative box
        assert!(!point_in_obb(Vec3::new(0.5, 1.5, 1.5), origin, &identity, dims));
    }

    #[test]
    fn test_point_in_obb_from_aabb_corner_and_size() {
        let aabb = Aabb::new(Vec3::new(3.0, -2.0, 5.0), Vec3::new(0.5, 1.5, 0.25));
        let identity = Quat::identity();

        for point in [
            Vec3::new(3.0, -2.0, 5.0),
            Vec3::new(3.4, -0.6, 5.2),
            Vec3::new(2.6, -3.4, 4.8),
            Vec3::new(3.6, -2.0, 5.0),
            Vec3::new(3.0, -2.0, 5.3),
            Vec3::new(1.5, -3.0, 4.0),
        ] {
            assert_eq!(
                point_in_obb(point, aabb.min(), &identity, aabb.extents * 2.0),
                aabb.contains_point(point),
                "disagreement at {point:?}"
            );
        }
        // Half extents as dimensions only cover the lower octant
        assert!(!point_in_obb(Vec3::new(3.4, -0.6, 5.2), aabb.min(), &identity, aabb.extents));
    }

    #[test]
    fn test_point_in_rotated_obb() {
        // Local +x maps to world +y
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), HALF_PI);
        let dims = Vec3::new(4.0, 1.0, 1.0);

        assert!(point_in_obb(Vec3::new(-0.5, 3.0, 0.5), Vec3::zeros(), &rotation, dims));
        assert!(!point_in_obb(Vec3::new(3.0, 0.5, 0.5), Vec3::zeros(), &rotation, dims));
    }
}
