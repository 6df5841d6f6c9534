//! Ray intersection tests
//!
//! Rays are passed as `(origin, direction)` pairs. Whether `direction` must
//! be unit length differs per routine; each function states its contract.

use crate::foundation::math::{utils, Quat, Vec3};

/// Tolerance under which a ray counts as parallel to a triangle
const TRIANGLE_PARALLEL_EPSILON: f32 = 1e-6;

/// Point where the line through the ray meets a plane
///
/// `direction` need not be normalized. A direction parallel to the plane
/// divides by zero and yields `inf`/NaN components; check
/// `plane_normal.dot(&direction)` first if that can happen. Intersections
/// behind the origin are returned as-is.
pub fn ray_plane(origin: Vec3, direction: Vec3, plane_point: Vec3, plane_normal: Vec3) -> Vec3 {
    let t = plane_normal.dot(&(plane_point - origin)) / plane_normal.dot(&direction);
    origin + direction * t
}

/// Ray against sphere
///
/// `direction` must be unit length. An origin inside the sphere always hits.
pub fn ray_sphere(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> bool {
    let diff = origin - center;
    let a0 = diff.dot(&diff) - radius * radius;
    if a0 <= 0.0 {
        return true;
    }

    // Origin outside and pointing away
    let a1 = direction.dot(&diff);
    if a1 >= 0.0 {
        return false;
    }

    a1 * a1 >= a0
}

/// Ray against oriented box
///
/// The box is given by its center, orientation and half-extents.
/// `direction` need not be normalized. Only reports whether the ray hits.
pub fn ray_obb(
    origin: Vec3,
    direction: Vec3,
    obb_center: Vec3,
    obb_orientation: &Quat,
    obb_half_extents: Vec3,
) -> bool {
    let axes = utils::basis_axes(obb_orientation);
    let e = obb_half_extents;
    let diff = origin - obb_center;

    let mut w_dot_u = [0.0_f32; 3];
    let mut abs_w_dot_u = [0.0_f32; 3];
    for i in 0..3 {
        w_dot_u[i] = direction.dot(&axes[i]);
        abs_w_dot_u[i] = w_dot_u[i].abs();

        // Outside this slab and heading further out
        let d_dot_u = diff.dot(&axes[i]);
        if d_dot_u.abs() > e[i] && d_dot_u * w_dot_u[i] >= 0.0 {
            return false;
        }
    }

    let w_cross_d = direction.cross(&diff);

    let rhs = e[1] * abs_w_dot_u[2] + e[2] * abs_w_dot_u[1];
    if w_cross_d.dot(&axes[0]).abs() > rhs {
        return false;
    }

    let rhs = e[0] * abs_w_dot_u[2] + e[2] * abs_w_dot_u[0];
    if w_cross_d.dot(&axes[1]).abs() > rhs {
        return false;
    }

    let rhs = e[0] * abs_w_dot_u[1] + e[1] * abs_w_dot_u[0];
    w_cross_d.dot(&axes[2]).abs() <= rhs
}

/// Möller-Trumbore ray-triangle intersection
///
/// Hits front and back faces alike. Returns the hit point when the ray is
/// not parallel to the triangle, the barycentric coordinates fall inside
/// the triangle, and the hit is not behind the origin. `direction` need not
/// be normalized.
///
/// See: "Fast, Minimum Storage Ray/Triangle Intersection" by Möller & Trumbore
pub fn ray_triangle(origin: Vec3, direction: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<Vec3> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let p = direction.cross(&edge2);
    let det = edge1.dot(&p);
    let t_vec = origin - v0;

    // u and v are kept scaled by det until the end
    let q = if det > TRIANGLE_PARALLEL_EPSILON {
        let u = t_vec.dot(&p);
        if u < 0.0 || u > det {
            return None;
        }
        let q = t_vec.cross(&edge1);
        let v = direction.dot(&q);
        if v < 0.0 || u + v > det {
            return None;
        }
        q
    } else if det < -TRIANGLE_PARALLEL_EPSILON {
        let u = t_vec.dot(&p);
        if u > 0.0 || u < det {
            return None;
        }
        let q = t_vec.cross(&edge1);
        let v = direction.dot(&q);
        if v > 0.0 || u + v < det {
            return None;
        }
        q
    } else {
        return None;
    };

    let t = edge2.dot(&q) / det;
    if t < 0.0 {
        return None;
    }

    Some(origin + direction * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::PI;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_ray_plane_hit_point() {
        let hit = ray_plane(
            Vec3::new(1.0, 5.0, 2.0),
            Vec3::new(0.0, -2.0, 0.0),
            Vec3::zeros(),
            Vec3::y(),
        );
        assert_relative_eq!(hit, Vec3::new(1.0, 0.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_ray_plane_parallel_is_not_finite() {
        let hit = ray_plane(Vec3::new(0.0, 1.0, 0.0), Vec3::x(), Vec3::zeros(), Vec3::y());
        assert!(!hit.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_ray_sphere() {
        let center = Vec3::new(0.0, 0.0, -10.0);

        assert!(ray_sphere(Vec3::zeros(), -Vec3::z(), center, 1.0));
        assert!(!ray_sphere(Vec3::zeros(), Vec3::z(), center, 1.0));
        assert!(!ray_sphere(Vec3::new(2.0, 0.0, 0.0), -Vec3::z(), center, 1.0));
        // Origin inside, any direction
        assert!(ray_sphere(Vec3::new(0.0, 0.0, -10.5), Vec3::z(), center, 1.0));
    }

    #[test]
    fn test_ray_sphere_grazing() {
        let direction = Vec3::new(0.0, 1.0, -10.0).normalize();
        assert!(ray_sphere(Vec3::zeros(), direction, Vec3::new(0.0, 0.0, -10.0), 1.5));
        assert!(!ray_sphere(Vec3::zeros(), direction, Vec3::new(0.0, 0.0, -10.0), 0.5));
    }

    #[test]
    fn test_ray_obb_axis_aligned() {
        let identity = Quat::identity();
        let half = Vec3::new(1.0, 1.0, 1.0);
        let center = Vec3::new(0.0, 0.0, -5.0);

        assert!(ray_obb(Vec3::zeros(), -Vec3::z(), center, &identity, half));
        assert!(!ray_obb(Vec3::zeros(), Vec3::z(), center, &identity, half));
        assert!(!ray_obb(Vec3::new(3.0, 0.0, 0.0), -Vec3::z(), center, &identity, half));
        // Origin inside the box
        assert!(ray_obb(center, Vec3::x(), center, &identity, half));
    }

    #[test]
    fn test_ray_obb_rotated() {
        // A thin plank rotated 45 degrees about y
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), PI * 0.25);
        let half = Vec3::new(4.0, 0.5, 0.1);
        let center = Vec3::new(0.0, 0.0, -5.0);

        // Straight down -z passes through the plank's middle
        assert!(ray_obb(Vec3::new(0.0, 0.0, 0.0), -Vec3::z(), center, &rotation, half));
        // Offset in x still hits the diagonal plank
        assert!(ray_obb(Vec3::new(2.0, 0.0, 0.0), -Vec3::z(), center, &rotation, half));
        // Past the plank's reach
        assert!(!ray_obb(Vec3::new(3.5, 0.0, 0.0), -Vec3::z(), center, &rotation, half));
        // Above the plank
        assert!(!ray_obb(Vec3::new(0.0, 1.0, 0.0), -Vec3::z(), center, &rotation, half));
    }

    #[test]
    fn test_ray_triangle_front_and_back() {
        let v0 = Vec3::new(-1.0, -1.0, -3.0);
        let v1 = Vec3::new(1.0, -1.0, -3.0);
        let v2 = Vec3::new(0.0, 1.0, -3.0);

        let front = ray_triangle(Vec3::zeros(), -Vec3::z(), v0, v1, v2).unwrap();
        assert_relative_eq!(front, Vec3::new(0.0, 0.0, -3.0), epsilon = EPSILON);

        // Same triangle seen from behind
        let back = ray_triangle(Vec3::new(0.0, 0.0, -6.0), Vec3::z(), v0, v1, v2).unwrap();
        assert_relative_eq!(back, Vec3::new(0.0, 0.0, -3.0), epsilon = EPSILON);
    }

    #[test]
    fn test_ray_triangle_misses() {
        let v0 = Vec3::new(-1.0, -1.0, -3.0);
        let v1 = Vec3::new(1.0, -1.0, -3.0);
        let v2 = Vec3::new(0.0, 1.0, -3.0);

        // Outside the barycentric range
        assert!(ray_triangle(Vec3::new(2.0, 0.0, 0.0), -Vec3::z(), v0, v1, v2).is_none());
        // Parallel to the triangle plane
        assert!(ray_triangle(Vec3::zeros(), Vec3::x(), v0, v1, v2).is_none());
        // Triangle behind the origin
        assert!(ray_triangle(Vec3::zeros(), Vec3::z(), v0, v1, v2).is_none());
    }
}
