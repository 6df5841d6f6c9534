//! Separating axis test for oriented boxes
//!
//! Tests the 15 candidate axes (3 face normals of each box and the 9
//! pairwise cross products) and stops at the first one that separates.

use crate::config::DEFAULT_SAT_EPSILON;
use crate::volumes::Obb;

/// Check if two oriented boxes intersect
///
/// Uses [`DEFAULT_SAT_EPSILON`] as tolerance on near-parallel axes.
pub fn obb_obb(a: &Obb, b: &Obb) -> bool {
    obb_obb_with_epsilon(a, b, DEFAULT_SAT_EPSILON)
}

/// Check if two oriented boxes intersect, with an explicit tolerance
///
/// `epsilon` is added to every `|dot(a.axes[i], b.axes[j])|`. When two
/// edges are nearly parallel their cross product is close to zero and
/// rounding can otherwise report a separation that does not exist. Zero
/// disables the tolerance.
pub fn obb_obb_with_epsilon(a: &Obb, b: &Obb, epsilon: f32) -> bool {
    let ea = a.extents;
    let eb = b.extents;

    // Rotation of b expressed in a's frame
    let mut c = [[0.0_f32; 3]; 3];
    let mut abs_c = [[0.0_f32; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            c[i][j] = a.axes[i].dot(&b.axes[j]);
            abs_c[i][j] = c[i][j].abs() + epsilon;
        }
    }

    let d = b.center - a.center;
    let ad = [a.axes[0].dot(&d), a.axes[1].dot(&d), a.axes[2].dot(&d)];

    // a's face normals
    for i in 0..3 {
        let r0 = ea[i];
        let r1 = eb[0] * abs_c[i][0] + eb[1] * abs_c[i][1] + eb[2] * abs_c[i][2];
        if ad[i].abs() > r0 + r1 {
            return false;
        }
    }

    // b's face normals
    for j in 0..3 {
        let r0 = ea[0] * abs_c[0][j] + ea[1] * abs_c[1][j] + ea[2] * abs_c[2][j];
        let r1 = eb[j];
        let r = (ad[0] * c[0][j] + ad[1] * c[1][j] + ad[2] * c[2][j]).abs();
        if r > r0 + r1 {
            return false;
        }
    }

    // a.axes[i] x b.axes[j]
    for i in 0..3 {
        let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
        for j in 0..3 {
            let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
            let r = (ad[i2] * c[i1][j] - ad[i1] * c[i2][j]).abs();
            let r0 = ea[i1] * abs_c[i2][j] + ea[i2] * abs_c[i1][j];
            let r1 = eb[j1] * abs_c[i][j2] + eb[j2] * abs_c[i][j1];
            if r > r0 + r1 {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{constants::PI, Quat, Unit, Vec3};
    use crate::volumes::Aabb;

    fn unit_box(center: Vec3) -> Obb {
        Obb::from_aabb(&Aabb::new(center, Vec3::new(1.0, 1.0, 1.0)))
    }

    #[test]
    fn test_obb_self_intersection() {
        let rotation = Quat::from_axis_angle(&Unit::new_normalize(Vec3::new(1.0, 2.0, 3.0)), 0.7);
        let obb = Obb::from_orientation(Vec3::new(3.0, -1.0, 2.0), Vec3::new(0.5, 2.0, 1.0), &rotation);
        assert!(obb_obb(&obb, &obb));
    }

    #[test]
    fn test_axis_aligned_boxes() {
        let a = unit_box(Vec3::zeros());

        assert!(obb_obb(&a, &unit_box(Vec3::new(1.5, 0.0, 0.0))));
        assert!(obb_obb(&a, &unit_box(Vec3::new(2.0, 0.0, 0.0))));
        assert!(!obb_obb(&a, &unit_box(Vec3::new(2.1, 0.0, 0.0))));
        assert!(!obb_obb(&a, &unit_box(Vec3::new(0.0, 0.0, -3.0))));
    }

    #[test]
    fn test_rotated_corner_reaches_in() {
        // Rotated 45 degrees about z, its corner reaches sqrt(2) along x
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), PI * 0.25);
        let a = unit_box(Vec3::zeros());
        let near = Obb::from_orientation(Vec3::new(2.3, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0), &rotation);
        let far = Obb::from_orientation(Vec3::new(2.5, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0), &rotation);

        assert!(obb_obb(&a, &near));
        assert!(obb_obb(&near, &a));
        assert!(!obb_obb(&a, &far));
        assert!(!obb_obb(&far, &a));
    }

    #[test]
    fn test_edge_edge_separation() {
        // Two long sticks crossing at right angles, offset along the third axis.
        // Only the cross-product axis separates them.
        let a = Obb::from_aabb(&Aabb::new(Vec3::zeros(), Vec3::new(5.0, 0.1, 0.1)));
        let rotation = Quat::from_axis_angle(&Vec3::x_axis(), PI * 0.25);
        let stick = Obb::from_orientation(Vec3::zeros(), Vec3::new(0.1, 0.1, 5.0), &rotation);

        let touching = Obb { center: Vec3::new(0.0, 0.2, 0.0), ..stick };
        let apart = Obb { center: Vec3::new(0.0, 1.0, 0.0), ..stick };

        assert!(obb_obb(&a, &touching));
        assert!(!obb_obb(&a, &apart));
        assert!(!obb_obb(&apart, &a));
    }

    #[test]
    fn test_zero_epsilon_matches_on_clear_cases() {
        let a = unit_box(Vec3::zeros());
        let b = unit_box(Vec3::new(1.0, 1.0, 1.0));
        let c = unit_box(Vec3::new(5.0, 1.0, 1.0));

        assert!(obb_obb_with_epsilon(&a, &b, 0.0));
        assert!(!obb_obb_with_epsilon(&a, &c, 0.0));
    }
}
