//! Batch frustum culling
//!
//! Each culler writes one visibility flag per input object, in input
//! order, into a caller-provided slice and returns how many were visible.
//! Objects are tested independently; an object stops at the first plane it
//! lies fully outside of. Nothing is allocated and no state survives the
//! call, so the same frustum can be reused against any number of lists.

use crate::foundation::math::{utils, Vec3};
use crate::volumes::{Aabb, Obb, Sphere};
use super::frustum::Frustum;

#[cfg(feature = "parallel")]
use crate::config::IntersectionConfig;

/// Absolute plane normals, computed once per batch
fn abs_normals(frustum: &Frustum) -> [Vec3; 6] {
    frustum.plane_normals.map(|normal| utils::abs(&normal))
}

fn aabb_visible(frustum: &Frustum, abs_normals: &[Vec3; 6], aabb: &Aabb) -> bool {
    for plane in 0..6 {
        let d = aabb.center.dot(&frustum.plane_normals[plane]);
        let r = aabb.extents.dot(&abs_normals[plane]);
        if d + r < frustum.plane_dots[plane] {
            return false;
        }
    }
    true
}

fn obb_visible(frustum: &Frustum, obb: &Obb) -> bool {
    for plane in 0..6 {
        let normal = frustum.plane_normals[plane];

        // Corner reaching furthest against the outward direction
        let mut diagonal = Vec3::zeros();
        for axis in 0..3 {
            let extent = if obb.axes[axis].dot(&-normal) > 0.0 {
                -obb.extents[axis]
            } else {
                obb.extents[axis]
            };
            diagonal += obb.axes[axis] * extent;
        }

        if normal.dot(&(obb.center + diagonal)) < frustum.plane_dots[plane] {
            return false;
        }
    }
    true
}

fn sphere_visible(frustum: &Frustum, sphere: &Sphere) -> bool {
    for plane in 0..6 {
        let d = sphere.position.dot(&frustum.plane_normals[plane]);
        if d + sphere.radius < frustum.plane_dots[plane] {
            return false;
        }
    }
    true
}

/// Write into `visible` and count, stopping at the shorter slice
fn cull_into<T>(objects: &[T], visible: &mut [bool], test: impl Fn(&T) -> bool) -> usize {
    debug_assert_eq!(objects.len(), visible.len(), "one visibility flag per object");

    let mut count = 0;
    for (object, flag) in objects.iter().zip(visible.iter_mut()) {
        *flag = test(object);
        count += usize::from(*flag);
    }
    count
}

/// Cull axis-aligned boxes against a frustum
///
/// `visible` must be as long as the object slice: debug builds panic on a
/// mismatch, release builds only write the first `min(len)` flags.
/// Returns the number of visible objects.
pub fn cull_aabb_list(frustum: &Frustum, aabbs: &[Aabb], visible: &mut [bool]) -> usize {
    let abs_normals = abs_normals(frustum);
    let count = cull_into(aabbs, visible, |aabb| aabb_visible(frustum, &abs_normals, aabb));
    log::trace!("AABB cull: {}/{} visible", count, aabbs.len());
    count
}

/// Cull oriented boxes against a frustum
///
/// `visible` must be as long as the object slice: debug builds panic on a
/// mismatch, release builds only write the first `min(len)` flags.
/// Returns the number of visible objects.
pub fn cull_obb_list(frustum: &Frustum, obbs: &[Obb], visible: &mut [bool]) -> usize {
    let count = cull_into(obbs, visible, |obb| obb_visible(frustum, obb));
    log::trace!("OBB cull: {}/{} visible", count, obbs.len());
    count
}

/// Cull spheres against a frustum
///
/// `visible` must be as long as the object slice: debug builds panic on a
/// mismatch, release builds only write the first `min(len)` flags.
/// Returns the number of visible objects.
pub fn cull_sphere_list(frustum: &Frustum, spheres: &[Sphere], visible: &mut [bool]) -> usize {
    let count = cull_into(spheres, visible, |sphere| sphere_visible(frustum, sphere));
    log::trace!("Sphere cull: {}/{} visible", count, spheres.len());
    count
}

/// Allocating form of [`cull_aabb_list`]
pub fn visible_aabbs(frustum: &Frustum, aabbs: &[Aabb]) -> Vec<bool> {
    let mut visible = vec![false; aabbs.len()];
    cull_aabb_list(frustum, aabbs, &mut visible);
    visible
}

/// Allocating form of [`cull_obb_list`]
pub fn visible_obbs(frustum: &Frustum, obbs: &[Obb]) -> Vec<bool> {
    let mut visible = vec![false; obbs.len()];
    cull_obb_list(frustum, obbs, &mut visible);
    visible
}

/// Indices of the set flags
pub fn visible_indices(visible: &[bool]) -> Vec<usize> {
    visible
        .iter()
        .enumerate()
        .filter_map(|(index, flag)| flag.then_some(index))
        .collect()
}

/// Parallel [`cull_aabb_list`]
///
/// Batches smaller than `config.parallel_min_batch` run serially. Output
/// is identical to the serial version.
#[cfg(feature = "parallel")]
pub fn par_cull_aabb_list(
    frustum: &Frustum,
    aabbs: &[Aabb],
    visible: &mut [bool],
    config: &IntersectionConfig,
) -> usize {
    use rayon::prelude::*;

    if aabbs.len() < config.parallel_min_batch {
        return cull_aabb_list(frustum, aabbs, visible);
    }

    debug_assert_eq!(aabbs.len(), visible.len(), "one visibility flag per object");
    let abs_normals = abs_normals(frustum);
    visible
        .par_iter_mut()
        .zip(aabbs.par_iter())
        .map(|(flag, aabb)| {
            *flag = aabb_visible(frustum, &abs_normals, aabb);
            usize::from(*flag)
        })
        .sum()
}

/// Parallel [`cull_obb_list`]
///
/// Batches smaller than `config.parallel_min_batch` run serially. Output
/// is identical to the serial version.
#[cfg(feature = "parallel")]
pub fn par_cull_obb_list(
    frustum: &Frustum,
    obbs: &[Obb],
    visible: &mut [bool],
    config: &IntersectionConfig,
) -> usize {
    use rayon::prelude::*;

    if obbs.len() < config.parallel_min_batch {
        return cull_obb_list(frustum, obbs, visible);
    }

    debug_assert_eq!(obbs.len(), visible.len(), "one visibility flag per object");
    visible
        .par_iter_mut()
        .zip(obbs.par_iter())
        .map(|(flag, obb)| {
            *flag = obb_visible(frustum, obb);
            usize::from(*flag)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{constants::PI, Quat};
    use crate::scene::frustum::make_frustum;

    fn world_camera() -> Frustum {
        make_frustum(Vec3::zeros(), Vec3::x(), Vec3::y(), Vec3::z(), 90.0, 1.0, 1.0, 100.0)
    }

    fn boxes() -> Vec<Aabb> {
        let half = Vec3::new(1.0, 1.0, 1.0);
        vec![
            Aabb::new(Vec3::new(0.0, 0.0, -10.0), half),   // dead ahead
            Aabb::new(Vec3::new(0.0, 0.0, 10.0), half),    // behind
            Aabb::new(Vec3::new(10.5, 0.0, -10.0), half),  // straddles right plane
            Aabb::new(Vec3::new(0.0, 30.0, -10.0), half),  // above
            Aabb::new(Vec3::new(0.0, 0.0, -150.0), half),  // past far
            Aabb::new(Vec3::new(0.0, 0.0, -100.5), half),  // straddles far plane
        ]
    }

    #[test]
    fn test_cull_aabb_list() {
        let frustum = world_camera();
        let aabbs = boxes();
        let mut visible = vec![false; aabbs.len()];

        let count = cull_aabb_list(&frustum, &aabbs, &mut visible);

        assert_eq!(visible, vec![true, false, true, false, false, true]);
        assert_eq!(count, 3);
        assert_eq!(visible_indices(&visible), vec![0, 2, 5]);
    }

    #[test]
    fn test_cull_is_deterministic() {
        let frustum = world_camera();
        let aabbs = boxes();

        let first = visible_aabbs(&frustum, &aabbs);
        for _ in 0..10 {
            assert_eq!(visible_aabbs(&frustum, &aabbs), first);
        }
    }

    #[test]
    fn test_obb_cull_matches_aabb_for_axis_aligned() {
        let frustum = world_camera();
        let aabbs = boxes();
        let obbs: Vec<Obb> = aabbs.iter().map(Obb::from_aabb).collect();

        assert_eq!(visible_obbs(&frustum, &obbs), visible_aabbs(&frustum, &aabbs));
    }

    #[test]
    fn test_obb_cull_rotated_reaches_in() {
        let frustum = world_camera();
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), PI / 3.0);

        // A long plank behind the near plane, rotated so one end pokes through
        let poking = Obb::from_orientation(Vec3::new(0.0, 0.0, 1.5), Vec3::new(4.0, 0.2, 0.2), &rotation);
        let flat = Obb::from_aabb(&Aabb::new(Vec3::new(0.0, 0.0, 1.5), Vec3::new(4.0, 0.2, 0.2)));
        let mut visible = [false; 2];

        let count = cull_obb_list(&frustum, &[poking, flat], &mut visible);

        assert_eq!(visible, [true, false]);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_cull_sphere_list() {
        let frustum = world_camera();
        let spheres = [
            Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0),
            Sphere::new(Vec3::new(0.0, 0.0, -0.5), 1.0),
            Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0),
        ];
        let mut visible = [false; 3];

        assert_eq!(cull_sphere_list(&frustum, &spheres, &mut visible), 2);
        assert_eq!(visible, [true, true, false]);
    }

    #[test]
    fn test_empty_list() {
        let frustum = world_camera();
        assert_eq!(cull_aabb_list(&frustum, &[], &mut []), 0);
        assert!(visible_obbs(&frustum, &[]).is_empty());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "one visibility flag per object")]
    fn test_flag_slice_length_mismatch() {
        let frustum = world_camera();
        let mut visible = vec![false; 2];
        cull_aabb_list(&frustum, &boxes(), &mut visible);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let frustum = world_camera();
        let aabbs: Vec<Aabb> = (0..5000)
            .map(|i| {
                let f = i as f32;
                Aabb::new(Vec3::new((f * 0.37).sin() * 60.0, (f * 0.11).cos() * 60.0, -(f % 120.0)), Vec3::new(0.5, 0.5, 0.5))
            })
            .collect();
        let obbs: Vec<Obb> = aabbs.iter().map(Obb::from_aabb).collect();
        let config = IntersectionConfig { parallel_min_batch: 64, ..Default::default() };

        let mut serial = vec![false; aabbs.len()];
        let mut parallel = vec![false; aabbs.len()];
        let serial_count = cull_aabb_list(&frustum, &aabbs, &mut serial);
        let parallel_count = par_cull_aabb_list(&frustum, &aabbs, &mut parallel, &config);
        assert_eq!(serial, parallel);
        assert_eq!(serial_count, parallel_count);

        let parallel_count = par_cull_obb_list(&frustum, &obbs, &mut parallel, &config);
        assert_eq!(serial, parallel);
        assert_eq!(serial_count, parallel_count);
    }
}
