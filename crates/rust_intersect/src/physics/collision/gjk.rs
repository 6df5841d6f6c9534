//! Gilbert-Johnson-Keerthi intersection test
//!
//! Decides whether the Minkowski difference `A - B` of two convex shapes
//! contains the origin. Shapes are only ever queried through their support
//! function, so any point set is treated as its convex hull.
//!
//! The simplex never grows past a tetrahedron and lives on the stack. The
//! main loop is capped; an exhausted cap reports "no intersection".

use crate::config::DEFAULT_GJK_MAX_ITERATIONS;
use crate::foundation::math::Vec3;
use crate::volumes::{Aabb, ConvexRegion, Obb, Sphere};

/// Squared sine below which the origin counts as lying on a simplex feature.
/// Always scaled by the feature's own edge lengths, so shape size does not
/// matter.
const DEGENERATE_SINE_SQUARED: f32 = 1e-12;

/// A convex shape described by its support function
pub trait SupportMap {
    /// Point of the shape furthest along `direction`
    fn support(&self, direction: &Vec3) -> Vec3;
}

impl SupportMap for ConvexRegion<'_> {
    fn support(&self, direction: &Vec3) -> Vec3 {
        ConvexRegion::support(self, direction)
    }
}

impl SupportMap for Aabb {
    fn support(&self, direction: &Vec3) -> Vec3 {
        Aabb::support(self, direction)
    }
}

impl SupportMap for Obb {
    fn support(&self, direction: &Vec3) -> Vec3 {
        Obb::support(self, direction)
    }
}

impl SupportMap for Sphere {
    fn support(&self, direction: &Vec3) -> Vec3 {
        Sphere::support(self, direction)
    }
}

/// Check if two convex point sets overlap
///
/// Uses [`DEFAULT_GJK_MAX_ITERATIONS`] as the iteration cap.
pub fn intersect_convex(a: &ConvexRegion<'_>, b: &ConvexRegion<'_>) -> bool {
    intersect_convex_with_limit(a, b, DEFAULT_GJK_MAX_ITERATIONS)
}

/// Check if two convex shapes overlap, giving up after `max_iterations`
///
/// Touching shapes count as overlapping when the contact is resolved
/// before the cap.
pub fn intersect_convex_with_limit<A, B>(a: &A, b: &B, max_iterations: usize) -> bool
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    let mut simplex = Simplex::new(minkowski_support(a, b, &Vec3::x()));
    let mut direction = -simplex.points[0];

    for _ in 0..max_iterations {
        // Exactly zero only when the origin is a support point
        let Some(unit) = direction.try_normalize(0.0) else {
            return true;
        };
        direction = unit;

        let point = minkowski_support(a, b, &direction);
        if point.dot(&direction) < 0.0 {
            return false;
        }

        simplex.push(point);
        if simplex.reduce(&mut direction) {
            return true;
        }
    }

    log::debug!("GJK gave up after {} iterations, reporting no intersection", max_iterations);
    false
}

fn minkowski_support<A, B>(a: &A, b: &B, direction: &Vec3) -> Vec3
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    a.support(direction) - b.support(&-direction)
}

/// `(a x b) x c`
fn triple_cross(a: &Vec3, b: &Vec3, c: &Vec3) -> Vec3 {
    a.cross(b).cross(c)
}

/// Evolving GJK simplex, newest point last
#[derive(Debug, Clone, Copy)]
struct Simplex {
    points: [Vec3; 4],
    len: usize,
}

impl Simplex {
    fn new(first: Vec3) -> Self {
        Self {
            points: [first, Vec3::zeros(), Vec3::zeros(), Vec3::zeros()],
            len: 1,
        }
    }

    fn push(&mut self, point: Vec3) {
        debug_assert!(self.len < 4, "simplex overflow");
        self.points[self.len] = point;
        self.len += 1;
    }

    fn set(&mut self, points: &[Vec3]) {
        self.points[..points.len()].copy_from_slice(points);
        self.len = points.len();
    }

    /// Shrink to the feature nearest the origin and aim `direction` at it.
    /// Returns true once the origin is enclosed.
    fn reduce(&mut self, direction: &mut Vec3) -> bool {
        match self.len {
            2 => self.line(direction),
            3 => self.triangle(direction),
            4 => self.tetrahedron(direction),
            _ => {
                *direction = -self.points[0];
                false
            }
        }
    }

    fn line(&mut self, direction: &mut Vec3) -> bool {
        let [b, a, ..] = self.points;
        self.line_towards_origin(a, b, direction)
    }

    /// Returns true when the origin lies on segment `ab`
    fn line_towards_origin(&mut self, a: Vec3, b: Vec3, direction: &mut Vec3) -> bool {
        let ab = b - a;
        let ao = -a;

        if ab.dot(&ao) > 0.0 {
            let perpendicular = ab.cross(&ao);
            if perpendicular.norm_squared() <= DEGENERATE_SINE_SQUARED * ab.norm_squared() * ao.norm_squared() {
                return true;
            }
            self.set(&[b, a]);
            *direction = perpendicular.cross(&ab);
        } else {
            self.set(&[a]);
            *direction = ao;
        }
        false
    }

    /// Returns true when the origin lies on the triangle
    fn triangle(&mut self, direction: &mut Vec3) -> bool {
        let [c, b, a, _] = self.points;
        let ab = b - a;
        let ac = c - a;
        let ao = -a;
        let abc = ab.cross(&ac);

        // Collinear points carry no more information than their longest edge
        if abc.norm_squared() <= DEGENERATE_SINE_SQUARED * ab.norm_squared() * ac.norm_squared() {
            let far = if ab.norm_squared() >= ac.norm_squared() { b } else { c };
            return self.line_towards_origin(a, far, direction);
        }

        if abc.cross(&ac).dot(&ao) > 0.0 {
            if ac.dot(&ao) > 0.0 {
                self.set(&[c, a]);
                *direction = triple_cross(&ac, &ao, &ac);
                false
            } else {
                self.line_towards_origin(a, b, direction)
            }
        } else if ab.cross(&abc).dot(&ao) > 0.0 {
            self.line_towards_origin(a, b, direction)
        } else {
            let height = abc.dot(&ao);
            if height * height <= DEGENERATE_SINE_SQUARED * abc.norm_squared() * ao.norm_squared() {
                return true;
            }
            if height > 0.0 {
                *direction = abc;
            } else {
                // Origin below the face: flip the winding so the normal faces it
                self.set(&[b, c, a]);
                *direction = -abc;
            }
            false
        }
    }

    fn tetrahedron(&mut self, direction: &mut Vec3) -> bool {
        let [d, c, b, a] = self.points;
        let ab = b - a;
        let ac = c - a;
        let ad = d - a;
        let ao = -a;

        if ab.cross(&ac).dot(&ao) > 0.0 {
            self.set(&[c, b, a]);
            return self.triangle(direction);
        }
        if ac.cross(&ad).dot(&ao) > 0.0 {
            self.set(&[d, c, a]);
            return self.triangle(direction);
        }
        if ad.cross(&ab).dot(&ao) > 0.0 {
            self.set(&[b, d, a]);
            return self.triangle(direction);
        }

        true
    }
}
