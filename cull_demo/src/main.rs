//! Frustum Culling Demo
//!
//! Headless stand-in for the renderer's per-frame visibility pass:
//! - Scatters a field of boxes (half axis-aligned, half rotated)
//! - Orbits a camera around the field, rebuilding the frustum every frame
//! - Culls both lists and logs how many objects survive
//! - Finishes with a few picking rays and shape-pair checks
//!
//! Usage: `cull_demo [config.toml|config.ron]`

use rust_intersect::prelude::*;
use rust_intersect::foundation::logging;
use rust_intersect::foundation::math::{constants::PI, Unit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

// Scene settings
const FIELD_SIZE: f32 = 100.0;  // Objects spread over -50 to +50 on each axis
const NUM_AABBS: usize = 20_000;
const NUM_OBBS: usize = 20_000;
const MAX_HALF_EXTENT: f32 = 2.0;

// Camera settings
const NUM_FRAMES: usize = 120;
const ORBIT_RADIUS: f32 = 80.0;
const ORBIT_HEIGHT: f32 = 20.0;
const FOV_DEGREES: f32 = 60.0;
const ASPECT_RATIO: f32 = 16.0 / 9.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 200.0;

struct Scene {
    aabbs: Vec<Aabb>,
    obbs: Vec<Obb>,
}

impl Scene {
    fn random(rng: &mut StdRng) -> Self {
        let half_field = FIELD_SIZE * 0.5;
        let random_center = |rng: &mut StdRng| {
            Vec3::new(
                rng.gen_range(-half_field..half_field),
                rng.gen_range(-half_field..half_field),
                rng.gen_range(-half_field..half_field),
            )
        };
        let random_extents = |rng: &mut StdRng| {
            Vec3::new(
                rng.gen_range(0.1..MAX_HALF_EXTENT),
                rng.gen_range(0.1..MAX_HALF_EXTENT),
                rng.gen_range(0.1..MAX_HALF_EXTENT),
            )
        };

        let aabbs = (0..NUM_AABBS)
            .map(|_| Aabb::new(random_center(rng), random_extents(rng)))
            .collect();

        let obbs = (0..NUM_OBBS)
            .map(|_| {
                let axis = Unit::new_normalize(Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(0.1..1.0),
                ));
                let rotation = Quat::from_axis_angle(&axis, rng.gen_range(0.0..2.0 * PI));
                Obb::from_orientation(random_center(rng), random_extents(rng), &rotation)
            })
            .collect();

        Self { aabbs, obbs }
    }

    fn validate(&self) -> Result<(), ShapeError> {
        self.aabbs.iter().try_for_each(Aabb::validate)?;
        self.obbs.iter().try_for_each(Obb::validate)
    }
}

fn orbit_camera(frame: usize) -> CameraParams {
    #[allow(clippy::cast_precision_loss)]
    let angle = frame as f32 / NUM_FRAMES as f32 * 2.0 * PI;
    let position = Vec3::new(angle.cos() * ORBIT_RADIUS, ORBIT_HEIGHT, angle.sin() * ORBIT_RADIUS);
    CameraParams::look_at(position, Vec3::zeros(), Vec3::y(), FOV_DEGREES, ASPECT_RATIO, NEAR, FAR)
}

fn cull_frame(frustum: &Frustum, scene: &Scene, config: &IntersectionConfig, aabb_flags: &mut [bool], obb_flags: &mut [bool]) -> (usize, usize) {
    #[cfg(feature = "parallel")]
    {
        (
            par_cull_aabb_list(frustum, &scene.aabbs, aabb_flags, config),
            par_cull_obb_list(frustum, &scene.obbs, obb_flags, config),
        )
    }
    #[cfg(not(feature = "parallel"))]
    {
        let _ = config;
        (
            cull_aabb_list(frustum, &scene.aabbs, aabb_flags),
            cull_obb_list(frustum, &scene.obbs, obb_flags),
        )
    }
}

fn run_culling(scene: &Scene, config: &IntersectionConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut aabb_flags = vec![false; scene.aabbs.len()];
    let mut obb_flags = vec![false; scene.obbs.len()];
    let start = Instant::now();

    for frame in 0..NUM_FRAMES {
        let camera = orbit_camera(frame);
        camera.validate()?;
        let frustum = camera.frustum();

        let (visible_aabbs, visible_obbs) = cull_frame(&frustum, scene, config, &mut aabb_flags, &mut obb_flags);

        if frame % 30 == 0 {
            log::info!(
                "Frame {:>3}: {:>5}/{} AABBs, {:>5}/{} OBBs visible",
                frame,
                visible_aabbs,
                scene.aabbs.len(),
                visible_obbs,
                scene.obbs.len(),
            );
        }
    }

    let elapsed = start.elapsed();
    log::info!(
        "Culled {} frames of {} objects in {:.2?} ({:.2?} per frame)",
        NUM_FRAMES,
        scene.aabbs.len() + scene.obbs.len(),
        elapsed,
        elapsed / u32::try_from(NUM_FRAMES)?,
    );
    Ok(())
}

fn run_picking(scene: &Scene) {
    // Cast from the first camera position straight at each of the first few boxes
    let eye = orbit_camera(0).position;
    let identity = Quat::identity();

    for (index, obb) in scene.obbs.iter().take(5).enumerate() {
        let direction = (obb.center - eye).normalize();
        let orientation = Quat::from_basis_unchecked(&obb.axes);
        let hit_box = ray_obb(eye, direction, obb.center, &orientation, obb.extents);
        let hit_bounds = ray_sphere(eye, direction, obb.center, obb.extents.norm());
        log::info!("Ray to OBB {}: box hit = {}, bounding sphere hit = {}", index, hit_box, hit_bounds);
    }

    let ground = ray_plane(eye, Vec3::new(0.0, -1.0, -1.0), Vec3::zeros(), Vec3::y());
    log::info!("Ray hits the ground plane at {:?}", ground);

    let triangle_hit = ray_triangle(
        eye,
        (Vec3::zeros() - eye).normalize(),
        Vec3::new(-5.0, -5.0, 0.0),
        Vec3::new(5.0, -5.0, 0.0),
        Vec3::new(0.0, 5.0, 0.0),
    );
    log::info!("Ray towards the origin hits the marker triangle at {:?}", triangle_hit);

    if let Some(first) = scene.aabbs.first() {
        log::info!(
            "Eye inside first box (corner-relative) = {}",
            point_in_obb(eye, first.min(), &identity, first.extents * 2.0),
        );
    }
}

fn run_pairs(scene: &Scene, config: &IntersectionConfig) {
    let (a, b) = (&scene.obbs[0], &scene.obbs[1]);
    let (ca, cb) = (a.corners(), b.corners());
    let sat = obb_obb_with_epsilon(a, b, config.sat_epsilon);
    let gjk = intersect_convex_with_limit(&ConvexRegion::new(&ca), &ConvexRegion::new(&cb), config.gjk_max_iterations);
    log::info!("OBB pair: SAT = {}, GJK = {}", sat, gjk);

    let overlapping = scene
        .aabbs
        .iter()
        .skip(1)
        .filter(|other| aabb_aabb(&scene.aabbs[0], other))
        .count();
    log::info!("First AABB overlaps {} others", overlapping);

    let probe = Shape::from(Sphere::new(Vec3::zeros(), 10.0));
    let touched = scene
        .obbs
        .iter()
        .filter(|obb| probe.intersects_with(&Shape::from(**obb), config))
        .count();
    log::info!("Probe sphere at the origin touches {} OBBs", touched);

    let sphere_hits = scene
        .aabbs
        .iter()
        .filter(|aabb| sphere_aabb(&Sphere::new(Vec3::zeros(), 10.0), aabb))
        .count();
    log::info!("Probe sphere at the origin touches {} AABBs", sphere_hits);
}

fn load_config() -> Result<IntersectionConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {}", path);
            IntersectionConfig::load_validated(&path)
        }
        None => Ok(IntersectionConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(logging::LevelFilter::Info);

    println!("=== Frustum Culling Demo ===");
    println!();

    let config = load_config()?;
    log::info!("Using {:?}", config);

    let mut rng = StdRng::seed_from_u64(42);
    let scene = Scene::random(&mut rng);
    scene.validate()?;

    run_culling(&scene, &config)?;
    run_picking(&scene);
    run_pairs(&scene, &config);

    Ok(())
}
