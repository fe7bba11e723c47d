//! Collision resolver benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench collision
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench collision -- legacy

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cuboid_collide::{
    compare, face_corners, sphere_collision, sphere_collision_legacy, CollisionConfig,
    ContactFrame, Face,
};
use cuboid_collide_bench::*;
use glam::DVec3;

// ---------------------------------------------------------------------------
// Single query
// ---------------------------------------------------------------------------

fn bench_single(c: &mut Criterion) {
    let config = CollisionConfig::default();

    {
        let mut group = c.benchmark_group("single/current");
        let cuboid = unit_box();
        let spheres = [
            ("front", DVec3::new(10.0, 0.0, 0.0)),
            ("back", DVec3::new(-10.0, 0.3, 0.2)),
            ("inside", DVec3::ZERO),
        ];
        for (name, center) in spheres {
            let sphere = cuboid_collide::Sphere::new(center, 1.0).expect("valid radius");
            group.bench_function(name, |b| {
                b.iter(|| sphere_collision(black_box(&cuboid), black_box(&sphere), &config));
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("single/legacy");
        let cuboid = unit_box();
        let spheres = [
            ("front", DVec3::new(10.0, 0.0, 0.0)),
            ("back", DVec3::new(-10.0, 0.3, 0.2)),
            ("inside", DVec3::ZERO),
        ];
        for (name, center) in spheres {
            let sphere = cuboid_collide::Sphere::new(center, 1.0).expect("valid radius");
            group.bench_function(name, |b| {
                b.iter(|| sphere_collision_legacy(black_box(&cuboid), black_box(&sphere), &config));
            });
        }
        group.finish();
    }
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

fn bench_batch(c: &mut Criterion) {
    let config = CollisionConfig::default();
    let cuboid = rotated_box();

    let mut group = c.benchmark_group("batch/rotated");
    for &n in &[100, 1000, 10000] {
        let spheres = sphere_shell(&cuboid, n, 8.0);
        group.bench_with_input(BenchmarkId::new("current", n), &n, |b, _| {
            b.iter(|| {
                spheres
                    .iter()
                    .map(|s| sphere_collision(&cuboid, s, &config).miss_distance)
                    .sum::<f64>()
            });
        });
        group.bench_with_input(BenchmarkId::new("legacy", n), &n, |b, _| {
            b.iter(|| {
                spheres
                    .iter()
                    .map(|s| sphere_collision_legacy(&cuboid, s, &config).miss_distance)
                    .sum::<f64>()
            });
        });
        group.bench_with_input(BenchmarkId::new("compare", n), &n, |b, _| {
            b.iter(|| {
                spheres
                    .iter()
                    .filter(|s| compare(&cuboid, s, &config).agrees(1e-9))
                    .count()
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Face corners
// ---------------------------------------------------------------------------

fn bench_face_corners(c: &mut Criterion) {
    let cuboid = rotated_box();

    let mut group = c.benchmark_group("face_corners");
    for frame in [ContactFrame::Full, ContactFrame::YawOnly] {
        group.bench_function(format!("{frame:?}"), |b| {
            b.iter(|| {
                Face::PRIORITY.map(|face| face_corners(black_box(&cuboid), Some(face), frame))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_batch, bench_face_corners);
criterion_main!(benches);
