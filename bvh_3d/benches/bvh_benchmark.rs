use std::hint::black_box;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use bvh_3d::bvh3d::{Aabb, BoundingSphere, Bvh};
use bvh_3d::glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_spheres(count: usize, seed: u64) -> Vec<BoundingSphere> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            BoundingSphere::new(
                Vec3::new(
                    rng.gen_range(-500.0..500.0),
                    rng.gen_range(-500.0..500.0),
                    rng.gen_range(-500.0..500.0),
                ),
                rng.gen_range(0.5..5.0),
            )
        })
        .collect()
}

fn build(spheres: &[BoundingSphere]) -> Bvh<BoundingSphere, u32> {
    let mut bvh = Bvh::new();
    for (id, sphere) in spheres.iter().enumerate() {
        bvh.insert(*sphere, id as u32).unwrap();
    }
    bvh
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bvh_insert");
    for count in [1_000usize, 10_000] {
        let spheres = random_spheres(count, 1);
        group.bench_with_input(BenchmarkId::from_parameter(count), &spheres, |b, spheres| {
            b.iter(|| black_box(build(spheres)));
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("bvh_query");
    for count in [1_000usize, 10_000] {
        let bvh = build(&random_spheres(count, 2));
        let query = Aabb::from_center_extents(Vec3::ZERO, Vec3::splat(100.0));
        group.bench_with_input(BenchmarkId::from_parameter(count), &bvh, |b, bvh| {
            let mut results = Vec::with_capacity(count);
            b.iter(|| {
                results.clear();
                bvh.get(&query, &mut results);
                black_box(results.len())
            });
        });
    }
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let spheres = random_spheres(2_000, 3);
    let bvh = build(&spheres);
    c.bench_function("bvh_remove_half", |b| {
        b.iter_batched(
            || bvh.clone(),
            |mut bvh| {
                for (id, sphere) in spheres.iter().enumerate().step_by(2) {
                    black_box(bvh.remove(sphere, &(id as u32)));
                }
                bvh
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_insert, bench_query, bench_remove);
criterion_main!(benches);
