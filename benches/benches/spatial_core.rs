// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use decodes_bounds::{Bounds, Interval, Point3, QuadTree};
use decodes_raster::{BoolField, RasterOptions, VecField};
use kurbo::{Point, Vec2};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn gen_random_pts(count: usize, side: f64, seed: u64) -> Vec<Point3> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point3::new_2d(rng.random::<f64>() * side, rng.random::<f64>() * side))
        .collect()
}

fn gen_clustered_pts(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point3> {
    let mut rng = SmallRng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = rng.random::<f64>() * 1800.0 + 100.0;
        let cy = rng.random::<f64>() * 1800.0 + 100.0;
        for _ in 0..per_cluster {
            let dx = (rng.random::<f64>() - 0.5) * spread;
            let dy = (rng.random::<f64>() - 0.5) * spread;
            out.push(Point3::new_2d(cx + dx, cy + dy));
        }
    }
    out
}

fn build_tree(pts: &[Point3], capacity: usize) -> QuadTree<Point3> {
    let region = Bounds::from_intervals(Interval::new(0.0, 2000.0), Interval::new(0.0, 2000.0));
    let mut tree = QuadTree::new(capacity, region);
    for p in pts {
        tree.append(*p);
    }
    tree
}

fn bench_quadtree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    for &n in &[1_000usize, 10_000] {
        let uniform = gen_random_pts(n, 2000.0, 0xCAFE_F00D_DEAD_BEEF);
        let clustered = gen_clustered_pts(n / 100, 100, 40.0);
        group.throughput(Throughput::Elements(n as u64));
        for capacity in [4usize, 16] {
            group.bench_function(format!("uniform_n{n}_cap{capacity}"), |b| {
                b.iter(|| black_box(build_tree(&uniform, capacity).len()));
            });
            group.bench_function(format!("clustered_n{n}_cap{capacity}"), |b| {
                b.iter(|| black_box(build_tree(&clustered, capacity).len()));
            });
        }
    }
    group.finish();
}

fn bench_quadtree_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    let query = Bounds::from_intervals(Interval::new(400.0, 800.0), Interval::new(900.0, 1300.0));
    for &n in &[1_000usize, 10_000, 50_000] {
        let pts = gen_random_pts(n, 2000.0, 0x1234_5678_9ABC_DEF0);
        let tree = build_tree(&pts, 8);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("pts_in_bounds_n{n}"), |b| {
            b.iter(|| black_box(tree.pts_in_bounds(&query).len()));
        });
        group.bench_function(format!("linear_scan_n{n}"), |b| {
            b.iter(|| black_box(pts.iter().filter(|p| query.contains(*p)).count()));
        });
    }
    group.finish();
}

fn life_step(board: &BoolField) -> BoolField {
    let mut next = board.clone();
    next.populate_with(|(x, y)| {
        let live = board
            .neighbors_of(x, y)
            .map(|n| n.into_iter().filter(|&&v| v).count())
            .unwrap_or(0);
        matches!((board.get(x, y).copied().unwrap_or(false), live), (true, 2) | (_, 3))
    });
    next
}

fn bench_raster_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster_neighbors");
    for &side in &[64usize, 256] {
        let mut rng = SmallRng::seed_from_u64(0xBADC_F00D_1234_5678);
        let mut board = BoolField::new_with_options(
            (side, side),
            false,
            RasterOptions::FIELD | RasterOptions::INCLUDE_CORNERS,
        )
        .unwrap();
        board.populate_with(|_| rng.random_bool(0.3));
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_function(format!("life_step_{side}"), |b| {
            b.iter_batched(
                || board.clone(),
                |board| black_box(life_step(&board).count_true()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_vec_field_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_field_sampling");
    let mut field = VecField::new((32, 32), Point::ORIGIN, (100.0, 100.0), Vec2::ZERO).unwrap();
    field.populate_with(|(x, y)| Vec2::new(y as f64 - 16.0, 16.0 - x as f64));
    let samples: Vec<Point> = gen_random_pts(1_000, 100.0, 0xFEED_FACE_0000_0001)
        .iter()
        .map(|p| Point::new(p.x - 50.0, p.y - 50.0))
        .collect();
    group.throughput(Throughput::Elements(samples.len() as u64));

    group.bench_function("vec_near", |b| {
        b.iter(|| {
            for p in &samples {
                black_box(field.vec_near(p).unwrap());
            }
        });
    });
    group.bench_function("avg_vec_near", |b| {
        b.iter(|| {
            for p in &samples {
                black_box(field.avg_vec_near(p).unwrap_or(Vec2::ZERO));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_quadtree_build,
    bench_quadtree_query,
    bench_raster_neighbors,
    bench_vec_field_sampling
);
criterion_main!(benches);
