// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use decodes_bounds::{Bounds, Interval, Point3, QuadTree};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rstar::{AABB, RTree};

fn gen_random_pts(count: usize, side: f64) -> Vec<Point3> {
    let mut rng = SmallRng::seed_from_u64(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point3::new_2d(rng.random::<f64>() * side, rng.random::<f64>() * side))
        .collect()
}

fn to_rstar_pts(v: &[Point3]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rtree_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_f64");
    let region = Bounds::from_intervals(Interval::new(0.0, 2000.0), Interval::new(0.0, 2000.0));
    let query = Bounds::from_intervals(Interval::new(500.0, 900.0), Interval::new(500.0, 900.0));
    for &n in &[4_096usize, 16_384] {
        let pts = gen_random_pts(n, 2000.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(8, region),
                |mut tree| {
                    for p in pts.iter().copied() {
                        tree.append(p);
                    }
                    let hits = tree.pts_in_bounds(&query).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_pts(&pts),
                |points| {
                    let tree = RTree::bulk_load(points);
                    let aabb = AABB::from_corners([500.0, 500.0], [900.0, 900.0]);
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare_f64);
criterion_main!(benches);
