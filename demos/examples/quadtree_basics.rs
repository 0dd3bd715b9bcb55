// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Scatter points over a region, index them, and compare a range query with a
//! brute-force scan. Subdivision is logged at `debug`.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p decodes_demos --example quadtree_basics`

use decodes_bounds::{Bounds, Interval, Point3, QuadTree};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let region = Bounds::from_center(&Point3::ORIGIN, 100.0, 100.0);
    let mut tree = QuadTree::new(4, region);
    let mut rng = SmallRng::seed_from_u64(7);
    let pts: Vec<Point3> = (0..200)
        .map(|_| region.eval(rng.random(), rng.random(), 0.0))
        .collect();
    for p in &pts {
        assert!(tree.append(*p), "sampled points lie inside the region");
    }

    let leaves = tree.leaves();
    let deepest = leaves.iter().map(|l| l.depth()).max().unwrap_or(0);
    log::info!("{} points in {} leaves, deepest at {}", tree.len(), leaves.len(), deepest);

    let query = Bounds::from_intervals(Interval::new(-10.0, 30.0), Interval::new(-25.0, 5.0));
    let hits = tree.pts_in_bounds(&query);
    let brute = pts.iter().filter(|p| query.contains(*p)).count();
    println!("query {:?} -> {} hits", query.center(), hits.len());
    assert_eq!(hits.len(), brute, "tree and scan should agree");

    // Clamp an outside point back into the indexed region.
    let stray = Point3::new_2d(250.0, -4.0);
    let clamped = region.near_pt(&stray);
    println!("{stray} clamps to {clamped}");
    assert!(tree.contains(&clamped), "clamped point is inside the tree");
}
