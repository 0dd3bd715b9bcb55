// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector field flow.
//!
//! Fill a field with a vortex, advect a particle through interpolated
//! vectors, and render the vector magnitudes as a grayscale image.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p decodes_demos --example vec_field_flow`

use decodes_bounds::Bounds;
use decodes_raster::{Color, RasterError, ValueField, VecField};
use kurbo::{Point, Vec2};

fn main() -> Result<(), RasterError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut field = VecField::new((16, 16), Point::ORIGIN, (20.0, 20.0), Vec2::ZERO)?;
    let centers = field.base_pts().to_vec();
    field.populate_with(|(x, y)| {
        let c = centers[y * 16 + x];
        Vec2::new(-c.y, c.x) * 0.1
    });

    // Euler steps around the vortex.
    let region = Bounds::from_intervals(field.spatial_ival_x(), field.spatial_ival_y());
    let mut p = Point::new(5.0, 0.0);
    let r0 = p.to_vec2().length();
    for i in 0..40 {
        let v = field.avg_vec_near(p)?;
        p += v * 0.25;
        if i % 10 == 0 {
            println!("step {i:2}: ({:.3}, {:.3})", p.x, p.y);
        }
        assert!(region.contains(&p), "particle stays in the field");
    }
    let drift = p.to_vec2().length() - r0;
    log::info!("radius drift after 40 steps: {drift:.4}");

    let mut magnitude = ValueField::new(field.dim(), 0.0)?;
    for (x, y) in field.addresses() {
        magnitude.set(x, y, field.get(x, y)?.length())?;
    }
    let img = magnitude.to_image(Color::BLACK, Color::WHITE, None);
    let brightest = img
        .cells()
        .iter()
        .map(|c| c.to_rgb8()[0])
        .max()
        .unwrap_or(0);
    println!(
        "magnitudes in [{:.3}, {:.3}], brightest pixel {brightest}",
        magnitude.min_value(),
        magnitude.max_value()
    );

    for ray in field.to_rays().iter().step_by(37).take(4) {
        println!("ray at {:?} -> {:?}", ray.origin, ray.eval(1.0));
    }
    Ok(())
}
