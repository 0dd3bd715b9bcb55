// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Game of Life on a wrapping boolean field.
//!
//! A glider crosses the edge of the board and reappears on the other side,
//! which only works because field neighborhoods wrap.
//!
//! Run:
//! - `cargo run -p decodes_demos --example life`

use decodes_raster::{BoolField, Color, RasterError, RasterOptions};

fn step(board: &BoolField) -> Result<BoolField, RasterError> {
    let mut next = board.clone();
    for (x, y) in board.addresses() {
        let live = board
            .neighbors_of(x, y)?
            .into_iter()
            .filter(|&&v| v)
            .count();
        let alive = *board.get(x, y)?;
        next.set(x, y, matches!((alive, live), (true, 2) | (_, 3)))?;
    }
    Ok(next)
}

fn print(board: &BoolField) {
    for y in 0..board.height() {
        let row: String = board.cells()[y * board.width()..(y + 1) * board.width()]
            .iter()
            .map(|&v| if v { '#' } else { '.' })
            .collect();
        println!("{row}");
    }
    println!();
}

fn main() -> Result<(), RasterError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut board = BoolField::new_with_options(
        (8, 8),
        false,
        RasterOptions::FIELD | RasterOptions::INCLUDE_CORNERS,
    )?;
    for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        board.set(x, y, true)?;
    }
    print(&board);

    // A glider returns to its shape shifted by (1, 1) every four generations;
    // 32 generations carry it once around an 8x8 torus.
    let start = board.clone();
    for generation in 1..=32 {
        board = step(&board)?;
        assert_eq!(board.count_true(), 5, "glider keeps five cells");
        if generation % 8 == 0 {
            log::info!("generation {generation}");
            print(&board);
        }
    }
    assert_eq!(board, start, "glider wraps back to where it started");

    let img = board.to_image(Color::WHITE, Color::BLACK);
    let dark = img.cells().iter().filter(|c| c.to_rgb8() == [0, 0, 0]).count();
    println!("{dark} dark pixels of {}", img.px_count());
    Ok(())
}
