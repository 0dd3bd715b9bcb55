// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decodes Bounds: directed intervals, axis-aligned regions, and a point quadtree.
//!
//! Decodes Bounds is the numeric core of the Decodes geometry kernel.
//!
//! - [`Interval`]: a directed 1D range with evaluation, deviation (inverse evaluation),
//!   subdivision, and remapping between coordinate spaces.
//! - [`Bounds`]: an axis-aligned 2D or 3D region built from per-axis intervals, with
//!   containment, corner enumeration, subdivision, and nearest-point clamping.
//! - [`QuadTree`]: a capacity-bounded recursive index of 2D points built on
//!   [`Bounds::subbounds`].
//!
//! Points come in through the small [`Position`] trait, implemented for [`Point3`],
//! tuples, arrays, and (with the `kurbo` feature) `kurbo::Point`.
//!
//! # Example
//!
//! ```rust
//! use decodes_bounds::{Bounds, Interval, Point3, QuadTree};
//!
//! // Map a world coordinate into pixel space.
//! let world = Interval::new(-2.0, 2.0);
//! let px = world.remap_to(1.0, Interval::new(0.0, 64.0)).unwrap();
//! assert_eq!(px, 48.0);
//!
//! // Index a few points and run a range query.
//! let mut tree = QuadTree::new(2, Bounds::from_center(&Point3::ORIGIN, 10.0, 10.0));
//! for p in [(-4.0, -4.0), (-3.0, 2.0), (1.0, 1.0), (4.0, 4.5)] {
//!     assert!(tree.append(p));
//! }
//! let query = Bounds::from_intervals(Interval::new(0.0, 5.0), Interval::new(0.0, 5.0));
//! assert_eq!(tree.pts_in_bounds(&query).len(), 2);
//! ```
//!
//! ## Errors
//!
//! Arithmetic on degenerate input and incomplete [`BoundsSpec`] configurations return
//! [`GeometryError`]. Quadtree rejections are plain `bool`s: a point outside a node is
//! an expected answer, not a failure.
//!
//! ### Float semantics
//!
//! Interval and bounds equality is exact; see [`Interval::approx_eq`] for a tolerant
//! comparison. Coordinates are assumed to be finite.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod error;
pub mod interval;
pub mod position;
pub mod quadtree;

pub use bounds::{Bounds, BoundsSpec};
pub use error::GeometryError;
pub use interval::{EPSILON, Interval};
pub use position::{Point3, Position, same_position};
pub use quadtree::{MAX_DEPTH, QuadTree};
