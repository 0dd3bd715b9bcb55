// Copyright 2025 the Decodes Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for interval and bounds operations.

/// Errors raised by interval arithmetic and bounds construction.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// An interval with equal endpoints cannot be devaluated.
    #[error("interval [{a}, {a}] cannot be devaluated because its delta is zero")]
    DegenerateInterval {
        /// The shared endpoint of the degenerate interval.
        a: f64,
    },

    /// A bounds configuration supplied neither complete parameter set, or mixed both.
    #[error(r#"bounds require either "center", "dim_x", "dim_y" OR "ival_x", "ival_y""#)]
    IncompleteBounds,
}
