// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types surfaced by point construction and insertion.

use thiserror::Error;

/// A coordinate was exactly zero, so its sign (and quadrant) is undefined.
///
/// Raised by [`Point2D::new`](crate::Point2D::new) before any tree state is
/// touched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("coordinate is zero; quadrant sign is undefined")]
pub struct InvalidPoint;

/// Error returned by [`PointTree::insert`](crate::PointTree::insert).
///
/// Insertion is atomic: when any variant is returned, the tree is unchanged
/// from before the call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The point could not be classified into a quadrant.
    #[error(transparent)]
    InvalidPoint(#[from] InvalidPoint),
    /// Placing the point would descend past the configured depth limit.
    ///
    /// Classification is relative to the global origin, so points sharing a
    /// sign pattern route to the same child at every level; the limit turns
    /// that into an error instead of stack exhaustion.
    #[error("placement would exceed the maximum tree depth of {max_depth}")]
    DepthExceeded {
        /// The tree's configured depth limit.
        max_depth: usize,
    },
}
