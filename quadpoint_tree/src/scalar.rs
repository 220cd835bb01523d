// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric scalar abstraction for point coordinates.

use core::fmt::Debug;

/// Coordinate scalar used by [`Point2D`](crate::Point2D) and the tree.
///
/// This trait provides the minimal set of operations the tree needs: sign
/// inspection for quadrant classification and sum/divide for the running
/// centroid. It is implemented for `f32`, `f64`, and `i64`.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Whether the value is exactly zero (sign undefined).
    fn is_zero(v: Self) -> bool;

    /// Whether the value is strictly negative.
    fn is_negative(v: Self) -> bool;

    /// Divide an accumulated sum by a live point count (`n >= 1`).
    fn div_count(v: Self, n: usize) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn is_zero(v: Self) -> bool {
        v == 0.0
    }

    #[inline]
    fn is_negative(v: Self) -> bool {
        v < 0.0
    }

    #[inline]
    fn div_count(v: Self, n: usize) -> Self {
        v / (n as Self)
    }
}

impl Scalar for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn is_zero(v: Self) -> bool {
        v == 0.0
    }

    #[inline]
    fn is_negative(v: Self) -> bool {
        v < 0.0
    }

    #[inline]
    fn div_count(v: Self, n: usize) -> Self {
        v / (n as Self)
    }
}

impl Scalar for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn is_zero(v: Self) -> bool {
        v == 0
    }

    #[inline]
    fn is_negative(v: Self) -> bool {
        v < 0
    }

    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Point counts beyond i64::MAX are unreachable in practice."
    )]
    fn div_count(v: Self, n: usize) -> Self {
        v / (n as Self)
    }
}
