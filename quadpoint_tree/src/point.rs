// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points and sign-based quadrant classification.

use crate::error::InvalidPoint;
use crate::scalar::Scalar;

/// One of the four sign regions of the plane, relative to the global origin.
///
/// The numeric index uses bit 0 for a negative `x` and bit 1 for a negative
/// `y`, so `(+, +)` is 0, `(-, +)` is 1, `(+, -)` is 2, and `(-, -)` is 3.
///
/// Classification is always relative to the origin, never to the midpoint of
/// an enclosing region. Deep trees therefore route same-signed points
/// identically at every level; see
/// [`TreeParams::max_depth`](crate::TreeParams) for the guard this implies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Positive `x`, positive `y` (index 0).
    PosPos = 0,
    /// Negative `x`, positive `y` (index 1).
    NegPos = 1,
    /// Positive `x`, negative `y` (index 2).
    PosNeg = 2,
    /// Negative `x`, negative `y` (index 3).
    NegNeg = 3,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Self; 4] = [Self::PosPos, Self::NegPos, Self::PosNeg, Self::NegNeg];

    /// The quadrant for the given coordinate signs.
    #[inline]
    pub const fn from_signs(x_negative: bool, y_negative: bool) -> Self {
        match (x_negative, y_negative) {
            (false, false) => Self::PosPos,
            (true, false) => Self::NegPos,
            (false, true) => Self::PosNeg,
            (true, true) => Self::NegNeg,
        }
    }

    /// Child-slot index of this quadrant, in `0..4`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// An immutable 2D point with its quadrant computed at construction.
///
/// Classification happens exactly once, in [`Point2D::new`]; a constructed
/// point always has a well-defined quadrant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point2D<T: Scalar> {
    x: T,
    y: T,
    quadrant: Quadrant,
}

impl<T: Scalar> Point2D<T> {
    /// Create a point from its coordinates, classifying it into a quadrant.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPoint`] when either coordinate is exactly zero, since
    /// a zero coordinate has no sign.
    pub fn new(x: T, y: T) -> Result<Self, InvalidPoint> {
        if T::is_zero(x) || T::is_zero(y) {
            return Err(InvalidPoint);
        }
        let quadrant = Quadrant::from_signs(T::is_negative(x), T::is_negative(y));
        Ok(Self { x, y, quadrant })
    }

    /// The x coordinate.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// The quadrant this point was classified into.
    #[inline]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }
}

#[cfg(feature = "kurbo")]
impl TryFrom<kurbo::Point> for Point2D<f64> {
    type Error = InvalidPoint;

    fn try_from(p: kurbo::Point) -> Result<Self, Self::Error> {
        Self::new(p.x, p.y)
    }
}
