// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region nodes: buffered leaves that split into four children on overflow.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::InsertError;
use crate::point::{Point2D, Quadrant};
use crate::scalar::Scalar;

/// One region of the plane at some depth of the tree.
///
/// A node is in exactly one of two states:
///
/// - **Leaf**: points accumulate in a buffer, up to `fill_factor` of them,
///   and a running centroid is maintained over the buffered points.
/// - **Split**: four exclusively owned children hold the content; the buffer
///   is empty and the centroid is gone. A node never reverts to a leaf.
///
/// The transition happens on the first insert past `fill_factor` and
/// redistributes every buffered point into the children.
pub struct RegionNode<T: Scalar> {
    fill_factor: usize,
    buffer: Vec<Point2D<T>>,
    // Running coordinate sums over `buffer`; the centroid is derived by
    // dividing by the buffer length.
    sum_x: T,
    sum_y: T,
    children: Option<Box<[RegionNode<T>; 4]>>,
}

impl<T: Scalar> core::fmt::Debug for RegionNode<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegionNode")
            .field("fill_factor", &self.fill_factor)
            .field("buffered", &self.buffer.len())
            .field("split", &self.is_split())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> RegionNode<T> {
    pub(crate) fn new(fill_factor: usize) -> Self {
        Self {
            fill_factor,
            buffer: Vec::new(),
            sum_x: T::zero(),
            sum_y: T::zero(),
            children: None,
        }
    }

    /// Whether this node has split into children.
    #[inline]
    pub fn is_split(&self) -> bool {
        self.children.is_some()
    }

    /// The leaf capacity shared by every node in the tree.
    #[inline]
    pub fn fill_factor(&self) -> usize {
        self.fill_factor
    }

    /// Points buffered directly in this node. Empty once split.
    #[inline]
    pub fn points(&self) -> &[Point2D<T>] {
        &self.buffer
    }

    /// The child covering `quadrant`, or `None` while this node is a leaf.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children.as_deref().map(|c| &c[quadrant.index()])
    }

    /// All four children, or `None` while this node is a leaf.
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// Approximate center of the buffered points.
    ///
    /// `None` when the buffer is empty, including always once split.
    pub fn centroid(&self) -> Option<(T, T)> {
        let n = self.buffer.len();
        if n == 0 {
            return None;
        }
        Some((T::div_count(self.sum_x, n), T::div_count(self.sum_y, n)))
    }

    /// Append buffered points of this node and all descendants to `out`.
    pub fn collect_points(&self, out: &mut Vec<Point2D<T>>) {
        out.extend_from_slice(&self.buffer);
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.collect_points(out);
            }
        }
    }

    /// Place `point` in this subtree.
    ///
    /// Either fully completes (including any triggered split) or fails
    /// without mutating the subtree.
    pub(crate) fn append(
        &mut self,
        point: Point2D<T>,
        depth: usize,
        max_depth: usize,
    ) -> Result<(), InsertError> {
        if let Some(children) = self.children.as_deref_mut() {
            return children[point.quadrant().index()].append(point, depth + 1, max_depth);
        }
        if self.buffer.len() < self.fill_factor {
            self.sum_x = T::add(self.sum_x, point.x());
            self.sum_y = T::add(self.sum_y, point.y());
            self.buffer.push(point);
            return Ok(());
        }
        self.split(point, depth, max_depth)
    }

    /// Convert this leaf into an internal node.
    ///
    /// Children are staged detached first: every buffered point plus the
    /// incoming one is routed into them, and only on full success are they
    /// attached and the buffer cleared. A depth failure mid-redistribution
    /// drops the staged children and leaves this node as it was.
    fn split(
        &mut self,
        incoming: Point2D<T>,
        depth: usize,
        max_depth: usize,
    ) -> Result<(), InsertError> {
        // Children live one level deeper; this is the only site that creates
        // them, so the depth guard lives here. Same-signed buffers cascade
        // through staged splits until this check stops them.
        if depth + 1 > max_depth {
            return Err(InsertError::DepthExceeded { max_depth });
        }
        let mut staged: Box<[Self; 4]> =
            Box::new(core::array::from_fn(|_| Self::new(self.fill_factor)));
        for p in self.buffer.iter().copied() {
            staged[p.quadrant().index()].append(p, depth + 1, max_depth)?;
        }
        staged[incoming.quadrant().index()].append(incoming, depth + 1, max_depth)?;

        self.buffer.clear();
        self.sum_x = T::zero();
        self.sum_y = T::zero();
        self.children = Some(staged);
        Ok(())
    }
}
