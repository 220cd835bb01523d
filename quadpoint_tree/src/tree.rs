// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `PointTree` API: a thin owner of the root region node.

use alloc::vec::Vec;

use crate::error::InsertError;
use crate::node::RegionNode;
use crate::point::Point2D;
use crate::scalar::Scalar;

/// Construction parameters for a [`PointTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TreeParams {
    /// Maximum number of points a leaf buffers before splitting.
    ///
    /// Fixed for the lifetime of the tree and inherited by every node.
    pub fill_factor: usize,
    /// Maximum node depth insertion may descend to.
    ///
    /// Inserts that would split past this depth fail with
    /// [`InsertError::DepthExceeded`] instead of recursing unboundedly.
    pub max_depth: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            fill_factor: 1,
            max_depth: 32,
        }
    }
}

/// A point index over the 2D plane backed by a recursive quadrant tree.
///
/// Owns the root [`RegionNode`] exclusively and forwards insertion to it.
/// There are no removal or rebalancing operations; a split is permanent.
pub struct PointTree<T: Scalar> {
    root: RegionNode<T>,
    max_depth: usize,
    len: usize,
}

impl<T: Scalar> core::fmt::Debug for PointTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointTree")
            .field("len", &self.len)
            .field("fill_factor", &self.root.fill_factor())
            .field("max_depth", &self.max_depth)
            .field("split", &self.root.is_split())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar> Default for PointTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> PointTree<T> {
    /// Create an empty tree with the default parameters.
    pub fn new() -> Self {
        Self::with_params(TreeParams::default())
    }

    /// Create an empty tree with explicit parameters.
    ///
    /// # Panics
    ///
    /// Panics if `params.fill_factor` is zero.
    pub fn with_params(params: TreeParams) -> Self {
        assert!(params.fill_factor > 0, "fill_factor must be positive");
        Self {
            root: RegionNode::new(params.fill_factor),
            max_depth: params.max_depth,
            len: 0,
        }
    }

    /// Classify and insert the point `(x, y)`.
    ///
    /// # Errors
    ///
    /// - [`InsertError::InvalidPoint`] when either coordinate is zero.
    /// - [`InsertError::DepthExceeded`] when placement would split past the
    ///   depth limit.
    ///
    /// On error the tree is unchanged.
    pub fn insert(&mut self, x: T, y: T) -> Result<(), InsertError> {
        let point = Point2D::new(x, y)?;
        self.insert_point(point)
    }

    /// Insert an already-classified point.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::DepthExceeded`] when placement would split past
    /// the depth limit; the tree is unchanged.
    pub fn insert_point(&mut self, point: Point2D<T>) -> Result<(), InsertError> {
        self.root.append(point, 0, self.max_depth)?;
        self.len += 1;
        Ok(())
    }

    /// Number of points successfully inserted.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The leaf capacity every node inherits.
    #[inline]
    pub fn fill_factor(&self) -> usize {
        self.root.fill_factor()
    }

    /// The configured depth limit.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Read access to the root region node.
    #[inline]
    pub fn root(&self) -> &RegionNode<T> {
        &self.root
    }

    /// Collect every stored point, in no particular order.
    pub fn points(&self) -> Vec<Point2D<T>> {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect_points(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidPoint;
    use crate::point::Quadrant;

    fn pt(x: f64, y: f64) -> Point2D<f64> {
        Point2D::new(x, y).unwrap()
    }

    #[test]
    fn defaults_match_documented_params() {
        let tree: PointTree<f64> = PointTree::new();
        assert_eq!(tree.fill_factor(), 1);
        assert_eq!(tree.max_depth(), 32);
        assert!(tree.is_empty());
    }

    #[test]
    #[should_panic(expected = "fill_factor must be positive")]
    fn zero_fill_factor_is_rejected() {
        let _tree: PointTree<f64> = PointTree::with_params(TreeParams {
            fill_factor: 0,
            max_depth: 32,
        });
    }

    #[test]
    fn root_stays_leaf_until_capacity_is_exceeded() {
        let mut tree = PointTree::with_params(TreeParams {
            fill_factor: 4,
            max_depth: 32,
        });
        tree.insert(1.0, 1.0).unwrap();
        tree.insert(-1.0, 1.0).unwrap();
        tree.insert(1.0, -1.0).unwrap();
        tree.insert(-1.0, -1.0).unwrap();
        assert!(!tree.root().is_split());
        assert_eq!(tree.root().points().len(), 4);
    }

    #[test]
    fn overflowing_insert_splits_root_without_losing_points() {
        let mut tree = PointTree::with_params(TreeParams {
            fill_factor: 4,
            max_depth: 32,
        });
        let inserted = [
            pt(1.0, 1.0),
            pt(-1.0, 1.0),
            pt(1.0, -1.0),
            pt(-1.0, -1.0),
            pt(2.0, 2.0),
        ];
        for p in inserted {
            tree.insert_point(p).unwrap();
        }
        assert!(tree.root().is_split());
        assert_eq!(tree.len(), 5);

        let stored = tree.points();
        assert_eq!(stored.len(), 5);
        for p in inserted {
            assert!(stored.contains(&p));
        }
    }

    #[test]
    fn two_point_split_places_points_by_quadrant() {
        let mut tree: PointTree<f64> = PointTree::new();
        tree.insert(1.0, 1.0).unwrap();
        tree.insert(-1.0, 1.0).unwrap();

        let root = tree.root();
        assert!(root.is_split());
        assert_eq!(
            root.child(Quadrant::PosPos).unwrap().points(),
            &[pt(1.0, 1.0)]
        );
        assert_eq!(
            root.child(Quadrant::NegPos).unwrap().points(),
            &[pt(-1.0, 1.0)]
        );
    }

    #[test]
    fn zero_coordinate_surfaces_invalid_point() {
        let mut tree: PointTree<f64> = PointTree::new();
        assert_eq!(
            tree.insert(0.0, 3.0),
            Err(InsertError::InvalidPoint(InvalidPoint))
        );
        assert_eq!(
            tree.insert(3.0, 0.0),
            Err(InsertError::InvalidPoint(InvalidPoint))
        );
        assert!(tree.is_empty());
    }

    #[test]
    fn same_sign_flood_fails_with_depth_exceeded_and_leaves_tree_intact() {
        let mut tree = PointTree::with_params(TreeParams {
            fill_factor: 1,
            max_depth: 8,
        });
        tree.insert(1.0, 1.0).unwrap();
        let err = tree.insert(2.0, 2.0).unwrap_err();
        assert_eq!(err, InsertError::DepthExceeded { max_depth: 8 });

        // The failed insert must not have mutated anything.
        assert_eq!(tree.len(), 1);
        assert!(!tree.root().is_split());
        assert_eq!(tree.root().points(), &[pt(1.0, 1.0)]);
    }

    #[test]
    fn errors_propagate_through_deep_routing() {
        let mut tree = PointTree::with_params(TreeParams {
            fill_factor: 1,
            max_depth: 8,
        });
        // Split the root with points in distinct quadrants, then flood one
        // child subtree with same-signed points.
        tree.insert(1.0, 1.0).unwrap();
        tree.insert(-1.0, 1.0).unwrap();
        let mut coord = 2.0;
        let err = loop {
            match tree.insert(coord, coord) {
                Ok(()) => coord += 1.0,
                Err(e) => break e,
            }
        };
        assert_eq!(err, InsertError::DepthExceeded { max_depth: 8 });
        let stored = tree.points();
        assert_eq!(stored.len(), tree.len());
    }

    #[test]
    fn integer_trees_behave_like_float_trees() {
        let mut tree: PointTree<i64> = PointTree::with_params(TreeParams {
            fill_factor: 2,
            max_depth: 32,
        });
        tree.insert(3, 3).unwrap();
        tree.insert(-3, -3).unwrap();
        assert!(!tree.root().is_split());
        tree.insert(5, -5).unwrap();
        assert!(tree.root().is_split());
        assert_eq!(tree.len(), 3);
    }
}
