// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadpoint_tree --heading-base-level=0

//! Quadpoint Tree: a recursive quadrant index for 2D points.
//!
//! The tree partitions the plane by coordinate sign: every point is
//! classified into one of four quadrants relative to the global origin, and
//! each region node either buffers points directly (leaf) or owns four child
//! nodes it routes into (split). A leaf that overflows its fill factor
//! converts itself into an internal node and redistributes its buffer.
//!
//! - Insert points with [`PointTree::insert`]; classification failures and
//!   depth overruns surface as [`InsertError`] without mutating the tree.
//! - Leaves maintain a running centroid of their buffered points
//!   ([`RegionNode::centroid`]).
//! - The crate is `no_std` + `alloc` and generic over the coordinate scalar
//!   via [`Scalar`] (`f32`, `f64`, `i64`).
//!
//! Classification is relative to the origin rather than each region's own
//! midpoint, so points sharing a sign pattern route identically at every
//! level. [`TreeParams::max_depth`] bounds the resulting descent; see
//! [`InsertError::DepthExceeded`].
//!
//! # Example
//!
//! ```rust
//! use quadpoint_tree::{PointTree, TreeParams};
//!
//! let mut tree = PointTree::with_params(TreeParams {
//!     fill_factor: 2,
//!     max_depth: 32,
//! });
//! tree.insert(10.0, 4.0)?;
//! tree.insert(-3.0, 7.5)?;
//! assert!(!tree.root().is_split());
//!
//! // The third point overflows the root, which splits and redistributes.
//! tree.insert(2.0, -8.0)?;
//! assert!(tree.root().is_split());
//! assert_eq!(tree.len(), 3);
//! # Ok::<(), quadpoint_tree::InsertError>(())
//! ```
//!
//! There are no removal, rebalancing, or range-query operations; a split is
//! permanent and the tree only grows.

#![no_std]

extern crate alloc;

pub mod error;
pub mod node;
pub mod point;
pub mod scalar;
pub mod tree;

pub use error::{InsertError, InvalidPoint};
pub use node::RegionNode;
pub use point::{Point2D, Quadrant};
pub use scalar::Scalar;
pub use tree::{PointTree, TreeParams};
