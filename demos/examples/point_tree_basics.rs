// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point tree basics.
//!
//! Build a small tree, watch the root split, and inspect where points land.
//!
//! Run:
//! - `cargo run -p quadpoint_demos --example point_tree_basics`

use quadpoint_tree::{PointTree, Quadrant, TreeParams};

fn main() {
    let mut tree = PointTree::with_params(TreeParams {
        fill_factor: 2,
        max_depth: 32,
    });

    // Two points fit in the root's buffer.
    tree.insert(10.0, 4.0).unwrap();
    tree.insert(-3.0, 7.5).unwrap();
    println!("before split: {tree:?}");
    println!("root centroid: {:?}", tree.root().centroid());

    // The third point overflows the root; the buffer is redistributed into
    // four children by coordinate sign.
    tree.insert(2.0, -8.0).unwrap();
    println!("after split:  {tree:?}");

    for quadrant in Quadrant::ALL {
        let child = tree.root().child(quadrant).unwrap();
        println!("{quadrant:?}: {} point(s)", child.points().len());
    }

    // Zero coordinates have no sign, so they are rejected up front.
    let err = tree.insert(0.0, 1.0).unwrap_err();
    println!("rejected degenerate point: {err}");

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.points().len(), 3, "no point may be lost by a split");
}
