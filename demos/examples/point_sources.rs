// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point sources.
//!
//! Select a loader by configuration, exercise the stub boundary, and feed a
//! tree from a custom in-memory source.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p quadpoint_demos --example point_sources`

use std::path::Path;

use kurbo::Point;
use quadpoint_loader::{LoadError, PointSource, SourceKind, load_into};
use quadpoint_tree::PointTree;
use tracing_subscriber::EnvFilter;

/// A source with a fixed point set, standing in for a real file format.
struct FixedSource;

impl PointSource for FixedSource {
    fn load(&self, _path: &Path) -> Result<Vec<Point>, LoadError> {
        Ok(vec![
            Point::new(1.0, 1.0),
            Point::new(-2.0, 3.0),
            Point::new(4.0, -5.0),
            Point::new(-6.0, -7.0),
        ])
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The shipped sources are interface stubs with no on-disk format yet.
    let mut tree: PointTree<f64> = PointTree::new();
    let source = SourceKind::Region.into_source();
    match load_into(&mut tree, source.as_ref(), Path::new("points.dat")) {
        Ok(n) => println!("loaded {n} points"),
        Err(err) => println!("stub source: {err}"),
    }

    // Any PointSource implementation can feed a tree.
    let n = load_into(&mut tree, &FixedSource, Path::new("unused")).unwrap();
    println!("loaded {n} points from the in-memory source: {tree:?}");
    assert_eq!(tree.len(), 4);
}
