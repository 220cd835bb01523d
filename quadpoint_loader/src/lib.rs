// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadpoint_loader --heading-base-level=0

//! Quadpoint Loader: the point-source boundary for [`quadpoint_tree`].
//!
//! Trees index points; this crate owns where points come from. A
//! [`PointSource`] loads a flat sequence of [`kurbo::Point`] values from a
//! path, and [`load_into`] feeds them through the tree's fallible
//! classification one insert at a time.
//!
//! Sources are selected by configuration via [`SourceKind`], not by
//! subtyping: [`SourceKind::into_source`] yields a boxed trait object. The
//! two shipped sources, [`RegionFileSource`] and [`ImageFileSource`], fix
//! the interface boundary only — neither has an on-disk format defined yet,
//! and both report [`LoadError::Unimplemented`].
//!
//! Loading is not transactional: points inserted before a failure stay in
//! the tree, mirroring the tree's per-insert atomicity.

pub mod error;
pub mod source;

use std::path::Path;

use quadpoint_tree::{Point2D, PointTree};
use tracing::debug;

pub use error::LoadError;
pub use source::{ImageFileSource, PointSource, RegionFileSource, SourceKind};

/// Load every point from `source` at `path` and insert it into `tree`.
///
/// Returns the number of points inserted.
///
/// # Errors
///
/// Propagates [`LoadError`] from the source unchanged; points the tree
/// rejects (zero coordinate, depth overrun) surface as
/// [`LoadError::Insert`]. Earlier inserts from the same call are kept.
pub fn load_into<S>(
    tree: &mut PointTree<f64>,
    source: &S,
    path: &Path,
) -> Result<usize, LoadError>
where
    S: PointSource + ?Sized,
{
    let points = source.load(path)?;
    let total = points.len();
    for p in points {
        let point = Point2D::try_from(p).map_err(quadpoint_tree::InsertError::from)?;
        tree.insert_point(point)?;
    }
    debug!(total, path = %path.display(), "loaded points into tree");
    Ok(total)
}
