// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced while loading points into a tree.

use quadpoint_tree::InsertError;
use thiserror::Error;

use crate::source::SourceKind;

/// Error returned by [`PointSource::load`](crate::PointSource::load) and
/// [`load_into`](crate::load_into).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The selected source kind has no on-disk format defined yet.
    #[error("{0} source has no on-disk format defined yet")]
    Unimplemented(SourceKind),
    /// Reading the backing file failed.
    #[error("i/o failure while reading points")]
    Io(#[from] std::io::Error),
    /// A loaded point was rejected by the tree.
    #[error(transparent)]
    Insert(#[from] InsertError),
}
