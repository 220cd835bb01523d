// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point sources and configuration-driven selection.

use std::fmt;
use std::path::Path;

use kurbo::Point;
use tracing::{debug, warn};

use crate::error::LoadError;

/// A provider of points for tree insertion.
///
/// Implementations own the on-disk format; the tree side only sees a flat
/// sequence of [`kurbo::Point`] values and classifies them on insert.
pub trait PointSource {
    /// Load every point stored at `path`.
    ///
    /// # Errors
    ///
    /// Format- and I/O-level failures surface as [`LoadError`].
    fn load(&self, path: &Path) -> Result<Vec<Point>, LoadError>;
}

/// Which point source to construct. Selection is by configuration, not by
/// subtyping; see [`SourceKind::into_source`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Plain region data: bare coordinate pairs.
    Region,
    /// Image-derived data: pixel positions with intensities.
    Image,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region => f.write_str("region"),
            Self::Image => f.write_str("image"),
        }
    }
}

impl SourceKind {
    /// Construct the source this kind names.
    pub fn into_source(self) -> Box<dyn PointSource> {
        debug!(kind = %self, "selected point source");
        match self {
            Self::Region => Box::new(RegionFileSource),
            Self::Image => Box::new(ImageFileSource),
        }
    }
}

/// Source for plain region files.
///
/// Interface stub: the on-disk format is not defined yet, so [`load`]
/// always reports [`LoadError::Unimplemented`].
///
/// [`load`]: PointSource::load
#[derive(Copy, Clone, Debug, Default)]
pub struct RegionFileSource;

impl PointSource for RegionFileSource {
    fn load(&self, path: &Path) -> Result<Vec<Point>, LoadError> {
        warn!(path = %path.display(), "region source is an interface stub");
        Err(LoadError::Unimplemented(SourceKind::Region))
    }
}

/// Source for image-derived point sets.
///
/// Interface stub, like [`RegionFileSource`]; pixel-specific indexing is out
/// of scope and only the boundary is fixed.
#[derive(Copy, Clone, Debug, Default)]
pub struct ImageFileSource;

impl PointSource for ImageFileSource {
    fn load(&self, path: &Path) -> Result<Vec<Point>, LoadError> {
        warn!(path = %path.display(), "image source is an interface stub");
        Err(LoadError::Unimplemented(SourceKind::Image))
    }
}
