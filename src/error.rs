//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Every error is recoverable: the grid is left unchanged whenever an
/// operation fails.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Invalid dimensions {0}×{1}. Width and height should be positive and at most the configured maximum.
    InvalidDimensions(i32, i32),
    /// Invalid density {0}. Density should be between 0 and 1.
    InvalidDensity(f64),
    /// Coordinates {0:?} are out of bounds.
    OutOfBounds(Coord),
    /// Pattern {0:?} was not found in the source.
    PatternNotFound(String),
    /// Malformed pattern at line {line}: {reason}.
    MalformedPattern {
        /// 1-indexed line in the pattern source.
        line: usize,
        /// What went wrong on that line.
        reason: String,
    },
    /// Unable to read the pattern source: {0}.
    PatternSourceUnavailable(String),
}
