//! Error types for group operations and point encodings.

use thiserror::Error;

/// Errors reported to callers of the group API.
///
/// Internal invariant violations (inverting zero inside the group law, an
/// unsupported wNAF window) are defects and panic instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// A coordinate index outside `{0, 1, 2}` was requested.
    #[error("invalid coordinate index {0}, expected 0, 1 or 2")]
    InvalidCoordinateIndex(usize),

    /// Batch normalization was handed the point at infinity.
    ///
    /// The shared inversion of Montgomery's trick would otherwise invert
    /// zero; the batch is left untouched.
    #[error("batch normalization requires non-zero points, found the identity at index {index}")]
    IdentityInBatch { index: usize },

    /// A field element token is not a canonical decimal encoding.
    #[error("invalid field element encoding {0:?}")]
    InvalidFieldElement(String),

    /// The element count of an encoded point sequence is malformed.
    #[error("invalid point count {0:?}")]
    InvalidCount(String),

    /// The encoding ended before all announced coordinates were read.
    #[error("unexpected end of encoded input")]
    UnexpectedEnd,

    /// Tokens remain after the last announced point.
    #[error("trailing data after encoded points")]
    TrailingData,

    /// A scalar is wider than the precomputed fixed-base table.
    #[error("scalar has {bits} bits but the window table covers {max}")]
    ScalarTooLarge { bits: usize, max: usize },
}
