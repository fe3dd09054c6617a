//! Error types for alignment input validation.
//!
//! Alignment itself degrades instead of failing: degenerate detections are
//! dropped, boxes without a match simply get no anchor, and a page with no
//! anchors at all falls back to a single full-page element. The only errors
//! surfaced to callers are malformed inputs caught while converting raw
//! detector output into unit-square boxes.

use thiserror::Error;

/// Error types that can occur while preparing detector output for alignment.
#[derive(Error, Debug)]
pub enum AlignError {
    /// Image dimensions of zero make coordinate normalization impossible.
    #[error("Invalid image dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),

    /// A detection polygon contains a NaN or infinite coordinate.
    ///
    /// Carries the index of the offending detection in the input sequence.
    #[error("Non-finite coordinate in detection polygon {0}")]
    NonFiniteCoordinate(usize),
}

/// Type alias for [`Result<T, AlignError>`].
pub type Result<T> = std::result::Result<T, AlignError>;
