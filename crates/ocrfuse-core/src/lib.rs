//! # OcrFuse - Hybrid OCR Alignment Library
//!
//! Reconciles two views of the same scanned page: a spatial stream of
//! detection boxes (accurate positions, noisy text) and a position-free
//! content transcription (clean text, no coordinates). The output is an
//! ordered sequence of positioned elements carrying the clean text.
//!
//! ## Features
//!
//! - **Anchor Matching**: Fuzzy-matches box text against content tokens with
//!   a monotonic cursor, so matches never go backwards
//! - **Gap Reconstruction**: Distributes unmatched tokens across unmatched
//!   boxes by visual row, proportional to row width
//! - **Synthetic Placement**: Invents plausible rectangles for text with no
//!   boxes left to carry it
//! - **Graceful Degradation**: Missing content passes boxes through; zero
//!   anchors collapse to a single full-page element
//!
//! ## Quick Start
//!
//! ```
//! use ocrfuse_core::{Aligner, DetectionBox, Rect};
//!
//! // One detection with garbled text, plus the clean transcription
//! let boxes = vec![DetectionBox::new(Rect::new(0.1, 0.1, 0.4, 0.14), "Helo")];
//! let elements = Aligner::new().align(&boxes, "Hello world");
//!
//! // "Helo" anchored to "Hello"; "world" got a synthetic box below it
//! assert_eq!(elements.len(), 2);
//! assert_eq!(elements[0].text, "Hello");
//! assert_eq!(elements[1].text, "world");
//! ```
//!
//! ## Error Handling
//!
//! Alignment itself never fails: degenerate inputs degrade to passthrough,
//! synthetic, or fallback output. Only [`extract_boxes`] returns
//! [`Result`], for inputs that cannot be interpreted at all:
//!
//! ```
//! use ocrfuse_core::{extract_boxes, AlignError, RawDetection};
//!
//! match extract_boxes(&[] as &[RawDetection], 0, 600) {
//!     Err(AlignError::InvalidDimensions(w, h)) => {
//!         log::warn!("Unusable page geometry: {}x{}", w, h);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod aligner;
pub mod error;
pub mod extract; // Polygon stream -> normalized axis-aligned boxes
pub mod geometry;
pub mod matcher; // Monotonic fuzzy anchor search
pub mod normalize;
pub mod reconstruct; // Row grouping and token distribution between anchors
pub mod similarity;
pub mod types;

// ============================================================================
// Public API Exports
// ============================================================================

pub use error::{AlignError, Result};

// Entry points
pub use aligner::Aligner;
pub use extract::extract_boxes;

// Data structures used in inputs and outputs
pub use geometry::{Point, Rect};
pub use types::{
    AlignedElement, AlignmentParams, Anchor, DetectionBox, Provenance, RawDetection,
};

// Text utilities shared by the matcher and callers that pre-filter content
pub use normalize::{normalize, tokenize};
pub use similarity::indel_ratio;
