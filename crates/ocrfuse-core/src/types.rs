//! Alignment data structures and tuning parameters.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

// =============================================================================
// Alignment Constants
// =============================================================================

/// Forward window of unconsumed tokens considered when matching one box.
///
/// Sized to ride out dense sections where many consecutive boxes fail to
/// match before the text catches up again.
pub const DEFAULT_WINDOW_SIZE: usize = 100;

/// Similarity score a candidate must exceed (strict) to become an anchor.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 80.0;

/// Fraction of the shorter box height the vertical intersection must exceed
/// (strict) for two boxes to share a row.
pub const DEFAULT_ROW_OVERLAP: f64 = 0.5;

/// Gap text longer than this many characters receives a trailing newline as
/// a wrap hint for the document writer.
pub const DEFAULT_WRAP_HINT_CHARS: usize = 50;

/// Minimum height of a synthetic box.
pub const MIN_SYNTHETIC_HEIGHT: f64 = 0.02;

/// Vertical spacing between the previous element and a synthetic box, as a
/// fraction of the synthetic box height.
pub const SYNTHETIC_SPACING_FACTOR: f64 = 0.2;

/// Left edge of a synthetic box. Full width minus a margin, so unexpectedly
/// long orphaned text is not truncated.
pub const SYNTHETIC_MARGIN_X0: f64 = 0.05;

/// Right edge of a synthetic box.
pub const SYNTHETIC_MARGIN_X1: f64 = 0.95;

/// Synthetic boxes never extend below this line.
pub const SYNTHETIC_BOTTOM_LIMIT: f64 = 0.98;

/// Lowest allowed top edge for a bottom-clamped synthetic box.
pub const SYNTHETIC_BOTTOM_FLOOR: f64 = 0.9;

/// Rect for orphaned text when no element has been emitted yet.
pub const TOP_STRIP_RECT: Rect = Rect::new(0.0, 0.0, 1.0, 0.1);

/// Full-page rect used by the zero-anchor fallback.
pub const FULL_PAGE_RECT: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

/// Parameters for anchor matching and gap reconstruction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentParams {
    /// Matching: forward window of unconsumed tokens per box (default: 100)
    pub window_size: usize,
    /// Matching: score a candidate must exceed, strict (default: 80.0)
    pub score_threshold: f64,
    /// Row grouping: vertical overlap fraction of the shorter box height,
    /// strict (default: 0.5)
    pub row_overlap: f64,
    /// Gap text: character count beyond which a wrap hint is appended
    /// (default: 50)
    pub wrap_hint_chars: usize,
}

impl Default for AlignmentParams {
    #[inline]
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            row_overlap: DEFAULT_ROW_OVERLAP,
            wrap_hint_chars: DEFAULT_WRAP_HINT_CHARS,
        }
    }
}

/// Raw detector output for one region: polygon corners plus recognized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Polygon corners in pixel coordinates (usually 4 points)
    pub polygon: Vec<Point>,
    /// Recognized text, possibly noisy
    pub text: String,
}

impl RawDetection {
    #[inline]
    #[must_use]
    pub fn new(polygon: Vec<Point>, text: impl Into<String>) -> Self {
        Self {
            polygon,
            text: text.into(),
        }
    }
}

/// A detection normalized to the unit square, ready for alignment.
///
/// Index in its page sequence is its `box_idx`; order is the provider's
/// reading order and is never re-sorted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionBox {
    /// Axis-aligned rect in unit-square coordinates
    pub rect: Rect,
    /// Recognized text, possibly noisy
    pub text: String,
}

impl DetectionBox {
    #[inline]
    #[must_use]
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            rect,
            text: text.into(),
        }
    }
}

/// A confirmed correspondence between one detection box and one content
/// token.
///
/// The sequence of anchors emitted for a page is strictly increasing in
/// both `box_idx` and `llm_idx`; gap reconstruction relies on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Index of the matched box in the page's detection sequence
    pub box_idx: usize,
    /// Index of the matched token in the flattened token sequence
    pub llm_idx: usize,
    /// Original surface form of the matched token (punctuation and case
    /// preserved)
    pub text: String,
    /// Rect of the matched box
    pub rect: Rect,
}

/// How an aligned element was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Direct fuzzy match between one box and one token
    Anchor,
    /// Tokens distributed onto a row of unanchored boxes
    GapRow,
    /// Fabricated box for tokens with no detected region
    Synthetic,
    /// Whole-page element emitted when no anchors could be established
    Fallback,
    /// Box carried through unchanged because no content text was supplied
    Passthrough,
}

/// Final output unit: one rect with the text aligned onto it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedElement {
    /// Rect in unit-square coordinates
    pub rect: Rect,
    /// Aligned text (content-stream wording)
    pub text: String,
    /// How this element was produced
    pub provenance: Provenance,
}
