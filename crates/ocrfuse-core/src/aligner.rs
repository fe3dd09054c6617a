//! Top-level alignment orchestration.

use rayon::prelude::*;

use crate::matcher::find_anchors;
use crate::normalize::tokenize;
use crate::reconstruct::reconstruct;
use crate::types::{
    AlignedElement, AlignmentParams, DetectionBox, Provenance, FULL_PAGE_RECT,
};

/// Aligns content-stream text onto detection boxes via anchor-based gap
/// filling.
///
/// # Examples
///
/// ```
/// use ocrfuse_core::{Aligner, DetectionBox, Provenance, Rect};
///
/// let boxes = vec![DetectionBox::new(Rect::new(0.1, 0.1, 0.4, 0.14), "Helo")];
/// let elements = Aligner::new().align(&boxes, "Hello world");
///
/// assert_eq!(elements.len(), 2);
/// assert_eq!(elements[0].text, "Hello");
/// assert_eq!(elements[0].provenance, Provenance::Anchor);
/// assert_eq!(elements[1].text, "world");
/// assert_eq!(elements[1].provenance, Provenance::Synthetic);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Aligner {
    params: AlignmentParams,
}

impl Aligner {
    /// Aligner with the default parameters.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligner with custom parameters.
    #[inline]
    #[must_use]
    pub fn with_params(params: AlignmentParams) -> Self {
        Self { params }
    }

    /// Align one page: match anchors, reconstruct the gaps between them,
    /// and return the ordered element sequence.
    ///
    /// Degenerate inputs degrade instead of failing. Content that
    /// tokenizes to nothing returns the boxes unchanged (passthrough).
    /// When not a single anchor can be established against non-empty
    /// boxes, the whole content collapses onto one full-page element
    /// rather than a speculative reconstruction.
    #[must_use]
    pub fn align(&self, boxes: &[DetectionBox], content: &str) -> Vec<AlignedElement> {
        let tokens = tokenize(content);
        if tokens.is_empty() {
            return passthrough(boxes);
        }

        let anchors = find_anchors(boxes, &tokens, &self.params);
        if anchors.is_empty() && !boxes.is_empty() {
            log::warn!(
                "No anchors established across {} box(es), falling back to a full-page element",
                boxes.len()
            );
            return vec![AlignedElement {
                rect: FULL_PAGE_RECT,
                text: format!("{content}\n"),
                provenance: Provenance::Fallback,
            }];
        }

        reconstruct(boxes, &tokens, &anchors, &self.params)
    }

    /// Align one page whose content arrives as separate lines, joined with
    /// single spaces before tokenization.
    #[must_use]
    pub fn align_lines<S: AsRef<str>>(
        &self,
        boxes: &[DetectionBox],
        lines: &[S],
    ) -> Vec<AlignedElement> {
        let content = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        self.align(boxes, &content)
    }

    /// Align a batch of pages in parallel. Pages are independent, so they
    /// fan out across the rayon thread pool with no coordination; output
    /// order matches input order.
    #[must_use]
    pub fn align_pages(&self, pages: &[(Vec<DetectionBox>, String)]) -> Vec<Vec<AlignedElement>> {
        pages
            .par_iter()
            .map(|(boxes, content)| self.align(boxes, content))
            .collect()
    }
}

/// Wrap boxes unchanged when there is no content stream to align.
fn passthrough(boxes: &[DetectionBox]) -> Vec<AlignedElement> {
    boxes
        .iter()
        .map(|detection| AlignedElement {
            rect: detection.rect,
            text: detection.text.clone(),
            provenance: Provenance::Passthrough,
        })
        .collect()
}
