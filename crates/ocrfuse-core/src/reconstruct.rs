//! Gap reconstruction between accepted anchors.
//!
//! Anchors pin individual tokens to individual boxes; everything between
//! two consecutive anchors is a gap that may hold leftover boxes, leftover
//! tokens, or both. Leftover boxes are grouped into visual rows and the
//! leftover tokens are distributed across those rows proportionally to row
//! width. Tokens with no boxes at all get a synthesized box below the last
//! emitted element.

use crate::geometry::Rect;
use crate::types::{
    AlignedElement, AlignmentParams, Anchor, DetectionBox, Provenance, MIN_SYNTHETIC_HEIGHT,
    SYNTHETIC_BOTTOM_FLOOR, SYNTHETIC_BOTTOM_LIMIT, SYNTHETIC_MARGIN_X0, SYNTHETIC_MARGIN_X1,
    SYNTHETIC_SPACING_FACTOR, TOP_STRIP_RECT,
};

/// A run of consecutive gap boxes sharing one visual line.
struct Row<'a> {
    boxes: &'a [DetectionBox],
}

impl Row<'_> {
    /// Union rect of the member boxes. Rows are never empty by
    /// construction.
    fn rect(&self) -> Rect {
        self.boxes[1..]
            .iter()
            .fold(self.boxes[0].rect, |acc, member| acc.union(&member.rect))
    }
}

/// Fill the gaps between consecutive anchors and emit the final ordered
/// element sequence: each anchor's own element preceded by the elements
/// reconstructed from the gap before it, with one trailing gap after the
/// last anchor.
///
/// `anchors` must come from [`crate::matcher::find_anchors`] over the same
/// `boxes` and `tokens`: strictly increasing in both indices and in range.
///
/// # Panics
///
/// Panics if `anchors` is out of order or indexes past `boxes`/`tokens`.
#[must_use]
pub fn reconstruct(
    boxes: &[DetectionBox],
    tokens: &[&str],
    anchors: &[Anchor],
    params: &AlignmentParams,
) -> Vec<AlignedElement> {
    let mut output = Vec::new();
    let mut box_cursor = 0usize;
    let mut token_cursor = 0usize;

    for anchor in anchors {
        fill_gap(
            &mut output,
            &boxes[box_cursor..anchor.box_idx],
            &tokens[token_cursor..anchor.llm_idx],
            params,
        );
        output.push(AlignedElement {
            rect: anchor.rect,
            text: anchor.text.clone(),
            provenance: Provenance::Anchor,
        });
        box_cursor = anchor.box_idx + 1;
        token_cursor = anchor.llm_idx + 1;
    }
    // Trailing gap after the last anchor (the whole page when there are none)
    fill_gap(
        &mut output,
        &boxes[box_cursor..],
        &tokens[token_cursor..],
        params,
    );
    output
}

/// Reconstruct one gap: tokens over rows of leftover boxes, or a synthetic
/// box when no boxes are left.
fn fill_gap(
    output: &mut Vec<AlignedElement>,
    gap_boxes: &[DetectionBox],
    gap_tokens: &[&str],
    params: &AlignmentParams,
) {
    if gap_tokens.is_empty() {
        return;
    }

    if gap_boxes.is_empty() {
        // Content the detector missed entirely: hang it below the last
        // emitted element.
        let gap_text = gap_tokens.join(" ");
        log::debug!(
            "Orphaned content with no detection boxes ({} token(s)), synthesizing a box",
            gap_tokens.len()
        );
        let rect = synthetic_rect(output.last().map(|element| element.rect));
        output.push(AlignedElement {
            rect,
            text: gap_text,
            provenance: Provenance::Synthetic,
        });
        return;
    }

    let rows = group_rows(gap_boxes, params.row_overlap);
    let chunks = distribute_tokens(gap_tokens, &rows);
    for (row, chunk) in rows.iter().zip(&chunks) {
        if chunk.is_empty() {
            continue;
        }
        let mut gap_text = chunk.join(" ");
        if gap_text.chars().count() > params.wrap_hint_chars {
            gap_text.push('\n');
        }
        output.push(AlignedElement {
            rect: row.rect(),
            text: gap_text,
            provenance: Provenance::GapRow,
        });
    }
}

/// Group consecutive gap boxes into visual rows with a single
/// left-to-right pass. A box joins the current row when its vertical
/// overlap with the *last box in that row* exceeds `row_overlap` of the
/// shorter height; otherwise it starts a new row.
fn group_rows(boxes: &[DetectionBox], row_overlap: f64) -> Vec<Row<'_>> {
    let mut rows = Vec::new();
    if boxes.is_empty() {
        return rows;
    }

    let mut start = 0usize;
    for i in 1..boxes.len() {
        if !boxes[i - 1]
            .rect
            .overlaps_vertically(&boxes[i].rect, row_overlap)
        {
            rows.push(Row {
                boxes: &boxes[start..i],
            });
            start = i;
        }
    }
    rows.push(Row {
        boxes: &boxes[start..],
    });
    rows
}

/// Split `tokens` across `rows` proportionally to union row width, one
/// chunk per row (possibly empty). Every row but the last takes
/// `round(len * width / total_width)` tokens, floored at 1 while tokens
/// remain; ties round to even. The last row absorbs the remainder, so the
/// chunks always cover `tokens` exactly. Zero total width routes
/// everything to the last row.
fn distribute_tokens<'a, 't>(tokens: &'a [&'t str], rows: &[Row<'_>]) -> Vec<&'a [&'t str]> {
    let total_width: f64 = rows.iter().map(|row| row.rect().width()).sum();

    let mut chunks = Vec::with_capacity(rows.len());
    let mut start = 0usize;
    for (i, row) in rows.iter().enumerate() {
        if i == rows.len() - 1 {
            chunks.push(&tokens[start..]);
        } else if total_width == 0.0 {
            chunks.push(&tokens[start..start]);
        } else {
            let share = row.rect().width() / total_width;
            let mut count = (tokens.len() as f64 * share).round_ties_even() as usize;
            if count == 0 && start < tokens.len() {
                count = 1;
            }
            let end = tokens.len().min(start + count);
            chunks.push(&tokens[start..end]);
            start = end;
        }
    }
    chunks
}

/// Place a synthetic box just below `prev`, clamped to stay on the page,
/// spanning the margin-inset page width. With no prior element the fixed
/// top-strip rect is used.
fn synthetic_rect(prev: Option<Rect>) -> Rect {
    match prev {
        None => TOP_STRIP_RECT,
        Some(prev) => {
            let h = prev.height().max(MIN_SYNTHETIC_HEIGHT);
            let mut y0 = prev.y1 + h * SYNTHETIC_SPACING_FACTOR;
            let mut y1 = y0 + h;
            if y1 > SYNTHETIC_BOTTOM_LIMIT {
                y1 = SYNTHETIC_BOTTOM_LIMIT;
                y0 = SYNTHETIC_BOTTOM_FLOOR.max(y1 - h);
            }
            Rect::new(SYNTHETIC_MARGIN_X0, y0, SYNTHETIC_MARGIN_X1, y1)
        }
    }
}
