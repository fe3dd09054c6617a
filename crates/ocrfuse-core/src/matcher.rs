//! Anchor matching between detection boxes and content tokens.

use crate::normalize::normalize;
use crate::similarity::indel_ratio;
use crate::types::{AlignmentParams, Anchor, DetectionBox};

/// Walk detection boxes in order and fuzzy-match each against a bounded
/// forward window of unconsumed content tokens.
///
/// Each box is scored against the normalized tokens in
/// `[search_from, search_from + window_size)`. The best candidate becomes
/// an anchor when its score exceeds `score_threshold` (strict); the cursor
/// then advances one past the consumed token. Boxes whose text normalizes
/// to nothing, or whose window is exhausted, get no anchor and leave the
/// cursor alone.
///
/// The returned sequence is strictly increasing in both `box_idx` (one
/// pass over boxes) and `llm_idx` (the cursor only ever moves forward),
/// which is what makes gap reconstruction well-defined.
#[must_use]
pub fn find_anchors(
    boxes: &[DetectionBox],
    tokens: &[&str],
    params: &AlignmentParams,
) -> Vec<Anchor> {
    let normalized_tokens: Vec<String> = tokens.iter().map(|t| normalize(t)).collect();

    let mut anchors = Vec::new();
    let mut search_from = 0usize;

    for (box_idx, detection) in boxes.iter().enumerate() {
        let query = normalize(&detection.text);
        if query.is_empty() {
            continue;
        }

        let window_end = tokens.len().min(search_from + params.window_size);
        if search_from >= window_end {
            continue;
        }

        if let Some((offset, score)) =
            best_candidate(&query, &normalized_tokens[search_from..window_end])
        {
            if score > params.score_threshold {
                let llm_idx = search_from + offset;
                anchors.push(Anchor {
                    box_idx,
                    llm_idx,
                    text: tokens[llm_idx].to_string(),
                    rect: detection.rect,
                });
                search_from = llm_idx + 1;
            }
        }
    }
    anchors
}

/// Offset and score of the best-scoring candidate. Ties go to the first
/// (lowest-offset) candidate achieving the maximum.
fn best_candidate(query: &str, candidates: &[String]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (offset, candidate) in candidates.iter().enumerate() {
        let score = indel_ratio(query, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((offset, score)),
        }
    }
    best
}
