//! Text canonicalization for fuzzy comparison.

/// Canonicalize a text fragment for comparison: lower-case, trim
/// surrounding whitespace, strip ASCII punctuation.
///
/// Used only for scoring. Output elements always carry the original
/// surface form.
///
/// # Examples
///
/// ```
/// use ocrfuse_core::normalize::normalize;
///
/// assert_eq!(normalize("  Hello, World! "), "hello world");
/// assert_eq!(normalize("(12.5%)"), "125");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect()
}

/// Split content text into surface-form tokens on runs of whitespace.
///
/// A token's position in the returned sequence is its `llm_idx`.
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
