//! Fuzzy string scoring for anchor matching.
//!
//! Pure Rust implementation of the normalized InDel similarity ratio,
//! the token-level scorer used to accept anchors. Deterministic so test
//! fixtures reproduce exactly across platforms.

/// Similarity ratio in `[0, 100]` between two strings.
///
/// Score is `100 * (1 - distance / (len_a + len_b))` where `distance` is
/// the InDel distance (minimum insertions plus deletions turning one
/// string into the other, equal to `len_a + len_b - 2 * lcs`). Two empty
/// strings score 100. Lengths are in Unicode scalar values.
///
/// The arithmetic stays on integers until the final division, so scores
/// at the anchor threshold (80.0 exactly, 81.0 exactly) compare cleanly
/// against a strict cutoff.
///
/// # Examples
///
/// ```
/// use ocrfuse_core::similarity::indel_ratio;
///
/// assert_eq!(indel_ratio("hello", "hello"), 100.0);
/// // One deletion out of 9 total characters
/// assert!((indel_ratio("helo", "hello") - 800.0 / 9.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn indel_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    let distance = total - 2 * lcs_length(&a, &b);
    ((total - distance) as f64) * 100.0 / (total as f64)
}

/// Longest common subsequence length, two-row dynamic programming.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", "hello", 100.0)]
    #[case("", "", 100.0)]
    #[case("abc", "", 0.0)]
    #[case("", "abc", 0.0)]
    #[case("abc", "xyz", 0.0)]
    // LCS 4 of 10 total: exactly the threshold score
    #[case("abcde", "abcdx", 80.0)]
    // LCS 2 of 8 total
    #[case("abcd", "cdef", 50.0)]
    fn test_indel_ratio_exact(#[case] a: &str, #[case] b: &str, #[case] expected: f64) {
        assert_eq!(indel_ratio(a, b), expected);
    }

    #[test]
    fn test_single_deletion() {
        // "helo" vs "hello": distance 1 over 9 characters
        let score = indel_ratio("helo", "hello");
        assert!((score - 800.0 / 9.0).abs() < 1e-12);
        assert!(score > 80.0);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(indel_ratio("helo", "hello"), indel_ratio("hello", "helo"));
        assert_eq!(indel_ratio("abcd", "cdef"), indel_ratio("cdef", "abcd"));
    }

    #[test]
    fn test_multibyte_counts_scalar_values() {
        // One substitution in a 4-char pair of words: LCS 3, total 8
        assert_eq!(indel_ratio("café", "cafe"), 75.0);
        assert_eq!(indel_ratio("über", "über"), 100.0);
    }

    #[test]
    fn test_threshold_constructions() {
        // 100-char strings, 20 substitutions: LCS 80 of 200 total
        let query = "a".repeat(100);
        let at_threshold = format!("{}{}", "a".repeat(80), "b".repeat(20));
        assert_eq!(indel_ratio(&query, &at_threshold), 80.0);

        // 19 substitutions: LCS 81 of 200 total
        let above_threshold = format!("{}{}", "a".repeat(81), "b".repeat(19));
        assert_eq!(indel_ratio(&query, &above_threshold), 81.0);
    }

    #[test]
    fn test_lcs_length() {
        let a: Vec<char> = "abcbdab".chars().collect();
        let b: Vec<char> = "bdcaba".chars().collect();
        assert_eq!(lcs_length(&a, &b), 4);
        assert_eq!(lcs_length(&a, &[]), 0);
    }
}
