//! Analogy and example keyword detection
//!
//! Counts how many keywords from a configured list appear in a text,
//! case-insensitively. Presence semantics: each listed keyword contributes
//! at most one hit no matter how often it occurs, so the count is bounded
//! by the list length.
//!
//! Matching is word-boundary-aware: an occurrence only counts when the
//! characters on both sides are non-alphanumeric (or the string edge), so
//! "like" inside "likely" is not a hit. Multi-word keywords ("such as",
//! "think of") match across their internal spaces.

/// Number of keywords with at least one occurrence in `text`.
pub fn hit_count(text: &str, keywords: &[String]) -> usize {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| has_occurrence(&haystack, &keyword.to_lowercase()))
        .count()
}

fn has_occurrence(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    for (pos, matched) in haystack.match_indices(needle) {
        let before_ok = haystack[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[pos + matched.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}
