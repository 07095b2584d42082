//! Flesch-Kincaid grade level
//!
//! The readability grade is the pinned, classical formula
//!
//! ```text
//! grade = 0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
//! ```
//!
//! computed over alphabetic word tokens. Syllables come from a documented
//! heuristic rather than a dictionary: count runs of vowels (`aeiouy`),
//! drop one for a silent final "e", floor at one per word. The heuristic is
//! wrong on some words ("poem", "queue") but stable, which is what matters
//! for comparing explanations against each other.

/// Grade level for tokenized text. 0.0 when there is nothing to measure.
pub fn flesch_kincaid_grade(word_tokens: &[&str], sentence_count: usize) -> f64 {
    if word_tokens.is_empty() || sentence_count == 0 {
        return 0.0;
    }
    let total_syllables: usize = word_tokens.iter().map(|w| syllables(w)).sum();
    let words_per_sentence = word_tokens.len() as f64 / sentence_count as f64;
    let syllables_per_word = total_syllables as f64 / word_tokens.len() as f64;
    0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59
}

/// Heuristic syllable count for one word, always at least 1.
pub fn syllables(word: &str) -> usize {
    let lower = word.to_lowercase();

    let mut groups = 0usize;
    let mut prev_was_vowel = false;
    for c in lower.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_was_vowel {
            groups += 1;
        }
        prev_was_vowel = vowel;
    }

    // Silent final "e" ("stone", "make") — but "-le" carries a syllable
    // ("table"), and a vowel before the "e" already merged into one group.
    if groups > 1 && lower.ends_with('e') && !lower.ends_with("le") {
        let chars: Vec<char> = lower.chars().collect();
        if !is_vowel(chars[chars.len() - 2]) {
            groups -= 1;
        }
    }

    groups.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(syllables("cat"), 1);
        assert_eq!(syllables("like"), 1); // silent e
        assert_eq!(syllables("table"), 2); // -le keeps its syllable
        assert_eq!(syllables("factory"), 3);
        assert_eq!(syllables("photosynthesis"), 5);
        assert_eq!(syllables("see"), 1);
        assert_eq!(syllables("a"), 1);
        assert_eq!(syllables("rhythm"), 1); // floor
    }

    #[test]
    fn test_grade_zero_on_empty() {
        assert_eq!(flesch_kincaid_grade(&[], 3), 0.0);
        assert_eq!(flesch_kincaid_grade(&["word"], 0), 0.0);
    }

    #[test]
    fn test_grade_monotonic_in_sentence_length() {
        // Same words, fewer sentences -> longer sentences -> higher grade.
        let words = vec!["plants"; 30];
        let short = flesch_kincaid_grade(&words, 6);
        let long = flesch_kincaid_grade(&words, 2);
        assert!(long > short);
    }

    #[test]
    fn test_grade_known_value() {
        // 10 monosyllabic words in 2 sentences:
        // 0.39 * 5 + 11.8 * 1 - 15.59 = -1.84
        let words = vec!["net"; 10];
        let grade = flesch_kincaid_grade(&words, 2);
        assert!((grade - (-1.84)).abs() < 1e-9);
    }
}
