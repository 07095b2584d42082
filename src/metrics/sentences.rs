//! Rule-based sentence segmentation
//!
//! A deliberately small, pinned splitter. A sentence ends at a run of
//! terminator punctuation (`.` `!` `?`), plus any closing quotes or
//! brackets attached to it, when that run is followed by whitespace or the
//! end of the text. A lone period does not end a sentence when the token
//! before it is a known abbreviation. Decimal points never split because a
//! digit, not whitespace, follows them. Trailing text without a terminator
//! counts as a final sentence.

/// Lowercased tokens that commonly precede a non-terminal period.
const ABBREVIATIONS: &[&str] = &[
    "al", "cf", "dr", "e.g", "etc", "fig", "i.e", "mr", "mrs", "ms", "no", "prof", "st", "vs",
];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '"' | '\'' | '\u{201d}' | '\u{2019}' | '\u{00bb}')
}

/// The token immediately preceding the period at `period_idx`, scanning
/// back over alphanumerics and internal periods ("e.g", "U.S").
fn preceding_token(text: &str, period_idx: usize) -> &str {
    let head = &text[..period_idx];
    let start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '.')
        .last()
        .map(|(i, _)| i)
        .unwrap_or(period_idx);
    head[start..].trim_matches('.')
}

fn is_abbreviation(text: &str, period_idx: usize) -> bool {
    let token = preceding_token(text, period_idx).to_lowercase();
    ABBREVIATIONS.contains(&token.as_str())
}

/// Split text into sentences. Returned slices are trimmed and never empty;
/// whitespace-only input yields no sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;

    let mut i = 0usize;
    while i < chars.len() {
        let (idx, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        // Consume the whole terminator run ("?!", "...") as one boundary
        // candidate, then any closers hugging it.
        let mut run_end = i;
        while run_end + 1 < chars.len() && is_terminator(chars[run_end + 1].1) {
            run_end += 1;
        }
        let mut tail = run_end;
        while tail + 1 < chars.len() && is_closer(chars[tail + 1].1) {
            tail += 1;
        }

        let at_end = tail + 1 >= chars.len();
        let followed_by_space = !at_end && chars[tail + 1].1.is_whitespace();
        let lone_period = c == '.' && run_end == i;

        if (at_end || followed_by_space) && !(lone_period && is_abbreviation(text, idx)) {
            let end = if at_end { text.len() } else { chars[tail + 1].0 };
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }

        i = tail + 1;
    }

    let remainder = text[start..].trim();
    if !remainder.is_empty() {
        sentences.push(remainder);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let s = split_sentences("Photosynthesis is like a factory. Plants make food using light.");
        assert_eq!(
            s,
            vec![
                "Photosynthesis is like a factory.",
                "Plants make food using light."
            ]
        );
    }

    #[test]
    fn test_no_terminator_is_one_sentence() {
        assert_eq!(split_sentences("plain fragment"), vec!["plain fragment"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_terminator_runs_collapse() {
        let s = split_sentences("Wait?! Really... Yes.");
        assert_eq!(s, vec!["Wait?!", "Really...", "Yes."]);
    }

    #[test]
    fn test_decimal_points_do_not_split() {
        let s = split_sentences("Pi is roughly 3.14 in value. Engineers round it.");
        assert_eq!(s.len(), 2);
        assert_eq!(s[0], "Pi is roughly 3.14 in value.");
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let s = split_sentences("Some gases, e.g. neon, glow. Dr. Ray proved it.");
        assert_eq!(s, vec!["Some gases, e.g. neon, glow.", "Dr. Ray proved it."]);
    }

    #[test]
    fn test_closing_quote_attaches_to_sentence() {
        let s = split_sentences("He said \"Stop.\" Then he left.");
        assert_eq!(s, vec!["He said \"Stop.\"", "Then he left."]);
    }
}
