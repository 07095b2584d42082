//! Per-record text metrics
//!
//! The metrics deriver: given one explanation text, compute a fixed set of
//! scalar statistics. Everything here is purely functional per record — no
//! side effects, no ambient state. The one-time setup (compiled word-token
//! pattern, keyword lists) lives in [`TextAnalyzer`], built explicitly from
//! configuration rather than downloaded or global.
//!
//! All algorithms are pinned and documented in their submodules, so the
//! numbers are reproducible without reference to any external library's
//! internal tokenizer.

pub mod keywords;
pub mod readability;
pub mod sentences;
pub mod vocabulary;

use anyhow::Result;
use regex::Regex;

use crate::config::AnalysisSettings;
use crate::models::TextMetrics;

/// Word tokens for readability: runs of letters, with an optional internal
/// apostrophe ("can't", "it's").
const WORD_TOKEN_PATTERN: &str = r"[A-Za-z]+(?:'[A-Za-z]+)?";

/// Derives [`TextMetrics`] from explanation texts.
pub struct TextAnalyzer {
    word_token: Regex,
    analogy_keywords: Vec<String>,
    example_keywords: Vec<String>,
}

impl TextAnalyzer {
    pub fn new(settings: &AnalysisSettings) -> Result<Self> {
        Ok(Self {
            word_token: Regex::new(WORD_TOKEN_PATTERN)?,
            analogy_keywords: settings.analogy_keywords.clone(),
            example_keywords: settings.example_keywords.clone(),
        })
    }

    /// Compute all eight metrics for one text.
    ///
    /// Total for any input: zero-sentence or zero-word texts produce 0.0
    /// ratios instead of dividing by zero. The loader rejects empty
    /// explanations before they get here, so those branches are belt and
    /// suspenders for direct library callers.
    pub fn analyze(&self, text: &str) -> TextMetrics {
        let sentences = sentences::split_sentences(text);
        let sentence_count = sentences.len();
        let words_in_sentences: usize = sentences
            .iter()
            .map(|s| s.split_whitespace().count())
            .sum();
        let avg_sentence_length = if sentence_count > 0 {
            words_in_sentences as f64 / sentence_count as f64
        } else {
            0.0
        };

        let word_tokens: Vec<&str> = self
            .word_token
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        let flesch_kincaid = readability::flesch_kincaid_grade(&word_tokens, sentence_count);

        let word_count = vocabulary::word_count(text);
        let unique_words = vocabulary::unique_words(text);
        let vocabulary_richness = vocabulary::richness(unique_words, word_count);

        TextMetrics {
            flesch_kincaid,
            sentence_count,
            avg_sentence_length,
            word_count,
            unique_words,
            vocabulary_richness,
            analogy_count: keywords::hit_count(text, &self.analogy_keywords),
            example_count: keywords::hit_count(text, &self.example_keywords),
        }
    }
}
