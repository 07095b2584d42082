//! Core data models for lexiscope
//!
//! These models are used throughout the codebase for representing
//! explanation records, derived metrics, and analysis results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::aggregate::Summary;

/// One stored explanation: what concept it explains, who it was written
/// for, and the explanation text itself. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationRecord {
    pub concept: String,
    pub student_level: String,
    pub explanation: String,
}

/// The eight per-record statistics derived from one explanation text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextMetrics {
    pub flesch_kincaid: f64,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub word_count: usize,
    pub unique_words: usize,
    pub vocabulary_richness: f64,
    pub analogy_count: usize,
    pub example_count: usize,
}

/// One row of the derived metrics table: the record's grouping keys plus
/// its metrics. Created in a single pass over the records, never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRow {
    pub concept: String,
    pub student_level: String,
    #[serde(flatten)]
    pub metrics: TextMetrics,
}

/// The numeric metric columns, for iteration in aggregation and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    FleschKincaid,
    SentenceCount,
    AvgSentenceLength,
    WordCount,
    UniqueWords,
    VocabularyRichness,
    AnalogyCount,
    ExampleCount,
}

impl MetricKind {
    pub fn all() -> &'static [MetricKind] {
        &[
            MetricKind::FleschKincaid,
            MetricKind::SentenceCount,
            MetricKind::AvgSentenceLength,
            MetricKind::WordCount,
            MetricKind::UniqueWords,
            MetricKind::VocabularyRichness,
            MetricKind::AnalogyCount,
            MetricKind::ExampleCount,
        ]
    }

    /// Human-readable column header for terminal tables.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::FleschKincaid => "Readability",
            MetricKind::SentenceCount => "Sentences",
            MetricKind::AvgSentenceLength => "Avg Sent Length",
            MetricKind::WordCount => "Words",
            MetricKind::UniqueWords => "Unique Words",
            MetricKind::VocabularyRichness => "Richness",
            MetricKind::AnalogyCount => "Analogies",
            MetricKind::ExampleCount => "Examples",
        }
    }

    pub fn value(&self, metrics: &TextMetrics) -> f64 {
        match self {
            MetricKind::FleschKincaid => metrics.flesch_kincaid,
            MetricKind::SentenceCount => metrics.sentence_count as f64,
            MetricKind::AvgSentenceLength => metrics.avg_sentence_length,
            MetricKind::WordCount => metrics.word_count as f64,
            MetricKind::UniqueWords => metrics.unique_words as f64,
            MetricKind::VocabularyRichness => metrics.vocabulary_richness,
            MetricKind::AnalogyCount => metrics.analogy_count as f64,
            MetricKind::ExampleCount => metrics.example_count as f64,
        }
    }

}

/// Summary statistics for one metric, partitioned by a grouping key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedMetric {
    pub metric: MetricKind,
    pub groups: BTreeMap<String, Summary>,
}

/// Full result of one analysis run: the per-record metrics table plus the
/// per-level and per-concept aggregate tables. Recomputed fully on every
/// run; reporters render it, the persister writes the row subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub total_records: usize,
    /// Every metric, grouped by student level.
    pub by_level: Vec<GroupedMetric>,
    /// Readability grouped by concept.
    pub readability_by_concept: BTreeMap<String, Summary>,
    pub rows: Vec<MetricsRow>,
}

impl AnalysisReport {
    /// Look up the by-level table for one metric.
    pub fn level_groups(&self, metric: MetricKind) -> Option<&BTreeMap<String, Summary>> {
        self.by_level
            .iter()
            .find(|g| g.metric == metric)
            .map(|g| &g.groups)
    }
}
