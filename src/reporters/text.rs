//! Text (terminal) reporter with the numbered analysis sections

use std::collections::BTreeMap;

use anyhow::Result;

use crate::aggregate::Summary;
use crate::models::{AnalysisReport, MetricKind};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Columns of the consolidated per-level summary table, in display order.
const SUMMARY_COLUMNS: &[MetricKind] = &[
    MetricKind::FleschKincaid,
    MetricKind::WordCount,
    MetricKind::SentenceCount,
    MetricKind::AvgSentenceLength,
    MetricKind::UniqueWords,
    MetricKind::AnalogyCount,
    MetricKind::ExampleCount,
];

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Lexiscope Complexity Analysis{RESET}\n"));
    out.push_str(&format!("{DIM}{}{RESET}\n", "─".repeat(72)));
    out.push_str(&format!(
        "Records: {}  Generated: {}\n",
        report.total_records,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    section(&mut out, "1. READABILITY (Flesch-Kincaid Grade Level)");
    if let Some(groups) = report.level_groups(MetricKind::FleschKincaid) {
        out.push_str(&stat_table("student level", groups, 2));
    }
    out.push_str("\nReadability by concept:\n");
    out.push_str(&stat_table("concept", &report.readability_by_concept, 2));

    section(&mut out, "2. STRUCTURE");
    out.push_str("\nSentence count by student level:\n");
    if let Some(groups) = report.level_groups(MetricKind::SentenceCount) {
        out.push_str(&stat_table("student level", groups, 2));
    }
    out.push_str("\nAverage sentence length by student level:\n");
    if let Some(groups) = report.level_groups(MetricKind::AvgSentenceLength) {
        out.push_str(&stat_table("student level", groups, 2));
    }

    section(&mut out, "3. VOCABULARY");
    out.push_str("\nUnique words by student level:\n");
    if let Some(groups) = report.level_groups(MetricKind::UniqueWords) {
        out.push_str(&stat_table("student level", groups, 2));
    }
    out.push_str("\nVocabulary richness (unique/total words) by student level:\n");
    if let Some(groups) = report.level_groups(MetricKind::VocabularyRichness) {
        out.push_str(&stat_table("student level", groups, 3));
    }

    section(&mut out, "4. ANALOGY & METAPHOR KEYWORDS");
    if let Some(groups) = report.level_groups(MetricKind::AnalogyCount) {
        out.push_str(&stat_table("student level", groups, 2));
    }

    section(&mut out, "5. CONCRETE EXAMPLE KEYWORDS");
    if let Some(groups) = report.level_groups(MetricKind::ExampleCount) {
        out.push_str(&stat_table("student level", groups, 2));
    }

    section(&mut out, "6. SUMMARY (means by student level)");
    out.push_str(&summary_table(report));

    Ok(out)
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{BOLD}{title}{RESET}\n"));
    out.push_str(&format!("{DIM}{}{RESET}\n", "─".repeat(72)));
}

/// One group-statistics table: group | n | mean | min | max | std.
fn stat_table(key_header: &str, groups: &BTreeMap<String, Summary>, precision: usize) -> String {
    let key_width = groups
        .keys()
        .map(|k| k.chars().count())
        .chain([key_header.len()])
        .max()
        .unwrap_or(12);

    let mut out = String::new();
    out.push_str(&format!(
        "{DIM}  {key_header:<key_width$}  {:>4}  {:>9}  {:>9}  {:>9}  {:>9}{RESET}\n",
        "n", "mean", "min", "max", "std"
    ));
    for (group, s) in groups {
        let std = match s.std {
            Some(v) => format!("{v:.precision$}"),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "  {group:<key_width$}  {:>4}  {:>9.precision$}  {:>9.precision$}  {:>9.precision$}  {std:>9}\n",
            s.count, s.mean, s.min, s.max
        ));
    }
    out
}

/// The consolidated table: one row per level, mean of each metric.
fn summary_table(report: &AnalysisReport) -> String {
    let levels: Vec<&String> = report
        .level_groups(MetricKind::FleschKincaid)
        .map(|g| g.keys().collect())
        .unwrap_or_default();
    let key_width = levels
        .iter()
        .map(|k| k.chars().count())
        .chain(["student level".len()])
        .max()
        .unwrap_or(12);

    let mut out = String::new();
    out.push_str(&format!("{DIM}  {:<key_width$}", "student level"));
    for metric in SUMMARY_COLUMNS {
        out.push_str(&format!("  {:>15}", metric.label()));
    }
    out.push_str(&format!("{RESET}\n"));

    for level in levels {
        out.push_str(&format!("  {level:<key_width$}"));
        for metric in SUMMARY_COLUMNS {
            let mean = report
                .level_groups(*metric)
                .and_then(|g| g.get(level))
                .map(|s| s.mean);
            match mean {
                Some(v) => out.push_str(&format!("  {v:>15.2}")),
                None => out.push_str(&format!("  {:>15}", "-")),
            }
        }
        out.push('\n');
    }
    out
}
