//! Grouped summary statistics
//!
//! Hash-partition rows by a categorical key, then reduce each partition to
//! mean/min/max/std per numeric column. Group order in every output table
//! is alphabetical (BTreeMap iteration), and the statistics themselves are
//! independent of input row order.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{AnalysisReport, GroupedMetric, MetricKind, MetricsRow};

/// Summary statistics for one group of values.
///
/// `std` is the sample standard deviation (n-1 denominator) and is `None`
/// for single-value groups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std: Option<f64>,
}

/// Reduce a slice of values to a [`Summary`]. `None` for an empty slice.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let std = if count > 1 {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        Some(variance.sqrt())
    } else {
        None
    };
    Some(Summary {
        count,
        mean,
        min,
        max,
        std,
    })
}

/// Group rows by `key` and summarize `value` within each group. Generic
/// over the row type so both the analysis pass (MetricsRow) and the
/// visualizer's re-aggregation of persisted rows share one implementation.
pub fn group_summaries<R, K, V>(rows: &[R], key: K, value: V) -> BTreeMap<String, Summary>
where
    K: Fn(&R) -> &str,
    V: Fn(&R) -> f64,
{
    let mut partitions: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for row in rows {
        partitions
            .entry(key(row).to_string())
            .or_default()
            .push(value(row));
    }
    partitions
        .into_iter()
        .filter_map(|(group, values)| summarize(&values).map(|s| (group, s)))
        .collect()
}

/// Build the full analysis report: every metric grouped by student level,
/// plus readability grouped by concept.
pub fn build_report(rows: Vec<MetricsRow>) -> AnalysisReport {
    let by_level: Vec<GroupedMetric> = MetricKind::all()
        .iter()
        .map(|&metric| GroupedMetric {
            metric,
            groups: group_summaries(
                &rows,
                |r| r.student_level.as_str(),
                |r| metric.value(&r.metrics),
            ),
        })
        .collect();

    let readability_by_concept = group_summaries(
        &rows,
        |r| r.concept.as_str(),
        |r| MetricKind::FleschKincaid.value(&r.metrics),
    );

    AnalysisReport {
        generated_at: Utc::now(),
        total_records: rows.len(),
        by_level,
        readability_by_concept,
        rows,
    }
}
