//! Chart rendering over the persisted results table
//!
//! The visualizer is an external consumer of the CSV the persister writes:
//! it re-aggregates mean metrics by student level and renders a 2x2 bar
//! chart panel plus a concept-by-level readability heatmap as PNG files.
//! Presentation only; nothing here feeds back into analysis.

mod heatmap;
mod panel;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use plotters::prelude::*;

use crate::aggregate::group_summaries;
use crate::config::ProjectConfig;
use crate::reporters::csv::ResultsRow;

pub use heatmap::render_heatmap;
pub use panel::render_panel;

/// Bar palette, one color per audience tier (cycled past four).
pub(crate) const TIER_COLORS: &[RGBColor] = &[
    RGBColor(52, 152, 219),
    RGBColor(46, 204, 113),
    RGBColor(243, 156, 18),
    RGBColor(231, 76, 60),
];

/// Render both chart files into `out_dir`. Returns (panel, heatmap) paths.
pub fn render_all(
    rows: &[ResultsRow],
    config: &ProjectConfig,
    out_dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    if rows.is_empty() {
        bail!("no rows in results table; nothing to visualize");
    }
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let panel_path = out_dir.join("complexity_panel.png");
    let heatmap_path = out_dir.join("concept_heatmap.png");
    render_panel(rows, config, &panel_path)?;
    render_heatmap(rows, config, &heatmap_path)?;
    Ok((panel_path, heatmap_path))
}

/// Levels present in the data: configured tiers first (pedagogical order),
/// then any unknown tiers alphabetically.
pub(crate) fn level_order(rows: &[ResultsRow], config: &ProjectConfig) -> Vec<String> {
    let mut ordered: Vec<String> = config
        .levels
        .iter()
        .filter(|tier| rows.iter().any(|r| r.student_level == tier.name))
        .map(|tier| tier.name.clone())
        .collect();

    let mut unknown: Vec<String> = rows
        .iter()
        .map(|r| r.student_level.clone())
        .filter(|level| !ordered.contains(level))
        .collect();
    unknown.sort();
    unknown.dedup();
    ordered.extend(unknown);
    ordered
}

/// Mean of `value` per level, in the given level order; 0.0 when a level
/// has no rows (cannot happen for levels produced by [`level_order`]).
pub(crate) fn mean_by_level<V>(rows: &[ResultsRow], levels: &[String], value: V) -> Vec<f64>
where
    V: Fn(&ResultsRow) -> f64,
{
    let summaries = group_summaries(rows, |r: &ResultsRow| r.student_level.as_str(), value);
    levels
        .iter()
        .map(|level| summaries.get(level).map(|s| s.mean).unwrap_or(0.0))
        .collect()
}

/// Tick formatter for category axes: bars sit at integer positions, so
/// only (near-)integer ticks get a label.
pub(crate) fn category_label(x: f64, labels: &[String]) -> String {
    let i = x.round();
    if (x - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < labels.len() {
        labels[i as usize].clone()
    } else {
        String::new()
    }
}

/// Minimal render used by `doctor` to prove the bitmap backend works in
/// this environment.
pub fn backend_self_check(path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (160, 120)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(8)
        .build_cartesian_2d(0f64..3f64, 0f64..3f64)?;
    chart.draw_series((0..3).map(|i| {
        Rectangle::new(
            [(i as f64 + 0.2, 0.0), (i as f64 + 0.8, (i + 1) as f64)],
            TIER_COLORS[i].filled(),
        )
    }))?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results_row(concept: &str, level: &str, fk: f64) -> ResultsRow {
        ResultsRow {
            concept: concept.to_string(),
            student_level: level.to_string(),
            word_count: 20,
            sentence_count: 2,
            flesch_kincaid: fk,
            unique_words: 15,
            analogy_count: 1,
            example_count: 0,
        }
    }

    #[test]
    fn test_level_order_known_then_unknown() {
        let config = ProjectConfig::default();
        let rows = vec![
            results_row("a", "zzz custom tier", 5.0),
            results_row("a", "expert researcher in the field", 15.0),
            results_row("a", "elementary school student (8-10 years old)", 3.0),
        ];
        let order = level_order(&rows, &config);
        assert_eq!(
            order,
            vec![
                "elementary school student (8-10 years old)",
                "expert researcher in the field",
                "zzz custom tier"
            ]
        );
    }

    #[test]
    fn test_mean_by_level() {
        let config = ProjectConfig::default();
        let rows = vec![
            results_row("a", "expert researcher in the field", 14.0),
            results_row("b", "expert researcher in the field", 18.0),
        ];
        let levels = level_order(&rows, &config);
        let means = mean_by_level(&rows, &levels, |r| r.flesch_kincaid);
        assert_eq!(means, vec![16.0]);
    }

    #[test]
    fn test_category_label() {
        let labels = vec!["Elementary".to_string(), "Middle".to_string()];
        assert_eq!(category_label(0.0, &labels), "Elementary");
        assert_eq!(category_label(1.0, &labels), "Middle");
        assert_eq!(category_label(0.5, &labels), "");
        assert_eq!(category_label(2.0, &labels), "");
    }

    #[test]
    fn test_render_all_rejects_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProjectConfig::default();
        assert!(render_all(&[], &config, dir.path()).is_err());
    }

    #[test]
    fn test_render_all_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProjectConfig::default();
        let rows = vec![
            results_row("gravity", "elementary school student (8-10 years old)", 3.1),
            results_row("gravity", "expert researcher in the field", 15.6),
            results_row("entropy", "elementary school student (8-10 years old)", 4.0),
        ];
        let (panel, heatmap) = render_all(&rows, &config, dir.path()).unwrap();
        assert!(panel.exists());
        assert!(heatmap.exists());
        assert!(std::fs::metadata(&panel).unwrap().len() > 0);
        assert!(std::fs::metadata(&heatmap).unwrap().len() > 0);
    }
}
