//! Analyze command implementation
//!
//! This command performs the full linear pipeline:
//! 1. Load explanation records from the input JSON
//! 2. Derive per-record metrics (single pass)
//! 3. Aggregate by student level and by concept
//! 4. Render the report (text or json)
//! 5. Persist the per-record results table as CSV

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::aggregate::build_report;
use crate::config::{load_config_file, load_project_config, ProjectConfig};
use crate::corpus;
use crate::metrics::TextAnalyzer;
use crate::models::MetricsRow;
use crate::reporters;
use crate::reporters::csv::write_metrics_csv;

pub fn run(
    input: &Path,
    format: &str,
    output: Option<&Path>,
    results: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = resolve_config(config_path, input)?;
    let records = corpus::load_records(input, &config.level_names())?;
    let analyzer = TextAnalyzer::new(&config.analysis)?;

    let bar = ProgressBar::new(records.len() as u64);
    bar.set_style(create_bar_style());
    bar.set_message("deriving metrics");
    let rows: Vec<MetricsRow> = records
        .iter()
        .map(|record| {
            bar.inc(1);
            MetricsRow {
                concept: record.concept.clone(),
                student_level: record.student_level.clone(),
                metrics: analyzer.analyze(&record.explanation),
            }
        })
        .collect();
    bar.finish_and_clear();

    let report = build_report(rows);

    let rendered = reporters::report(&report, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} Report written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{rendered}"),
    }

    if let Some(results_path) = results {
        write_metrics_csv(&report.rows, results_path)?;
        println!(
            "{} Results table saved to {}",
            style("✓").green(),
            results_path.display()
        );
    }

    Ok(())
}

/// Resolve project configuration: an explicit --config path must load, a
/// discovered lexiscope.toml near the input (or in the CWD) may fall back
/// to defaults.
pub(crate) fn resolve_config(config_path: Option<&Path>, near: &Path) -> Result<ProjectConfig> {
    if let Some(path) = config_path {
        return load_config_file(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    let input_dir = match near.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if input_dir.join("lexiscope.toml").exists() {
        Ok(load_project_config(input_dir))
    } else {
        Ok(load_project_config(Path::new(".")))
    }
}

/// Create bar progress style
fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap()
        .progress_chars("█▓▒░  ")
}
