//! Visualize command implementation
//!
//! External consumer of the persisted results table: reads the CSV the
//! analyze command wrote, re-aggregates by level, and renders the chart
//! panel and the concept heatmap.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::charts;
use crate::reporters::csv::read_metrics_csv;

pub fn run(results: &Path, out_dir: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = super::analyze::resolve_config(config_path, results)?;
    let rows = read_metrics_csv(results)?;
    println!("Loaded {} rows from {}", rows.len(), results.display());

    let (panel, heatmap) = charts::render_all(&rows, &config, out_dir)?;
    println!(
        "{} Chart panel saved to {}",
        style("✓").green(),
        panel.display()
    );
    println!(
        "{} Heatmap saved to {}",
        style("✓").green(),
        heatmap.display()
    );
    Ok(())
}
