//! Concept-by-level readability heatmap

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::aggregate::summarize;
use crate::config::ProjectConfig;
use crate::reporters::csv::ResultsRow;

use super::{category_label, level_order};

const MISSING_CELL: RGBColor = RGBColor(189, 195, 199);

/// Render the concept x level heatmap of mean readability to `path`.
/// Green is easy, red is hard; cells with no data stay grey.
pub fn render_heatmap(rows: &[ResultsRow], config: &ProjectConfig, path: &Path) -> Result<()> {
    let levels = level_order(rows, config);
    let labels: Vec<String> = levels
        .iter()
        .map(|level| config.level_label(level).to_string())
        .collect();
    let mut concepts: Vec<String> = rows.iter().map(|r| r.concept.clone()).collect();
    concepts.sort();
    concepts.dedup();

    let cell_mean = |concept: &str, level: &str| -> Option<f64> {
        let values: Vec<f64> = rows
            .iter()
            .filter(|r| r.concept == concept && r.student_level == level)
            .map(|r| r.flesch_kincaid)
            .collect();
        summarize(&values).map(|s| s.mean)
    };

    // Color scale bounds over the populated cells
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for concept in &concepts {
        for level in &levels {
            if let Some(v) = cell_mean(concept, level) {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
    }
    if !lo.is_finite() || (hi - lo).abs() < f64::EPSILON {
        hi = lo + 1.0;
    }

    let ncols = levels.len();
    let nrows = concepts.len();

    let root = BitMapBackend::new(
        path,
        (config.charts.heatmap_width, config.charts.heatmap_height),
    )
    .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Readability by Concept and Student Level",
            ("sans-serif", 22),
        )
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(150)
        .build_cartesian_2d(-0.5..(ncols as f64 - 0.5), -0.5..(nrows as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(ncols.max(2))
        .y_labels(nrows.max(2))
        .x_label_formatter(&|x| category_label(*x, &labels))
        .y_label_formatter(&|y| category_label(*y, &concepts))
        .label_style(("sans-serif", 13))
        .draw()?;

    let mut cells = Vec::new();
    let mut values = Vec::new();
    for (row_idx, concept) in concepts.iter().enumerate() {
        for (col_idx, level) in levels.iter().enumerate() {
            let (x, y) = (col_idx as f64, row_idx as f64);
            match cell_mean(concept, level) {
                Some(v) => {
                    let t = (v - lo) / (hi - lo);
                    cells.push(Rectangle::new(
                        [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                        grade_ramp(t).filled(),
                    ));
                    values.push(Text::new(
                        format!("{v:.1}"),
                        (x - 0.14, y + 0.1),
                        ("sans-serif", 14),
                    ));
                }
                None => {
                    cells.push(Rectangle::new(
                        [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                        MISSING_CELL.filled(),
                    ));
                }
            }
        }
    }
    chart.draw_series(cells)?;
    chart.draw_series(values)?;

    root.present()?;
    Ok(())
}

/// Green -> yellow -> red over t in [0, 1].
fn grade_ramp(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let (from, to, u) = if t < 0.5 {
        ((46u8, 204u8, 113u8), (241u8, 196u8, 15u8), t / 0.5)
    } else {
        ((241, 196, 15), (231, 76, 60), (t - 0.5) / 0.5)
    };
    RGBColor(
        lerp(from.0, to.0, u),
        lerp(from.1, to.1, u),
        lerp(from.2, to.2, u),
    )
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}
