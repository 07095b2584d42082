//! The 2x2 bar chart panel

use std::path::Path;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::ProjectConfig;
use crate::reporters::csv::ResultsRow;

use super::{category_label, level_order, mean_by_level, TIER_COLORS};

const WORDS_COLOR: RGBColor = RGBColor(52, 152, 219);
const SENTENCES_COLOR: RGBColor = RGBColor(46, 204, 113);
const ANALOGY_COLOR: RGBColor = RGBColor(155, 89, 182);
const EXAMPLE_COLOR: RGBColor = RGBColor(230, 126, 34);

/// Render the four-quadrant complexity panel to `path`.
pub fn render_panel(rows: &[ResultsRow], config: &ProjectConfig, path: &Path) -> Result<()> {
    let levels = level_order(rows, config);
    let labels: Vec<String> = levels
        .iter()
        .map(|level| config.level_label(level).to_string())
        .collect();

    let readability = mean_by_level(rows, &levels, |r| r.flesch_kincaid);
    let words = mean_by_level(rows, &levels, |r| r.word_count as f64);
    let sentences = mean_by_level(rows, &levels, |r| r.sentence_count as f64);
    let unique = mean_by_level(rows, &levels, |r| r.unique_words as f64);
    let analogies = mean_by_level(rows, &levels, |r| r.analogy_count as f64);
    let examples = mean_by_level(rows, &levels, |r| r.example_count as f64);

    let root = BitMapBackend::new(
        path,
        (config.charts.panel_width, config.charts.panel_height),
    )
    .into_drawing_area();
    root.fill(&WHITE)?;
    let body = root.titled(
        "Explanation Complexity Across Student Levels",
        ("sans-serif", 26),
    )?;
    let areas = body.split_evenly((2, 2));

    bar_chart(
        &areas[0],
        "Readability Complexity",
        "Flesch-Kincaid grade",
        &labels,
        &readability,
    )?;
    grouped_bar_chart(
        &areas[1],
        "Structure: Words & Sentences",
        "Mean count",
        &labels,
        ("Avg Words", &words, WORDS_COLOR),
        ("Avg Sentences", &sentences, SENTENCES_COLOR),
    )?;
    grouped_bar_chart(
        &areas[2],
        "Teaching Strategies: Analogies vs Examples",
        "Mean count per explanation",
        &labels,
        ("Analogies", &analogies, ANALOGY_COLOR),
        ("Examples", &examples, EXAMPLE_COLOR),
    )?;
    bar_chart(
        &areas[3],
        "Vocabulary: Unique Words",
        "Mean unique words",
        &labels,
        &unique,
    )?;

    root.present()?;
    Ok(())
}

/// One bar per level, tier-colored, value printed above the bar.
fn bar_chart(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
) -> Result<()> {
    let n = values.len();
    let y_max = values.iter().cloned().fold(0.0, f64::max).max(1.0) * 1.2;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(14)
        .x_label_area_size(32)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.6..(n as f64 - 0.4), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.max(2))
        .x_label_formatter(&|x| category_label(*x, labels))
        .y_desc(y_desc)
        .label_style(("sans-serif", 13))
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        Rectangle::new(
            [(i as f64 - 0.35, 0.0), (i as f64 + 0.35, *v)],
            TIER_COLORS[i % TIER_COLORS.len()].filled(),
        )
    }))?;
    chart.draw_series(values.iter().enumerate().map(|(i, v)| {
        Text::new(
            format!("{v:.1}"),
            (i as f64 - 0.12, *v + y_max * 0.04),
            ("sans-serif", 13),
        )
    }))?;

    Ok(())
}

/// Two side-by-side bars per level, with a legend.
fn grouped_bar_chart(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    y_desc: &str,
    labels: &[String],
    left: (&str, &[f64], RGBColor),
    right: (&str, &[f64], RGBColor),
) -> Result<()> {
    let n = labels.len();
    let y_max = left
        .1
        .iter()
        .chain(right.1.iter())
        .cloned()
        .fold(0.0, f64::max)
        .max(1.0)
        * 1.25;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20))
        .margin(14)
        .x_label_area_size(32)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.6..(n as f64 - 0.4), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.max(2))
        .x_label_formatter(&|x| category_label(*x, labels))
        .y_desc(y_desc)
        .label_style(("sans-serif", 13))
        .draw()?;

    for (series_idx, (name, values, color)) in [left, right].into_iter().enumerate() {
        let (lo, hi) = if series_idx == 0 {
            (-0.36, -0.03)
        } else {
            (0.03, 0.36)
        };
        chart
            .draw_series(values.iter().enumerate().map(move |(i, v)| {
                Rectangle::new(
                    [(i as f64 + lo, 0.0), (i as f64 + hi, *v)],
                    color.filled(),
                )
            }))?
            .label(name)
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font(("sans-serif", 13))
        .draw()?;

    Ok(())
}
