//! CSV persister and reader
//!
//! Writes the reduced per-record metrics table — the fixed column subset
//! the visualizer consumes — and reads it back. Fields containing commas,
//! quotes, or newlines are quoted RFC-4180 style. The write is plain and
//! sequential; a failure mid-write leaves a partial file.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::models::MetricsRow;

/// Header of the persisted results table. The reader rejects files that
/// do not start with exactly this line.
pub const CSV_HEADER: &str = "concept,student_level,word_count,sentence_count,flesch_kincaid,unique_words,analogy_count,example_count";

/// One row of the persisted results table, as read back by the visualizer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsRow {
    pub concept: String,
    pub student_level: String,
    pub word_count: usize,
    pub sentence_count: usize,
    pub flesch_kincaid: f64,
    pub unique_words: usize,
    pub analogy_count: usize,
    pub example_count: usize,
}

/// Write the metrics rows to `path`, creating parent directories as needed.
pub fn write_metrics_csv(rows: &[MetricsRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{CSV_HEADER}")?;
    for row in rows {
        writeln!(
            out,
            "{},{},{},{},{:.2},{},{},{}",
            quote(&row.concept),
            quote(&row.student_level),
            row.metrics.word_count,
            row.metrics.sentence_count,
            row.metrics.flesch_kincaid,
            row.metrics.unique_words,
            row.metrics.analogy_count,
            row.metrics.example_count,
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Read a persisted results table back into memory.
pub fn read_metrics_csv(path: &Path) -> Result<Vec<ResultsRow>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mut lines = content.lines();

    match lines.next() {
        Some(header) if header.trim_end() == CSV_HEADER => {}
        Some(header) => bail!(
            "unexpected header in {}: '{}'",
            path.display(),
            header.trim_end()
        ),
        None => bail!("empty results file: {}", path.display()),
    }

    let mut rows = Vec::new();
    for (lineno, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_line(line);
        if fields.len() != 8 {
            bail!(
                "{}:{}: expected 8 columns, found {}",
                path.display(),
                lineno + 2,
                fields.len()
            );
        }
        let ctx = |col: &str| format!("{}:{}: bad {col}", path.display(), lineno + 2);
        rows.push(ResultsRow {
            concept: fields[0].clone(),
            student_level: fields[1].clone(),
            word_count: fields[2].parse().with_context(|| ctx("word_count"))?,
            sentence_count: fields[3].parse().with_context(|| ctx("sentence_count"))?,
            flesch_kincaid: fields[4].parse().with_context(|| ctx("flesch_kincaid"))?,
            unique_words: fields[5].parse().with_context(|| ctx("unique_words"))?,
            analogy_count: fields[6].parse().with_context(|| ctx("analogy_count"))?,
            example_count: fields[7].parse().with_context(|| ctx("example_count"))?,
        });
    }
    Ok(rows)
}

fn quote(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Split one CSV line into fields, honoring quotes and doubled quotes.
fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
    }
    fields.push(current);
    fields
}
