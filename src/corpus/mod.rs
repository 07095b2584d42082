//! Explanation corpus loading
//!
//! Reads a collection of explanation records from a JSON file into memory.
//! Validation happens here, not in metric computation: a record with an
//! empty explanation is rejected at load time so the derivers downstream
//! never see text they cannot measure.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::models::ExplanationRecord;

/// Errors that can occur while loading a corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record collection in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no records found in {}", path.display())]
    Empty { path: PathBuf },

    #[error("record {index} ({concept} / {student_level}) has an empty explanation")]
    EmptyExplanation {
        index: usize,
        concept: String,
        student_level: String,
    },
}

/// Load explanation records from a JSON array file.
///
/// `known_levels` is the configured set of audience tiers; records with a
/// `student_level` outside it still load (they form their own group in
/// aggregation) but are logged, since they usually indicate a typo in the
/// data rather than a real fifth tier.
pub fn load_records(
    path: &Path,
    known_levels: &[String],
) -> Result<Vec<ExplanationRecord>, CorpusError> {
    let content = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<ExplanationRecord> =
        serde_json::from_str(&content).map_err(|source| CorpusError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if records.is_empty() {
        return Err(CorpusError::Empty {
            path: path.to_path_buf(),
        });
    }

    let known: HashSet<&str> = known_levels.iter().map(|s| s.as_str()).collect();
    let mut unknown_seen: HashSet<&str> = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        if record.explanation.trim().is_empty() {
            return Err(CorpusError::EmptyExplanation {
                index,
                concept: record.concept.clone(),
                student_level: record.student_level.clone(),
            });
        }
        if !known.contains(record.student_level.as_str())
            && unknown_seen.insert(record.student_level.as_str())
        {
            warn!(
                student_level = %record.student_level,
                "unrecognized student_level; it will form its own group"
            );
        }
    }

    Ok(records)
}
