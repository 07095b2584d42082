//! Integration tests for the lexiscope CLI
//!
//! These tests run the actual binary against temp-dir fixtures to verify:
//! - Analysis of a corpus prints the numbered sections
//! - The persisted results table has the fixed header and correct values
//! - JSON output is valid
//! - Visualization produces both PNG files
//! - Load-time validation rejects bad corpora with a nonzero exit
//!
//! Each test uses its own isolated temp directory.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn lexiscope_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lexiscope")
}

const FIXTURE_JSON: &str = r#"[
  {
    "concept": "photosynthesis",
    "student_level": "elementary school student (8-10 years old)",
    "explanation": "Photosynthesis is like a factory. Plants make food using light."
  },
  {
    "concept": "photosynthesis",
    "student_level": "expert researcher in the field",
    "explanation": "Photosynthesis comprises light-dependent reactions and the Calvin cycle. Photon capture drives charge separation in photosystem II, establishing a proton-motive force that phosphorylates ADP."
  },
  {
    "concept": "gravity",
    "student_level": "elementary school student (8-10 years old)",
    "explanation": "Gravity pulls everything down. Imagine the Earth giving everything a gentle hug. That is why balls fall."
  }
]"#;

fn setup_corpus(json: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("responses.json"), json).expect("Failed to write fixture");
    dir
}

fn run_analyze(dir: &Path, extra_args: &[&str]) -> (i32, String, String) {
    let mut cmd = Command::new(lexiscope_bin());
    cmd.current_dir(dir)
        .arg("analyze")
        .arg("responses.json")
        .args(["--results", "analysis_results.csv"]);
    for arg in extra_args {
        cmd.arg(arg);
    }
    let output = cmd.output().expect("Failed to run lexiscope");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn test_analyze_prints_all_sections() {
    let dir = setup_corpus(FIXTURE_JSON);
    let (code, stdout, stderr) = run_analyze(dir.path(), &[]);
    assert_eq!(code, 0, "analyze failed: {stderr}");

    for section in [
        "1. READABILITY",
        "2. STRUCTURE",
        "3. VOCABULARY",
        "4. ANALOGY",
        "5. CONCRETE EXAMPLE",
        "6. SUMMARY",
    ] {
        assert!(stdout.contains(section), "missing section {section}");
    }
    assert!(stdout.contains("elementary school student (8-10 years old)"));
    assert!(stdout.contains("photosynthesis"));
}

#[test]
fn test_analyze_persists_results_table() {
    let dir = setup_corpus(FIXTURE_JSON);
    let (code, _, stderr) = run_analyze(dir.path(), &[]);
    assert_eq!(code, 0, "analyze failed: {stderr}");

    let csv = std::fs::read_to_string(dir.path().join("analysis_results.csv"))
        .expect("results table not written");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "concept,student_level,word_count,sentence_count,flesch_kincaid,unique_words,analogy_count,example_count"
    );

    // The canonical elementary photosynthesis record: 10 words, 2
    // sentences, one analogy keyword ("like"), no example keywords.
    let row = lines
        .find(|l| l.starts_with("photosynthesis,elementary"))
        .expect("missing elementary photosynthesis row");
    let fields: Vec<&str> = row.split(',').collect();
    assert_eq!(fields[2], "10"); // word_count
    assert_eq!(fields[3], "2"); // sentence_count
    assert_eq!(fields[6], "1"); // analogy_count
    assert_eq!(fields[7], "0"); // example_count
}

#[test]
fn test_analyze_json_output_is_valid() {
    let dir = setup_corpus(FIXTURE_JSON);
    let (code, stdout, stderr) =
        run_analyze(dir.path(), &["--format", "json", "--no-results"]);
    assert_eq!(code, 0, "analyze failed: {stderr}");

    let parsed: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout is not valid JSON");
    assert_eq!(parsed["total_records"], 3);
    let rows = parsed["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 3);
    assert!(parsed["by_level"].as_array().expect("by_level").len() >= 8);
    assert!(parsed["readability_by_concept"]["gravity"]["mean"].is_number());
}

#[test]
fn test_visualize_renders_both_charts() {
    let dir = setup_corpus(FIXTURE_JSON);
    let (code, _, stderr) = run_analyze(dir.path(), &[]);
    assert_eq!(code, 0, "analyze failed: {stderr}");

    let output = Command::new(lexiscope_bin())
        .current_dir(dir.path())
        .args(["visualize", "analysis_results.csv", "--out-dir", "charts"])
        .output()
        .expect("Failed to run lexiscope");
    assert!(
        output.status.success(),
        "visualize failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for file in ["complexity_panel.png", "concept_heatmap.png"] {
        let path = dir.path().join("charts").join(file);
        assert!(path.exists(), "missing {file}");
        assert!(std::fs::metadata(&path).unwrap().len() > 0, "{file} empty");
    }
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_analyze(dir.path(), &[]);
    assert_ne!(code, 0);
    assert!(stderr.contains("failed to read"), "stderr: {stderr}");
}

#[test]
fn test_empty_explanation_rejected_at_load() {
    let dir = setup_corpus(
        r#"[{"concept": "gravity",
             "student_level": "elementary school student (8-10 years old)",
             "explanation": ""}]"#,
    );
    let (code, _, stderr) = run_analyze(dir.path(), &[]);
    assert_ne!(code, 0);
    assert!(stderr.contains("empty explanation"), "stderr: {stderr}");
}

#[test]
fn test_unknown_level_forms_own_group() {
    let dir = setup_corpus(
        r#"[
          {"concept": "gravity",
           "student_level": "graduate student",
           "explanation": "Gravity follows the inverse square law. Mass curves spacetime."},
          {"concept": "gravity",
           "student_level": "expert researcher in the field",
           "explanation": "The Einstein field equations relate curvature to stress-energy."}
        ]"#,
    );
    let (code, stdout, stderr) = run_analyze(dir.path(), &[]);
    assert_eq!(code, 0, "analyze failed: {stderr}");
    assert!(stdout.contains("graduate student"));
}
