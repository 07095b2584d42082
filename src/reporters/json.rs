//! JSON reporter
//!
//! Outputs the full AnalysisReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["total_records"], 2);
        assert!(!parsed["rows"].as_array().expect("rows array").is_empty());
        // MetricsRow flattens its metrics into the row object
        assert_eq!(parsed["rows"][0]["sentence_count"], 2);
    }

    #[test]
    fn test_json_single_row_std_is_null() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        let by_level = parsed["by_level"].as_array().expect("by_level array");
        let fk = &by_level[0];
        assert_eq!(fk["metric"], "flesch_kincaid");
        let groups = fk["groups"].as_object().expect("groups object");
        for summary in groups.values() {
            assert!(summary["std"].is_null());
        }
    }
}
