//! Project-level configuration support
//!
//! Loads per-project configuration from a `lexiscope.toml` file next to the
//! input data (or in the working directory). Everything has a default, so the
//! file is optional and may override only what it cares about.
//!
//! # Configuration Format
//!
//! ```toml
//! # lexiscope.toml
//!
//! [analysis]
//! analogy_keywords = ["like", "similar", "imagine"]
//! example_keywords = ["example", "such as"]
//!
//! [[levels]]
//! name = "elementary school student (8-10 years old)"
//! label = "Elementary"
//!
//! [charts]
//! panel_width = 1400
//! panel_height = 1000
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Settings for the metrics deriver. The keyword lists are matched
/// case-insensitively with word-boundary-aware matching; each keyword
/// contributes at most one hit per text.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub analogy_keywords: Vec<String>,
    pub example_keywords: Vec<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            analogy_keywords: [
                "like",
                "similar",
                "imagine",
                "think of",
                "as if",
                "compared to",
                "analogous",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            example_keywords: [
                "example",
                "such as",
                "for instance",
                "like when",
                "imagine",
                "picture",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// One known audience tier: the `student_level` value as it appears in the
/// data, and the short label used on chart axes.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelTier {
    pub name: String,
    pub label: String,
}

impl LevelTier {
    fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}

/// Chart output dimensions in pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub panel_width: u32,
    pub panel_height: u32,
    pub heatmap_width: u32,
    pub heatmap_height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            panel_width: 1400,
            panel_height: 1000,
            heatmap_width: 1000,
            heatmap_height: 600,
        }
    }
}

/// Project configuration, loaded from `lexiscope.toml` or defaulted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub analysis: AnalysisSettings,
    /// Known audience tiers in pedagogical order (simple to advanced).
    /// Charts follow this order; unknown tiers are appended after it.
    pub levels: Vec<LevelTier>,
    pub charts: ChartSettings,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisSettings::default(),
            levels: vec![
                LevelTier::new("elementary school student (8-10 years old)", "Elementary"),
                LevelTier::new("middle school student (13-14 years old)", "Middle"),
                LevelTier::new("college freshman (18-19 years old)", "College"),
                LevelTier::new("expert researcher in the field", "Expert"),
            ],
            charts: ChartSettings::default(),
        }
    }
}

impl ProjectConfig {
    /// The known `student_level` values, in tier order.
    pub fn level_names(&self) -> Vec<String> {
        self.levels.iter().map(|t| t.name.clone()).collect()
    }

    /// Chart label for a `student_level` value. Unknown tiers keep their
    /// raw value.
    pub fn level_label<'a>(&'a self, name: &'a str) -> &'a str {
        self.levels
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.label.as_str())
            .unwrap_or(name)
    }
}

/// Load project configuration from `dir/lexiscope.toml`, falling back to
/// defaults when the file is absent or unreadable.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let toml_path = dir.join("lexiscope.toml");
    if toml_path.exists() {
        match load_config_file(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    // No config found, return defaults
    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from an explicit TOML file path.
pub fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProjectConfig::default();
        assert_eq!(config.levels.len(), 4);
        assert_eq!(config.level_label("expert researcher in the field"), "Expert");
        assert_eq!(config.level_label("graduate student"), "graduate student");
        assert!(config
            .analysis
            .analogy_keywords
            .contains(&"compared to".to_string()));
    }

    #[test]
    fn test_partial_toml_overrides() {
        let toml = r#"
            [analysis]
            analogy_keywords = ["akin to"]

            [charts]
            panel_width = 800
        "#;
        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.analysis.analogy_keywords, vec!["akin to"]);
        // Untouched sections keep their defaults
        assert_eq!(config.analysis.example_keywords.len(), 6);
        assert_eq!(config.charts.panel_width, 800);
        assert_eq!(config.charts.panel_height, 1000);
        assert_eq!(config.levels.len(), 4);
    }

    #[test]
    fn test_missing_file_defaults() {
        let config = load_project_config(Path::new("/nonexistent/dir"));
        assert_eq!(config.levels.len(), 4);
    }
}
