//! Configuration module for lexiscope
//!
//! This module handles:
//! - Project-level configuration (lexiscope.toml)
//! - Keyword list overrides for analogy/example detection
//! - Audience tier ordering and chart labels
//! - Chart dimensions

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, AnalysisSettings, ChartSettings, LevelTier,
    ProjectConfig,
};
