//! Lexiscope - text-complexity analysis for explanation corpora
//!
//! A local, batch analysis tool: it loads a collection of explanation
//! texts, derives per-record complexity metrics (readability grade,
//! sentence/word statistics, vocabulary richness, analogy/example
//! keyword hits), aggregates them by audience level and by concept,
//! and persists a per-record results table for visualization.

pub mod aggregate;
pub mod ai;
pub mod charts;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod metrics;
pub mod models;
pub mod reporters;
