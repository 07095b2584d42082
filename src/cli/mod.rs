//! CLI command definitions and handlers

pub(crate) mod analyze;
mod doctor;
mod visualize;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lexiscope - text-complexity analysis for explanation corpora
///
/// 100% LOCAL analysis - the only network access is the optional
/// `doctor` connectivity check.
#[derive(Parser, Debug)]
#[command(name = "lexiscope")]
#[command(
    version,
    about = "Analyze explanation texts — readability, structure, vocabulary, and teaching-strategy metrics across audience levels",
    after_help = "\
Examples:
  lexiscope analyze data/responses.json            Analyze a corpus, print tables, write the results CSV
  lexiscope analyze data/responses.json -f json    JSON output for scripting
  lexiscope visualize data/analysis_results.csv    Render charts from a results table
  lexiscope doctor                                 Check API connectivity and local setup"
)]
pub struct Cli {
    /// Path to a lexiscope.toml config file (default: next to the input, then CWD)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an explanation corpus: derive metrics, print aggregate tables, persist the results table
    #[command(after_help = "\
Examples:
  lexiscope analyze data/responses.json                      Full analysis to the terminal
  lexiscope analyze data/responses.json -f json -o out.json  Machine-readable report
  lexiscope analyze data/responses.json --results out.csv    Custom results table path
  lexiscope analyze data/responses.json --no-results         Console report only")]
    Analyze {
        /// JSON file with explanation records
        input: PathBuf,

        /// Output format: text, json
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Write the rendered report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Where to write the per-record results table
        #[arg(long, default_value = "data/analysis_results.csv")]
        results: PathBuf,

        /// Skip writing the results table
        #[arg(long)]
        no_results: bool,
    },

    /// Render charts from a persisted results table
    Visualize {
        /// CSV produced by `lexiscope analyze`
        results: PathBuf,

        /// Directory for the generated PNG files
        #[arg(long, default_value = "analysis")]
        out_dir: PathBuf,
    },

    /// Check chat API connectivity and local setup
    Doctor {
        /// Model for the connectivity probe (default: the backend's default)
        #[arg(long)]
        model: Option<String>,

        /// Skip the network check
        #[arg(long)]
        skip_api: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            results,
            no_results,
        } => analyze::run(
            &input,
            &format,
            output.as_deref(),
            if no_results {
                None
            } else {
                Some(results.as_path())
            },
            cli.config.as_deref(),
        ),

        Commands::Visualize { results, out_dir } => {
            visualize::run(&results, &out_dir, cli.config.as_deref())
        }

        Commands::Doctor { model, skip_api } => doctor::run(model, skip_api, cli.config.as_deref()),
    }
}
